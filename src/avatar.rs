//! Avatar resolution: image avatar or generated letter/color avatar.

use eframe::egui::{self, Color32};

use crate::model::Contact;
use crate::theme;

/// The two avatar variants. Resolution always yields exactly one.
#[derive(Clone, Debug, PartialEq)]
pub enum AvatarVariant {
    /// The contact has a profile image; `alt` is shown on hover and by
    /// assistive tech.
    Image { source: String, alt: String },
    /// Letter avatar tinted with the contact color.
    Generated { color: Color32, label: String },
}

/// Decide which avatar to show for a contact.
///
/// A profile image wins. Otherwise the avatar is generated from the first
/// character of the trimmed name, or `#` when the name is absent or blank.
pub fn resolve_avatar(contact: &Contact) -> AvatarVariant {
    let alt = contact.display_name().to_string();

    if let Some(source) = &contact.profile_image {
        return AvatarVariant::Image {
            source: source.clone(),
            alt,
        };
    }

    let label = contact
        .name
        .as_deref()
        .and_then(|name| name.trim().chars().next())
        .map(|c| c.to_string())
        .unwrap_or_else(|| "#".to_string());

    AvatarVariant::Generated {
        color: theme::contact_color(&contact.color, &contact.address),
        label,
    }
}

/// Draw a circular avatar of the given diameter.
pub fn render_avatar(ui: &mut egui::Ui, variant: &AvatarVariant, size: f32) -> egui::Response {
    match variant {
        AvatarVariant::Image { source, alt } => ui
            .add(
                egui::Image::from_uri(source)
                    .fit_to_exact_size(egui::vec2(size, size))
                    .corner_radius(egui::CornerRadius::same((size / 2.0) as u8)),
            )
            .on_hover_text(alt),
        AvatarVariant::Generated { color, label } => {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
            let painter = ui.painter();

            painter.circle_filled(rect.center(), size / 2.0, *color);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::new(size * 0.45, egui::FontFamily::Proportional),
                Color32::WHITE,
            );
            painter.circle_stroke(
                rect.center(),
                size / 2.0,
                egui::Stroke::new(1.0, Color32::from_white_alpha(15)),
            );

            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: Option<&str>, image: Option<&str>) -> Contact {
        Contact {
            profile_image: image.map(String::from),
            color: "#f00".into(),
            name: name.map(String::from),
            address: "a@b.c".into(),
        }
    }

    #[test]
    fn test_image_avatar_wins() {
        let c = contact(Some("Ann"), Some("file:///ann.png"));
        match resolve_avatar(&c) {
            AvatarVariant::Image { source, alt } => {
                assert_eq!(source, "file:///ann.png");
                assert_eq!(alt, "Ann");
            }
            other => panic!("expected image avatar, got {:?}", other),
        }
    }

    #[test]
    fn test_image_alt_falls_back_to_address() {
        let c = contact(None, Some("file:///x.png"));
        match resolve_avatar(&c) {
            AvatarVariant::Image { alt, .. } => assert_eq!(alt, "a@b.c"),
            other => panic!("expected image avatar, got {:?}", other),
        }
    }

    #[test]
    fn test_generated_label_is_first_name_char() {
        let c = contact(Some("Ann"), None);
        match resolve_avatar(&c) {
            AvatarVariant::Generated { color, label } => {
                assert_eq!(label, "A");
                assert_eq!(color, Color32::from_rgb(255, 0, 0));
            }
            other => panic!("expected generated avatar, got {:?}", other),
        }
    }

    #[test]
    fn test_generated_label_trims_name() {
        let c = contact(Some("  bo  "), None);
        match resolve_avatar(&c) {
            AvatarVariant::Generated { label, .. } => assert_eq!(label, "b"),
            other => panic!("expected generated avatar, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_yields_hash_label() {
        for name in [None, Some(""), Some("   ")] {
            let c = contact(name, None);
            match resolve_avatar(&c) {
                AvatarVariant::Generated { label, .. } => assert_eq!(label, "#"),
                other => panic!("expected generated avatar, got {:?}", other),
            }
        }
    }
}
