//! Author label shown above incoming group messages.

use eframe::egui;

use crate::model::Contact;
use crate::theme;

/// Render the sender's display name, tinted with the contact color.
///
/// Pure passthrough: visibility is gated by the caller (see
/// `MessageViewModel::shows_author_block`). Hovering reveals the address
/// when a name is displayed instead of it.
pub fn render_author(ui: &mut egui::Ui, contact: &Contact) -> egui::Response {
    let color = theme::contact_color(&contact.color, &contact.address);
    let response = ui.label(
        egui::RichText::new(contact.display_name())
            .size(13.0)
            .strong()
            .color(color),
    );

    if contact.display_name() != contact.address {
        response.on_hover_text(&contact.address)
    } else {
        response
    }
}
