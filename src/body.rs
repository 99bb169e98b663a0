//! Message body content resolution and rendering.

use eframe::egui;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{DeliveryStatus, Direction};
use crate::services::{MessageAction, Translations, TX_INCOMING_ERROR};
use crate::theme::BubbleTheme;

/// Trailing bracketed 3-character code, e.g. `hello [x1a]`.
///
/// The marker is left by upstream truncation of multi-part messages; it is a
/// convention match, not a length check, so exactly three characters between
/// the brackets.
static TRUNCATION_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.{3}\]$").expect("truncation marker pattern is valid"));

/// Resolved body content for one bubble.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyContent {
    pub text: String,
    /// Incoming message that failed: styled as an error placeholder.
    pub is_error: bool,
    /// Offer a "show more" affordance for truncated content.
    pub show_more: bool,
}

/// Whether the raw text carries the upstream truncation marker.
pub fn has_truncation_marker(text: &str) -> bool {
    TRUNCATION_MARKER_RE.is_match(text)
}

/// Decide what the bubble's text area shows.
///
/// Incoming messages in error state show a localized placeholder instead of
/// the raw text. Empty resolved content yields `None` so no empty bubble is
/// drawn. The truncation check always runs over the ORIGINAL raw text.
pub fn resolve_body(
    text: Option<&str>,
    direction: Direction,
    status: DeliveryStatus,
    translations: &dyn Translations,
) -> Option<BodyContent> {
    let is_error = direction == Direction::Incoming && status == DeliveryStatus::Error;

    let contents = if is_error {
        translations.translate(TX_INCOMING_ERROR)
    } else {
        text.unwrap_or_default().to_string()
    };

    if contents.is_empty() {
        return None;
    }

    Some(BodyContent {
        text: contents,
        is_error,
        show_more: text.map(has_truncation_marker).unwrap_or(false),
    })
}

/// Draw resolved body content inside the bubble.
pub fn render_body(
    ui: &mut egui::Ui,
    content: &BodyContent,
    theme: &BubbleTheme,
) -> Option<MessageAction> {
    let mut action = None;

    let color = if content.is_error {
        theme.error
    } else {
        theme.text_primary
    };

    let mut rich = egui::RichText::new(&content.text).size(14.0).color(color);
    if content.is_error {
        rich = rich.italics();
    }

    ui.label(rich);

    if content.show_more {
        let more = ui.add(
            egui::Button::new(
                egui::RichText::new("...")
                    .size(13.0)
                    .color(theme.accent)
                    .strong(),
            )
            .frame(false),
        );
        if more.clicked() {
            action = Some(MessageAction::ShowDetail);
        }
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::EnglishTranslations;

    #[test]
    fn test_incoming_error_substitutes_placeholder() {
        let tx = EnglishTranslations;
        let body = resolve_body(
            Some("raw payload"),
            Direction::Incoming,
            DeliveryStatus::Error,
            &tx,
        )
        .unwrap();
        assert_eq!(body.text, tx.translate(TX_INCOMING_ERROR));
        assert!(body.is_error);
    }

    #[test]
    fn test_incoming_error_ignores_text_content() {
        let tx = EnglishTranslations;
        let expected = tx.translate(TX_INCOMING_ERROR);
        for text in [None, Some(""), Some("anything at all")] {
            let body =
                resolve_body(text, Direction::Incoming, DeliveryStatus::Error, &tx).unwrap();
            assert_eq!(body.text, expected);
        }
    }

    #[test]
    fn test_outgoing_error_keeps_raw_text() {
        let tx = EnglishTranslations;
        let body = resolve_body(
            Some("still mine"),
            Direction::Outgoing,
            DeliveryStatus::Error,
            &tx,
        )
        .unwrap();
        assert_eq!(body.text, "still mine");
        assert!(!body.is_error);
    }

    #[test]
    fn test_empty_content_renders_nothing() {
        let tx = EnglishTranslations;
        assert!(resolve_body(None, Direction::Incoming, DeliveryStatus::Sent, &tx).is_none());
        assert!(resolve_body(Some(""), Direction::Outgoing, DeliveryStatus::Sent, &tx).is_none());
    }

    #[test]
    fn test_truncation_marker_exact_three_chars() {
        assert!(has_truncation_marker("hello [x1a]"));
        assert!(has_truncation_marker("hello [abc]"));
        assert!(has_truncation_marker("[...]"));
        // Four characters inside the brackets does not match.
        assert!(!has_truncation_marker("hello [xyza]"));
        // Marker must be trailing.
        assert!(!has_truncation_marker("[abc] hello"));
        assert!(!has_truncation_marker("hello"));
        assert!(!has_truncation_marker("hello [ab]"));
    }

    #[test]
    fn test_show_more_set_from_raw_text() {
        let tx = EnglishTranslations;
        let body = resolve_body(
            Some("long message [a1b]"),
            Direction::Incoming,
            DeliveryStatus::Sent,
            &tx,
        )
        .unwrap();
        assert!(body.show_more);

        let body = resolve_body(
            Some("short message"),
            Direction::Incoming,
            DeliveryStatus::Sent,
            &tx,
        )
        .unwrap();
        assert!(!body.show_more);
    }

    #[test]
    fn test_show_more_checked_even_when_error_substitutes() {
        // The substituted placeholder replaces the text, but the marker
        // check still runs over the raw text.
        let tx = EnglishTranslations;
        let body = resolve_body(
            Some("partial [p2q]"),
            Direction::Incoming,
            DeliveryStatus::Error,
            &tx,
        )
        .unwrap();
        assert!(body.is_error);
        assert!(body.show_more);
    }
}
