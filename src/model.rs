//! Typed view-model for a single rendered message.
//!
//! The conversation store owns these records; the view only reads them.
//! Required vs. optional fields are stated explicitly here instead of being
//! pulled out of a loosely-typed props bag at render time.

use serde::{Deserialize, Serialize};

/// Raw wire value the store uses to mark sticker messages.
pub const STICKER_RAW_VIEW_TYPE: u8 = 23;

/// Whether the message was sent by the local user or received from a peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Delivery status as reported by the transport layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Delivered,
    Read,
    Error,
}

/// Message rendering mode.
///
/// Stickers suppress the download button and draw without a bubble frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewType {
    #[default]
    Standard,
    Sticker,
}

impl ViewType {
    /// Map the store's numeric view-type onto the named tag.
    pub fn from_raw(raw: u8) -> Self {
        if raw == STICKER_RAW_VIEW_TYPE {
            ViewType::Sticker
        } else {
            ViewType::Standard
        }
    }
}

/// Kind of conversation the message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationType {
    Direct,
    Group,
}

/// Sender identity as known to the contact store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// URI or path of the profile image, when the contact has one.
    pub profile_image: Option<String>,
    /// Preferred accent color, e.g. `"#f00"` or `"#4fc3f7"`.
    pub color: String,
    pub name: Option<String>,
    pub address: String,
}

impl Contact {
    /// Display fallback: the name when present and non-blank, else the
    /// address. The store guarantees the address is never empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.address,
        }
    }
}

/// Opaque handle to an attachment; downloading and decoding happen elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub url: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

/// Everything the message view needs to render one bubble.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageViewModel {
    /// Store identifier. Optional: the trigger key falls back to
    /// address + timestamp when absent.
    pub id: Option<String>,
    pub direction: Direction,
    pub status: DeliveryStatus,
    pub view_type: ViewType,
    pub attachment: Option<AttachmentRef>,
    pub conversation_type: ConversationType,
    /// Suppress avatar/author for consecutive messages from the same sender.
    pub collapse_metadata: bool,
    pub text: Option<String>,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub contact: Contact,
    /// Disables the whole action surface (buttons and context menu).
    pub disable_menu: bool,
}

impl MessageViewModel {
    /// Key binding this message's menu-trigger button to its popup menu.
    ///
    /// Must be unique per rendered instance so independently-rendered
    /// messages never cross-activate each other's menus.
    pub fn trigger_key(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{}-{}", self.contact.address, self.timestamp),
        }
    }

    /// Avatar and author label render only for incoming group messages with
    /// metadata not collapsed.
    pub fn shows_author_block(&self) -> bool {
        self.conversation_type == ConversationType::Group
            && self.direction == Direction::Incoming
            && !self.collapse_metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact {
            profile_image: None,
            color: "#f00".into(),
            name: Some("Ann".into()),
            address: "ann@example.org".into(),
        }
    }

    fn message() -> MessageViewModel {
        MessageViewModel {
            id: None,
            direction: Direction::Incoming,
            status: DeliveryStatus::Sent,
            view_type: ViewType::Standard,
            attachment: None,
            conversation_type: ConversationType::Group,
            collapse_metadata: false,
            text: Some("hello".into()),
            timestamp: 1_700_000_000_000,
            contact: contact(),
            disable_menu: false,
        }
    }

    #[test]
    fn test_trigger_key_prefers_id() {
        let mut msg = message();
        msg.id = Some("m-42".into());
        assert_eq!(msg.trigger_key(), "m-42");
    }

    #[test]
    fn test_trigger_key_fallback_is_address_and_timestamp() {
        let msg = message();
        assert_eq!(msg.trigger_key(), "ann@example.org-1700000000000");
    }

    #[test]
    fn test_trigger_keys_distinct_for_distinct_ids() {
        // Same author and timestamp, different store ids: the keys must
        // still differ so the two bubbles never share an open menu.
        let mut a = message();
        let mut b = message();
        a.id = Some("m-1".into());
        b.id = Some("m-2".into());
        assert_ne!(a.trigger_key(), b.trigger_key());
    }

    #[test]
    fn test_display_name_falls_back_to_address() {
        let mut c = contact();
        c.name = None;
        assert_eq!(c.display_name(), "ann@example.org");
        c.name = Some("   ".into());
        assert_eq!(c.display_name(), "ann@example.org");
        c.name = Some("Ann".into());
        assert_eq!(c.display_name(), "Ann");
    }

    #[test]
    fn test_view_type_from_raw() {
        assert_eq!(ViewType::from_raw(STICKER_RAW_VIEW_TYPE), ViewType::Sticker);
        assert_eq!(ViewType::from_raw(0), ViewType::Standard);
        assert_eq!(ViewType::from_raw(10), ViewType::Standard);
    }

    #[test]
    fn test_shows_author_block_gating() {
        let mut msg = message();
        assert!(msg.shows_author_block());

        msg.collapse_metadata = true;
        assert!(!msg.shows_author_block());

        msg.collapse_metadata = false;
        msg.direction = Direction::Outgoing;
        assert!(!msg.shows_author_block());

        msg.direction = Direction::Incoming;
        msg.conversation_type = ConversationType::Direct;
        assert!(!msg.shows_author_block());
    }
}
