//! Collaborator interfaces consumed by the message view.
//!
//! The view never talks to the clipboard, the translation catalog, or the
//! attachment pipeline directly; the embedding application injects these
//! through `ViewServices`. Action clicks are reported back to the caller as
//! `MessageAction` values rather than invoked through stored callbacks.

use eframe::egui;

use crate::model::MessageViewModel;

// Translation catalog keys used by the message view.
pub const TX_INCOMING_ERROR: &str = "incomingError";
pub const TX_SAVE: &str = "save";
pub const TX_COPY_TO_CLIPBOARD: &str = "menu_copy_to_clipboard";
pub const TX_DOWNLOAD_ATTACHMENT: &str = "download_attachment_desktop";
pub const TX_REPLY: &str = "reply_to_message_desktop";
pub const TX_FORWARD: &str = "menu_forward";
pub const TX_MORE_INFO: &str = "more_info_desktop";
pub const TX_RETRY_SEND: &str = "retry_send";
pub const TX_DELETE_MESSAGE: &str = "delete_message_desktop";
pub const TX_MENU_BUTTON_LABEL: &str = "a11y_message_context_menu_btn_label";

/// Synchronous, side-effect-free string lookup.
pub trait Translations {
    fn translate(&self, key: &str) -> String;
}

/// Writes text to the OS clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Reads the live text selection of the rendering surface.
///
/// Queried at menu-open time and again at copy time; the result is never
/// cached across events.
pub trait SelectionQuery {
    fn current_selection(&self) -> String;
}

/// Opaque visual slot for the attachment, drawn by the embedding app.
pub trait AttachmentRenderer {
    fn render(&mut self, ui: &mut egui::Ui, message: &MessageViewModel);
}

/// User intent reported by the message view. The caller dispatches these to
/// the transport/store layers; the view never implements the behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageAction {
    Download,
    Reply,
    Forward,
    ShowDetail,
    RetrySend,
    Delete,
    /// The live selection was copied to the clipboard.
    CopiedSelection,
}

/// Bundle of injected collaborators passed down the render tree.
pub struct ViewServices<'a> {
    pub translations: &'a dyn Translations,
    pub clipboard: &'a mut dyn Clipboard,
    pub selection: &'a dyn SelectionQuery,
    pub attachments: &'a mut dyn AttachmentRenderer,
}

/// Built-in English catalog, used as a fallback and in tests.
pub struct EnglishTranslations;

impl Translations for EnglishTranslations {
    fn translate(&self, key: &str) -> String {
        match key {
            TX_INCOMING_ERROR => "Error handling incoming message",
            TX_SAVE => "Save",
            TX_COPY_TO_CLIPBOARD => "Copy to clipboard",
            TX_DOWNLOAD_ATTACHMENT => "Download attachment",
            TX_REPLY => "Reply",
            TX_FORWARD => "Forward",
            TX_MORE_INFO => "More info",
            TX_RETRY_SEND => "Retry send",
            TX_DELETE_MESSAGE => "Delete message",
            TX_MENU_BUTTON_LABEL => "Message actions",
            other => other,
        }
        .to_string()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared fakes for unit tests across the crate.

    use super::*;

    /// Clipboard fake that records every write.
    #[derive(Default)]
    pub struct RecordingClipboard {
        pub writes: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) {
            self.writes.push(text.to_string());
        }
    }

    /// Selection fake returning a fixed string.
    pub struct FixedSelection(pub String);

    impl SelectionQuery for FixedSelection {
        fn current_selection(&self) -> String {
            self.0.clone()
        }
    }

    /// Attachment renderer fake that counts invocations.
    #[derive(Default)]
    pub struct CountingAttachments {
        pub calls: usize,
    }

    impl AttachmentRenderer for CountingAttachments {
        fn render(&mut self, _ui: &mut egui::Ui, _message: &MessageViewModel) {
            self.calls += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_catalog_covers_view_keys() {
        let tx = EnglishTranslations;
        for key in [
            TX_INCOMING_ERROR,
            TX_SAVE,
            TX_COPY_TO_CLIPBOARD,
            TX_DOWNLOAD_ATTACHMENT,
            TX_REPLY,
            TX_FORWARD,
            TX_MORE_INFO,
            TX_RETRY_SEND,
            TX_DELETE_MESSAGE,
            TX_MENU_BUTTON_LABEL,
        ] {
            let value = tx.translate(key);
            assert!(!value.is_empty());
            assert_ne!(value, key, "missing catalog entry for {key}");
        }
    }

    #[test]
    fn test_unknown_key_passes_through() {
        let tx = EnglishTranslations;
        assert_eq!(tx.translate("no_such_key"), "no_such_key");
    }
}
