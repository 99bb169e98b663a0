//! Message bubble view for the Wren chat client.
//!
//! Renders a single conversation message: avatar and author label for
//! incoming group messages, the body with error substitution, an attachment
//! slot, a metadata row, and a direction-mirrored action surface (hover
//! buttons plus context menu).
//!
//! The crate is a pure view layer: it reads a typed [`model::MessageViewModel`],
//! talks to injected [`services`] for translation/clipboard/selection, and
//! reports user intent back as [`services::MessageAction`] values.

pub mod author;
pub mod avatar;
pub mod body;
pub mod bubble;
pub mod menu;
pub mod metadata;
pub mod model;
pub mod services;
pub mod settings;
pub mod theme;

pub use bubble::render_message;
pub use menu::MenuState;
pub use model::{
    AttachmentRef, Contact, ConversationType, DeliveryStatus, Direction, MessageViewModel,
    ViewType,
};
pub use services::{
    AttachmentRenderer, Clipboard, EnglishTranslations, MessageAction, SelectionQuery,
    Translations, ViewServices,
};
pub use settings::ViewSettings;
pub use theme::BubbleTheme;
