//! Action surface for a message bubble: hover buttons and context menu.
//!
//! All visibility and ordering decisions live in pure functions
//! (`button_row`, `context_menu_entries`); the egui render functions only
//! draw what was decided and report clicks as `MessageAction` values.

use eframe::egui;

use crate::model::{DeliveryStatus, Direction, MessageViewModel, ViewType};
use crate::services::{
    MessageAction, SelectionQuery, ViewServices, TX_COPY_TO_CLIPBOARD, TX_DELETE_MESSAGE,
    TX_DOWNLOAD_ATTACHMENT, TX_FORWARD, TX_MENU_BUTTON_LABEL, TX_MORE_INFO, TX_REPLY,
    TX_RETRY_SEND, TX_SAVE,
};
use crate::theme::BubbleTheme;

/// Which side of the bubble a button row is being rendered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionSide {
    Left,
    Right,
}

/// The side carrying this message's buttons.
///
/// Outgoing bubbles sit on the right, so their buttons go on the left;
/// incoming bubbles mirror that. The render call for the other side yields
/// nothing.
pub fn actionable_side(direction: Direction) -> ActionSide {
    match direction {
        Direction::Outgoing => ActionSide::Left,
        Direction::Incoming => ActionSide::Right,
    }
}

/// Slots of the button row, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSlot {
    Download,
    Reply,
    Menu,
}

/// Decide the button row for a message.
///
/// `None` when the menu is disabled for this message. The download slot is
/// present only with an attachment and a non-sticker view type. Download and
/// menu-trigger swap ends with direction; reply stays in the middle.
pub fn button_row(message: &MessageViewModel) -> Option<Vec<ButtonSlot>> {
    if message.disable_menu {
        return None;
    }

    let download = message.attachment.is_some() && message.view_type != ViewType::Sticker;

    let mut row = Vec::with_capacity(3);
    match message.direction {
        Direction::Incoming => {
            if download {
                row.push(ButtonSlot::Download);
            }
            row.push(ButtonSlot::Reply);
            row.push(ButtonSlot::Menu);
        }
        Direction::Outgoing => {
            row.push(ButtonSlot::Menu);
            row.push(ButtonSlot::Reply);
            if download {
                row.push(ButtonSlot::Download);
            }
        }
    }
    Some(row)
}

/// One entry of the context menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: MenuEntryKind,
    pub label_key: &'static str,
    /// Kept in the entry list but not displayed (copy without a selection).
    pub hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntryKind {
    CopySelection,
    DownloadAttachment,
    Reply,
    Forward,
    ShowDetail,
    RetrySend,
    Delete,
}

/// Decide the context-menu entries for a message.
///
/// The copy entry is always first and hidden unless text is selected. The
/// download entry follows attachment presence alone (sticker view type does
/// not suppress it, unlike the download button). Retry appears only for
/// outgoing messages in error state. Delete is always last.
pub fn context_menu_entries(message: &MessageViewModel, text_selected: bool) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry {
        kind: MenuEntryKind::CopySelection,
        label_key: TX_COPY_TO_CLIPBOARD,
        hidden: !text_selected,
    }];

    if message.attachment.is_some() {
        entries.push(MenuEntry {
            kind: MenuEntryKind::DownloadAttachment,
            label_key: TX_DOWNLOAD_ATTACHMENT,
            hidden: false,
        });
    }

    entries.push(MenuEntry {
        kind: MenuEntryKind::Reply,
        label_key: TX_REPLY,
        hidden: false,
    });
    entries.push(MenuEntry {
        kind: MenuEntryKind::Forward,
        label_key: TX_FORWARD,
        hidden: false,
    });
    entries.push(MenuEntry {
        kind: MenuEntryKind::ShowDetail,
        label_key: TX_MORE_INFO,
        hidden: false,
    });

    if message.status == DeliveryStatus::Error && message.direction == Direction::Outgoing {
        entries.push(MenuEntry {
            kind: MenuEntryKind::RetrySend,
            label_key: TX_RETRY_SEND,
            hidden: false,
        });
    }

    entries.push(MenuEntry {
        kind: MenuEntryKind::Delete,
        label_key: TX_DELETE_MESSAGE,
        hidden: false,
    });

    entries
}

/// Per-instance menu state: the owned rendering of the original's mutable
/// trigger reference. Never shared between message instances.
#[derive(Clone, Debug, Default)]
pub struct MenuState {
    /// Set once the trigger button has rendered; opening is a no-op before
    /// that (covers the disabled-menu case without panicking).
    armed: bool,
    open: bool,
    pos: egui::Pos2,
    text_selected: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the button row renders, i.e. the menu exists.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Open the menu at `pos`, capturing the live selection state.
    ///
    /// The capture happens synchronously in the same event turn as the
    /// triggering click; reading it later would race the user clearing the
    /// selection. Silently ignored when the trigger never rendered.
    pub fn open_at(&mut self, pos: egui::Pos2, selection: &dyn SelectionQuery) {
        if !self.armed {
            return;
        }
        self.text_selected = !selection.current_selection().is_empty();
        self.pos = pos;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn text_selected(&self) -> bool {
        self.text_selected
    }
}

/// Render the button row for one side of the bubble.
///
/// Returns `None` without drawing when `side` is not the actionable side or
/// the menu is disabled for this message.
pub fn render_action_buttons(
    ui: &mut egui::Ui,
    message: &MessageViewModel,
    side: ActionSide,
    state: &mut MenuState,
    services: &mut ViewServices<'_>,
    theme: &BubbleTheme,
) -> Option<MessageAction> {
    if side != actionable_side(message.direction) {
        return None;
    }
    let row = button_row(message)?;
    state.arm();

    let mut action = None;

    ui.horizontal(|ui| {
        for slot in row {
            match slot {
                ButtonSlot::Download => {
                    let btn = icon_button(ui, "⤓", theme)
                        .on_hover_text(services.translations.translate(TX_SAVE));
                    if btn.clicked() {
                        action = Some(MessageAction::Download);
                    }
                }
                ButtonSlot::Reply => {
                    let btn = icon_button(ui, "↩", theme)
                        .on_hover_text(services.translations.translate(TX_REPLY));
                    if btn.clicked() {
                        action = Some(MessageAction::Reply);
                    }
                }
                ButtonSlot::Menu => {
                    let btn = icon_button(ui, "⋮", theme)
                        .on_hover_text(services.translations.translate(TX_MENU_BUTTON_LABEL));
                    if btn.clicked() {
                        let pos = btn
                            .interact_pointer_pos()
                            .unwrap_or_else(|| btn.rect.left_bottom());
                        state.open_at(pos, services.selection);
                    }
                }
            }
        }
    });

    action
}

fn icon_button(ui: &mut egui::Ui, icon: &str, theme: &BubbleTheme) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(icon)
                .size(14.0)
                .color(theme.text_secondary),
        )
        .frame(false),
    )
}

/// Render the context menu when open.
///
/// Drawn as a foreground popup at the captured position; clicks inside it
/// are consumed by the popup and never reach the bubble's own handlers.
/// A click anywhere else closes it.
pub fn render_context_menu(
    ctx: &egui::Context,
    message: &MessageViewModel,
    state: &mut MenuState,
    services: &mut ViewServices<'_>,
    theme: &BubbleTheme,
) -> Option<MessageAction> {
    if !state.is_open() {
        return None;
    }

    let mut action = None;

    // Popup identity derives from the trigger key so independently-rendered
    // messages never cross-activate each other's menus.
    let area_id = egui::Id::new(("message-context-menu", message.trigger_key()));

    let response = egui::Area::new(area_id)
        .order(egui::Order::Foreground)
        .fixed_pos(state.pos)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(160.0);
                ui.spacing_mut().item_spacing.y = 2.0;

                for entry in context_menu_entries(message, state.text_selected()) {
                    if entry.hidden {
                        continue;
                    }

                    let color = if entry.kind == MenuEntryKind::Delete {
                        theme.error
                    } else {
                        theme.text_primary
                    };
                    let label = services.translations.translate(entry.label_key);
                    let clicked = ui
                        .add(
                            egui::Button::new(egui::RichText::new(label).size(13.0).color(color))
                                .frame(false),
                        )
                        .clicked();
                    if !clicked {
                        continue;
                    }

                    action = Some(match entry.kind {
                        MenuEntryKind::CopySelection => {
                            // Copy the selection as it is at click time, not
                            // the value captured at menu open.
                            let selection = services.selection.current_selection();
                            services.clipboard.write_text(&selection);
                            MessageAction::CopiedSelection
                        }
                        MenuEntryKind::DownloadAttachment => MessageAction::Download,
                        MenuEntryKind::Reply => MessageAction::Reply,
                        MenuEntryKind::Forward => MessageAction::Forward,
                        MenuEntryKind::ShowDetail => MessageAction::ShowDetail,
                        MenuEntryKind::RetrySend => MessageAction::RetrySend,
                        MenuEntryKind::Delete => MessageAction::Delete,
                    });
                }
            });
        })
        .response;

    if action.is_some() || response.clicked_elsewhere() {
        state.close();
    }

    action
}
