//! Outer composition of a message bubble.
//!
//! Mirrors the whole row by direction: incoming rows grow from the left
//! (avatar, bubble, buttons), outgoing rows from the right (buttons,
//! bubble). The context menu is drawn last as a foreground popup.

use eframe::egui::{self, Color32};

use crate::author;
use crate::avatar::{render_avatar, resolve_avatar};
use crate::body::{render_body, resolve_body};
use crate::menu::{render_action_buttons, render_context_menu, ActionSide, MenuState};
use crate::metadata::render_metadata;
use crate::model::{Direction, MessageViewModel, ViewType};
use crate::services::{MessageAction, ViewServices};
use crate::settings::ViewSettings;
use crate::theme::BubbleTheme;

const AVATAR_SIZE: f32 = 36.0;

/// Bubble fill: stickers draw without a bubble, everything else is tinted
/// by direction.
pub fn bubble_fill(message: &MessageViewModel, theme: &BubbleTheme) -> Color32 {
    if message.view_type == ViewType::Sticker {
        return Color32::TRANSPARENT;
    }
    match message.direction {
        Direction::Incoming => theme.bubble_incoming,
        Direction::Outgoing => theme.bubble_outgoing,
    }
}

/// Asymmetric corner radius pointing the flat corner at the sender.
pub fn bubble_corners(direction: Direction) -> egui::CornerRadius {
    match direction {
        Direction::Incoming => egui::CornerRadius {
            nw: 4,
            ne: 12,
            sw: 12,
            se: 12,
        },
        Direction::Outgoing => egui::CornerRadius {
            nw: 12,
            ne: 4,
            sw: 12,
            se: 12,
        },
    }
}

/// Render one message row and report any action the user took.
pub fn render_message(
    ui: &mut egui::Ui,
    message: &MessageViewModel,
    state: &mut MenuState,
    services: &mut ViewServices<'_>,
    settings: &ViewSettings,
    theme: &BubbleTheme,
) -> Option<MessageAction> {
    let mut action = None;

    ui.add_space(2.0);

    match message.direction {
        Direction::Incoming => {
            ui.horizontal(|ui| {
                ui.add_space(8.0);

                if message.shows_author_block() {
                    let variant = resolve_avatar(&message.contact);
                    render_avatar(ui, &variant, AVATAR_SIZE);
                    ui.add_space(8.0);
                }

                action = action.or(render_action_buttons(
                    ui,
                    message,
                    ActionSide::Left,
                    state,
                    services,
                    theme,
                ));
                action =
                    action.or(render_container(ui, message, state, services, settings, theme));
                ui.add_space(4.0);
                action = action.or(render_action_buttons(
                    ui,
                    message,
                    ActionSide::Right,
                    state,
                    services,
                    theme,
                ));
            });
        }
        Direction::Outgoing => {
            // Right-to-left layout: the first widget lands at the right
            // edge, so the bubble goes in before its buttons.
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.add_space(8.0);

                action = action.or(render_action_buttons(
                    ui,
                    message,
                    ActionSide::Right,
                    state,
                    services,
                    theme,
                ));
                action =
                    action.or(render_container(ui, message, state, services, settings, theme));
                ui.add_space(4.0);
                action = action.or(render_action_buttons(
                    ui,
                    message,
                    ActionSide::Left,
                    state,
                    services,
                    theme,
                ));
            });
        }
    }

    ui.add_space(2.0);

    let ctx = ui.ctx().clone();
    action.or(render_context_menu(&ctx, message, state, services, theme))
}

/// The bubble itself: author label, attachment slot, body, metadata.
fn render_container(
    ui: &mut egui::Ui,
    message: &MessageViewModel,
    state: &mut MenuState,
    services: &mut ViewServices<'_>,
    settings: &ViewSettings,
    theme: &BubbleTheme,
) -> Option<MessageAction> {
    let mut action = None;

    let frame = egui::Frame::new()
        .fill(bubble_fill(message, theme))
        .corner_radius(bubble_corners(message.direction))
        .inner_margin(egui::Margin::symmetric(12, 8));

    let inner = frame.show(ui, |ui| {
        ui.set_max_width(settings.max_bubble_width);
        ui.vertical(|ui| {
            if message.shows_author_block() {
                author::render_author(ui, &message.contact);
            }

            if message.attachment.is_some() {
                services.attachments.render(ui, message);
            }

            if let Some(content) = resolve_body(
                message.text.as_deref(),
                message.direction,
                message.status,
                services.translations,
            ) {
                action = action.or(render_body(ui, &content, theme));
            }

            render_metadata(ui, message, settings.clock_24h, theme);
        });
    });

    // Secondary click on the bubble opens the menu through the same capture
    // path as the trigger button. The open-state guard keeps a right-click
    // that lands on the popup overlay from re-triggering it.
    let response = inner.response.interact(egui::Sense::click());
    if response.secondary_clicked() && !state.is_open() {
        let pos = response
            .interact_pointer_pos()
            .unwrap_or_else(|| response.rect.center());
        state.open_at(pos, services.selection);
    }

    action
}
