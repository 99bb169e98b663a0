//! Metadata row under the message body: timestamp and delivery state.

use chrono::{DateTime, Local};
use eframe::egui;

use crate::model::{DeliveryStatus, Direction, MessageViewModel};
use crate::theme::BubbleTheme;

/// Glyph for the outgoing delivery state.
pub fn status_glyph(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Sending => "…",
        DeliveryStatus::Sent => "✓",
        DeliveryStatus::Delivered => "✓✓",
        DeliveryStatus::Read => "✓✓",
        DeliveryStatus::Error => "!",
    }
}

/// Format epoch milliseconds as local wall-clock time.
///
/// Returns an empty string for out-of-range timestamps rather than failing
/// the render.
pub fn format_timestamp(epoch_ms: i64, clock_24h: bool) -> String {
    let Some(utc) = DateTime::from_timestamp_millis(epoch_ms) else {
        return String::new();
    };
    let local = utc.with_timezone(&Local);
    if clock_24h {
        local.format("%H:%M").to_string()
    } else {
        local.format("%l:%M %p").to_string().trim_start().to_string()
    }
}

/// Render the metadata row for one message.
pub fn render_metadata(
    ui: &mut egui::Ui,
    message: &MessageViewModel,
    clock_24h: bool,
    theme: &BubbleTheme,
) {
    ui.horizontal(|ui| {
        let time = format_timestamp(message.timestamp, clock_24h);
        if !time.is_empty() {
            ui.label(
                egui::RichText::new(time)
                    .size(10.0)
                    .color(theme.text_muted),
            );
        }

        // Delivery state only makes sense for our own messages.
        if message.direction == Direction::Outgoing {
            let color = match message.status {
                DeliveryStatus::Error => theme.error,
                DeliveryStatus::Read => theme.accent,
                _ => theme.text_muted,
            };
            ui.label(
                egui::RichText::new(status_glyph(message.status))
                    .size(10.0)
                    .color(color),
            );
        }
    });
}
