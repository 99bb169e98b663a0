//! Color themes for the message view.

use eframe::egui::Color32;

/// Semantic colors used by the bubble renderer.
#[derive(Clone, Debug)]
pub struct BubbleTheme {
    pub name: String,
    /// Conversation background behind the bubbles.
    pub background: Color32,
    pub bubble_incoming: Color32,
    pub bubble_outgoing: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
}

impl BubbleTheme {
    /// Dark theme (primary design).
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            background: Color32::from_rgb(19, 19, 26),
            bubble_incoming: Color32::from_rgb(37, 37, 50),
            bubble_outgoing: Color32::from_rgb(46, 70, 116),
            accent: Color32::from_rgb(88, 101, 242),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            background: Color32::from_rgb(246, 246, 247),
            bubble_incoming: Color32::from_rgb(227, 229, 232),
            bubble_outgoing: Color32::from_rgb(198, 222, 255),
            accent: Color32::from_rgb(88, 101, 242),
            error: Color32::from_rgb(205, 40, 40),
            text_primary: Color32::from_rgb(24, 25, 28),
            text_secondary: Color32::from_rgb(72, 75, 80),
            text_muted: Color32::from_rgb(120, 124, 130),
        }
    }

    pub fn by_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

/// Palette for contacts whose color field cannot be parsed.
const CONTACT_COLORS: [Color32; 12] = [
    Color32::from_rgb(235, 111, 146),
    Color32::from_rgb(246, 193, 119),
    Color32::from_rgb(234, 157, 52),
    Color32::from_rgb(156, 207, 216),
    Color32::from_rgb(62, 143, 176),
    Color32::from_rgb(196, 167, 231),
    Color32::from_rgb(86, 148, 159),
    Color32::from_rgb(144, 122, 169),
    Color32::from_rgb(215, 130, 126),
    Color32::from_rgb(40, 105, 131),
    Color32::from_rgb(180, 99, 122),
    Color32::from_rgb(110, 106, 134),
];

/// Resolve a contact's accent color.
///
/// Accepts `#rgb` and `#rrggbb`. Anything else falls back to a deterministic
/// palette pick keyed on the contact address, so a contact keeps the same
/// color across renders and sessions.
pub fn contact_color(spec: &str, address: &str) -> Color32 {
    parse_hex_color(spec).unwrap_or_else(|| palette_color(address))
}

fn parse_hex_color(spec: &str) -> Option<Color32> {
    let hex = spec.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let mut chans = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                chans[i] = v * 16 + v;
            }
            Some(Color32::from_rgb(chans[0], chans[1], chans[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}

/// Deterministic palette pick via FNV-1a over the seed.
fn palette_color(seed: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in seed.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    CONTACT_COLORS[(hash as usize) % CONTACT_COLORS.len()]
}
