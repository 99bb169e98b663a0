use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_THEME: &str = "Dark";
pub const DEFAULT_MAX_BUBBLE_WIDTH: f32 = 420.0;

/// View preferences for the conversation pane.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewSettings {
    pub theme: String,
    /// 24-hour clock in the metadata row.
    pub clock_24h: bool,
    #[serde(default = "default_max_bubble_width")]
    pub max_bubble_width: f32,
}

fn default_max_bubble_width() -> f32 {
    DEFAULT_MAX_BUBBLE_WIDTH
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            clock_24h: true,
            max_bubble_width: DEFAULT_MAX_BUBBLE_WIDTH,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("org", "wren", "wren-message-view") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("view-settings.json"));
    }
    None
}

pub fn load_settings() -> Option<ViewSettings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &ViewSettings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings)
            .map_err(std::io::Error::other)?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}
