//! Configuration types for the multitab UI.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Tab strip placement
// ─────────────────────────────────────────────────────────────────────────────

/// Where a level's tab strip sits relative to the content area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabPosition {
    North,
    South,
    West,
    East,
}

impl Default for TabPosition {
    fn default() -> Self {
        TabPosition::North
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MultiTabConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a multitab window.
///
/// | Field           | Purpose |
/// |-----------------|---------|
/// | `title`         | Native window title |
/// | `headline`      | Optional headline above the tab area |
/// | `tab_positions` | Strip placement per nesting level |
/// | `link_focus`    | Start with cross-branch focus linking on |
/// | `movable_tabs`  | Allow drag-reordering of tabs |
#[derive(Clone)]
pub struct MultiTabConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the tab area.
    pub headline: Option<String>,
    /// Tab strip placement per nesting level. Levels beyond the list fall
    /// back to North for the top level and West for nested levels.
    pub tab_positions: Vec<TabPosition>,
    /// Start with cross-branch focus linking enabled. Default: `false`.
    pub link_focus: bool,
    /// Allow drag-reordering of tabs within their strip. Default: `true`.
    pub movable_tabs: bool,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for MultiTabConfig {
    fn default() -> Self {
        Self {
            title: "MultiTab".to_string(),
            headline: None,
            tab_positions: Vec::new(),
            link_focus: false,
            movable_tabs: true,
            native_options: None,
        }
    }
}

impl MultiTabConfig {
    /// Strip placement for one nesting level (0 = top).
    pub fn position_for(&self, level: usize) -> TabPosition {
        self.tab_positions.get(level).copied().unwrap_or(if level == 0 {
            TabPosition::North
        } else {
            TabPosition::West
        })
    }

    /// Overlay persisted user settings onto this configuration.
    pub fn apply_settings(&mut self, settings: &UserSettings) {
        self.link_focus = settings.link_focus;
        self.movable_tabs = settings.movable_tabs;
        if !settings.tab_positions.is_empty() {
            self.tab_positions = settings.tab_positions.clone();
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Persisted user settings
// ─────────────────────────────────────────────────────────────────────────────

/// User-tweakable settings, persisted as YAML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    pub link_focus: bool,
    pub movable_tabs: bool,
    pub tab_positions: Vec<TabPosition>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            link_focus: false,
            movable_tabs: true,
            tab_positions: Vec::new(),
        }
    }
}

impl UserSettings {
    pub fn reset_defaults(&mut self) {
        *self = UserSettings::default();
    }

    /// Save settings to the default path `~/.multitab/settings.yaml`.
    pub fn save_to_default_path(&self) -> Result<(), String> {
        let home = std::env::var("HOME").map_err(|e| format!("HOME env var not set: {}", e))?;
        let dir = PathBuf::from(home).join(".multitab");
        if let Err(e) = fs::create_dir_all(&dir) {
            return Err(format!("Failed to create dir {:?}: {}", dir, e));
        }
        let path = dir.join("settings.yaml");
        let s = serde_yaml::to_string(self).map_err(|e| format!("Serialization error: {}", e))?;
        let mut f = fs::File::create(&path)
            .map_err(|e| format!("Failed to create file {:?}: {}", path, e))?;
        f.write_all(s.as_bytes())
            .map_err(|e| format!("Failed to write file {:?}: {}", path, e))?;
        Ok(())
    }

    /// Load settings from `~/.multitab/settings.yaml` if present.
    pub fn load_from_default_path() -> Result<UserSettings, String> {
        let home = std::env::var("HOME").map_err(|e| format!("HOME env var not set: {}", e))?;
        let path = PathBuf::from(home).join(".multitab").join("settings.yaml");
        if !path.exists() {
            return Err(format!("Settings file {:?} does not exist", path));
        }
        let s =
            fs::read_to_string(&path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        let settings: UserSettings =
            serde_yaml::from_str(&s).map_err(|e| format!("Deserialization error: {}", e))?;
        Ok(settings)
    }
}
