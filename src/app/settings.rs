use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme. Toggling twice returns the original.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FontFamily {
    Helvetica,
    Arial,
    Verdana,
    CourierNew,
}

impl FontFamily {
    pub const ALL: [FontFamily; 4] = [
        FontFamily::Helvetica,
        FontFamily::Arial,
        FontFamily::Verdana,
        FontFamily::CourierNew,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Arial => "Arial",
            FontFamily::Verdana => "Verdana",
            FontFamily::CourierNew => "Courier New",
        }
    }

    /// Family for a dropdown index, falling back to Helvetica.
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(FontFamily::Helvetica)
    }

    pub fn index(self) -> i32 {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as i32
    }
}

/// UI preferences persisted between runs. Per-window session state (style
/// toggles, picked colors, buffer content) is deliberately not part of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme: Theme,

    #[serde(default = "default_font_family")]
    pub font_family: FontFamily,

    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_theme() -> Theme {
    Theme::Dark
}

fn default_font_family() -> FontFamily {
    FontFamily::Helvetica
}

fn default_font_size() -> u32 {
    14
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Ok(path) => path,
            Err(_) => return Self::default(),
        };

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| AppError::Settings("config directory unavailable".to_string()))?;
        path.push("quillpad");
        path.push("settings.json");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_family, FontFamily::Helvetica);
        assert_eq!(settings.font_size, 14);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"font_size": 24}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 24); // Should use file value
        assert_eq!(settings.theme, Theme::Dark); // Should use default
        assert_eq!(settings.font_family, FontFamily::Helvetica);
    }

    #[test]
    fn test_theme_serialization() {
        let settings = AppSettings {
            theme: Theme::Light,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Light\""));
    }

    #[test]
    fn test_theme_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_font_family_index_round_trip() {
        for family in FontFamily::ALL {
            assert_eq!(FontFamily::from_index(family.index()), family);
        }
        // Out-of-range indices fall back to Helvetica
        assert_eq!(FontFamily::from_index(-1), FontFamily::Helvetica);
        assert_eq!(FontFamily::from_index(99), FontFamily::Helvetica);
    }
}
