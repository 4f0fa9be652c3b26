//! Configuration management using config.toml

use analytix_core::{TableOptions, TableOptionsOverrides};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CONFIG_PATH: &str = "config.toml";

/// Reporting window offered on the overview and reports pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Last7Days, Period::Last30Days, Period::Last90Days, Period::LastYear];

    /// Short code used in export file names
    pub fn code(&self) -> &'static str {
        match self {
            Period::Last7Days => "7d",
            Period::Last30Days => "30d",
            Period::Last90Days => "90d",
            Period::LastYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Last7Days => "Last 7 days",
            Period::Last30Days => "Last 30 days",
            Period::Last90Days => "Last 90 days",
            Period::LastYear => "Last year",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where exports are written (None = the user's download directory)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Campaign performance table
    #[serde(default = "TableOptions::advanced", deserialize_with = "advanced_table")]
    pub campaign_table: TableOptions,

    /// Campaign summary table on the reports page
    #[serde(default = "TableOptions::basic", deserialize_with = "basic_table")]
    pub report_table: TableOptions,

    /// Period selected when the app starts
    #[serde(default)]
    pub default_period: Period,

    /// Font size in points (default: 14.0)
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Window position X (None = system default)
    #[serde(default)]
    pub window_x: Option<f32>,

    /// Window position Y (None = system default)
    #[serde(default)]
    pub window_y: Option<f32>,

    /// Window width (None = default 1280)
    #[serde(default)]
    pub window_width: Option<f32>,

    /// Window height (None = default 800)
    #[serde(default)]
    pub window_height: Option<f32>,

    #[serde(default)]
    pub window_maximized: bool,
}

/// A `[campaign_table]` section only overrides the keys it names
fn advanced_table<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TableOptions, D::Error> {
    TableOptionsOverrides::deserialize(deserializer).map(|overrides| overrides.apply_to(TableOptions::advanced()))
}

fn basic_table<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TableOptions, D::Error> {
    TableOptionsOverrides::deserialize(deserializer).map(|overrides| overrides.apply_to(TableOptions::basic()))
}

fn default_font_size() -> f32 {
    14.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: None,
            campaign_table: TableOptions::advanced(),
            report_table: TableOptions::basic(),
            default_period: Period::default(),
            font_size: default_font_size(),
            window_x: None,
            window_y: None,
            window_width: None,
            window_height: None,
            window_maximized: false,
        }
    }
}

impl Config {
    /// Load config from file, creating default if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!("Error parsing {}: {}", path.display(), e),
                },
                Err(e) => warn!("Error reading {}: {}", path.display(), e),
            }
        }

        let config = Config::default();
        match config.save_to(path) {
            Ok(()) => info!("Created default config at {}", path.display()),
            Err(e) => warn!("Could not write default config: {}", e),
        }
        config
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Configured export directory, else the user's downloads, else the working directory
    pub fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
