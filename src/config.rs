//! Configuration for grid detection and digit recognition.
//!
//! Loads settings from config.json at startup. All the scan constants
//! (dark threshold, confirmation run, line skip, cell inset) and the OCR
//! acceptance threshold live here, so a board rendered with an unusual
//! line weight can be tuned without a rebuild.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::detect::DetectParams;

/// Global configuration instance, initialized once at startup.
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Complete application configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Red-channel value below which a pixel counts as grid-line dark
    #[serde(default = "default_dark_threshold")]
    pub dark_threshold: u8,
    /// Pixels past the first dark hit that must also be dark to confirm a line
    #[serde(default = "default_confirmation_run")]
    pub confirmation_run: u32,
    /// Pixels to skip after a confirmed line so a thick stroke counts once
    #[serde(default = "default_line_skip")]
    pub line_skip: u32,
    /// Inward shrink of each cell rectangle, in pixels
    #[serde(default = "default_cell_inset")]
    pub cell_inset: u32,
    /// Minimum OCR confidence (0.0-1.0) to accept a digit
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
    /// Tesseract language to load
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,
    /// Optional override for the tessdata directory
    #[serde(default)]
    pub tessdata_dir: Option<String>,
}

fn default_dark_threshold() -> u8 {
    150
}

fn default_confirmation_run() -> u32 {
    49
}

fn default_line_skip() -> u32 {
    40
}

fn default_cell_inset() -> u32 {
    7
}

fn default_min_confidence() -> f32 {
    0.8
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_threshold: default_dark_threshold(),
            confirmation_run: default_confirmation_run(),
            line_skip: default_line_skip(),
            cell_inset: default_cell_inset(),
            min_confidence: default_min_confidence(),
            ocr_language: default_ocr_language(),
            tessdata_dir: None,
        }
    }
}

impl Config {
    /// The subset of settings the grid detector consumes.
    pub fn detect_params(&self) -> DetectParams {
        DetectParams {
            dark_threshold: self.dark_threshold,
            confirmation_run: self.confirmation_run,
            line_skip: self.line_skip,
        }
    }
}

/// Loads configuration from config.json or returns defaults.
/// Looks for config.json in the same directory as the executable.
fn load_config() -> Config {
    let config_path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("config.json")))
        .unwrap_or_else(|| Path::new("config.json").to_path_buf());

    crate::log(&format!("Looking for config at: {}", config_path.display()));

    if config_path.exists() {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    crate::log("Config loaded from config.json");
                    return config;
                }
                Err(e) => {
                    crate::log(&format!(
                        "Failed to parse config.json: {}. Using defaults.",
                        e
                    ));
                }
            },
            Err(e) => {
                crate::log(&format!(
                    "Failed to read config.json: {}. Using defaults.",
                    e
                ));
            }
        }
    } else {
        crate::log("config.json not found. Using default config.");
    }

    Config::default()
}

/// Initializes the global configuration. Call once at startup.
pub fn init_config() {
    let _ = CONFIG.set(load_config());
}

/// Returns a reference to the global configuration.
/// Panics if called before init_config().
pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
}
