//! Game settings and preferences
//!
//! Loaded once at startup from a JSON file next to the binary. The shell
//! and camera read these; the sim core never does.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// User-tunable preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Camera ===
    /// Mouse look sensitivity (radians per pixel)
    pub mouse_sensitivity: f32,
    /// Scroll zoom step (world units per scroll unit)
    pub zoom_step: f32,
    /// Free-look movement speed (world units per second)
    pub camera_speed: f32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (snap the cube to its new pose instead of animating)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.01,
            zoom_step: 0.1,
            camera_speed: 2.0,
            show_fps: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    const FILE_NAME: &'static str = "cube-roll.json";

    /// Load settings, falling back to defaults when the file is missing
    /// or malformed. A bad settings file must never stop the game.
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
