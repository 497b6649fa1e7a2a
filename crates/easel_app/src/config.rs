//! Sketch configuration
//!
//! Every field has a default, so a TOML file only needs the keys it
//! changes:
//!
//! ```toml
//! title = "Bounce"
//! width = 800
//! target_fps = 30
//! ```

use std::fs;
use std::path::Path;

use easel_platform::WindowConfig;
use serde::{Deserialize, Serialize};

use crate::error::{EaselError, Result};

/// Window and frame loop settings for one sketch run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Window title
    pub title: String,
    /// Initial window width in pixels
    pub width: u32,
    /// Initial window height in pixels
    pub height: u32,
    /// Frame rate cap; 0 disables pacing
    pub target_fps: u32,
    /// Whether the user can resize the window
    pub resizable: bool,
    /// Presented frames per FPS estimate
    pub fps_sample: u32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        let window = WindowConfig::default();
        Self {
            title: window.title,
            width: window.width,
            height: window.height,
            target_fps: 60,
            resizable: window.resizable,
            fps_sample: 100,
        }
    }
}

impl SketchConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn fps_sample(mut self, frames: u32) -> Self {
        self.fps_sample = frames;
        self
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EaselError::Config(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| EaselError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| EaselError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EaselError::Config(e.to_string()))
    }

    /// Platform window settings
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig::new(self.title.clone())
            .size(self.width, self.height)
            .resizable(self.resizable)
    }
}
