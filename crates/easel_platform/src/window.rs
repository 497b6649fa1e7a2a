//! Window abstraction and configuration

/// Window configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
    /// Whether the user can resize the window
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Debug view".to_string(),
            width: 640,
            height: 480,
            resizable: false,
        }
    }
}

impl WindowConfig {
    /// Create a new window configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set whether the window is resizable
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// A live window
///
/// Setters apply to the window immediately.
pub trait Window {
    /// Drawable size in pixels
    fn size(&self) -> (u32, u32);

    fn set_size(&self, width: u32, height: u32);

    fn title(&self) -> String;

    fn set_title(&self, title: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = WindowConfig::new("sketch").size(320, 200).resizable(true);
        assert_eq!(config.title, "sketch");
        assert_eq!((config.width, config.height), (320, 200));
        assert!(config.resizable);
    }
}
