//! Render configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page and typeface parameters for a render call.
///
/// Font family names and the watermark path are written into the output
/// verbatim; callers must supply values that are safe for LaTeX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Body font size in points
    pub body_font_size: u32,

    /// Typeface for body text
    pub body_font_family: String,

    /// Fallback typeface for CJK characters (absent or blank = not declared)
    pub cjk_font_family: Option<String>,

    /// Typeface for prompts and titles
    pub heading_font_family: String,

    /// Image drawn as a full-page background (absent or blank = none)
    pub watermark: Option<String>,
}

impl RenderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.body_font_size = size;
        self
    }

    /// Set the body typeface.
    pub fn with_body_font(mut self, family: impl Into<String>) -> Self {
        self.body_font_family = family.into();
        self
    }

    /// Set the CJK fallback typeface.
    pub fn with_cjk_font(mut self, family: impl Into<String>) -> Self {
        self.cjk_font_family = Some(family.into());
        self
    }

    /// Set the heading typeface.
    pub fn with_heading_font(mut self, family: impl Into<String>) -> Self {
        self.heading_font_family = family.into();
        self
    }

    /// Set the watermark image path.
    pub fn with_watermark(mut self, path: impl Into<String>) -> Self {
        self.watermark = Some(path.into());
        self
    }

    /// Remove the watermark.
    pub fn without_watermark(mut self) -> Self {
        self.watermark = None;
        self
    }

    /// The CJK typeface, if one is configured.
    pub fn cjk_font(&self) -> Option<&str> {
        non_blank(self.cjk_font_family.as_deref())
    }

    /// The watermark path, if one is configured.
    pub fn watermark_path(&self) -> Option<&str> {
        non_blank(self.watermark.as_deref())
    }

    /// Check the configuration before any output is produced.
    ///
    /// Only positivity of the font size and non-emptiness of the required
    /// font families are checked; whether the fonts or the watermark exist
    /// is left to the LaTeX toolchain.
    pub fn validate(&self) -> Result<()> {
        if self.body_font_size == 0 {
            return Err(Error::Configuration(
                "body_font_size must be a positive number of points".to_string(),
            ));
        }
        if self.body_font_family.trim().is_empty() {
            return Err(Error::Configuration(
                "body_font_family must not be empty".to_string(),
            ));
        }
        if self.heading_font_family.trim().is_empty() {
            return Err(Error::Configuration(
                "heading_font_family must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON.
    ///
    /// Omitted fields take their default values.
    ///
    /// # Example
    ///
    /// ```
    /// use txtex::RenderConfig;
    ///
    /// let config = RenderConfig::from_json(r#"{"body_font_size": 12, "watermark": "logo.png"}"#)?;
    /// assert_eq!(config.body_font_size, 12);
    /// assert_eq!(config.watermark_path(), Some("logo.png"));
    /// # Ok::<(), txtex::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded render config from {}", path.as_ref().display());
        Self::from_json(&json)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            body_font_size: 11,
            body_font_family: "EB Garamond".to_string(),
            cjk_font_family: None,
            heading_font_family: "Source Sans Pro".to_string(),
            watermark: None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
