//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving display configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::geometry::{Point, TOTAL_SQUARES};
use crate::models::ColorPalette;

/// Color encoding of the stock instruction-page display.
pub const DEFAULT_COLOR_ENCODING: &str = "212100110212110220222111121020001022100010220020211120";

/// Digit encoding of the stock instruction-page display.
pub const DEFAULT_DIGIT_ENCODING: &str = "978669996768697888887889969677693997967787586886767679";

/// Geometry, palette and encodings of one display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Width and height of every square
    pub square_size: f64,
    /// Radius of the outer ring; the middle and inner rings scale from it
    pub outer_radius: f64,
    /// Ring center x
    pub center_x: f64,
    /// Ring center y
    pub center_y: f64,
    /// One palette index (0-2) per square, consumed from the end
    pub color_encoding: String,
    /// One digit (0-9) per square, consumed from the end
    pub digit_encoding: String,
    /// Exactly three named colors, indexed by the color encoding
    pub palette: ColorPalette,
}

impl Default for DisplayConfig {
    /// The stock display: 3-unit squares on a 60-unit diameter anchored at (70, 30).
    fn default() -> Self {
        Self::from_diameter(3.0, 60.0, 70.0, 30.0)
    }
}

impl DisplayConfig {
    /// Derives ring geometry from an overall display diameter.
    ///
    /// The outer radius is `(diameter - square_size) / 2` so the outermost
    /// squares stay inside the diameter, and the center is the anchor shifted by
    /// half a square to account for top-left positioning.
    ///
    /// # Examples
    ///
    /// ```
    /// use acvs_display::config::DisplayConfig;
    ///
    /// let config = DisplayConfig::from_diameter(3.0, 60.0, 70.0, 30.0);
    /// assert_eq!(config.outer_radius, 28.5);
    /// assert_eq!((config.center_x, config.center_y), (68.5, 28.5));
    /// ```
    #[must_use]
    pub fn from_diameter(square_size: f64, diameter: f64, anchor_x: f64, anchor_y: f64) -> Self {
        Self {
            square_size,
            outer_radius: (diameter - square_size) / 2.0,
            center_x: anchor_x - square_size / 2.0,
            center_y: anchor_y - square_size / 2.0,
            color_encoding: DEFAULT_COLOR_ENCODING.to_string(),
            digit_encoding: DEFAULT_DIGIT_ENCODING.to_string(),
            palette: ColorPalette::default(),
        }
    }

    /// Replaces the color encoding.
    pub fn with_color_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.color_encoding = encoding.into();
        self
    }

    /// Replaces the digit encoding.
    pub fn with_digit_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.digit_encoding = encoding.into();
        self
    }

    /// Replaces the palette.
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Ring center as a point.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Validates the numeric parameters and encoding lengths.
    ///
    /// Character-level checks on the encodings happen during decoding.
    pub fn validate(&self) -> Result<()> {
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            anyhow::bail!("square_size must be a positive number, got {}", self.square_size);
        }
        if !(self.outer_radius.is_finite() && self.outer_radius > 0.0) {
            anyhow::bail!("outer_radius must be a positive number, got {}", self.outer_radius);
        }
        if !(self.center_x.is_finite() && self.center_y.is_finite()) {
            anyhow::bail!(
                "center must be finite, got ({}, {})",
                self.center_x,
                self.center_y
            );
        }
        for (name, encoding) in [
            ("color_encoding", &self.color_encoding),
            ("digit_encoding", &self.digit_encoding),
        ] {
            let len = encoding.chars().count();
            if len < TOTAL_SQUARES {
                anyhow::bail!(
                    "{name} must have at least {TOTAL_SQUARES} characters, got {len}"
                );
            }
        }
        Ok(())
    }
}

/// Rendering preferences for the SVG export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Draw the digit on each square
    #[serde(default = "default_include_digits")]
    pub include_digits: bool,
    /// Fill of the digit text
    #[serde(default = "default_text_fill")]
    pub text_fill: String,
    /// Font size as a fraction of the square size
    #[serde(default = "default_text_scale")]
    pub text_scale: f64,
}

/// Digits are drawn unless disabled
const fn default_include_digits() -> bool {
    true
}

/// Default digit text fill
fn default_text_fill() -> String {
    "white".to_string()
}

/// Default font size relative to the square
fn default_text_scale() -> f64 {
    0.65
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_digits: default_include_digits(),
            text_fill: default_text_fill(),
            text_scale: default_text_scale(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/AcvsDisplay/config.toml`
/// - macOS: `~/Library/Application Support/AcvsDisplay/config.toml`
/// - Windows: `%APPDATA%\AcvsDisplay\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display geometry and encodings
    pub display: DisplayConfig,
    /// SVG rendering preferences
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("AcvsDisplay");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.display.validate().context("Invalid [display] section")?;

        if !(self.render.text_scale.is_finite() && self.render.text_scale > 0.0) {
            anyhow::bail!(
                "render.text_scale must be a positive number, got {}",
                self.render.text_scale
            );
        }

        Ok(())
    }
}
