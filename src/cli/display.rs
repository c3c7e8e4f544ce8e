//! Display options shared by commands that build a layout.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Config file selection plus per-invocation overrides of the display section
#[derive(Debug, Clone, Default, Args)]
pub struct DisplayArgs {
    /// Path to config file (defaults to the platform config file)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Color encoding: one palette index (0-2) per square, read from the end
    #[arg(long, value_name = "DIGITS")]
    pub colors: Option<String>,

    /// Digit encoding: one digit (0-9) per square, read from the end
    #[arg(long, value_name = "DIGITS")]
    pub digits: Option<String>,

    /// Width and height of every square
    #[arg(long, value_name = "SIZE")]
    pub square_size: Option<f64>,

    /// Outer ring radius
    #[arg(long, value_name = "RADIUS")]
    pub radius: Option<f64>,

    /// Ring center x
    #[arg(long, value_name = "X", allow_hyphen_values = true)]
    pub center_x: Option<f64>,

    /// Ring center y
    #[arg(long, value_name = "Y", allow_hyphen_values = true)]
    pub center_y: Option<f64>,
}

impl DisplayArgs {
    /// Loads the selected config file and applies the overrides.
    pub fn resolve(&self) -> CliResult<Config> {
        let mut config = self.load_config()?;
        let settings = &mut config.display;

        if let Some(colors) = &self.colors {
            settings.color_encoding.clone_from(colors);
        }
        if let Some(digits) = &self.digits {
            settings.digit_encoding.clone_from(digits);
        }
        if let Some(size) = self.square_size {
            settings.square_size = size;
        }
        if let Some(radius) = self.radius {
            settings.outer_radius = radius;
        }
        if let Some(x) = self.center_x {
            settings.center_x = x;
        }
        if let Some(y) = self.center_y {
            settings.center_y = y;
        }

        settings
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid display settings: {e}")))?;

        debug!(
            square_size = settings.square_size,
            outer_radius = settings.outer_radius,
            center_x = settings.center_x,
            center_y = settings.center_y,
            "Resolved display settings"
        );

        Ok(config)
    }

    fn load_config(&self) -> CliResult<Config> {
        match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::io(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Config::load_from(path).map_err(|e| CliError::config_load(&e))
            }
            None => Config::load().map_err(|e| CliError::config_load(&e)),
        }
    }
}
