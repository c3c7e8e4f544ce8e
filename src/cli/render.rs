//! Render command for writing the display as SVG.

use crate::cli::common::{CliError, CliResult};
use crate::cli::display::DisplayArgs;
use crate::export;
use crate::services::generate_layout;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Render the display to an SVG file
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub display: DisplayArgs,

    /// Output path for the SVG file (defaults to acvs_display_[date].svg)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Draw squares only, without digits
    #[arg(long)]
    pub no_digits: bool,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.display.resolve()?;
        let layout = generate_layout(&config.display)?;

        let mut options = config.render.clone();
        if self.no_digits {
            options.include_digits = false;
        }

        let svg = export::render_svg(&layout, &options);

        let output_path = self.get_output_path();
        fs::write(&output_path, svg)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        info!(
            squares = layout.len(),
            targets = layout.target_count(),
            "Rendered display to {}",
            output_path.display()
        );
        println!("✓ Rendered display to: {}", output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: acvs_display_[date].svg
        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!("acvs_display_{}.svg", date))
    }
}
