//! Generate command: print a layout as a table or JSON.

use crate::cli::common::{CliError, CliResult};
use crate::cli::display::DisplayArgs;
use crate::export;
use crate::geometry::Ring;
use crate::models::{Classification, StimulusLayout};
use crate::services::generate_layout;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Generate the 54-square layout and print it
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub display: DisplayArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// JSON-serializable square for output
#[derive(Serialize, Debug)]
struct SquareOutput<'a> {
    position_label: &'a str,
    ring: Ring,
    x: f64,
    y: f64,
    size: f64,
    color: &'a str,
    fill: String,
    digit: char,
    classification: Classification,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.display.resolve()?;
        let layout = generate_layout(&config.display)?;

        let content = if self.json {
            layout_to_json(&layout)?
        } else {
            export::render_report(&layout)
        };

        match &self.output {
            Some(path) => {
                fs::write(path, content)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                info!("Wrote layout to {}", path.display());
                println!("✓ Generated layout: {}", path.display());
            }
            None => print!("{content}"),
        }

        Ok(())
    }
}

/// Serializes squares with their derived classification
fn layout_to_json(layout: &StimulusLayout) -> CliResult<String> {
    let squares: Vec<SquareOutput<'_>> = layout
        .iter()
        .map(|square| SquareOutput {
            position_label: square.position_label(),
            ring: square.ring(),
            x: square.x(),
            y: square.y(),
            size: square.size(),
            color: &square.color().name,
            fill: square.color().color.to_css(),
            digit: square.digit(),
            classification: square.classification(),
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&squares)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    json.push('\n');
    Ok(json)
}
