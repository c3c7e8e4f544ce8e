//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Write a default configuration file
    Init(ConfigInitArgs),
    /// Print the default config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Path to config file (defaults to the platform config file)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a default configuration file
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write (defaults to the platform config file)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Init(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::io(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Config::load_from(path)
            }
            None => Config::load(),
        }
        .map_err(|e| CliError::config_load(&e))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {}", e))
            })?;
            println!("{}", json);
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::new();

        let path = match &self.config {
            Some(path) => {
                refuse_overwrite(path.exists() && !self.force, path)?;
                ensure_parent_dir(path)?;
                config
                    .save_to(path)
                    .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;
                path.clone()
            }
            None => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                refuse_overwrite(Config::exists() && !self.force, &path)?;
                config
                    .save()
                    .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;
                path
            }
        };

        info!("Wrote default configuration to {}", path.display());
        println!("✓ Wrote default configuration to: {}", path.display());

        Ok(())
    }
}

/// Fails with a validation error when an existing file would be replaced without `--force`
fn refuse_overwrite(refuse: bool, path: &Path) -> CliResult<()> {
    if refuse {
        return Err(CliError::validation(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

/// Creates the parent directory of a file if needed
fn ensure_parent_dir(path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let display = &config.display;

    println!("{} Configuration", APP_NAME);
    println!("=========================");
    println!();

    println!("Display:");
    println!("  Square Size:    {}", display.square_size);
    println!("  Outer Radius:   {}", display.outer_radius);
    println!("  Center:         ({}, {})", display.center_x, display.center_y);
    println!("  Color Encoding: {}", display.color_encoding);
    println!("  Digit Encoding: {}", display.digit_encoding);
    println!("  Palette:");
    for (index, entry) in display.palette.colors().iter().enumerate() {
        println!(
            "    {}: {} {} ({})",
            index,
            entry.name,
            entry.color,
            entry.color.to_hex()
        );
    }
    println!();

    println!("Render:");
    println!("  Include Digits: {}", config.render.include_digits);
    println!("  Text Fill:      {}", config.render.text_fill);
    println!("  Text Scale:     {}", config.render.text_scale);
    println!();
}
