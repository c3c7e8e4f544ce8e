//! ACVS Display - stimulus layout generator for visual search tasks
//!
//! Builds the 54-square, three-ring display from its color and digit
//! encodings, and prints or renders it.

use acvs_display::cli::{CliResult, ConfigArgs, GenerateArgs, RenderArgs};
use acvs_display::constants::{APP_BINARY_NAME, APP_NAME};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ACVS Display - ring-based stimulus layout generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = format!(
    "Examples:\n  {bin} generate --json\n  {bin} render --output display.svg\n  {bin} config init",
    bin = APP_BINARY_NAME
))]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the layout and print it as a table or JSON
    Generate(GenerateArgs),
    /// Render the layout to an SVG file
    Render(RenderArgs),
    /// Manage the configuration file
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let result: CliResult<()> = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Render(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
