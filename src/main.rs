//! Huekit - palette generation and adaptive layout toolkit
//!
//! The binary exposes the palette generator, layout engine, and window
//! classifier as subcommands. Run without a subcommand it prints the
//! palette for the configured base hue.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use huekit::cli::{ConfigArgs, LayoutArgs, PaletteArgs, WindowArgs};
use huekit::constants::APP_NAME;

/// Huekit - palette generation and adaptive layout toolkit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a color palette from a base hue
    Palette(PaletteArgs),
    /// Compute slot placements for a window size
    Layout(LayoutArgs),
    /// Classify a window size
    Window(WindowArgs),
    /// Show or update the stored configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or_else(|| {
        // No subcommand: show the palette for the configured hue
        Commands::Palette(PaletteArgs {
            hue: None,
            accent_offset: None,
            direction: None,
            dark: false,
            light: false,
            tones: false,
            json: false,
        })
    });

    let result = match command {
        Commands::Palette(args) => args.execute(),
        Commands::Layout(args) => args.execute(),
        Commands::Window(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("{APP_NAME}: {e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}
