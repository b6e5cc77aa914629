//! tint - color conversion CLI
//!
//! Converts HSL/HSI to RGBA, morphs between colors and formats RGBA values.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "HSL/HSI to RGBA conversion and color morphing")]
#[command(long_about = "
Small color math toolbox. Results are printed as rgba(R,G,B,A) with
8-bit color channels (truncated, not rounded) and a two-decimal alpha.

Examples:
  tint hsl 120 1 0.5                      # rgba(0,255,0,1.00)
  tint hsl -30 1 0.5 --alpha 0.5          # negative hues are accepted
  tint hsi 240 0.5 0.8
  tint morph 'rgba(255,0,0,1)' 'rgba(0,0,255,1)' 0.25
  tint format 0 0.5 1 --alpha 0.5         # rgba(0,127,255,0.50)
  tint --json hsl 200 0.6 0.4             # JSON object instead
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging on stderr unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the resulting color as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert hue/saturation/lightness to RGBA
    #[command(visible_alias = "l")]
    Hsl(HslArgs),

    /// Convert hue/saturation/intensity to RGBA
    #[command(visible_alias = "i")]
    Hsi(HsiArgs),

    /// Linearly interpolate between two rgba(...) colors
    #[command(visible_alias = "m")]
    Morph(MorphArgs),

    /// Format unit-interval channels as rgba(...)
    #[command(visible_alias = "f")]
    Format(FormatArgs),
}

#[derive(Args)]
struct HslArgs {
    /// Hue in degrees (any value, whole turns are dropped)
    #[arg(allow_negative_numbers = true)]
    hue: f64,

    /// Saturation (0-1)
    saturation: f64,

    /// Lightness (0-1)
    lightness: f64,

    /// Alpha (0-1)
    #[arg(short, long, default_value = "1.0")]
    alpha: f64,
}

#[derive(Args)]
struct HsiArgs {
    /// Hue in degrees (any value, whole turns are dropped)
    #[arg(allow_negative_numbers = true)]
    hue: f64,

    /// Saturation (0-1)
    saturation: f64,

    /// Intensity (0-1)
    intensity: f64,

    /// Alpha (0-1)
    #[arg(short, long, default_value = "1.0")]
    alpha: f64,
}

#[derive(Args)]
struct MorphArgs {
    /// Start color, e.g. rgba(255,0,0,1.00)
    from: String,

    /// End color
    to: String,

    /// Interpolation factor (0 = start, 1 = end, outside extrapolates)
    #[arg(allow_negative_numbers = true)]
    percent: f64,
}

#[derive(Args)]
struct FormatArgs {
    /// Red (0-1)
    red: f64,

    /// Green (0-1)
    green: f64,

    /// Blue (0-1)
    blue: f64,

    /// Alpha (0-1)
    #[arg(short, long, default_value = "1.0")]
    alpha: f64,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Hsl(args) => commands::hsl::run(args, cli.json),
        Commands::Hsi(args) => commands::hsi::run(args, cli.json),
        Commands::Morph(args) => commands::morph::run(args, cli.json),
        Commands::Format(args) => commands::format::run(args, cli.json),
    }
}
