//! Morph command
//!
//! Interpolates between two colors given in their rgba(...) form.

use crate::MorphArgs;
use anyhow::Result;
use tint_color::{morph_rgba, Rgba};
use tracing::{debug, trace};

pub fn run(args: MorphArgs, json: bool) -> Result<()> {
    let color = convert(&args)?;
    super::print_color(color, json)
}

fn convert(args: &MorphArgs) -> Result<Rgba> {
    let from = super::parse_color(&args.from)?;
    let to = super::parse_color(&args.to)?;
    trace!(?from, ?to, "parsed endpoints");

    if !(0.0..=1.0).contains(&args.percent) {
        debug!(percent = args.percent, "extrapolating outside the endpoints");
    }

    let color = morph_rgba(from, to, args.percent);
    debug!(percent = args.percent, ?color, "morph");
    Ok(color)
}
