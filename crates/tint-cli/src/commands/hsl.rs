//! HSL conversion command

use crate::HslArgs;
use anyhow::Result;
use tint_color::{hsla_to_rgba, Rgba};
use tracing::debug;

pub fn run(args: HslArgs, json: bool) -> Result<()> {
    let color = convert(&args);
    super::print_color(color, json)
}

fn convert(args: &HslArgs) -> Rgba {
    let color = hsla_to_rgba(args.hue, args.saturation, args.lightness, args.alpha);
    debug!(
        hue = args.hue,
        saturation = args.saturation,
        lightness = args.lightness,
        alpha = args.alpha,
        ?color,
        "hsl -> rgba"
    );
    color
}
