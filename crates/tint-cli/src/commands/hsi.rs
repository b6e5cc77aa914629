//! HSI conversion command

use crate::HsiArgs;
use anyhow::Result;
use tint_color::{hsia_to_rgba, Rgba};
use tracing::debug;

pub fn run(args: HsiArgs, json: bool) -> Result<()> {
    let color = convert(&args);
    super::print_color(color, json)
}

fn convert(args: &HsiArgs) -> Rgba {
    let color = hsia_to_rgba(args.hue, args.saturation, args.intensity, args.alpha);
    debug!(
        hue = args.hue,
        saturation = args.saturation,
        intensity = args.intensity,
        alpha = args.alpha,
        ?color,
        "hsi -> rgba"
    );
    color
}
