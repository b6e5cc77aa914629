//! Format command

use crate::FormatArgs;
use anyhow::Result;
use tint_core::Rgba;
use tracing::debug;

pub fn run(args: FormatArgs, json: bool) -> Result<()> {
    let color = Rgba::new(args.red, args.green, args.blue, args.alpha);
    debug!(?color, "format");
    super::print_color(color, json)
}
