//! CLI command implementations

pub mod format;
pub mod hsi;
pub mod hsl;
pub mod morph;

use anyhow::{Context, Result};
use tint_core::{parse_rgba, rgba_to_string, Rgba};

/// Parse an `rgba(...)` command-line argument
pub fn parse_color(text: &str) -> Result<Rgba> {
    parse_rgba(text).with_context(|| format!("Invalid color: {text}"))
}

/// Render a result color as it goes to stdout
pub fn render(color: Rgba, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(&color).context("Failed to serialize color")
    } else {
        Ok(rgba_to_string(color))
    }
}

/// Print a result color to stdout
pub fn print_color(color: Rgba, json: bool) -> Result<()> {
    println!("{}", render(color, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let c = Rgba::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(render(c, false).unwrap(), "rgba(255,0,0,1.00)");
    }

    #[test]
    fn test_render_json() {
        let c = Rgba::new(0.5, 0.25, 0.0, 1.0);
        assert_eq!(render(c, true).unwrap(), r#"{"r":0.5,"g":0.25,"b":0.0,"a":1.0}"#);
    }

    #[test]
    fn test_parse_color_context() {
        let err = parse_color("rgba(300,0,0,1)").unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("Invalid color: rgba(300,0,0,1)"));
        assert!(chain.contains("outside 0..=255"));
    }
}
