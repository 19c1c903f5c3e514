//! Palette command implementation.
//!
//! Prints each brand colour role with darker and lighter shades, followed by
//! the primary/accent midpoint.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use crate::config::BrandConfig;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{adjust_brightness, blend_colors, clamp_channels, rgb_to_hex, Colour};

use super::GlobalArgs;

/// Show the brand colour palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Brightness factor for the darker shade
    #[arg(long, default_value_t = 0.7)]
    pub darken: f64,

    /// Brightness factor for the lighter shade
    #[arg(long, default_value_t = 1.3)]
    pub lighten: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Swatch {
    role: String,
    hex: String,
    darker: String,
    lighter: String,
}

pub fn run(args: PaletteArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let brand = BrandConfig::discover(global.brand.as_deref())?;
    let swatches = swatches(&brand, args.darken, args.lighten)?;
    let blend = primary_accent_blend(&brand)?;

    printer.status(
        "Palette",
        &format!("{} ({})", printer.bold(&brand.name), plural(swatches.len(), "colour", "colours")),
    );

    let mut stdout = io::stdout().lock();
    if printer.is_json() {
        let doc = serde_json::json!({
            "brand": brand.name,
            "colors": swatches,
            "blend": blend.to_hex(),
        });
        writeln!(stdout, "{}", doc)?;
    } else {
        for swatch in &swatches {
            let colour = Colour::from_hex(&swatch.hex)?;
            writeln!(
                stdout,
                "{}{:<16} {}  darker {}  lighter {}",
                printer.swatch(colour),
                swatch.role,
                swatch.hex,
                swatch.darker,
                swatch.lighter
            )?;
        }
        writeln!(stdout, "{}{:<16} {}", printer.swatch(blend), "primary+accent", blend.to_hex())?;
    }

    Ok(())
}

fn swatches(brand: &BrandConfig, darken: f64, lighten: f64) -> Result<Vec<Swatch>> {
    brand
        .colors
        .roles()
        .into_iter()
        .map(|(role, colour)| {
            let hex = colour.to_hex();
            let shade = |factor: f64| -> Result<String> {
                let (r, g, b) = adjust_brightness(&hex, factor)?;
                Ok(rgb_to_hex(r, g, b))
            };

            let (darker, lighter) = (shade(darken)?, shade(lighten)?);

            Ok(Swatch {
                role: role.to_string(),
                hex,
                darker,
                lighter,
            })
        })
        .collect()
}

fn primary_accent_blend(brand: &BrandConfig) -> Result<Colour> {
    let channels = blend_colors(
        &brand.colors.primary.to_hex(),
        &brand.colors.accent.to_hex(),
        0.5,
    )?;
    Ok(clamp_channels(channels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_swatches_for_required_roles() {
        let brand = fixtures::brand();
        let swatches = swatches(&brand, 0.5, 2.0).unwrap();

        let roles: Vec<&str> = swatches.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(
            roles,
            vec!["primary", "accent", "background", "text_primary", "text_secondary"]
        );

        // #1a73e8 halved is (13, 57, 116); doubled clamps to (52, 230, 255).
        assert_eq!(
            swatches[0],
            Swatch {
                role: "primary".to_string(),
                hex: "#1a73e8".to_string(),
                darker: "#0d3974".to_string(),
                lighter: "#34e6ff".to_string(),
            }
        );
    }

    #[test]
    fn test_primary_accent_blend() {
        let brand = fixtures::brand();
        // Midpoint of #1a73e8 and #fbbc04, truncated.
        assert_eq!(primary_accent_blend(&brand).unwrap(), Colour::rgb(138, 151, 118));
    }
}
