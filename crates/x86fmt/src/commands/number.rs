//! Number command.

use tracing::error;
use x86fmt::{Error, FormatterFactory, Result, Syntax, parse_number};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, StyleArgs, WidthArg};
use crate::terminal;

/// Handle the `number` command.
pub fn cmd_number(value: &str, width: WidthArg, signed: bool, style: &StyleArgs) -> i32 {
    match render(value, width, signed, style) {
        Ok(text) => {
            println!("{text}");
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(value, error = %e, "number formatting failed");
            terminal::error(&e.to_string());
            EXIT_FAILURE
        }
    }
}

/// Formats `value` as an immediate of `width` bits. Negative values are
/// accepted for unsigned widths and shown as their two's complement.
#[allow(clippy::cast_possible_truncation)]
fn render(value: &str, width: WidthArg, signed: bool, style: &StyleArgs) -> Result<String> {
    let number = parse_number(value).map_err(|e| Error::InvalidOption(format!("`{value}`: {e}")))?;
    let factory = FormatterFactory::new(Syntax::from(style.syntax), style.to_options()?)?;
    let mut formatter = factory.build();
    let out_of_range = || Error::InvalidOption(format!("`{value}` does not fit in {} bits", bits(width)));

    let text = match (width, signed) {
        (WidthArg::W8, true) => formatter.format_i8(i8::try_from(number).map_err(|_| out_of_range())?),
        (WidthArg::W16, true) => formatter.format_i16(i16::try_from(number).map_err(|_| out_of_range())?),
        (WidthArg::W32, true) => formatter.format_i32(i32::try_from(number).map_err(|_| out_of_range())?),
        (WidthArg::W64, true) => formatter.format_i64(i64::try_from(number).map_err(|_| out_of_range())?),
        (_, false) => {
            let raw = truncate(number, bits(width)).ok_or_else(out_of_range)?;
            match width {
                WidthArg::W8 => formatter.format_u8(raw as u8),
                WidthArg::W16 => formatter.format_u16(raw as u16),
                WidthArg::W32 => formatter.format_u32(raw as u32),
                WidthArg::W64 => formatter.format_u64(raw),
            }
        }
    };
    Ok(text.to_string())
}

const fn bits(width: WidthArg) -> u32 {
    match width {
        WidthArg::W8 => 8,
        WidthArg::W16 => 16,
        WidthArg::W32 => 32,
        WidthArg::W64 => 64,
    }
}

/// `value` as a `bits`-wide unsigned pattern, if it fits as either signed or unsigned.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn truncate(value: i128, bits: u32) -> Option<u64> {
    let min = -(1i128 << (bits - 1));
    let max = (1i128 << bits) - 1;
    if value < min || value > max {
        return None;
    }
    let mask = (1u128 << bits) - 1;
    Some((value as u128 & mask) as u64)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands};

    fn style_args(args: &[&str]) -> StyleArgs {
        let cli = Cli::parse_from(["x86fmt", "number", "0"].iter().chain(args));
        let Commands::Number { style, .. } = cli.command else {
            unreachable!("number command variant mismatch");
        };
        style
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(-1, 8), Some(0xFF));
        assert_eq!(truncate(255, 8), Some(0xFF));
        assert_eq!(truncate(256, 8), None);
        assert_eq!(truncate(-129, 8), None);
        assert_eq!(truncate(-1, 64), Some(u64::MAX));
    }

    #[test]
    fn test_render_dialects() {
        let nasm = style_args(&[]);
        assert_eq!(render("255", WidthArg::W32, false, &nasm).unwrap(), "0FFh");
        let gas = style_args(&["--syntax", "gas"]);
        assert_eq!(render("255", WidthArg::W32, false, &gas).unwrap(), "0xFF");
        assert_eq!(render("-1", WidthArg::W8, false, &gas).unwrap(), "0xFF");
    }

    #[test]
    fn test_render_signed_and_base() {
        let dec = style_args(&["--syntax", "gas", "--base", "dec"]);
        assert_eq!(render("-5", WidthArg::W16, true, &dec).unwrap(), "-5");
        assert!(render("0x80", WidthArg::W8, true, &dec).is_err());
    }
}
