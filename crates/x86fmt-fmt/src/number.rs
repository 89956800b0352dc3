//! Numeric text formatting.
//!
//! Every number a formatter writes (immediates, displacements, branch targets,
//! selectors) goes through [`NumberFormatter`], parameterised by a
//! [`NumberFormattingOptions`] derived from the [`FormatterOptions`] for the
//! call site.

use std::fmt::Write as _;

use crate::{FormatterOptions, NumberBase};

/// Number settings for one call site, borrowed from [`FormatterOptions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct NumberFormattingOptions<'a> {
    pub number_base: NumberBase,
    pub prefix: &'a str,
    pub suffix: &'a str,
    /// Affixes used when a small hex value is written in decimal.
    pub decimal_prefix: &'a str,
    pub decimal_suffix: &'a str,
    pub digit_separator: &'a str,
    pub digit_group_size: u32,
    pub uppercase_hex: bool,
    pub small_hex_numbers_in_decimal: bool,
    pub add_leading_zero_to_hex_numbers: bool,
    pub leading_zeros: bool,
    pub signed_number: bool,
    pub displacement_leading_zeros: bool,
}

impl<'a> NumberFormattingOptions<'a> {
    /// Options for immediate operands.
    #[must_use]
    pub fn with_immediate(options: &'a FormatterOptions) -> Self {
        Self::new(options, options.leading_zeros, options.signed_immediate_operands, false)
    }

    /// Options for memory displacements.
    #[must_use]
    pub fn with_displacement(options: &'a FormatterOptions) -> Self {
        Self::new(
            options,
            options.leading_zeros,
            options.signed_memory_displacements,
            options.displacement_leading_zeros,
        )
    }

    /// Options for branch targets.
    #[must_use]
    pub fn with_branch(options: &'a FormatterOptions) -> Self {
        Self::new(options, options.branch_leading_zeros, false, false)
    }

    #[must_use]
    pub fn new(
        options: &'a FormatterOptions,
        leading_zeros: bool,
        signed_number: bool,
        displacement_leading_zeros: bool,
    ) -> Self {
        let number_base = options.number_base();
        let (prefix, suffix, digit_group_size) = match number_base {
            NumberBase::Hexadecimal => (
                options.hex_prefix.as_str(),
                options.hex_suffix.as_str(),
                options.hex_digit_group_size,
            ),
            NumberBase::Decimal => (
                options.decimal_prefix.as_str(),
                options.decimal_suffix.as_str(),
                options.decimal_digit_group_size,
            ),
            NumberBase::Octal => (
                options.octal_prefix.as_str(),
                options.octal_suffix.as_str(),
                options.octal_digit_group_size,
            ),
            NumberBase::Binary => (
                options.binary_prefix.as_str(),
                options.binary_suffix.as_str(),
                options.binary_digit_group_size,
            ),
        };
        Self {
            number_base,
            prefix,
            suffix,
            decimal_prefix: options.decimal_prefix.as_str(),
            decimal_suffix: options.decimal_suffix.as_str(),
            digit_separator: options.digit_separator.as_str(),
            digit_group_size,
            uppercase_hex: options.uppercase_hex,
            small_hex_numbers_in_decimal: options.small_hex_numbers_in_decimal,
            add_leading_zero_to_hex_numbers: options.add_leading_zero_to_hex_numbers,
            leading_zeros,
            signed_number,
            displacement_leading_zeros,
        }
    }
}

// ============================================================================
// Formatter
// ============================================================================

const SMALL_DECIMAL: u64 = 9;

/// Formats numbers into a reusable buffer. The returned `&str` is valid
/// until the next call.
#[derive(Clone, Debug, Default)]
pub struct NumberFormatter {
    buf: String,
}

impl NumberFormatter {
    #[must_use]
    pub fn new() -> Self {
        // "0b" + 64 binary digits + 15 single-char separators
        Self {
            buf: String::with_capacity(2 + 64 + 15),
        }
    }

    pub fn format_i8(&mut self, options: &NumberFormattingOptions<'_>, value: i8) -> &str {
        self.format(options, u64::from(value.unsigned_abs()), value < 0, 8, options.leading_zeros)
    }

    pub fn format_i16(&mut self, options: &NumberFormattingOptions<'_>, value: i16) -> &str {
        self.format(options, u64::from(value.unsigned_abs()), value < 0, 16, options.leading_zeros)
    }

    pub fn format_i32(&mut self, options: &NumberFormattingOptions<'_>, value: i32) -> &str {
        self.format(options, u64::from(value.unsigned_abs()), value < 0, 32, options.leading_zeros)
    }

    pub fn format_i64(&mut self, options: &NumberFormattingOptions<'_>, value: i64) -> &str {
        self.format(options, value.unsigned_abs(), value < 0, 64, options.leading_zeros)
    }

    pub fn format_u8(&mut self, options: &NumberFormattingOptions<'_>, value: u8) -> &str {
        self.format(options, u64::from(value), false, 8, options.leading_zeros)
    }

    pub fn format_u16(&mut self, options: &NumberFormattingOptions<'_>, value: u16) -> &str {
        self.format(options, u64::from(value), false, 16, options.leading_zeros)
    }

    pub fn format_u32(&mut self, options: &NumberFormattingOptions<'_>, value: u32) -> &str {
        self.format(options, u64::from(value), false, 32, options.leading_zeros)
    }

    pub fn format_u64(&mut self, options: &NumberFormattingOptions<'_>, value: u64) -> &str {
        self.format(options, value, false, 64, options.leading_zeros)
    }

    pub fn format_u16_zeros(&mut self, options: &NumberFormattingOptions<'_>, value: u16, leading_zeros: bool) -> &str {
        self.format(options, u64::from(value), false, 16, leading_zeros)
    }

    pub fn format_u32_zeros(&mut self, options: &NumberFormattingOptions<'_>, value: u32, leading_zeros: bool) -> &str {
        self.format(options, u64::from(value), false, 32, leading_zeros)
    }

    pub fn format_u64_zeros(&mut self, options: &NumberFormattingOptions<'_>, value: u64, leading_zeros: bool) -> &str {
        self.format(options, value, false, 64, leading_zeros)
    }

    fn format(
        &mut self,
        options: &NumberFormattingOptions<'_>,
        value: u64,
        negative: bool,
        bit_width: u32,
        leading_zeros: bool,
    ) -> &str {
        self.buf.clear();
        if negative {
            self.buf.push('-');
        }
        let groups = DigitGroups::new(options.digit_group_size, options.digit_separator);
        let suffix = match options.number_base {
            NumberBase::Hexadecimal if options.small_hex_numbers_in_decimal && value <= SMALL_DECIMAL => {
                self.buf.push_str(options.decimal_prefix);
                let _ = write!(self.buf, "{value}");
                options.decimal_suffix
            }
            NumberBase::Hexadecimal => {
                self.buf.push_str(options.prefix);
                let mut digits = if leading_zeros { bit_width.div_ceil(4) } else { 0 };
                if digits == 0 {
                    digits = digit_count(value, 4);
                }
                // A leading letter would read as an identifier.
                if options.add_leading_zero_to_hex_numbers
                    && options.prefix.is_empty()
                    && digits < 17
                    && digit_at(value, digits - 1, 4) > 9
                {
                    digits += 1;
                }
                let alpha = if options.uppercase_hex { b'A' } else { b'a' };
                write_digits(&mut self.buf, value, digits, 4, groups, |d| {
                    if d > 9 { alpha + (d - 10) } else { b'0' + d }
                });
                options.suffix
            }
            NumberBase::Decimal => {
                self.buf.push_str(options.prefix);
                let digits = decimal_digit_count(value);
                write_decimal(&mut self.buf, value, digits, groups);
                options.suffix
            }
            NumberBase::Octal => {
                let mut digits = if leading_zeros { (bit_width + 2) / 3 } else { 0 };
                if digits == 0 {
                    digits = digit_count(value, 3);
                }
                // A "0" prefix is written as a digit so it joins the first group.
                if options.prefix == "0" {
                    if digits < 23 && digit_at(value, digits - 1, 3) != 0 {
                        digits += 1;
                    }
                } else {
                    self.buf.push_str(options.prefix);
                }
                write_digits(&mut self.buf, value, digits, 3, groups, |d| b'0' + d);
                options.suffix
            }
            NumberBase::Binary => {
                self.buf.push_str(options.prefix);
                let mut digits = if leading_zeros { bit_width } else { 0 };
                if digits == 0 {
                    digits = digit_count(value, 1);
                }
                write_digits(&mut self.buf, value, digits, 1, groups, |d| b'0' + d);
                options.suffix
            }
        };
        self.buf.push_str(suffix);
        &self.buf
    }
}

#[derive(Clone, Copy)]
struct DigitGroups<'a> {
    size: u32,
    separator: &'a str,
}

impl<'a> DigitGroups<'a> {
    const fn new(size: u32, separator: &'a str) -> Self {
        Self { size, separator }
    }

    /// Writes the separator after the digit at `index` (counted from the least significant).
    fn after(self, buf: &mut String, index: u32) {
        if self.size > 0 && !self.separator.is_empty() && index > 0 && index % self.size == 0 {
            buf.push_str(self.separator);
        }
    }
}

/// Digits needed for `value` in a power-of-two base of `bits` bits per digit.
const fn digit_count(value: u64, bits: u32) -> u32 {
    let significant = 64 - value.leading_zeros();
    if significant == 0 { 1 } else { significant.div_ceil(bits) }
}

/// Digit `index` of `value` in a power-of-two base; 0 past the top.
fn digit_at(value: u64, index: u32, bits: u32) -> u8 {
    let shift = index * bits;
    if shift >= 64 {
        return 0;
    }
    let mask = (1u64 << bits) - 1;
    u8::try_from((value >> shift) & mask).unwrap_or(0)
}

fn write_digits(
    buf: &mut String,
    value: u64,
    digits: u32,
    bits: u32,
    groups: DigitGroups<'_>,
    to_ascii: impl Fn(u8) -> u8,
) {
    for index in (0..digits).rev() {
        buf.push(char::from(to_ascii(digit_at(value, index, bits))));
        groups.after(buf, index);
    }
}

const fn decimal_digit_count(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

fn write_decimal(buf: &mut String, value: u64, digits: u32, groups: DigitGroups<'_>) {
    for index in (0..digits).rev() {
        let digit = 10u64
            .checked_pow(index)
            .map_or(0, |div| (value / div) % 10);
        buf.push(char::from(b'0' + u8::try_from(digit).unwrap_or(0)));
        groups.after(buf, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_options() -> FormatterOptions {
        FormatterOptions::with_nasm()
    }

    #[test]
    fn test_small_hex_as_decimal() {
        let options = hex_options();
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u32(&nopts, 7), "7");
        assert_eq!(f.format_u32(&nopts, 9), "9");
        assert_eq!(f.format_u32(&nopts, 0x10), "10h");
    }

    #[test]
    fn test_small_hex_uses_decimal_affixes() {
        let mut options = hex_options();
        options.decimal_suffix = "d".to_string();
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u8(&nopts, 3), "3d");
    }

    #[test]
    fn test_leading_zero_before_hex_letter() {
        let options = hex_options();
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u32(&nopts, 0xA), "0Ah");
        assert_eq!(f.format_u64(&nopts, 0xFFFF_FFFF_FFFF_FFFF), "0FFFFFFFFFFFFFFFFh");

        let gas = FormatterOptions::with_gas();
        let nopts = NumberFormattingOptions::with_immediate(&gas);
        assert_eq!(f.format_u32(&nopts, 0xA), "0xA");
    }

    #[test]
    fn test_lowercase_hex() {
        let mut options = FormatterOptions::with_gas();
        options.uppercase_hex = false;
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u32(&nopts, 0xBEEF), "0xbeef");
    }

    #[test]
    fn test_digit_grouping() {
        let mut options = hex_options();
        options.digit_separator = "_".to_string();
        options.add_leading_zero_to_hex_numbers = false;
        options.hex_suffix.clear();
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u32(&nopts, 0x1234_5678), "1234_5678");
        assert_eq!(f.format_u32(&nopts, 0x12345), "1_2345");

        options.set_number_base(NumberBase::Decimal);
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u32(&nopts, 1_234_567), "1_234_567");
        assert_eq!(f.format_u32(&nopts, 999), "999");
    }

    #[test]
    fn test_leading_zeros() {
        let options = hex_options();
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_branch(&options);
        assert_eq!(f.format_u16_zeros(&nopts, 0x12, true), "0012h");
        assert_eq!(f.format_u32_zeros(&nopts, 0x1000, true), "00001000h");
        assert_eq!(f.format_u32_zeros(&nopts, 0x1000, false), "1000h");
        // Still decimal when small.
        assert_eq!(f.format_u16_zeros(&nopts, 5, true), "5");
    }

    #[test]
    fn test_signed() {
        let options = hex_options();
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_i8(&nopts, -1), "-1");
        assert_eq!(f.format_i32(&nopts, -0x20), "-20h");
        assert_eq!(f.format_i64(&nopts, i64::MIN), "-8000000000000000h");
        assert_eq!(f.format_i8(&nopts, i8::MIN), "-80h");
    }

    #[test]
    fn test_octal() {
        let mut options = FormatterOptions::with_gas();
        options.set_number_base(NumberBase::Octal);
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u32(&nopts, 8), "010");
        assert_eq!(f.format_u32(&nopts, 0), "0");

        options.octal_prefix = "0o".to_string();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u32(&nopts, 8), "0o10");

        options.octal_prefix = "0".to_string();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u32_zeros(&nopts, 8, true), "00000000010");
    }

    #[test]
    fn test_binary() {
        let mut options = FormatterOptions::with_gas();
        options.set_number_base(NumberBase::Binary);
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_immediate(&options);
        assert_eq!(f.format_u8(&nopts, 5), "0b101");
        assert_eq!(f.format_u16_zeros(&nopts, 5, true), "0b0000000000000101");
    }

    #[test]
    fn test_decimal_ignores_leading_zeros() {
        let mut options = hex_options();
        options.set_number_base(NumberBase::Decimal);
        let mut f = NumberFormatter::new();
        let nopts = NumberFormattingOptions::with_branch(&options);
        assert_eq!(f.format_u32_zeros(&nopts, 42, true), "42");
        assert_eq!(f.format_u64(&nopts, u64::MAX), "18446744073709551615");
    }
}
