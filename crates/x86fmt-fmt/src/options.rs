//! Formatter configuration.
//!
//! [`FormatterOptions`] is a plain bag of settings. Independent toggles and
//! affix strings are public fields; values with a restricted domain (condition
//! code selectors, number base, memory size display) are private and validated
//! by their setters so an invalid value can never reach a format call.

use std::fmt;
use std::str::FromStr;

use crate::FormatterError;

// ============================================================================
// Condition code groups
// ============================================================================

/// One of the 16 condition code groups. Each group has one to three
/// equivalent mnemonic spellings; the options pick one by index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum CcGroup {
    O = 0,
    No = 1,
    B = 2,
    Ae = 3,
    E = 4,
    Ne = 5,
    Be = 6,
    A = 7,
    S = 8,
    Ns = 9,
    P = 10,
    Np = 11,
    L = 12,
    Ge = 13,
    Le = 14,
    G = 15,
}

const CC_GROUPS: [CcGroup; 16] = [
    CcGroup::O,
    CcGroup::No,
    CcGroup::B,
    CcGroup::Ae,
    CcGroup::E,
    CcGroup::Ne,
    CcGroup::Be,
    CcGroup::A,
    CcGroup::S,
    CcGroup::Ns,
    CcGroup::P,
    CcGroup::Np,
    CcGroup::L,
    CcGroup::Ge,
    CcGroup::Le,
    CcGroup::G,
];

impl CcGroup {
    pub const COUNT: usize = 16;

    #[must_use]
    pub fn values() -> impl Iterator<Item = Self> {
        CC_GROUPS.iter().copied()
    }

    /// Group from its table index.
    #[must_use]
    pub fn from_index(index: u32) -> Option<Self> {
        usize::try_from(index).ok().and_then(|i| CC_GROUPS.get(i)).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.candidates()[0]
    }

    /// Condition suffixes the group can be written with, default first.
    #[must_use]
    pub const fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::O => &["o"],
            Self::No => &["no"],
            Self::B => &["b", "c", "nae"],
            Self::Ae => &["ae", "nb", "nc"],
            Self::E => &["e", "z"],
            Self::Ne => &["ne", "nz"],
            Self::Be => &["be", "na"],
            Self::A => &["a", "nbe"],
            Self::S => &["s"],
            Self::Ns => &["ns"],
            Self::P => &["p", "pe"],
            Self::Np => &["np", "po"],
            Self::L => &["l", "nge"],
            Self::Ge => &["ge", "nl"],
            Self::Le => &["le", "ng"],
            Self::G => &["g", "nle"],
        }
    }
}

impl fmt::Display for CcGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CcGroup {
    type Err = FormatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::values()
            .find(|group| group.name() == lower)
            .ok_or_else(|| FormatterError::UnknownCcGroup(s.to_string()))
    }
}

// ============================================================================
// Enumerated settings
// ============================================================================

/// Radix used for immediates, displacements and branch targets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum NumberBase {
    #[default]
    Hexadecimal,
    Decimal,
    Octal,
    Binary,
}

impl TryFrom<u32> for NumberBase {
    type Error = FormatterError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Hexadecimal),
            1 => Ok(Self::Decimal),
            2 => Ok(Self::Octal),
            3 => Ok(Self::Binary),
            _ => Err(FormatterError::InvalidNumberBase(value)),
        }
    }
}

impl FromStr for NumberBase {
    type Err = FormatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" | "hexadecimal" | "16" => Ok(Self::Hexadecimal),
            "dec" | "decimal" | "10" => Ok(Self::Decimal),
            "oct" | "octal" | "8" => Ok(Self::Octal),
            "bin" | "binary" | "2" => Ok(Self::Binary),
            _ => Err(FormatterError::InvalidNumberBase(u32::MAX)),
        }
    }
}

/// When memory operands get a size keyword (`dword ptr`, `qword`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MemorySizeOptions {
    /// Only when the size can't be inferred from the other operands.
    #[default]
    Default,
    Always,
    /// Only when the size is ambiguous even to an assembler that infers sizes.
    Minimal,
    Never,
}

impl TryFrom<u32> for MemorySizeOptions {
    type Error = FormatterError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Default),
            1 => Ok(Self::Always),
            2 => Ok(Self::Minimal),
            3 => Ok(Self::Never),
            _ => Err(FormatterError::InvalidMemorySizeOptions(value)),
        }
    }
}

impl FromStr for MemorySizeOptions {
    type Err = FormatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "always" => Ok(Self::Always),
            "minimal" => Ok(Self::Minimal),
            "never" => Ok(Self::Never),
            _ => Err(FormatterError::InvalidMemorySizeOptions(u32::MAX)),
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Formatter settings. Read on every format call; nothing derived from them is cached.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormatterOptions {
    pub uppercase_prefixes: bool,
    pub uppercase_mnemonics: bool,
    pub uppercase_registers: bool,
    pub uppercase_keywords: bool,
    pub uppercase_decorators: bool,
    /// Overrides the other `uppercase_*` toggles.
    pub uppercase_all: bool,

    /// Column of the first operand, 0 for a single space after the mnemonic.
    pub first_operand_char_index: u32,
    /// Tab width used to reach `first_operand_char_index`; 0 pads with spaces.
    pub tab_size: u32,
    pub space_after_operand_separator: bool,
    pub space_after_memory_bracket: bool,
    pub space_between_memory_add_operators: bool,
    pub space_between_memory_mul_operators: bool,
    pub scale_before_index: bool,
    pub always_show_scale: bool,
    pub always_show_segment_register: bool,
    pub show_zero_displacements: bool,

    pub hex_prefix: String,
    pub hex_suffix: String,
    pub hex_digit_group_size: u32,
    pub decimal_prefix: String,
    pub decimal_suffix: String,
    pub decimal_digit_group_size: u32,
    pub octal_prefix: String,
    pub octal_suffix: String,
    pub octal_digit_group_size: u32,
    pub binary_prefix: String,
    pub binary_suffix: String,
    pub binary_digit_group_size: u32,
    /// Inserted between digit groups; empty disables grouping.
    pub digit_separator: String,

    pub leading_zeros: bool,
    pub uppercase_hex: bool,
    pub small_hex_numbers_in_decimal: bool,
    pub add_leading_zero_to_hex_numbers: bool,
    pub branch_leading_zeros: bool,
    pub signed_immediate_operands: bool,
    pub signed_memory_displacements: bool,
    pub displacement_leading_zeros: bool,

    pub rip_relative_addresses: bool,
    pub show_branch_size: bool,
    pub use_pseudo_ops: bool,
    pub show_symbol_address: bool,
    pub prefer_st0: bool,
    pub show_useless_prefixes: bool,

    pub gas_naked_registers: bool,
    pub gas_show_mnemonic_size_suffix: bool,
    pub gas_space_after_memory_operand_comma: bool,

    pub masm_add_ds_prefix32: bool,
    pub masm_symbol_displ_in_brackets: bool,
    pub masm_displ_in_brackets: bool,

    pub nasm_show_sign_extended_immediate_size: bool,

    number_base: NumberBase,
    memory_size_options: MemorySizeOptions,
    cc: [u8; CcGroup::COUNT],
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            uppercase_prefixes: false,
            uppercase_mnemonics: false,
            uppercase_registers: false,
            uppercase_keywords: false,
            uppercase_decorators: false,
            uppercase_all: false,
            first_operand_char_index: 0,
            tab_size: 0,
            space_after_operand_separator: false,
            space_after_memory_bracket: false,
            space_between_memory_add_operators: false,
            space_between_memory_mul_operators: false,
            scale_before_index: false,
            always_show_scale: false,
            always_show_segment_register: false,
            show_zero_displacements: false,
            hex_prefix: String::new(),
            hex_suffix: String::new(),
            hex_digit_group_size: 4,
            decimal_prefix: String::new(),
            decimal_suffix: String::new(),
            decimal_digit_group_size: 3,
            octal_prefix: String::new(),
            octal_suffix: String::new(),
            octal_digit_group_size: 4,
            binary_prefix: String::new(),
            binary_suffix: String::new(),
            binary_digit_group_size: 4,
            digit_separator: String::new(),
            leading_zeros: false,
            uppercase_hex: true,
            small_hex_numbers_in_decimal: true,
            add_leading_zero_to_hex_numbers: true,
            branch_leading_zeros: true,
            signed_immediate_operands: false,
            signed_memory_displacements: true,
            displacement_leading_zeros: false,
            rip_relative_addresses: false,
            show_branch_size: true,
            use_pseudo_ops: true,
            show_symbol_address: false,
            prefer_st0: false,
            show_useless_prefixes: false,
            gas_naked_registers: false,
            gas_show_mnemonic_size_suffix: false,
            gas_space_after_memory_operand_comma: false,
            masm_add_ds_prefix32: true,
            masm_symbol_displ_in_brackets: true,
            masm_displ_in_brackets: true,
            nasm_show_sign_extended_immediate_size: false,
            number_base: NumberBase::Hexadecimal,
            memory_size_options: MemorySizeOptions::Default,
            cc: [0; CcGroup::COUNT],
        }
    }
}

impl FormatterOptions {
    /// Defaults for the NASM formatter (`0ABh` hex numbers).
    #[must_use]
    pub fn with_nasm() -> Self {
        Self {
            hex_suffix: "h".to_string(),
            octal_suffix: "o".to_string(),
            binary_suffix: "b".to_string(),
            ..Self::default()
        }
    }

    /// Defaults for the MASM formatter (`0ABh` hex numbers).
    #[must_use]
    pub fn with_masm() -> Self {
        Self {
            hex_suffix: "h".to_string(),
            octal_suffix: "o".to_string(),
            binary_suffix: "b".to_string(),
            ..Self::default()
        }
    }

    /// Defaults for the GAS formatter (`0xab` style numbers).
    #[must_use]
    pub fn with_gas() -> Self {
        Self {
            hex_prefix: "0x".to_string(),
            octal_prefix: "0".to_string(),
            binary_prefix: "0b".to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn number_base(&self) -> NumberBase {
        self.number_base
    }

    pub const fn set_number_base(&mut self, base: NumberBase) {
        self.number_base = base;
    }

    /// Sets the number base from its numeric index (0 hex, 1 decimal, 2 octal, 3 binary).
    ///
    /// # Errors
    ///
    /// Returns [`FormatterError::InvalidNumberBase`] for any other value; the
    /// current base is left unchanged.
    pub fn set_number_base_index(&mut self, index: u32) -> Result<(), FormatterError> {
        self.number_base = NumberBase::try_from(index)?;
        Ok(())
    }

    #[must_use]
    pub const fn memory_size_options(&self) -> MemorySizeOptions {
        self.memory_size_options
    }

    pub const fn set_memory_size_options(&mut self, value: MemorySizeOptions) {
        self.memory_size_options = value;
    }

    /// Sets the memory size display from its numeric index.
    ///
    /// # Errors
    ///
    /// Returns [`FormatterError::InvalidMemorySizeOptions`] for values above 3.
    pub fn set_memory_size_options_index(&mut self, index: u32) -> Result<(), FormatterError> {
        self.memory_size_options = MemorySizeOptions::try_from(index)?;
        Ok(())
    }

    /// Selected candidate index of a condition code group.
    #[must_use]
    pub const fn cc(&self, group: CcGroup) -> u32 {
        self.cc[group as usize] as u32
    }

    /// Selects which spelling of `group` is used.
    ///
    /// # Errors
    ///
    /// Returns [`FormatterError::InvalidCcSelector`] if `index` is not a valid
    /// candidate of the group.
    pub fn set_cc(&mut self, group: CcGroup, index: u32) -> Result<(), FormatterError> {
        let count = group.candidates().len();
        match u8::try_from(index) {
            Ok(value) if usize::from(value) < count => {
                self.cc[group as usize] = value;
                Ok(())
            }
            _ => Err(FormatterError::InvalidCcSelector {
                group: group.name(),
                index,
                count,
            }),
        }
    }

    /// Selector by raw group index, as stored in the rule tables.
    pub(crate) fn cc_by_index(&self, group: u32) -> usize {
        usize::try_from(group)
            .ok()
            .and_then(|g| self.cc.get(g))
            .map_or(0, |&i| usize::from(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatterOptions::default();
        assert!(options.uppercase_hex);
        assert!(options.small_hex_numbers_in_decimal);
        assert!(options.use_pseudo_ops);
        assert!(options.masm_displ_in_brackets);
        assert_eq!(options.tab_size, 0);
        assert_eq!(options.hex_digit_group_size, 4);
        assert_eq!(options.decimal_digit_group_size, 3);
        assert_eq!(options.number_base(), NumberBase::Hexadecimal);
        for group in CcGroup::values() {
            assert_eq!(options.cc(group), 0);
        }
    }

    #[test]
    fn test_dialect_affixes() {
        assert_eq!(FormatterOptions::with_nasm().hex_suffix, "h");
        assert_eq!(FormatterOptions::with_masm().hex_suffix, "h");
        let gas = FormatterOptions::with_gas();
        assert_eq!(gas.hex_prefix, "0x");
        assert!(gas.hex_suffix.is_empty());
    }

    #[test]
    fn test_set_cc_validates() {
        let mut options = FormatterOptions::default();
        options.set_cc(CcGroup::Ae, 2).unwrap();
        assert_eq!(options.cc(CcGroup::Ae), 2);

        let err = options.set_cc(CcGroup::E, 2).unwrap_err();
        assert!(matches!(err, FormatterError::InvalidCcSelector { count: 2, .. }));
        assert!(options.set_cc(CcGroup::O, 1).is_err());
        assert!(options.set_cc(CcGroup::B, 256).is_err());
        // Rejected values leave the previous selection alone.
        assert_eq!(options.cc(CcGroup::E), 0);
    }

    #[test]
    fn test_number_base_index() {
        let mut options = FormatterOptions::default();
        options.set_number_base_index(1).unwrap();
        assert_eq!(options.number_base(), NumberBase::Decimal);
        assert_eq!(options.set_number_base_index(4), Err(FormatterError::InvalidNumberBase(4)));
        assert_eq!(options.number_base(), NumberBase::Decimal);
    }

    #[test]
    fn test_memory_size_options_index() {
        let mut options = FormatterOptions::default();
        options.set_memory_size_options_index(1).unwrap();
        assert_eq!(options.memory_size_options(), MemorySizeOptions::Always);
        assert!(options.set_memory_size_options_index(9).is_err());
    }

    #[test]
    fn test_cc_group_parse() {
        assert_eq!("ae".parse::<CcGroup>().unwrap(), CcGroup::Ae);
        assert_eq!("NLE".parse::<CcGroup>().ok(), None);
        assert_eq!("G".parse::<CcGroup>().unwrap(), CcGroup::G);
        assert_eq!(CcGroup::Ae.candidates(), &["ae", "nb", "nc"]);
        assert_eq!(CcGroup::from_index(15), Some(CcGroup::G));
        assert_eq!(CcGroup::from_index(16), None);
    }
}
