//! Small enums shared by the instruction model and the formatters.

use crate::IsaError;

/// Effective code size an instruction was decoded in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum CodeSize {
    #[default]
    Unknown = 0,
    Code16 = 1,
    Code32 = 2,
    Code64 = 3,
}

impl CodeSize {
    /// Bitness in bits, 0 when unknown.
    #[must_use]
    pub const fn bitness(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::Code16 => 16,
            Self::Code32 => 32,
            Self::Code64 => 64,
        }
    }

    /// Code size for a bitness (0, 16, 32 or 64).
    ///
    /// # Errors
    ///
    /// Returns [`IsaError::InvalidCodeSize`] for any other value.
    pub const fn from_bitness(bitness: u32) -> Result<Self, IsaError> {
        match bitness {
            0 => Ok(Self::Unknown),
            16 => Ok(Self::Code16),
            32 => Ok(Self::Code32),
            64 => Ok(Self::Code64),
            _ => Err(IsaError::InvalidCodeSize(bitness)),
        }
    }
}

impl TryFrom<u8> for CodeSize {
    type Error = IsaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Code16),
            2 => Ok(Self::Code32),
            3 => Ok(Self::Code64),
            _ => Err(IsaError::InvalidCodeSize(u32::from(value))),
        }
    }
}

/// Embedded rounding control (EVEX `{er}`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum RoundingControl {
    #[default]
    None,
    RoundToNearest,
    RoundDown,
    RoundUp,
    RoundTowardZero,
}

/// How an operand is accessed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum OpAccess {
    #[default]
    None,
    Read,
    CondRead,
    Write,
    CondWrite,
    ReadWrite,
    ReadCondWrite,
    NoMemAccess,
}
