//! Operand kinds.

/// Kind of a decoded operand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[allow(non_camel_case_types)]
pub enum OpKind {
    #[default]
    Register,
    NearBranch16,
    NearBranch32,
    NearBranch64,
    FarBranch16,
    FarBranch32,
    Immediate8,
    Immediate8_2nd,
    Immediate16,
    Immediate32,
    Immediate64,
    Immediate8to16,
    Immediate8to32,
    Immediate8to64,
    Immediate32to64,
    MemorySegSI,
    MemorySegESI,
    MemorySegRSI,
    MemorySegDI,
    MemorySegEDI,
    MemorySegRDI,
    MemoryESDI,
    MemoryESEDI,
    MemoryESRDI,
    Memory,
}

impl OpKind {
    /// Any memory form, including the implicit string operands.
    #[must_use]
    pub const fn is_memory(self) -> bool {
        matches!(
            self,
            Self::MemorySegSI
                | Self::MemorySegESI
                | Self::MemorySegRSI
                | Self::MemorySegDI
                | Self::MemorySegEDI
                | Self::MemorySegRDI
                | Self::MemoryESDI
                | Self::MemoryESEDI
                | Self::MemoryESRDI
                | Self::Memory
        )
    }

    #[must_use]
    pub const fn is_immediate(self) -> bool {
        matches!(
            self,
            Self::Immediate8
                | Self::Immediate8_2nd
                | Self::Immediate16
                | Self::Immediate32
                | Self::Immediate64
                | Self::Immediate8to16
                | Self::Immediate8to32
                | Self::Immediate8to64
                | Self::Immediate32to64
        )
    }

    #[must_use]
    pub const fn is_near_branch(self) -> bool {
        matches!(self, Self::NearBranch16 | Self::NearBranch32 | Self::NearBranch64)
    }

    #[must_use]
    pub const fn is_far_branch(self) -> bool {
        matches!(self, Self::FarBranch16 | Self::FarBranch32)
    }

    /// Address size in bits of an implicit string operand, 0 for other kinds.
    #[must_use]
    pub const fn string_address_size(self) -> u32 {
        match self {
            Self::MemorySegSI | Self::MemorySegDI | Self::MemoryESDI => 16,
            Self::MemorySegESI | Self::MemorySegEDI | Self::MemoryESEDI => 32,
            Self::MemorySegRSI | Self::MemorySegRDI | Self::MemoryESRDI => 64,
            _ => 0,
        }
    }
}
