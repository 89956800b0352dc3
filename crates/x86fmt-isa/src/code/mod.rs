//! Opcode forms and their static metadata.

mod generated;

pub use generated::Code;
use generated::{ALL_CODES, CODE_COUNT, CODE_INFOS};

use crate::{IsaError, MemorySize};

/// Operand slot of an opcode form, used to check and fill operands.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[allow(non_camel_case_types)]
pub enum OpTemplate {
    Register,
    Memory,
    RegisterOrMemory,
    Immediate8,
    Immediate8_2nd,
    Immediate16,
    Immediate32,
    Immediate64,
    Immediate8to16,
    Immediate8to32,
    Immediate8to64,
    Immediate32to64,
    NearBranch16,
    NearBranch32,
    NearBranch64,
    FarBranch16,
    FarBranch32,
    /// `seg:[si/esi/rsi]` string source.
    StringSource,
    /// `es:[di/edi/rdi]` string destination.
    StringDest,
    /// `seg:[di/edi/rdi]` (maskmov destination).
    StringSegDest,
}

/// Classification bits attached to each [`Code`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CodeFlags(u8);

impl CodeFlags {
    pub const NONE: Self = Self(0);
    /// Near call.
    pub const CALL: Self = Self(1 << 0);
    /// String instruction with implicit `si`/`di` operands.
    pub const STRING: Self = Self(1 << 1);
    /// `rep` prefix is shown as `repe`/`repne` (`cmps`, `scas`).
    pub const REPE_REPNE: Self = Self(1 << 2);
    /// Indirect branch that accepts the `notrack` (DS) prefix.
    pub const NOTRACK: Self = Self(1 << 3);
    /// Rounding control is accepted but has no effect.
    pub const IGNORES_RC: Self = Self(1 << 4);
    /// A DS segment override is displayed even though it is the default.
    pub const DS_DISPLAY: Self = Self(1 << 5);
    /// Conditional near jump (`jcc`).
    pub const JCC: Self = Self(1 << 6);
    /// Branch that only has a short form (`jcxz`, `loop`).
    pub const SHORT_ONLY: Self = Self(1 << 7);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for CodeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Static description of one opcode form.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CodeInfo {
    name: &'static str,
    mnemonic: &'static str,
    templates: &'static [OpTemplate],
    memory_size: MemorySize,
    broadcast_size: MemorySize,
    flags: CodeFlags,
}

impl CodeInfo {
    pub(crate) const fn new(
        name: &'static str,
        mnemonic: &'static str,
        templates: &'static [OpTemplate],
        memory_size: MemorySize,
        broadcast_size: MemorySize,
        flags: u8,
    ) -> Self {
        Self {
            name,
            mnemonic,
            templates,
            memory_size,
            broadcast_size,
            flags: CodeFlags(flags),
        }
    }
}

impl Code {
    /// Number of opcode forms.
    pub const COUNT: usize = CODE_COUNT;

    /// All codes in enum order.
    #[must_use]
    pub fn values() -> impl Iterator<Item = Self> {
        ALL_CODES.iter().copied()
    }

    const fn info(self) -> &'static CodeInfo {
        &CODE_INFOS[self as usize]
    }

    /// Variant name, e.g. `Add_rm32_r32`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Base Intel mnemonic, e.g. `add`. Condition-code forms use their first
    /// spelling and pseudo-op forms the immediate-selected family name.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }

    /// Operand templates in encoding order.
    #[must_use]
    pub const fn op_templates(self) -> &'static [OpTemplate] {
        self.info().templates
    }

    #[must_use]
    pub const fn op_count(self) -> usize {
        self.info().templates.len()
    }

    /// Memory size of the memory operand (if any) without broadcasting.
    #[must_use]
    pub const fn memory_size(self) -> MemorySize {
        self.info().memory_size
    }

    /// Memory size used when the broadcast bit is set, `Unknown` if the form can't broadcast.
    #[must_use]
    pub const fn broadcast_memory_size(self) -> MemorySize {
        self.info().broadcast_size
    }

    #[must_use]
    pub const fn flags(self) -> CodeFlags {
        self.info().flags
    }

    #[must_use]
    pub const fn is_call_near(self) -> bool {
        self.flags().contains(CodeFlags::CALL)
    }

    #[must_use]
    pub const fn is_jcc(self) -> bool {
        self.flags().contains(CodeFlags::JCC)
    }

    #[must_use]
    pub const fn is_short_only_branch(self) -> bool {
        self.flags().contains(CodeFlags::SHORT_ONLY)
    }

    #[must_use]
    pub const fn is_string_instruction(self) -> bool {
        self.flags().contains(CodeFlags::STRING)
    }

    #[must_use]
    pub const fn is_repe_or_repne_instruction(self) -> bool {
        self.flags().contains(CodeFlags::REPE_REPNE)
    }

    #[must_use]
    pub const fn can_have_notrack(self) -> bool {
        self.flags().contains(CodeFlags::NOTRACK)
    }

    #[must_use]
    pub const fn ignores_rounding_control(self) -> bool {
        self.flags().contains(CodeFlags::IGNORES_RC)
    }

    #[must_use]
    pub const fn shows_ds_segment(self) -> bool {
        self.flags().contains(CodeFlags::DS_DISPLAY)
    }

    /// `db`/`dw`/`dd`/`dq`.
    #[must_use]
    pub const fn is_declare_data(self) -> bool {
        matches!(
            self,
            Self::DeclareByte | Self::DeclareWord | Self::DeclareDword | Self::DeclareQword
        )
    }

    /// Element width in bytes of a data declaration, 0 for other codes.
    #[must_use]
    pub const fn declare_data_element_size(self) -> usize {
        match self {
            Self::DeclareByte => 1,
            Self::DeclareWord => 2,
            Self::DeclareDword => 4,
            Self::DeclareQword => 8,
            _ => 0,
        }
    }
}

impl TryFrom<u16> for Code {
    type Error = IsaError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ALL_CODES
            .get(usize::from(value))
            .copied()
            .ok_or(IsaError::InvalidCode(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_order() {
        assert_eq!(Code::INVALID as u16, 0);
        assert_eq!(Code::DeclareByte as u16, 1);
        assert_eq!(Code::DeclareQword as u16, 4);
        for (i, code) in Code::values().enumerate() {
            assert_eq!(code as usize, i);
            assert_eq!(Code::try_from(code as u16), Ok(code));
        }
        assert!(Code::try_from(u16::MAX).is_err());
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Code::Add_rm32_r32.name(), "Add_rm32_r32");
        assert_eq!(Code::Add_rm32_r32.op_count(), 2);
        assert_eq!(Code::Add_rm32_r32.memory_size(), MemorySize::UInt32);
        assert!(Code::Call_rel32_64.is_call_near());
        assert!(Code::Cmpsb_m8_m8.is_repe_or_repne_instruction());
        assert!(Code::Stosb_m8_AL.is_string_instruction());
        assert!(Code::Jmp_rm64.can_have_notrack());
        assert!(Code::Jae_rel32_64.is_jcc());
        assert!(!Code::Jmp_rel32_64.is_jcc());
        assert!(Code::Loop_rel8_64_RCX.is_short_only_branch());
        assert_eq!(
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er.broadcast_memory_size(),
            MemorySize::Broadcast512_Float32
        );
        assert_eq!(Code::DeclareDword.declare_data_element_size(), 4);
        assert_eq!(Code::Add_rm32_r32.mnemonic(), "add");
        assert_eq!(Code::EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae.mnemonic(), "vcmpps");
    }

    #[test]
    fn test_operand_counts_in_range() {
        for code in Code::values() {
            assert!(code.op_count() <= crate::MAX_OP_COUNT, "{code:?}");
        }
    }
}
