//! Intel operand order: the NASM and MASM rule tables and formatters.

mod masm;
mod masm_rules;
mod masm_rules_data;
mod nasm;
mod rules;
mod rules_data;

use std::sync::Arc;

use tracing::debug;
use x86fmt_isa::{Code, Instruction};

use crate::FormatterOptions;
use crate::error::TableError;
use crate::op_info::{OperandInfo, SignExtendInfo};
use crate::pseudo_ops::PseudoOps;
use crate::table::{DataReader, EntryHeader, STRINGS_DATA, Strings, read_cc, read_mnemonics, read_pseudo_ops, read_rules};

pub use masm::MasmFormatter;
pub(crate) use masm::memory_keywords;
pub use masm_rules::MasmRuleTable;
pub use nasm::NasmFormatter;
use rules::IntelRule;
use rules_data::INTEL_RULES_DATA;

/// NASM rules for every [`Code`], decoded from the built-in table. Shared
/// between formatters through an [`Arc`].
#[derive(Debug)]
pub struct IntelRuleTable {
    rules: Vec<IntelRule>,
}

impl IntelRuleTable {
    /// Decodes the built-in table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the embedded data is malformed.
    pub fn init() -> Result<Self, TableError> {
        Self::from_data(&STRINGS_DATA, &INTEL_RULES_DATA)
    }

    /// Same as [`init`](Self::init), wrapped for sharing.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the embedded data is malformed.
    pub fn shared() -> Result<Arc<Self>, TableError> {
        Self::init().map(Arc::new)
    }

    pub(crate) fn from_data(strings: &[u8], data: &[u8]) -> Result<Self, TableError> {
        let strings = Strings::read(strings)?;
        let pseudo_ops = PseudoOps::new();
        let rules = read_rules(data, &strings, |header, reader, strings| {
            read_rule(header, reader, strings, &pseudo_ops)
        })?;
        debug!(
            rules = rules.len(),
            strings = strings.len(),
            bytes = data.len(),
            "built Intel rule table"
        );
        Ok(Self { rules })
    }

    pub(crate) fn rule(&self, code: Code) -> &IntelRule {
        &self.rules[code as usize]
    }

    pub(crate) fn op_info<'a>(&'a self, options: &FormatterOptions, instruction: &Instruction) -> OperandInfo<'a> {
        self.rule(instruction.code()).op_info(options, instruction)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn read_sign_extend(reader: &mut DataReader<'_>) -> Result<SignExtendInfo, TableError> {
    let offset = reader.index();
    let value = reader.read_u8()?;
    SignExtendInfo::from_u8(value).ok_or(TableError::InvalidValue {
        what: "sign extension",
        value: u32::from(value),
        offset,
    })
}

#[allow(clippy::too_many_lines)]
fn read_rule(
    header: &EntryHeader,
    reader: &mut DataReader<'_>,
    strings: &Strings,
    pseudo_ops: &PseudoOps,
) -> Result<IntelRule, TableError> {
    let m = header.mnemonic.clone();
    let rule = match header.kind {
        1 => IntelRule::Normal { mnemonic: m, flags: 0 },
        2 => IntelRule::Normal {
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        3 => IntelRule::AamAad { mnemonic: m },
        4 => IntelRule::AddrSize {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        5 => IntelRule::String { mnemonic: m },
        6 => IntelRule::Bcst {
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        7 => IntelRule::Bnd {
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        8 => IntelRule::DeclareData { mnemonic: m },
        9 => IntelRule::Er {
            mnemonic: m,
            index: reader.read_index("operand index", 5)? as usize,
            flags: 0,
        },
        10 => IntelRule::Er {
            mnemonic: m,
            index: reader.read_index("operand index", 5)? as usize,
            flags: reader.read_compressed_u32()?,
        },
        11 => IntelRule::Far {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        12 => IntelRule::FarMem {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        13 => IntelRule::Invlpga {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        14 => IntelRule::Maskmovq { mnemonic: m },
        15 => IntelRule::Movabs {
            mnemonic: m,
            mem_op: reader.read_index("operand index", 5)?,
        },
        16 => IntelRule::Nop {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            register: reader.read_register()?,
        },
        17 => {
            let code_size = reader.read_code_size()?;
            let mnemonics = [m.clone(), format!("{m}w"), format!("{m}d"), format!("{m}q")];
            IntelRule::OpSize { code_size, mnemonics }
        }
        18 => {
            let m16 = reader.read_string(strings)?;
            let m32 = reader.read_string(strings)?;
            let m64 = reader.read_string(strings)?;
            IntelRule::OpSize2Bnd {
                mnemonics: [m, m16, m32, m64],
            }
        }
        19 => {
            let suffix = reader.read_char()?;
            let bitness = reader.read_bitness()?;
            let full = suffix.map_or_else(|| m.clone(), |c| format!("{m}{c}"));
            IntelRule::OpSize3 {
                bitness,
                mnemonic: m,
                full,
            }
        }
        20 => IntelRule::Os {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            flags: 0,
        },
        21 => IntelRule::Os {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            flags: reader.read_compressed_u32()?,
        },
        22 => IntelRule::OsCall {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            can_bnd: reader.read_bool()?,
        },
        kind @ 23..=25 => {
            let mnemonics = read_mnemonics(&m, usize::from(kind - 23), reader, strings)?;
            IntelRule::Cc {
                cc: read_cc(reader)?,
                mnemonics,
            }
        }
        kind @ 26..=31 => {
            let short = kind >= 29;
            let extra = usize::from(if short { kind - 29 } else { kind - 26 });
            let mnemonics = read_mnemonics(&m, extra, reader, strings)?;
            let cc = read_cc(reader)?;
            let bitness = reader.read_bitness()?;
            let flags = if short { reader.read_compressed_u32()? } else { 0 };
            IntelRule::OsJcc {
                cc,
                mnemonics,
                bitness,
                flags,
            }
        }
        32 => {
            let mnemonics = read_mnemonics(&m, 1, reader, strings)?;
            IntelRule::OsLoop {
                cc: Some(read_cc(reader)?),
                mnemonics,
                bitness: reader.read_bitness()?,
                register: reader.read_register()?,
            }
        }
        33 => IntelRule::OsLoop {
            cc: None,
            mnemonics: vec![m],
            bitness: reader.read_bitness()?,
            register: reader.read_register()?,
        },
        34 => IntelRule::OsMem {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        35 => IntelRule::OsMemReg16 {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        36 => IntelRule::OsMem2 {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            flags: reader.read_compressed_u32()?,
        },
        37 => IntelRule::Pblendvb { mnemonic: m },
        38 => IntelRule::Pclmulqdq {
            mnemonic: m,
            pseudo_ops: read_pseudo_ops(reader, pseudo_ops)?,
        },
        39 => IntelRule::Pops {
            mnemonic: m,
            pseudo_ops: read_pseudo_ops(reader, pseudo_ops)?,
        },
        40 => IntelRule::Reg16 { mnemonic: m },
        41 => IntelRule::Reg32 { mnemonic: m },
        42 => IntelRule::Reverse { mnemonic: m },
        43 => IntelRule::Sae {
            mnemonic: m,
            index: reader.read_index("operand index", 5)? as usize,
        },
        44 => IntelRule::PushImm8 {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            sign_extend: read_sign_extend(reader)?,
        },
        45 => IntelRule::PushImm {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            sign_extend: read_sign_extend(reader)?,
        },
        46 => {
            let sign_extend = read_sign_extend(reader)?;
            IntelRule::SignExt {
                mnemonic: m,
                reg: sign_extend,
                mem: sign_extend,
                flags: reader.read_compressed_u32()?,
            }
        }
        47 => IntelRule::SignExt {
            mnemonic: m,
            reg: read_sign_extend(reader)?,
            mem: read_sign_extend(reader)?,
            flags: reader.read_compressed_u32()?,
        },
        48 => IntelRule::Imul {
            mnemonic: m,
            sign_extend: read_sign_extend(reader)?,
        },
        49 => IntelRule::Stig1 {
            mnemonic: m,
            pseudo_op: reader.read_bool()?,
        },
        50 => IntelRule::Stig2 {
            mnemonic: m,
            pseudo_op: reader.read_bool()?,
            flags: 0,
        },
        51 => IntelRule::Stig2 {
            mnemonic: m,
            pseudo_op: false,
            flags: reader.read_compressed_u32()?,
        },
        52 => IntelRule::Xlat { mnemonic: m },
        kind => {
            return Err(TableError::UnknownKind {
                kind,
                offset: header.offset,
            });
        }
    };
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{CodeSize, Operand, Register};

    use super::*;
    use crate::test_util::all_samples;

    #[test]
    fn test_builtin_table_decodes() {
        let table = IntelRuleTable::init().unwrap();
        assert_eq!(table.len(), Code::COUNT);
        assert!(matches!(table.rule(Code::INVALID), IntelRule::Normal { .. }));
        assert!(matches!(table.rule(Code::DeclareByte), IntelRule::DeclareData { .. }));
        assert!(matches!(table.rule(Code::Imul_r32_rm32_imm8), IntelRule::Imul { .. }));
    }

    #[test]
    fn test_vex_mnemonic_gets_v_prefix() {
        let table = IntelRuleTable::init().unwrap();
        let options = FormatterOptions::default();
        let instr = Instruction::with_operands(
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
            &[
                Operand::Register(Register::ZMM0),
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
            ],
        )
        .unwrap();
        assert_eq!(table.op_info(&options, &instr).mnemonic(), "vaddps");
    }

    #[test]
    fn test_jcc_uses_cc_selector() {
        let table = IntelRuleTable::init().unwrap();
        let mut options = FormatterOptions::default();
        let mut instr = Instruction::with_operands(Code::Jae_rel32_64, &[Operand::Branch(0x1000)]).unwrap();
        instr.set_code_size(CodeSize::Code64);
        assert_eq!(table.op_info(&options, &instr).mnemonic(), "jae");
        options.set_cc(crate::CcGroup::Ae, 1).unwrap();
        assert_eq!(table.op_info(&options, &instr).mnemonic(), "jnb");
    }

    #[test]
    fn test_operand_count_invariant() {
        let table = IntelRuleTable::init().unwrap();
        let mut options = FormatterOptions::default();
        for use_pseudo_ops in [true, false] {
            options.use_pseudo_ops = use_pseudo_ops;
            for instr in all_samples() {
                let info = table.op_info(&options, &instr);
                let limit = if instr.code().is_declare_data() { 16 } else { 5 };
                assert!(info.op_count() <= limit, "{:?}", instr.code());
            }
        }
    }

    #[test]
    fn test_malformed_tables_are_rejected() {
        assert!(IntelRuleTable::from_data(&STRINGS_DATA, &INTEL_RULES_DATA[..INTEL_RULES_DATA.len() - 1]).is_err());
        let mut bad = INTEL_RULES_DATA.to_vec();
        bad[0] = 0x7F;
        assert!(matches!(
            IntelRuleTable::from_data(&STRINGS_DATA, &bad),
            Err(TableError::UnknownKind { kind: 0x7F, offset: 0 })
        ));
        let mut trailing = INTEL_RULES_DATA.to_vec();
        trailing.push(1);
        assert_eq!(
            IntelRuleTable::from_data(&STRINGS_DATA, &trailing).unwrap_err(),
            TableError::TrailingBytes { remaining: 1 }
        );
    }
}
