//! AT&T operand order: the rule table and the GAS formatter.

mod formatter;
mod rules;
mod rules_data;

use std::sync::Arc;

use tracing::debug;
use x86fmt_isa::{Code, Instruction};

use crate::FormatterOptions;
use crate::error::TableError;
use crate::op_info::OperandInfo;
use crate::pseudo_ops::PseudoOps;
use crate::table::{DataReader, EntryHeader, STRINGS_DATA, Strings, read_cc, read_mnemonics, read_pseudo_ops, read_rules};

pub use formatter::GasFormatter;
use rules::GasRule;
use rules_data::GAS_RULES_DATA;

/// AT&T operand order rules for every [`Code`].
#[derive(Debug)]
pub struct GasRuleTable {
    rules: Vec<GasRule>,
}

impl GasRuleTable {
    /// Decodes the built-in table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the embedded data is malformed.
    pub fn init() -> Result<Self, TableError> {
        Self::from_data(&STRINGS_DATA, &GAS_RULES_DATA)
    }

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
            "built GAS rule table"
        );
        Ok(Self { rules })
    }

    pub(crate) fn op_info<'a>(&'a self, options: &FormatterOptions, instruction: &Instruction) -> OperandInfo<'a> {
        self.rules[instruction.code() as usize].op_info(options, instruction)
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

/// `mnemonic` followed by the optional suffix character.
fn with_suffix(mnemonic: &str, suffix: Option<char>) -> String {
    suffix.map_or_else(|| mnemonic.to_string(), |c| format!("{mnemonic}{c}"))
}

#[allow(clippy::too_many_lines)]
fn read_rule(
    header: &EntryHeader,
    reader: &mut DataReader<'_>,
    strings: &Strings,
    pseudo_ops: &PseudoOps,
) -> Result<GasRule, TableError> {
    let m = header.mnemonic.clone();
    let rule = match header.kind {
        1 => GasRule::Normal {
            suffixed: m.clone(),
            mnemonic: m,
            flags: 0,
        },
        2 => GasRule::Normal {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
            flags: 0,
        },
        3 => GasRule::Normal {
            suffixed: m.clone(),
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        4 => {
            let full = with_suffix(&m, reader.read_char()?);
            GasRule::Normal {
                mnemonic: full.clone(),
                suffixed: full,
                flags: 0,
            }
        }
        5 => GasRule::Normal {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        6 => GasRule::AamAad { mnemonic: m },
        7 => GasRule::AddrSize {
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        8 => GasRule::Bnd {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
            flags: reader.read_compressed_u32()?,
        },
        9 => GasRule::DeclareData { mnemonic: m },
        10 => GasRule::Er {
            suffixed: m.clone(),
            mnemonic: m,
            index: reader.read_index("operand index", 5)? as usize,
            flags: 0,
        },
        11 => GasRule::Er {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
            index: reader.read_index("operand index", 5)? as usize,
            flags: reader.read_compressed_u32()?,
        },
        12 => GasRule::Far {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        13 => GasRule::Imul {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
        },
        14 => GasRule::Maskmovq { mnemonic: m },
        15 => {
            let suffixed = with_suffix(&m, reader.read_char()?);
            let mem_op = reader.read_index("operand index", 5)?;
            let mnemonic64 = reader.read_string(strings)?;
            let suffixed64 = with_suffix(&mnemonic64, reader.read_char()?);
            GasRule::Movabs {
                mnemonic: m,
                suffixed,
                mnemonic64,
                suffixed64,
                mem_op,
            }
        }
        16 => GasRule::Nop {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            register: reader.read_register()?,
        },
        17 => {
            let code_size = reader.read_code_size()?;
            let mnemonics = [m.clone(), format!("{m}w"), format!("{m}l"), format!("{m}q")];
            GasRule::OpSize { code_size, mnemonics }
        }
        18 => {
            let m16 = reader.read_string(strings)?;
            let m32 = reader.read_string(strings)?;
            let m64 = reader.read_string(strings)?;
            GasRule::OpSize2Bnd {
                mnemonics: [m, m16, m32, m64],
            }
        }
        19 => GasRule::OpSize3 {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        20 => GasRule::Os {
            mnemonic: m,
            bitness: reader.read_bitness()?,
            can_bnd: reader.read_bool()?,
            flags: reader.read_compressed_u32()?,
        },
        kind @ 21..=23 => {
            let mnemonics = read_mnemonics(&m, usize::from(kind - 21), reader, strings)?;
            let suffix = reader.read_char()?;
            let suffixed = mnemonics.iter().map(|m| with_suffix(m, suffix)).collect();
            GasRule::Cc {
                cc: read_cc(reader)?,
                mnemonics,
                suffixed,
            }
        }
        kind @ 24..=26 => {
            let mnemonics = read_mnemonics(&m, usize::from(kind - 24), reader, strings)?;
            GasRule::OsJcc {
                cc: read_cc(reader)?,
                mnemonics,
                bitness: reader.read_bitness()?,
            }
        }
        27 => {
            let mnemonics = read_mnemonics(&m, 1, reader, strings)?;
            let suffix = reader.read_char()?;
            let suffixed = mnemonics.iter().map(|m| with_suffix(m, suffix)).collect();
            GasRule::OsLoop {
                cc: Some(read_cc(reader)?),
                mnemonics,
                suffixed,
                bitness: reader.read_bitness()?,
                reg_size: reader.read_bitness()?,
            }
        }
        28 => {
            let suffixed = vec![with_suffix(&m, reader.read_char()?)];
            GasRule::OsLoop {
                cc: None,
                mnemonics: vec![m],
                suffixed,
                bitness: reader.read_bitness()?,
                reg_size: reader.read_bitness()?,
            }
        }
        29 => GasRule::OsMem {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        30 => GasRule::OsMem2 {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
            bitness: reader.read_bitness()?,
        },
        kind @ 31..=32 => {
            let suffixed = with_suffix(&m, reader.read_char()?);
            let bitness = reader.read_bitness()?;
            let can_bnd = reader.read_bool()?;
            let flags = if kind == 32 { reader.read_compressed_u32()? } else { 0 };
            GasRule::Os2 {
                mnemonic: m,
                suffixed,
                bitness,
                can_bnd,
                flags,
            }
        }
        33 => GasRule::Pblendvb { mnemonic: m },
        34 => GasRule::Pclmulqdq {
            mnemonic: m,
            pseudo_ops: read_pseudo_ops(reader, pseudo_ops)?,
        },
        35 => GasRule::Pops {
            mnemonic: m,
            pseudo_ops: read_pseudo_ops(reader, pseudo_ops)?,
            can_sae: reader.read_bool()?,
        },
        36 => GasRule::Mem16 {
            reg_suffixed: with_suffix(&m, reader.read_char()?),
            mem_suffixed: format!("{m}w"),
            mnemonic: m,
        },
        37 => GasRule::Reg16 {
            suffixed: with_suffix(&m, reader.read_char()?),
            mnemonic: m,
        },
        38 => GasRule::Reg32 { mnemonic: m },
        39 => GasRule::Sae {
            mnemonic: m,
            index: reader.read_index("operand index", 5)? as usize,
        },
        40 => GasRule::StSti { mnemonic: m },
        41 => GasRule::StiSt {
            mnemonic: m,
            pseudo_op: reader.read_bool()?,
        },
        42 => GasRule::Stig1 {
            mnemonic: m,
            pseudo_op: false,
        },
        43 => GasRule::Stig1 {
            mnemonic: m,
            pseudo_op: reader.read_bool()?,
        },
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
    use x86fmt_isa::{CodeSize, MemoryOperand, Operand, Register};

    use super::*;
    use crate::test_util::all_samples;

    fn gas_info(table: &GasRuleTable, options: &FormatterOptions, instr: &Instruction) -> (String, u32) {
        let info = table.op_info(options, instr);
        (info.mnemonic().to_string(), info.op_count())
    }

    #[test]
    fn test_builtin_table_decodes() {
        let table = GasRuleTable::init().unwrap();
        assert_eq!(table.len(), Code::COUNT);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_retq_spelling() {
        let table = GasRuleTable::init().unwrap();
        let options = FormatterOptions::with_gas();
        let mut ret = Instruction::with_operands(Code::Retnq, &[]).unwrap();
        ret.set_code_size(CodeSize::Code64);
        assert_eq!(gas_info(&table, &options, &ret), ("retq".to_string(), 0));
    }

    #[test]
    fn test_movabs_uses_64bit_spelling() {
        let table = GasRuleTable::init().unwrap();
        let options = FormatterOptions::with_gas();
        let mut instr = Instruction::with_operands(
            Code::Mov_RAX_moffs64,
            &[
                Operand::Register(Register::RAX),
                Operand::Memory(MemoryOperand::absolute(0x1234_5678_9abc, 8)),
            ],
        )
        .unwrap();
        instr.set_code_size(CodeSize::Code64);
        let info = table.op_info(&options, &instr);
        assert_eq!(info.mnemonic(), "movabs");
        assert_eq!(info.flags(), 0);
        assert_eq!(info.op_kind(0), crate::op_info::InstrOpKind::Memory);
    }

    #[test]
    fn test_operand_count_invariant() {
        let table = GasRuleTable::init().unwrap();
        let mut options = FormatterOptions::with_gas();
        for suffix in [false, true] {
            options.gas_show_mnemonic_size_suffix = suffix;
            for instr in all_samples() {
                let info = table.op_info(&options, &instr);
                let limit = if instr.code().is_declare_data() { 16 } else { 5 };
                assert!(info.op_count() <= limit, "{:?}", instr.code());
                assert!(!info.mnemonic().is_empty() || instr.code() == Code::INVALID, "{:?}", instr.code());
            }
        }
    }

    #[test]
    fn test_malformed_tables_are_rejected() {
        assert!(GasRuleTable::from_data(&STRINGS_DATA, &GAS_RULES_DATA[..GAS_RULES_DATA.len() - 1]).is_err());
        let mut bad = GAS_RULES_DATA.to_vec();
        bad[0] = 0x2C;
        assert!(matches!(
            GasRuleTable::from_data(&STRINGS_DATA, &bad),
            Err(TableError::UnknownKind { kind: 0x2C, offset: 0 })
        ));
    }
}
