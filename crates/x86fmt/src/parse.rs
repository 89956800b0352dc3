//! Textual instruction parser.
//!
//! One instruction per line:
//!
//! ```text
//! Code_name op, op ; bitness=64 ip=0x1000 rep lock seg=fs k1 z er=rn sae bcst
//! ```
//!
//! Operands follow the opcode form's templates in encoding order. Registers
//! use their canonical names, memory is written `seg:[base+index*scale+displ]`,
//! near branches and immediates are numbers (`0x` hex, `0o`, `0b` or decimal,
//! optionally negative) and far branches are `selector:offset`. Data
//! declarations (`DeclareByte 1, 2, 3`) take their element values. Empty
//! lines and lines starting with `#` yield no instruction.

use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::trace;
use x86fmt_isa::{Code, CodeSize, Instruction, IsaError, MemoryOperand, OpTemplate, Operand, Register, RoundingControl};

/// Error parsing one instruction line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed instruction line: {0:?}")]
    Syntax(String),

    #[error("unknown opcode form {0:?}")]
    UnknownCode(String),

    #[error("unknown register {0:?}")]
    UnknownRegister(String),

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("{code:?} expects {expected} operand(s), got {actual}")]
    OperandCount { code: Code, expected: usize, actual: usize },

    #[error("invalid memory operand {0:?}")]
    InvalidMemory(String),

    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),

    #[error(transparent)]
    Isa(#[from] IsaError),
}

type ParseResult<T> = std::result::Result<T, ParseError>;

static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();
static TERM_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Parses instruction lines. Build once and share; parsing takes `&self`.
#[derive(Debug)]
pub struct InstructionParser {
    codes: FxHashMap<String, Code>,
    registers: FxHashMap<&'static str, Register>,
}

impl InstructionParser {
    #[must_use]
    pub fn new() -> Self {
        let codes = Code::values()
            .filter(|&code| code != Code::INVALID)
            .map(|code| (code.name().to_ascii_lowercase(), code))
            .collect();
        let registers = Register::values()
            .filter(|&register| register != Register::None)
            .map(|register| (register.name(), register))
            .collect();
        Self { codes, registers }
    }

    /// Number of opcode forms the parser knows.
    #[must_use]
    pub fn code_count(&self) -> usize {
        self.codes.len()
    }

    /// Looks up a code by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownCode`] if no code has that name.
    pub fn code(&self, name: &str) -> ParseResult<Code> {
        self.codes
            .get(&name.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| ParseError::UnknownCode(name.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`ParseError::UnknownRegister`] if `name` isn't a register.
    pub fn register(&self, name: &str) -> ParseResult<Register> {
        let name = name.trim().to_ascii_lowercase();
        self.registers
            .get(name.as_str())
            .copied()
            .ok_or(ParseError::UnknownRegister(name))
    }

    /// Parses one line. `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse_line(&self, line: &str) -> ParseResult<Option<Instruction>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let line_pattern = LINE_PATTERN.get_or_init(|| {
            Regex::new(r"^\s*(?P<code>[A-Za-z_][A-Za-z0-9_]*)(?P<operands>[^;]*)(?:;(?P<attrs>.*))?$").unwrap()
        });
        let captures = line_pattern
            .captures(trimmed)
            .ok_or_else(|| ParseError::Syntax(trimmed.to_string()))?;
        let code = self.code(&captures["code"])?;
        let operands: Vec<&str> = captures["operands"]
            .split(',')
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect();
        let attrs = captures.name("attrs").map_or("", |m| m.as_str());
        let attributes = Attributes::parse(self, attrs)?;

        let mut instruction = if code.is_declare_data() {
            declare_data(code, &operands)?
        } else {
            self.with_operands(code, &operands, attributes.code_size)?
        };
        attributes.apply(&mut instruction)?;
        trace!(code = code.name(), operands = operands.len(), "parsed instruction");
        Ok(Some(instruction))
    }

    fn with_operands(&self, code: Code, texts: &[&str], code_size: CodeSize) -> ParseResult<Instruction> {
        let templates = code.op_templates();
        if templates.len() != texts.len() {
            return Err(ParseError::OperandCount {
                code,
                expected: templates.len(),
                actual: texts.len(),
            });
        }
        let operands = templates
            .iter()
            .zip(texts)
            .map(|(&template, text)| self.operand(template, text, code_size))
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(Instruction::with_operands(code, &operands)?)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn operand(&self, template: OpTemplate, text: &str, code_size: CodeSize) -> ParseResult<Operand> {
        Ok(match template {
            OpTemplate::Register => Operand::Register(self.register(text)?),
            OpTemplate::RegisterOrMemory => {
                if text.contains('[') {
                    Operand::Memory(self.memory(text, code_size)?)
                } else {
                    Operand::Register(self.register(text)?)
                }
            }
            OpTemplate::Memory | OpTemplate::StringSource | OpTemplate::StringDest | OpTemplate::StringSegDest => {
                Operand::Memory(self.memory(text, code_size)?)
            }
            OpTemplate::NearBranch16 | OpTemplate::NearBranch32 | OpTemplate::NearBranch64 => {
                Operand::Branch(parse_number(text)? as u64)
            }
            OpTemplate::FarBranch16 | OpTemplate::FarBranch32 => {
                let (selector, offset) = text
                    .split_once(':')
                    .ok_or_else(|| ParseError::InvalidNumber(text.to_string()))?;
                let selector = u16::try_from(parse_number(selector)?)
                    .map_err(|_| ParseError::InvalidNumber(selector.to_string()))?;
                let offset = u32::try_from(parse_number(offset)?)
                    .map_err(|_| ParseError::InvalidNumber(offset.to_string()))?;
                Operand::FarBranch { selector, offset }
            }
            _ => Operand::Immediate(parse_number(text)? as i64),
        })
    }

    /// `seg:[base+index*scale+displ]`
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn memory(&self, text: &str, code_size: CodeSize) -> ParseResult<MemoryOperand> {
        let invalid = || ParseError::InvalidMemory(text.to_string());
        let open = text.find('[').ok_or_else(invalid)?;
        let close = text.rfind(']').filter(|&close| close > open).ok_or_else(invalid)?;
        if !text[close + 1..].trim().is_empty() {
            return Err(invalid());
        }
        let segment = match text[..open].trim().strip_suffix(':') {
            Some(name) => {
                let segment = self.register(name)?;
                if !segment.is_segment() {
                    return Err(ParseError::Isa(IsaError::NotSegmentRegister(segment)));
                }
                segment
            }
            None if text[..open].trim().is_empty() => Register::None,
            None => return Err(invalid()),
        };

        let inner = &text[open + 1..close];
        let mut base = Register::None;
        let mut index = Register::None;
        let mut scale = 1;
        let mut displacement: i128 = 0;
        let mut has_displacement = false;
        let mut consumed = 0;
        let term_pattern = TERM_PATTERN
            .get_or_init(|| Regex::new(r"\s*(?P<sign>[+-]?)\s*(?P<term>[^+\-\s][^+\-]*)").unwrap());
        for captures in term_pattern.captures_iter(inner) {
            let whole = captures.get(0).ok_or_else(invalid)?;
            if whole.start() != consumed {
                return Err(invalid());
            }
            consumed = whole.end();
            let negative = &captures["sign"] == "-";
            let term = captures["term"].trim();
            if let Some((register, factor)) = term.split_once('*') {
                let (register, factor) = match self.register(register) {
                    Ok(register) => (register, factor),
                    Err(_) => (self.register(factor)?, register),
                };
                if negative || index != Register::None {
                    return Err(invalid());
                }
                index = register;
                scale = u32::try_from(parse_number(factor)?).map_err(|_| invalid())?;
            } else if let Ok(register) = self.register(term) {
                if negative {
                    return Err(invalid());
                }
                if base == Register::None {
                    base = register;
                } else if index == Register::None {
                    index = register;
                } else {
                    return Err(invalid());
                }
            } else {
                let value = parse_number(term)?;
                displacement += if negative { -value } else { value };
                has_displacement = true;
            }
        }
        if consumed != inner.len() && !inner[consumed..].trim().is_empty() {
            return Err(invalid());
        }

        let displacement = i64::try_from(displacement)
            .or_else(|_| u64::try_from(displacement).map(|value| value as i64))
            .map_err(|_| invalid())?;
        let memory = if base == Register::None && index == Register::None {
            let size = match code_size {
                CodeSize::Code16 => 2,
                CodeSize::Code32 => 4,
                _ if u32::try_from(displacement).is_ok() => 4,
                _ => 8,
            };
            MemoryOperand::absolute(displacement as u64, size)
        } else {
            let memory = MemoryOperand::base(base).with_index(index, scale);
            if has_displacement {
                memory.with_displacement(displacement)
            } else {
                memory
            }
        };
        Ok(memory.with_segment(segment))
    }
}

impl Default for InstructionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `0x`/`0o`/`0b` prefixed or decimal numbers, with an optional `-`.
///
/// # Errors
///
/// [`ParseError::InvalidNumber`] when the text is not a number that fits 64 bits.
pub fn parse_number(text: &str) -> ParseResult<i128> {
    let invalid = || ParseError::InvalidNumber(text.to_string());
    let trimmed = text.trim().replace('_', "");
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.as_str()),
    };
    let lower = digits.to_ascii_lowercase();
    let (radix, digits) = if let Some(hex) = lower.strip_prefix("0x") {
        (16, hex)
    } else if let Some(octal) = lower.strip_prefix("0o") {
        (8, octal)
    } else if let Some(binary) = lower.strip_prefix("0b") {
        (2, binary)
    } else {
        (10, lower.as_str())
    };
    let value = u64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    Ok(if negative { -i128::from(value) } else { i128::from(value) })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn declare_data(code: Code, values: &[&str]) -> ParseResult<Instruction> {
    let size = code.declare_data_element_size();
    let mut bytes = Vec::with_capacity(values.len() * size);
    for text in values {
        let value = parse_number(text)?;
        let bits = u32::try_from(size * 8).unwrap_or(64);
        let min = -(1i128 << (bits - 1));
        let max = (1i128 << bits) - 1;
        if value < min || value > max {
            return Err(ParseError::InvalidNumber((*text).to_string()));
        }
        bytes.extend_from_slice(&(value as u64).to_le_bytes()[..size]);
    }
    Ok(Instruction::with_declare_data(code, &bytes)?)
}

// ============================================================================
// Attributes
// ============================================================================

/// Everything after the `;`.
#[derive(Debug, Default)]
struct Attributes {
    code_size: CodeSize,
    ip: Option<u64>,
    len: Option<u8>,
    segment: Option<Register>,
    op_mask: Option<Register>,
    rounding: Option<RoundingControl>,
    rep: bool,
    repne: bool,
    lock: bool,
    xacquire: bool,
    xrelease: bool,
    zeroing: bool,
    sae: bool,
    broadcast: bool,
}

impl Attributes {
    fn parse(parser: &InstructionParser, text: &str) -> ParseResult<Self> {
        let mut attrs = Self {
            code_size: CodeSize::Code64,
            ..Self::default()
        };
        for word in text.split_whitespace() {
            let unknown = || ParseError::UnknownAttribute(word.to_string());
            match word.split_once('=') {
                Some(("bitness", value)) => {
                    let bitness = u32::try_from(parse_number(value)?).map_err(|_| unknown())?;
                    attrs.code_size = CodeSize::from_bitness(bitness)?;
                }
                Some(("ip", value)) => {
                    attrs.ip = Some(u64::try_from(parse_number(value)?).map_err(|_| unknown())?);
                }
                Some(("len", value)) => {
                    attrs.len = Some(u8::try_from(parse_number(value)?).map_err(|_| unknown())?);
                }
                Some(("seg", value)) => attrs.segment = Some(parser.register(value)?),
                Some(("er", value)) => {
                    attrs.rounding = Some(match value {
                        "rn" => RoundingControl::RoundToNearest,
                        "rd" => RoundingControl::RoundDown,
                        "ru" => RoundingControl::RoundUp,
                        "rz" => RoundingControl::RoundTowardZero,
                        _ => return Err(unknown()),
                    });
                }
                Some(_) => return Err(unknown()),
                None => match word {
                    "rep" | "repe" | "repz" => attrs.rep = true,
                    "repne" | "repnz" => attrs.repne = true,
                    "lock" => attrs.lock = true,
                    "xacquire" => attrs.xacquire = true,
                    "xrelease" => attrs.xrelease = true,
                    "z" => attrs.zeroing = true,
                    "sae" => attrs.sae = true,
                    "bcst" => attrs.broadcast = true,
                    _ => match parser.register(word) {
                        Ok(mask) if mask.is_k() => attrs.op_mask = Some(mask),
                        _ => return Err(unknown()),
                    },
                },
            }
        }
        Ok(attrs)
    }

    fn apply(&self, instruction: &mut Instruction) -> ParseResult<()> {
        instruction.set_code_size(self.code_size);
        if let Some(ip) = self.ip {
            instruction.set_ip(ip);
        }
        if let Some(len) = self.len {
            instruction.set_len(len);
        }
        if let Some(segment) = self.segment {
            instruction.set_segment_prefix(segment)?;
        }
        if let Some(mask) = self.op_mask {
            instruction.set_op_mask(mask)?;
        }
        if let Some(rounding) = self.rounding {
            instruction.set_rounding_control(rounding);
        }
        instruction.set_rep_prefix(self.rep);
        instruction.set_repne_prefix(self.repne);
        instruction.set_lock_prefix(self.lock);
        instruction.set_xacquire_prefix(self.xacquire);
        instruction.set_xrelease_prefix(self.xrelease);
        instruction.set_zeroing_masking(self.zeroing);
        instruction.set_suppress_all_exceptions(self.sae);
        if self.broadcast {
            instruction.set_broadcast(true)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_forms() {
        assert_eq!(parse_number("10").unwrap(), 10);
        assert_eq!(parse_number("0x1F").unwrap(), 0x1F);
        assert_eq!(parse_number("-0x10").unwrap(), -16);
        assert_eq!(parse_number("0b101").unwrap(), 5);
        assert_eq!(parse_number("0o17").unwrap(), 15);
        assert_eq!(parse_number("0xffff_ffff_ffff_ffff").unwrap(), i128::from(u64::MAX));
        assert!(matches!(parse_number("12z"), Err(ParseError::InvalidNumber(_))));
    }

    #[test]
    fn test_parse_memory_operand() {
        let parser = InstructionParser::new();
        let instr = parser
            .parse_line("Mov_r32_rm32 eax, fs:[rbx+rcx*4-0x10]")
            .unwrap()
            .unwrap();
        assert_eq!(instr.code(), Code::Mov_r32_rm32);
        assert_eq!(instr.code_size(), CodeSize::Code64);
        assert_eq!(instr.op_register(0), Register::EAX);
        assert_eq!(instr.memory_base(), Register::RBX);
        assert_eq!(instr.memory_index(), Register::RCX);
        assert_eq!(instr.memory_index_scale(), 4);
        assert_eq!(instr.memory_displacement64() as i64, -16);
        assert_eq!(instr.segment_prefix(), Register::FS);
    }

    #[test]
    fn test_parse_attributes() {
        let parser = InstructionParser::new();
        let instr = parser
            .parse_line("EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32 zmm1, zmm2, [rax] ; k1 z bcst ip=0x1000")
            .unwrap()
            .unwrap();
        assert_eq!(instr.op_mask(), Register::K1);
        assert!(instr.zeroing_masking());
        assert!(instr.is_broadcast());
        assert_eq!(instr.ip(), 0x1000);

        let jcc = parser.parse_line("jae_rel32_32 0x401000 ; bitness=32").unwrap().unwrap();
        assert_eq!(jcc.code(), Code::Jae_rel32_32);
        assert_eq!(jcc.code_size(), CodeSize::Code32);
        assert_eq!(jcc.near_branch32(), 0x40_1000);
    }

    #[test]
    fn test_declare_data_and_comments() {
        let parser = InstructionParser::new();
        assert!(parser.parse_line("   ").unwrap().is_none());
        assert!(parser.parse_line("# comment").unwrap().is_none());
        let data = parser.parse_line("DeclareWord 1, -1, 0x1234").unwrap().unwrap();
        assert_eq!(data.declare_data_len(), 3);
        assert_eq!(data.declare_word_value(1), 0xFFFF);
        assert_eq!(data.declare_word_value(2), 0x1234);
        assert!(matches!(
            parser.parse_line("DeclareByte 256"),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        let parser = InstructionParser::new();
        assert_eq!(
            parser.parse_line("Bogus_form eax").unwrap_err(),
            ParseError::UnknownCode("Bogus_form".to_string())
        );
        assert!(matches!(
            parser.parse_line("Mov_r32_rm32 eax"),
            Err(ParseError::OperandCount { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            parser.parse_line("Mov_r32_rm32 eax, ebq"),
            Err(ParseError::UnknownRegister(_))
        ));
        assert!(matches!(
            parser.parse_line("Cpuid ; turbo"),
            Err(ParseError::UnknownAttribute(_))
        ));
    }
}
