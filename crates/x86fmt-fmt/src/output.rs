//! Output sink receiving categorised text fragments.

use x86fmt_isa::{Instruction, Register};

use crate::SymbolResult;

/// Category of a written fragment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FormatterTextKind {
    Text,
    /// Assembler directive (`db`, `.byte`).
    Directive,
    Prefix,
    Mnemonic,
    /// `ptr`, `short`, `rel` and other non-mnemonic words.
    Keyword,
    /// `+`, `-`, `*`, `$`, `%`.
    Operator,
    /// `[`, `]`, `(`, `)`, `,`, `:`, `{`, `}`.
    Punctuation,
    Number,
    Register,
    Decorator,
    /// Far branch selector.
    SelectorValue,
    /// Near branch target that isn't a call.
    LabelAddress,
    /// Near call target.
    FunctionAddress,
    Data,
    Label,
    Function,
}

/// Which prefix a [`FormatterOutput::write_prefix`] call writes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PrefixKind {
    ES,
    CS,
    SS,
    DS,
    FS,
    GS,
    Lock,
    Rep,
    Repe,
    Repne,
    OperandSize,
    AddressSize,
    HintNotTaken,
    HintTaken,
    Bnd,
    Notrack,
    Xacquire,
    Xrelease,
}

impl PrefixKind {
    /// Prefix kind of a segment register, `None` for other registers.
    #[must_use]
    pub const fn from_segment(register: Register) -> Option<Self> {
        match register {
            Register::ES => Some(Self::ES),
            Register::CS => Some(Self::CS),
            Register::SS => Some(Self::SS),
            Register::DS => Some(Self::DS),
            Register::FS => Some(Self::FS),
            Register::GS => Some(Self::GS),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DecoratorKind {
    /// `{1to16}`
    Broadcast,
    /// `{rn-sae}` and friends
    RoundingControl,
    /// `{sae}`
    SuppressAllExceptions,
    /// `{z}`
    ZeroingMasking,
}

/// Type of the value a number fragment represents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NumberKind {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
}

/// Receives formatted text.
///
/// Only [`write`](Self::write) is required; the typed hooks default to it so a
/// sink can ignore categories or use the extra context for styling.
pub trait FormatterOutput {
    fn write(&mut self, text: &str, kind: FormatterTextKind);

    fn write_prefix(&mut self, instruction: &Instruction, text: &str, prefix: PrefixKind) {
        let _ = (instruction, prefix);
        self.write(text, FormatterTextKind::Prefix);
    }

    fn write_mnemonic(&mut self, instruction: &Instruction, text: &str) {
        let _ = instruction;
        self.write(text, FormatterTextKind::Mnemonic);
    }

    /// A number. `operand` is the formatter operand, `instruction_operand` the
    /// instruction operand it came from (if any).
    #[allow(clippy::too_many_arguments)]
    fn write_number(
        &mut self,
        instruction: &Instruction,
        operand: u32,
        instruction_operand: Option<u32>,
        text: &str,
        value: u64,
        number_kind: NumberKind,
        kind: FormatterTextKind,
    ) {
        let _ = (instruction, operand, instruction_operand, value, number_kind);
        self.write(text, kind);
    }

    fn write_decorator(
        &mut self,
        instruction: &Instruction,
        operand: u32,
        instruction_operand: Option<u32>,
        text: &str,
        decorator: DecoratorKind,
    ) {
        let _ = (instruction, operand, instruction_operand, decorator);
        self.write(text, FormatterTextKind::Decorator);
    }

    fn write_register(
        &mut self,
        instruction: &Instruction,
        operand: u32,
        instruction_operand: Option<u32>,
        text: &str,
        register: Register,
    ) {
        let _ = (instruction, operand, instruction_operand, register);
        self.write(text, FormatterTextKind::Register);
    }

    fn write_symbol(
        &mut self,
        instruction: &Instruction,
        operand: u32,
        instruction_operand: Option<u32>,
        address: u64,
        symbol: &SymbolResult,
    ) {
        let _ = (instruction, operand, instruction_operand, address);
        for part in &symbol.parts {
            self.write(&part.text, part.kind);
        }
    }
}

impl FormatterOutput for String {
    fn write(&mut self, text: &str, _kind: FormatterTextKind) {
        self.push_str(text);
    }
}

/// Collects fragments with their kinds, e.g. for styled printing.
impl FormatterOutput for Vec<(String, FormatterTextKind)> {
    fn write(&mut self, text: &str, kind: FormatterTextKind) {
        self.push((text.to_string(), kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_concatenates() {
        let instr = Instruction::default();
        let mut out = String::new();
        out.write_mnemonic(&instr, "mov");
        out.write(" ", FormatterTextKind::Text);
        out.write_register(&instr, 0, Some(0), "eax", Register::EAX);
        assert_eq!(out, "mov eax");
    }

    #[test]
    fn test_vec_sink_keeps_kinds() {
        let instr = Instruction::default();
        let mut out: Vec<(String, FormatterTextKind)> = Vec::new();
        out.write_prefix(&instr, "lock", PrefixKind::Lock);
        out.write_number(&instr, 1, Some(1), "10h", 0x10, NumberKind::UInt32, FormatterTextKind::Number);
        assert_eq!(
            out,
            vec![
                ("lock".to_string(), FormatterTextKind::Prefix),
                ("10h".to_string(), FormatterTextKind::Number),
            ]
        );
    }

    #[test]
    fn test_prefix_kind_from_segment() {
        assert_eq!(PrefixKind::from_segment(Register::FS), Some(PrefixKind::FS));
        assert_eq!(PrefixKind::from_segment(Register::EAX), None);
    }
}
