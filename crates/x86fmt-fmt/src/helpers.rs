//! Display policies and small writers shared by the NASM, MASM and GAS
//! formatters.

use std::borrow::Cow;

use x86fmt_isa::{Code, CodeSize, Instruction, MemorySize, Register};

use crate::op_info::{InstrOpKind, OperandInfo, flags};
use crate::{
    DecoratorKind, FormatterError, FormatterOptions, FormatterOutput, FormatterTextKind, MemorySizeOptions,
    NumberFormatter, NumberFormattingOptions, NumberKind, PrefixKind, SymbolFlags, SymbolResult,
};

const REPE: [&str; 2] = ["repe", "repz"];
const REPNE: [&str; 2] = ["repne", "repnz"];
const CC_E: u32 = 4;
const CC_NE: u32 = 5;

const MAX_FIRST_OPERAND_CHAR_INDEX: u32 = 256;

pub(crate) fn cased(text: &str, upper: bool) -> Cow<'_, str> {
    if upper {
        Cow::Owned(text.to_ascii_uppercase())
    } else {
        Cow::Borrowed(text)
    }
}

fn width(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

// ============================================================================
// Operand context
// ============================================================================

/// The formatter operand being written and the instruction operand it shows.
#[derive(Clone, Copy)]
pub(crate) struct OperandRef<'i> {
    pub(crate) instruction: &'i Instruction,
    pub(crate) operand: u32,
    pub(crate) instruction_operand: Option<u32>,
}

impl<'i> OperandRef<'i> {
    pub(crate) fn new(instruction: &'i Instruction, info: &OperandInfo<'_>, operand: u32) -> Self {
        Self {
            instruction,
            operand,
            instruction_operand: info.instruction_index(operand),
        }
    }

    pub(crate) fn register(self, output: &mut dyn FormatterOutput, text: &str, register: Register) {
        output.write_register(self.instruction, self.operand, self.instruction_operand, text, register);
    }

    pub(crate) fn number(
        self,
        output: &mut dyn FormatterOutput,
        text: &str,
        value: u64,
        number_kind: NumberKind,
        kind: FormatterTextKind,
    ) {
        output.write_number(
            self.instruction,
            self.operand,
            self.instruction_operand,
            text,
            value,
            number_kind,
            kind,
        );
    }

    /// `{text}`
    pub(crate) fn decorator(
        self,
        output: &mut dyn FormatterOutput,
        options: &FormatterOptions,
        text: &str,
        decorator: DecoratorKind,
    ) {
        output.write("{", FormatterTextKind::Punctuation);
        let text = cased(text, options.uppercase_decorators || options.uppercase_all);
        output.write_decorator(self.instruction, self.operand, self.instruction_operand, &text, decorator);
        output.write("}", FormatterTextKind::Punctuation);
    }
}

pub(crate) const fn rounding_decorator(kind: InstrOpKind) -> Option<(&'static str, DecoratorKind)> {
    Some(match kind {
        InstrOpKind::Sae => ("sae", DecoratorKind::SuppressAllExceptions),
        InstrOpKind::RnSae => ("rn-sae", DecoratorKind::RoundingControl),
        InstrOpKind::RdSae => ("rd-sae", DecoratorKind::RoundingControl),
        InstrOpKind::RuSae => ("ru-sae", DecoratorKind::RoundingControl),
        InstrOpKind::RzSae => ("rz-sae", DecoratorKind::RoundingControl),
        _ => return None,
    })
}

/// `{k1}{z}` after the operand they apply to.
pub(crate) fn write_op_mask(
    output: &mut dyn FormatterOutput,
    options: &FormatterOptions,
    op: OperandRef<'_>,
    mask_name: &str,
) {
    let instruction = op.instruction;
    if instruction.has_op_mask() {
        output.write("{", FormatterTextKind::Punctuation);
        op.register(output, mask_name, instruction.op_mask());
        output.write("}", FormatterTextKind::Punctuation);
    }
    if instruction.zeroing_masking() {
        op.decorator(output, options, "z", DecoratorKind::ZeroingMasking);
    }
}

pub(crate) fn check_operand(info: &OperandInfo<'_>, operand: u32) -> Result<(), FormatterError> {
    if operand < info.op_count() {
        Ok(())
    } else {
        Err(FormatterError::InvalidOperand {
            operand,
            count: info.op_count(),
        })
    }
}

pub(crate) fn write_operand_separator(output: &mut dyn FormatterOutput, options: &FormatterOptions) {
    output.write(",", FormatterTextKind::Punctuation);
    if options.space_after_operand_separator {
        output.write(" ", FormatterTextKind::Text);
    }
}

/// `keyword` in the configured case.
pub(crate) fn write_keyword(output: &mut dyn FormatterOutput, options: &FormatterOptions, keyword: &str) {
    let text = cased(keyword, options.uppercase_keywords || options.uppercase_all);
    output.write(&text, FormatterTextKind::Keyword);
}

/// `keyword` followed by a space.
pub(crate) fn write_keyword_space(output: &mut dyn FormatterOutput, options: &FormatterOptions, keyword: &str) {
    write_keyword(output, options, keyword);
    output.write(" ", FormatterTextKind::Text);
}

/// `1toN` for a broadcast memory operand.
pub(crate) fn broadcast_text(memory_size: MemorySize) -> Option<String> {
    memory_size
        .is_broadcast()
        .then(|| format!("1to{}", memory_size.broadcast_count()))
}

/// Whether the memory size keyword is wanted under the configured
/// [`MemorySizeOptions`](crate::MemorySizeOptions). `forced` adds a dialect's
/// own reasons to show it in the default and minimal modes.
pub(crate) const fn wants_memory_size(options: &FormatterOptions, info_flags: u32, forced: bool) -> bool {
    if info_flags & flags::MEM_SIZE_NOTHING != 0 {
        return false;
    }
    match options.memory_size_options() {
        MemorySizeOptions::Always => true,
        MemorySizeOptions::Never => false,
        MemorySizeOptions::Default => forced || info_flags & flags::SHOW_NO_MEM_SIZE_FORCE_SIZE != 0,
        MemorySizeOptions::Minimal => forced || info_flags & flags::SHOW_MIN_MEM_SIZE_FORCE_SIZE != 0,
    }
}

// ============================================================================
// Immediates
// ============================================================================

/// Value and width in bytes of an immediate or declared-data operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Immediate {
    pub(crate) value: u64,
    pub(crate) size: u32,
}

impl Immediate {
    pub(crate) fn of(instruction: &Instruction, kind: InstrOpKind, operand: u32) -> Option<Self> {
        let index = operand as usize;
        let (value, size) = match kind {
            InstrOpKind::Immediate8 => (u64::from(instruction.immediate8()), 1),
            InstrOpKind::Immediate8_2nd => (u64::from(instruction.immediate8_2nd()), 1),
            InstrOpKind::Immediate16 => (u64::from(instruction.immediate16()), 2),
            InstrOpKind::Immediate8to16 => (u64::from(instruction.immediate8to16() as u16), 2),
            InstrOpKind::Immediate32 => (u64::from(instruction.immediate32()), 4),
            InstrOpKind::Immediate8to32 => (u64::from(instruction.immediate8to32() as u32), 4),
            InstrOpKind::Immediate64 => (instruction.immediate64(), 8),
            InstrOpKind::Immediate8to64 => (instruction.immediate8to64() as u64, 8),
            InstrOpKind::Immediate32to64 => (instruction.immediate32to64() as u64, 8),
            InstrOpKind::DeclareByte => (u64::from(instruction.declare_byte_value(index)), 1),
            InstrOpKind::DeclareWord => (u64::from(instruction.declare_word_value(index)), 2),
            InstrOpKind::DeclareDword => (u64::from(instruction.declare_dword_value(index)), 4),
            InstrOpKind::DeclareQword => (instruction.declare_qword_value(index), 8),
            InstrOpKind::ExtraImmediate8Value3 => (3, 1),
            _ => return None,
        };
        Some(Self { value, size })
    }

    const fn is_negative(self) -> bool {
        match self.size {
            1 => (self.value as i8) < 0,
            2 => (self.value as i16) < 0,
            4 => (self.value as i32) < 0,
            _ => (self.value as i64) < 0,
        }
    }

    /// Writes the number, as `-magnitude` when `number_options` asks for
    /// signed numbers and the value is negative at its width.
    pub(crate) fn write(
        self,
        output: &mut dyn FormatterOutput,
        op: OperandRef<'_>,
        numbers: &mut NumberFormatter,
        number_options: &NumberFormattingOptions<'_>,
    ) {
        let signed = number_options.signed_number;
        let mut magnitude = self.value;
        if signed && self.is_negative() {
            output.write("-", FormatterTextKind::Operator);
            magnitude = self.value.wrapping_neg();
        }
        let (text, number_kind) = match self.size {
            1 => (
                numbers.format_u8(number_options, magnitude as u8),
                if signed { NumberKind::Int8 } else { NumberKind::UInt8 },
            ),
            2 => (
                numbers.format_u16(number_options, magnitude as u16),
                if signed { NumberKind::Int16 } else { NumberKind::UInt16 },
            ),
            4 => (
                numbers.format_u32(number_options, magnitude as u32),
                if signed { NumberKind::Int32 } else { NumberKind::UInt32 },
            ),
            _ => (
                numbers.format_u64(number_options, magnitude),
                if signed { NumberKind::Int64 } else { NumberKind::UInt64 },
            ),
        };
        op.number(output, text, self.value, number_kind, FormatterTextKind::Number);
    }
}

// ============================================================================
// Branch targets
// ============================================================================

/// Target and width in bytes of a near branch.
pub(crate) fn near_branch(instruction: &Instruction, kind: InstrOpKind) -> Option<(u64, u32)> {
    match kind {
        InstrOpKind::NearBranch16 => Some((u64::from(instruction.near_branch16()), 2)),
        InstrOpKind::NearBranch32 => Some((u64::from(instruction.near_branch32()), 4)),
        InstrOpKind::NearBranch64 => Some((instruction.near_branch64(), 8)),
        _ => None,
    }
}

/// Offset and width in bytes of a far branch.
pub(crate) fn far_branch(instruction: &Instruction, kind: InstrOpKind) -> Option<(u64, u32)> {
    match kind {
        InstrOpKind::FarBranch16 => Some((u64::from(instruction.far_branch16()), 2)),
        InstrOpKind::FarBranch32 => Some((u64::from(instruction.far_branch32()), 4)),
        _ => None,
    }
}

/// Writes a branch target number (`LabelAddress`, or `FunctionAddress` for calls).
pub(crate) fn write_branch_target(
    output: &mut dyn FormatterOutput,
    op: OperandRef<'_>,
    numbers: &mut NumberFormatter,
    number_options: &NumberFormattingOptions<'_>,
    target: u64,
    size: u32,
) {
    let zeros = number_options.leading_zeros;
    let (text, number_kind) = match size {
        2 => (numbers.format_u16_zeros(number_options, target as u16, zeros), NumberKind::UInt16),
        4 => (numbers.format_u32_zeros(number_options, target as u32, zeros), NumberKind::UInt32),
        _ => (numbers.format_u64_zeros(number_options, target, zeros), NumberKind::UInt64),
    };
    let kind = if op.instruction.code().is_call_near() {
        FormatterTextKind::FunctionAddress
    } else {
        FormatterTextKind::LabelAddress
    };
    op.number(output, text, target, number_kind, kind);
}

/// Writes a far branch selector.
pub(crate) fn write_selector(
    output: &mut dyn FormatterOutput,
    op: OperandRef<'_>,
    numbers: &mut NumberFormatter,
    number_options: &NumberFormattingOptions<'_>,
) {
    let selector = op.instruction.far_branch_selector();
    let text = numbers.format_u16_zeros(number_options, selector, number_options.leading_zeros);
    op.number(
        output,
        text,
        u64::from(selector),
        NumberKind::UInt16,
        FormatterTextKind::SelectorValue,
    );
}

// ============================================================================
// Memory operands
// ============================================================================

/// Address pieces of a memory operand in the order a dialect writes them.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MemoryParts {
    /// Segment written before the address when shown.
    pub(crate) segment: Register,
    pub(crate) base: Register,
    pub(crate) index: Register,
    /// 1, 2, 4 or 8; 0 for implicit string operands, which never show a scale.
    pub(crate) scale: u32,
    pub(crate) displ: i64,
    pub(crate) displ_size: u32,
    pub(crate) addr_size: u32,
}

impl MemoryParts {
    pub(crate) fn of(instruction: &Instruction, kind: InstrOpKind) -> Option<Self> {
        let string = |segment: Register, base: Register, addr_size: u32| Self {
            segment,
            base,
            index: Register::None,
            scale: 0,
            displ: 0,
            displ_size: 0,
            addr_size,
        };
        let segment = instruction.memory_segment();
        Some(match kind {
            InstrOpKind::MemorySegSI => string(segment, Register::SI, 2),
            InstrOpKind::MemorySegESI => string(segment, Register::ESI, 4),
            InstrOpKind::MemorySegRSI => string(segment, Register::RSI, 8),
            InstrOpKind::MemorySegDI => string(segment, Register::DI, 2),
            InstrOpKind::MemorySegEDI => string(segment, Register::EDI, 4),
            InstrOpKind::MemorySegRDI => string(segment, Register::RDI, 8),
            InstrOpKind::MemoryESDI => string(Register::ES, Register::DI, 2),
            InstrOpKind::MemoryESEDI => string(Register::ES, Register::EDI, 4),
            InstrOpKind::MemoryESRDI => string(Register::ES, Register::RDI, 8),
            InstrOpKind::Memory => {
                let base = instruction.memory_base();
                let index = instruction.memory_index();
                let displ_size = instruction.memory_displ_size();
                let addr_size = address_size_in_bytes(base, index, displ_size, instruction.code_size());
                let displ = if addr_size == 8 {
                    instruction.memory_displacement64() as i64
                } else {
                    i64::from(instruction.memory_displacement32())
                };
                Self {
                    segment,
                    base,
                    index,
                    scale: if index == Register::None { 0 } else { instruction.memory_index_scale() },
                    displ,
                    displ_size,
                    addr_size,
                }
            }
            _ => return None,
        })
    }

    pub(crate) const fn is_ip_relative(&self) -> bool {
        matches!(self.base, Register::RIP | Register::EIP)
    }

    /// The address the operand refers to, used for symbol lookup.
    pub(crate) const fn absolute_address(&self, instruction: &Instruction) -> u64 {
        if self.is_ip_relative() {
            instruction.ip_rel_memory_address()
        } else {
            self.displ as u64
        }
    }

    /// Rewrites `[rip+displ]` as the absolute target. Returns whether it did.
    pub(crate) const fn flatten_ip_relative(&mut self, instruction: &Instruction) -> bool {
        let displ_size = match self.base {
            Register::RIP => 8,
            Register::EIP => 4,
            _ => return false,
        };
        self.displ = instruction.ip_rel_memory_address() as i64;
        self.displ_size = displ_size;
        self.base = Register::None;
        true
    }

    /// Whether the index gets an explicit `*scale`.
    pub(crate) fn use_scale(&self, options: &FormatterOptions) -> bool {
        (self.scale > 1 || options.always_show_scale || (self.base == Register::None && self.scale != 0))
            && self.addr_size != 2
    }

    pub(crate) const fn has_register(&self) -> bool {
        !matches!(self.base, Register::None) || !matches!(self.index, Register::None)
    }
}

/// How a displacement after a base or index register is written.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum DisplacementSign {
    /// First term; no sign, no sign extension.
    Leading,
    /// Intel `+N`/`-N`, with spaces around the operator when configured.
    Operator,
    /// AT&T: only `-` for negative values.
    MinusOnly,
}

/// Writes a memory displacement.
pub(crate) fn write_displacement(
    output: &mut dyn FormatterOutput,
    op: OperandRef<'_>,
    numbers: &mut NumberFormatter,
    number_options: &NumberFormattingOptions<'_>,
    options: &FormatterOptions,
    parts: &MemoryParts,
    sign: DisplacementSign,
) {
    let original = parts.displ as u64;
    let mut displ = original;
    let mut displ_size = parts.displ_size;
    let signed = sign != DisplacementSign::Leading && number_options.signed_number;
    if sign != DisplacementSign::Leading {
        let spaces = sign == DisplacementSign::Operator && options.space_between_memory_add_operators;
        if spaces {
            output.write(" ", FormatterTextKind::Text);
        }
        let negative = match parts.addr_size {
            2 => (displ as i16) < 0,
            4 => (displ as i32) < 0,
            _ => (displ as i64) < 0,
        };
        if signed && negative {
            output.write("-", FormatterTextKind::Operator);
            displ = match parts.addr_size {
                2 => u64::from((displ as u16).wrapping_neg()),
                4 => u64::from((displ as u32).wrapping_neg()),
                _ => displ.wrapping_neg(),
            };
        } else if sign == DisplacementSign::Operator {
            output.write("+", FormatterTextKind::Operator);
        }
        if number_options.displacement_leading_zeros {
            displ_size = parts.addr_size;
        }
        if spaces {
            output.write(" ", FormatterTextKind::Text);
        }
    }
    let zeros = number_options.leading_zeros || (sign != DisplacementSign::Leading && number_options.displacement_leading_zeros);
    let (text, number_kind) = if displ_size <= 1 && displ <= u64::from(u8::MAX) {
        (
            numbers.format_u8(number_options, displ as u8),
            if signed { NumberKind::Int8 } else { NumberKind::UInt8 },
        )
    } else if displ_size <= 2 && displ <= u64::from(u16::MAX) {
        (
            numbers.format_u16_zeros(number_options, displ as u16, zeros),
            if signed { NumberKind::Int16 } else { NumberKind::UInt16 },
        )
    } else if displ_size <= 4 && displ <= u64::from(u32::MAX) {
        (
            numbers.format_u32_zeros(number_options, displ as u32, zeros),
            if signed { NumberKind::Int32 } else { NumberKind::UInt32 },
        )
    } else {
        (
            numbers.format_u64_zeros(number_options, displ, zeros),
            if signed { NumberKind::Int64 } else { NumberKind::UInt64 },
        )
    };
    op.number(output, text, original, number_kind, FormatterTextKind::Number);
}

/// Intel `index*scale` or `scale*index`.
pub(crate) fn write_scaled_index(
    output: &mut dyn FormatterOutput,
    op: OperandRef<'_>,
    options: &FormatterOptions,
    index_text: &str,
    parts: &MemoryParts,
) {
    if !parts.use_scale(options) {
        op.register(output, index_text, parts.index);
        return;
    }
    let spaces = options.space_between_memory_mul_operators;
    if options.scale_before_index {
        write_scale(output, op, parts.scale);
    } else {
        op.register(output, index_text, parts.index);
    }
    if spaces {
        output.write(" ", FormatterTextKind::Text);
    }
    output.write("*", FormatterTextKind::Operator);
    if spaces {
        output.write(" ", FormatterTextKind::Text);
    }
    if options.scale_before_index {
        op.register(output, index_text, parts.index);
    } else {
        write_scale(output, op, parts.scale);
    }
}

fn write_scale(output: &mut dyn FormatterOutput, op: OperandRef<'_>, scale: u32) {
    op.number(output, scale_text(scale), u64::from(scale), NumberKind::Int32, FormatterTextKind::Number);
}

/// Intel `+` between address terms, or `-` before a signed symbol.
pub(crate) fn write_add_operator(output: &mut dyn FormatterOutput, options: &FormatterOptions, minus: bool) {
    let spaces = options.space_between_memory_add_operators;
    if spaces {
        output.write(" ", FormatterTextKind::Text);
    }
    output.write(if minus { "-" } else { "+" }, FormatterTextKind::Operator);
    if spaces {
        output.write(" ", FormatterTextKind::Text);
    }
}

// ============================================================================
// Prefix policies
// ============================================================================

fn default_data_segment(instruction: &Instruction) -> Register {
    match instruction.memory_base() {
        Register::SP | Register::BP | Register::ESP | Register::EBP | Register::RSP | Register::RBP => Register::SS,
        _ => Register::DS,
    }
}

/// Whether the segment override differs from what the hardware would use
/// anyway. `default_segment` of `None` derives it from the memory base.
pub(crate) fn show_segment_prefix(
    default_segment: Register,
    instruction: &Instruction,
    options: &FormatterOptions,
) -> bool {
    let prefix = instruction.segment_prefix();
    if prefix == Register::None {
        return false;
    }
    // ES, CS, SS and DS are ignored in 64-bit mode
    if instruction.code_size() == CodeSize::Code64 {
        return matches!(prefix, Register::FS | Register::GS) || options.show_useless_prefixes;
    }
    let default_segment = if default_segment == Register::None {
        default_data_segment(instruction)
    } else {
        default_segment
    };
    prefix != default_segment || options.show_useless_prefixes
}

/// Whether a segment override is written before the mnemonic rather than
/// inside a memory operand.
pub(crate) fn show_mnemonic_segment_prefix(
    instruction: &Instruction,
    info: &OperandInfo<'_>,
    options: &FormatterOptions,
) -> bool {
    if (0..info.op_count()).any(|i| is_segment_memory(info.op_kind(i))) {
        return false;
    }
    if instruction.code().shows_ds_segment() {
        return show_segment_prefix(Register::DS, instruction, options);
    }
    options.show_useless_prefixes
}

/// Memory operand kinds that show their own segment override.
const fn is_segment_memory(kind: InstrOpKind) -> bool {
    matches!(
        kind,
        InstrOpKind::MemorySegSI
            | InstrOpKind::MemorySegESI
            | InstrOpKind::MemorySegRSI
            | InstrOpKind::MemorySegDI
            | InstrOpKind::MemorySegEDI
            | InstrOpKind::MemorySegRDI
            | InstrOpKind::Memory
    )
}

pub(crate) const fn show_rep_or_repe_prefix(code: Code, options: &FormatterOptions) -> bool {
    code.is_string_instruction() || code.is_repe_or_repne_instruction() || options.show_useless_prefixes
}

pub(crate) const fn show_repne_prefix(code: Code, options: &FormatterOptions) -> bool {
    code.is_repe_or_repne_instruction() || options.show_useless_prefixes
}

/// A DS override on an indirect branch is the CET `notrack` prefix.
pub(crate) fn has_notrack_prefix(instruction: &Instruction) -> bool {
    instruction.segment_prefix() == Register::DS && instruction.code().can_have_notrack()
}

/// Whether the segment of a memory operand is written as `seg:`.
pub(crate) fn show_memory_segment(instruction: &Instruction, base: Register, options: &FormatterOptions) -> bool {
    if options.always_show_segment_register {
        return true;
    }
    let code_size = instruction.code_size();
    // With an SS-default base in 16/32-bit code, DS is a real override
    let notrack = has_notrack_prefix(instruction)
        && !(matches!(code_size, CodeSize::Code16 | CodeSize::Code32)
            && matches!(base, Register::BP | Register::EBP | Register::ESP));
    instruction.has_segment_prefix() && !notrack && show_segment_prefix(Register::None, instruction, options)
}

/// Address width in bytes of a memory operand.
pub(crate) fn address_size_in_bytes(base: Register, index: Register, displ_size: u32, code_size: CodeSize) -> u32 {
    if base.is_gpr64() || index.is_gpr64() || base == Register::RIP {
        8
    } else if base.is_gpr32() || index.is_gpr32() || base == Register::EIP {
        4
    } else if base.is_gpr16() || index.is_gpr16() {
        2
    } else {
        match (displ_size, code_size) {
            (8, _) => 8,
            (4, _) => 4,
            (2, _) | (_, CodeSize::Code16) => 2,
            (_, CodeSize::Code32) => 4,
            _ => 8,
        }
    }
}

pub(crate) const fn scale_text(scale: u32) -> &'static str {
    match scale {
        2 => "2",
        4 => "4",
        8 => "8",
        _ => "1",
    }
}

// ============================================================================
// Mnemonic line
// ============================================================================

/// Writes prefixes and the mnemonic while tracking the output column.
#[derive(Default)]
pub(crate) struct MnemonicLine {
    pub(crate) column: u32,
    need_space: bool,
}

/// Prefix spellings that differ between dialects.
pub(crate) struct PrefixStrings<'a> {
    pub(crate) op_size: &'a str,
    pub(crate) addr_size: &'a str,
    pub(crate) show_segment: bool,
}

impl MnemonicLine {
    pub(crate) fn prefix(
        &mut self,
        output: &mut dyn FormatterOutput,
        instruction: &Instruction,
        options: &FormatterOptions,
        text: &str,
        prefix: PrefixKind,
    ) {
        self.separate(output);
        let text = cased(text, options.uppercase_prefixes || options.uppercase_all);
        output.write_prefix(instruction, &text, prefix);
        self.column += width(&text);
        self.need_space = true;
    }

    /// Raw text that counts towards the column (GAS `.byte 0x66;`).
    pub(crate) fn text(&mut self, output: &mut dyn FormatterOutput, text: &str, kind: FormatterTextKind) {
        output.write(text, kind);
        self.column += width(text);
    }

    fn separate(&mut self, output: &mut dyn FormatterOutput) {
        if self.need_space {
            output.write(" ", FormatterTextKind::Text);
            self.column += 1;
        }
    }

    /// Everything up to the mnemonic in the fixed order
    /// size overrides, segment, lock family, `notrack`, `bnd`, `rep` family.
    pub(crate) fn prefixes(
        &mut self,
        output: &mut dyn FormatterOutput,
        instruction: &Instruction,
        info: &OperandInfo<'_>,
        options: &FormatterOptions,
        strings: &PrefixStrings<'_>,
    ) {
        if !strings.op_size.is_empty() {
            self.prefix(output, instruction, options, strings.op_size, PrefixKind::OperandSize);
        }
        if !strings.addr_size.is_empty() {
            self.prefix(output, instruction, options, strings.addr_size, PrefixKind::AddressSize);
        }
        let segment = instruction.segment_prefix();
        let notrack = has_notrack_prefix(instruction);
        if !notrack && strings.show_segment {
            if let Some(kind) = PrefixKind::from_segment(segment) {
                self.prefix(output, instruction, options, segment.name(), kind);
            }
        }
        if instruction.has_xacquire_prefix() {
            self.prefix(output, instruction, options, "xacquire", PrefixKind::Xacquire);
        }
        if instruction.has_xrelease_prefix() {
            self.prefix(output, instruction, options, "xrelease", PrefixKind::Xrelease);
        }
        if instruction.has_lock_prefix() {
            self.prefix(output, instruction, options, "lock", PrefixKind::Lock);
        }
        if notrack {
            self.prefix(output, instruction, options, "notrack", PrefixKind::Notrack);
        }
        let bnd = info.flags() & flags::BND_PREFIX != 0;
        if bnd {
            self.prefix(output, instruction, options, "bnd", PrefixKind::Bnd);
        }
        let code = instruction.code();
        if instruction.has_repe_prefix() && show_rep_or_repe_prefix(code, options) {
            if code.is_repe_or_repne_instruction() {
                let text = REPE[options.cc_by_index(CC_E).min(REPE.len() - 1)];
                self.prefix(output, instruction, options, text, PrefixKind::Repe);
            } else {
                self.prefix(output, instruction, options, "rep", PrefixKind::Rep);
            }
        }
        if !bnd && instruction.has_repne_prefix() && show_repne_prefix(code, options) {
            let text = REPNE[options.cc_by_index(CC_NE).min(REPNE.len() - 1)];
            self.prefix(output, instruction, options, text, PrefixKind::Repne);
        }
    }

    /// The mnemonic, or the directive for declared data.
    pub(crate) fn mnemonic(
        &mut self,
        output: &mut dyn FormatterOutput,
        instruction: &Instruction,
        info: &OperandInfo<'_>,
        options: &FormatterOptions,
    ) {
        self.separate(output);
        self.need_space = false;
        if info.flags() & flags::MNEMONIC_IS_DIRECTIVE != 0 {
            let text = cased(info.mnemonic(), options.uppercase_keywords || options.uppercase_all);
            output.write(&text, FormatterTextKind::Directive);
        } else {
            let text = cased(info.mnemonic(), options.uppercase_mnemonics || options.uppercase_all);
            output.write_mnemonic(instruction, &text);
        }
        self.column += width(info.mnemonic());
    }

    /// Pads from the current column to the first operand.
    pub(crate) fn tabs(&self, output: &mut dyn FormatterOutput, options: &FormatterOptions) {
        add_tabs(output, self.column, options.first_operand_char_index, options.tab_size);
    }
}

fn add_tabs(output: &mut dyn FormatterOutput, mut column: u32, first_operand_char_index: u32, tab_size: u32) {
    let first = first_operand_char_index.min(MAX_FIRST_OPERAND_CHAR_INDEX);
    if tab_size == 0 {
        let count = if first <= column { 1 } else { first - column };
        output.write(&" ".repeat(count as usize), FormatterTextKind::Text);
        return;
    }
    let end = if first <= column { column + 1 } else { first };
    let end_rounded = end / tab_size * tab_size;
    let added_tabs = end_rounded > column;
    if added_tabs {
        let tabs = (end_rounded - column / tab_size * tab_size) / tab_size;
        output.write(&"\t".repeat(tabs as usize), FormatterTextKind::Text);
        column = end_rounded;
    }
    if first > column {
        output.write(&" ".repeat((first - column) as usize), FormatterTextKind::Text);
    } else if !added_tabs {
        output.write(" ", FormatterTextKind::Text);
    }
}

// ============================================================================
// Symbols
// ============================================================================

/// How [`write_symbol`] lays out `symbol+displ (address)`.
#[derive(Clone, Copy)]
pub(crate) struct SymbolStyle {
    pub(crate) show_address: bool,
    pub(crate) write_minus_if_signed: bool,
    pub(crate) spaces_between_op: bool,
}

impl SymbolStyle {
    pub(crate) const fn new(options: &FormatterOptions) -> Self {
        Self {
            show_address: options.show_symbol_address,
            write_minus_if_signed: true,
            spaces_between_op: false,
        }
    }
}

/// Writes a resolved symbol, the signed distance from it to `address` when
/// non-zero, and optionally the absolute address in parentheses.
pub(crate) fn write_symbol(
    output: &mut dyn FormatterOutput,
    op: OperandRef<'_>,
    numbers: &mut NumberFormatter,
    number_options: &NumberFormattingOptions<'_>,
    address: u64,
    symbol: &SymbolResult,
    style: SymbolStyle,
) {
    let mut displ = address.wrapping_sub(symbol.address) as i64;
    if symbol.flags.contains(SymbolFlags::SIGNED) {
        if style.write_minus_if_signed {
            output.write("-", FormatterTextKind::Operator);
        }
        displ = displ.wrapping_neg();
    }
    output.write_symbol(op.instruction, op.operand, op.instruction_operand, address, symbol);
    if displ != 0 {
        if style.spaces_between_op {
            output.write(" ", FormatterTextKind::Text);
        }
        let value = displ as u64;
        let number_kind;
        if displ < 0 {
            output.write("-", FormatterTextKind::Operator);
            displ = displ.wrapping_neg();
            number_kind = if displ <= i64::from(i8::MAX) + 1 {
                NumberKind::Int8
            } else if displ <= i64::from(i16::MAX) + 1 {
                NumberKind::Int16
            } else if displ <= i64::from(i32::MAX) + 1 {
                NumberKind::Int32
            } else {
                NumberKind::Int64
            };
        } else {
            output.write("+", FormatterTextKind::Operator);
            number_kind = if displ <= i64::from(i8::MAX) {
                NumberKind::Int8
            } else if displ <= i64::from(i16::MAX) {
                NumberKind::Int16
            } else if displ <= i64::from(i32::MAX) {
                NumberKind::Int32
            } else {
                NumberKind::Int64
            };
        }
        if style.spaces_between_op {
            output.write(" ", FormatterTextKind::Text);
        }
        let text = numbers.format_u64_zeros(number_options, displ as u64, false);
        op.number(output, text, value, number_kind, FormatterTextKind::Number);
    }
    if style.show_address {
        output.write(" ", FormatterTextKind::Text);
        output.write("(", FormatterTextKind::Punctuation);
        let (text, number_kind) = if let Ok(value) = u16::try_from(address) {
            (numbers.format_u16_zeros(number_options, value, true), NumberKind::UInt16)
        } else if let Ok(value) = u32::try_from(address) {
            (numbers.format_u32_zeros(number_options, value, true), NumberKind::UInt32)
        } else {
            (numbers.format_u64_zeros(number_options, address, true), NumberKind::UInt64)
        };
        op.number(output, text, address, number_kind, FormatterTextKind::Number);
        output.write(")", FormatterTextKind::Punctuation);
    }
}

#[cfg(test)]
mod tests {
    use x86fmt_isa::{MemoryOperand, Operand};

    use super::*;
    use crate::test_util::sample_instruction;

    #[test]
    fn test_tab_alignment() {
        let mut out = String::new();
        add_tabs(&mut out, 3, 8, 0);
        assert_eq!(out, "     ");

        let mut out = String::new();
        add_tabs(&mut out, 10, 8, 0);
        assert_eq!(out, " ");

        let mut out = String::new();
        add_tabs(&mut out, 3, 8, 4);
        assert_eq!(out, "\t\t");

        let mut out = String::new();
        add_tabs(&mut out, 3, 10, 4);
        assert_eq!(out, "\t\t  ");
    }

    #[test]
    fn test_address_size() {
        assert_eq!(address_size_in_bytes(Register::RAX, Register::None, 0, CodeSize::Code32), 8);
        assert_eq!(address_size_in_bytes(Register::None, Register::ECX, 0, CodeSize::Code64), 4);
        assert_eq!(address_size_in_bytes(Register::BX, Register::SI, 1, CodeSize::Code64), 2);
        assert_eq!(address_size_in_bytes(Register::None, Register::None, 0, CodeSize::Code16), 2);
        assert_eq!(address_size_in_bytes(Register::None, Register::None, 4, CodeSize::Code16), 4);
        assert_eq!(address_size_in_bytes(Register::None, Register::None, 0, CodeSize::Unknown), 8);
    }

    #[test]
    fn test_segment_policy() {
        let options = FormatterOptions::default();
        let mut instr = Instruction::with_operands(
            Code::Mov_r32_rm32,
            &[
                Operand::Register(Register::EAX),
                Operand::Memory(MemoryOperand::base(Register::EBP).with_segment(Register::SS)),
            ],
        )
        .unwrap();
        instr.set_code_size(CodeSize::Code32);
        assert!(!show_segment_prefix(Register::None, &instr, &options));
        instr.set_segment_prefix(Register::DS).unwrap();
        assert!(show_segment_prefix(Register::None, &instr, &options));

        instr.set_code_size(CodeSize::Code64);
        assert!(!show_segment_prefix(Register::None, &instr, &options));
        instr.set_segment_prefix(Register::GS).unwrap();
        assert!(show_segment_prefix(Register::None, &instr, &options));
    }

    #[test]
    fn test_rep_policy() {
        let options = FormatterOptions::default();
        let movs = sample_instruction(Code::Movsb_m8_m8, CodeSize::Code64, true);
        assert!(show_rep_or_repe_prefix(movs.code(), &options));
        assert!(!show_repne_prefix(movs.code(), &options));
        let add = sample_instruction(Code::Add_rm32_r32, CodeSize::Code64, false);
        assert!(!show_rep_or_repe_prefix(add.code(), &options));
        let mut useless = FormatterOptions::default();
        useless.show_useless_prefixes = true;
        assert!(show_repne_prefix(add.code(), &useless));
    }

    #[test]
    fn test_symbol_with_displacement() {
        let instr = Instruction::default();
        let options = FormatterOptions::with_nasm();
        let number_options = NumberFormattingOptions::with_branch(&options);
        let mut numbers = NumberFormatter::new();
        let op = OperandRef {
            instruction: &instr,
            operand: 0,
            instruction_operand: Some(0),
        };
        let symbol = SymbolResult::new(0x1000, "main");

        let mut out = String::new();
        write_symbol(&mut out, op, &mut numbers, &number_options, 0x1010, &symbol, SymbolStyle::new(&options));
        assert_eq!(out, "main+10h");

        let mut out = String::new();
        let style = SymbolStyle {
            show_address: true,
            ..SymbolStyle::new(&options)
        };
        write_symbol(&mut out, op, &mut numbers, &number_options, 0x0FF0, &symbol, style);
        assert_eq!(out, "main-10h (0FF0h)");
    }
}
