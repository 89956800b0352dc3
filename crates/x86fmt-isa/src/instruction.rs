//! The instruction value consumed by the formatters.

use crate::{Code, CodeSize, IsaError, MAX_OP_COUNT, MemorySize, OpKind, OpTemplate, Register, RoundingControl};

/// Memory operand description used when building an [`Instruction`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct MemoryOperand {
    /// Explicit segment override, `Register::None` for the default segment.
    pub segment: Register,
    pub base: Register,
    pub index: Register,
    /// 1, 2, 4 or 8.
    pub scale: u32,
    pub displacement: i64,
    /// Encoded displacement size in bytes: 0, 1, 2, 4 or 8.
    pub displ_size: u32,
}

impl MemoryOperand {
    /// `[base]`.
    #[must_use]
    pub const fn base(base: Register) -> Self {
        Self {
            segment: Register::None,
            base,
            index: Register::None,
            scale: 1,
            displacement: 0,
            displ_size: 0,
        }
    }

    /// `[displacement]` with no base or index register.
    #[must_use]
    pub const fn absolute(address: u64, displ_size: u32) -> Self {
        Self {
            segment: Register::None,
            base: Register::None,
            index: Register::None,
            scale: 1,
            displacement: address as i64,
            displ_size,
        }
    }

    #[must_use]
    pub const fn with_index(mut self, index: Register, scale: u32) -> Self {
        self.index = index;
        self.scale = scale;
        self
    }

    /// Sets the displacement; the encoded size becomes 1 when it fits in an `i8`, else 4.
    #[must_use]
    pub const fn with_displacement(mut self, displacement: i64) -> Self {
        self.displacement = displacement;
        self.displ_size = if displacement >= i8::MIN as i64 && displacement <= i8::MAX as i64 {
            if displacement == 0 { 0 } else { 1 }
        } else if self.base.is_gpr64() || matches!(self.base, Register::RIP) || self.index.is_gpr64() {
            4
        } else if self.base.is_gpr16() || self.index.is_gpr16() {
            2
        } else {
            4
        };
        self
    }

    #[must_use]
    pub const fn with_segment(mut self, segment: Register) -> Self {
        self.segment = segment;
        self
    }
}

/// One operand given to [`Instruction::with_operands`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operand {
    Register(Register),
    Memory(MemoryOperand),
    /// Immediate value. Unsigned 64-bit values may be passed through an `as i64` cast.
    Immediate(i64),
    /// Near branch target.
    Branch(u64),
    FarBranch { selector: u16, offset: u32 },
}

// ============================================================================
// Prefix bits
// ============================================================================

const PREFIX_XACQUIRE: u8 = 1 << 0;
const PREFIX_XRELEASE: u8 = 1 << 1;
const PREFIX_LOCK: u8 = 1 << 2;
const PREFIX_REP: u8 = 1 << 3;
const PREFIX_REPNE: u8 = 1 << 4;

/// A decoded (or hand-built) instruction.
///
/// Formatters only read it. Every field has a typed accessor; setters exist for
/// the context bits that don't come from operands (prefixes, decorators, code size).
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Instruction {
    code: Code,
    code_size: CodeSize,
    op_count: u8,
    op_kinds: [OpKind; MAX_OP_COUNT],
    op_registers: [Register; MAX_OP_COUNT],
    immediate: u64,
    immediate8_2nd: u8,
    near_branch: u64,
    far_branch: u32,
    far_branch_selector: u16,
    memory_base: Register,
    memory_index: Register,
    memory_scale: u32,
    memory_displacement: i64,
    memory_displ_size: u32,
    memory_size: MemorySize,
    segment_prefix: Register,
    prefixes: u8,
    op_mask: Register,
    zeroing_masking: bool,
    rounding_control: RoundingControl,
    suppress_all_exceptions: bool,
    broadcast: bool,
    declare_data: [u8; 16],
    declare_data_len: u8,
    ip: u64,
    len: u8,
}

fn immediate_fits(template: OpTemplate, value: i64) -> bool {
    let v = i128::from(value);
    let (min, max) = match template {
        OpTemplate::Immediate8 | OpTemplate::Immediate8_2nd => (-0x80, 0xFF),
        OpTemplate::Immediate16 => (-0x8000, 0xFFFF),
        OpTemplate::Immediate32 | OpTemplate::Immediate32to64 => (-0x8000_0000, 0xFFFF_FFFF),
        OpTemplate::Immediate8to16 | OpTemplate::Immediate8to32 | OpTemplate::Immediate8to64 => (-0x80, 0xFF),
        _ => return true,
    };
    (min..=max).contains(&v)
}

const fn immediate_kind(template: OpTemplate) -> Option<OpKind> {
    Some(match template {
        OpTemplate::Immediate8 => OpKind::Immediate8,
        OpTemplate::Immediate8_2nd => OpKind::Immediate8_2nd,
        OpTemplate::Immediate16 => OpKind::Immediate16,
        OpTemplate::Immediate32 => OpKind::Immediate32,
        OpTemplate::Immediate64 => OpKind::Immediate64,
        OpTemplate::Immediate8to16 => OpKind::Immediate8to16,
        OpTemplate::Immediate8to32 => OpKind::Immediate8to32,
        OpTemplate::Immediate8to64 => OpKind::Immediate8to64,
        OpTemplate::Immediate32to64 => OpKind::Immediate32to64,
        _ => return None,
    })
}

/// Kind of an implicit string operand from its base register.
fn string_kind(template: OpTemplate, base: Register) -> Option<OpKind> {
    let width = if base.is_gpr16() {
        0
    } else if base.is_gpr32() {
        1
    } else if base.is_gpr64() {
        2
    } else {
        return None;
    };
    let number = base.number();
    let kinds = match template {
        OpTemplate::StringSource if number == 6 => [OpKind::MemorySegSI, OpKind::MemorySegESI, OpKind::MemorySegRSI],
        OpTemplate::StringDest if number == 7 => [OpKind::MemoryESDI, OpKind::MemoryESEDI, OpKind::MemoryESRDI],
        OpTemplate::StringSegDest if number == 7 => [OpKind::MemorySegDI, OpKind::MemorySegEDI, OpKind::MemorySegRDI],
        _ => return None,
    };
    Some(kinds[width])
}

impl Instruction {
    /// Creates an instruction, matching `operands` against the templates of `code`.
    ///
    /// The memory size defaults to the code's memory size and the code size to
    /// [`CodeSize::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns an error if the operand count differs from the code's, an operand
    /// doesn't fit its template, or an immediate is out of range.
    pub fn with_operands(code: Code, operands: &[Operand]) -> Result<Self, IsaError> {
        let templates = code.op_templates();
        if templates.len() != operands.len() {
            return Err(IsaError::OperandCount {
                code,
                expected: templates.len(),
                actual: operands.len(),
            });
        }
        let mut instr = Self {
            code,
            memory_size: code.memory_size(),
            memory_scale: 1,
            ..Self::default()
        };
        for (index, (&template, operand)) in templates.iter().zip(operands).enumerate() {
            let mismatch = IsaError::OperandMismatch { code, index, template };
            let kind = match (template, *operand) {
                (OpTemplate::Register | OpTemplate::RegisterOrMemory, Operand::Register(reg))
                    if reg != Register::None =>
                {
                    instr.op_registers[index] = reg;
                    OpKind::Register
                }
                (OpTemplate::Memory | OpTemplate::RegisterOrMemory, Operand::Memory(mem)) => {
                    instr.set_memory(mem);
                    OpKind::Memory
                }
                (
                    OpTemplate::StringSource | OpTemplate::StringDest | OpTemplate::StringSegDest,
                    Operand::Memory(mem),
                ) => {
                    let kind = string_kind(template, mem.base).ok_or(mismatch)?;
                    if template != OpTemplate::StringDest && mem.segment != Register::None {
                        instr.segment_prefix = mem.segment;
                    }
                    instr.memory_base = mem.base;
                    kind
                }
                (
                    OpTemplate::NearBranch16 | OpTemplate::NearBranch32 | OpTemplate::NearBranch64,
                    Operand::Branch(target),
                ) => {
                    let (kind, max) = match template {
                        OpTemplate::NearBranch16 => (OpKind::NearBranch16, u64::from(u16::MAX)),
                        OpTemplate::NearBranch32 => (OpKind::NearBranch32, u64::from(u32::MAX)),
                        _ => (OpKind::NearBranch64, u64::MAX),
                    };
                    if target > max {
                        return Err(IsaError::ImmediateOutOfRange {
                            code,
                            index,
                            value: i128::from(target),
                        });
                    }
                    instr.near_branch = target;
                    kind
                }
                (OpTemplate::FarBranch16, Operand::FarBranch { selector, offset }) => {
                    if offset > u32::from(u16::MAX) {
                        return Err(IsaError::ImmediateOutOfRange {
                            code,
                            index,
                            value: i128::from(offset),
                        });
                    }
                    instr.far_branch = offset;
                    instr.far_branch_selector = selector;
                    OpKind::FarBranch16
                }
                (OpTemplate::FarBranch32, Operand::FarBranch { selector, offset }) => {
                    instr.far_branch = offset;
                    instr.far_branch_selector = selector;
                    OpKind::FarBranch32
                }
                (_, Operand::Immediate(value)) => {
                    let kind = immediate_kind(template).ok_or(mismatch)?;
                    if !immediate_fits(template, value) {
                        return Err(IsaError::ImmediateOutOfRange {
                            code,
                            index,
                            value: i128::from(value),
                        });
                    }
                    if kind == OpKind::Immediate8_2nd {
                        instr.immediate8_2nd = value as u8;
                    } else {
                        instr.immediate = value as u64;
                    }
                    kind
                }
                _ => return Err(mismatch),
            };
            instr.op_kinds[index] = kind;
        }
        instr.op_count = templates.len() as u8;
        Ok(instr)
    }

    /// Creates a `db`/`dw`/`dd`/`dq` instruction from little-endian element bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` isn't a data declaration or `data` is empty, longer
    /// than 16 bytes or not a whole number of elements.
    pub fn with_declare_data(code: Code, data: &[u8]) -> Result<Self, IsaError> {
        let elem = code.declare_data_element_size();
        if elem == 0 {
            return Err(IsaError::NotDeclareData(code));
        }
        if data.is_empty() || data.len() > 16 || data.len() % elem != 0 {
            return Err(IsaError::DeclareDataLength { code, len: data.len() });
        }
        let mut instr = Self {
            code,
            memory_scale: 1,
            declare_data_len: (data.len() / elem) as u8,
            ..Self::default()
        };
        instr.declare_data[..data.len()].copy_from_slice(data);
        Ok(instr)
    }

    fn set_memory(&mut self, mem: MemoryOperand) {
        self.memory_base = mem.base;
        self.memory_index = mem.index;
        self.memory_scale = mem.scale;
        self.memory_displacement = mem.displacement;
        self.memory_displ_size = mem.displ_size;
        if mem.segment != Register::None {
            self.segment_prefix = mem.segment;
        }
    }

    // ========================================================================
    // Basic fields
    // ========================================================================

    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    #[must_use]
    pub const fn code_size(&self) -> CodeSize {
        self.code_size
    }

    pub const fn set_code_size(&mut self, code_size: CodeSize) {
        self.code_size = code_size;
    }

    #[must_use]
    pub const fn ip(&self) -> u64 {
        self.ip
    }

    pub const fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    /// Instruction length in bytes (0 if unknown).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn set_len(&mut self, len: u8) {
        self.len = len;
    }

    #[must_use]
    pub const fn next_ip(&self) -> u64 {
        self.ip.wrapping_add(self.len as u64)
    }

    /// Number of real operands. Data declarations report 0.
    #[must_use]
    pub const fn op_count(&self) -> u32 {
        self.op_count as u32
    }

    /// Operand kind, `OpKind::Register` for indices past the operand count.
    #[must_use]
    pub fn op_kind(&self, operand: u32) -> OpKind {
        if operand < self.op_count() {
            self.op_kinds.get(operand as usize).copied().unwrap_or_default()
        } else {
            OpKind::Register
        }
    }

    /// Register operand, `Register::None` if the operand isn't a register.
    #[must_use]
    pub fn op_register(&self, operand: u32) -> Register {
        if operand < self.op_count() {
            self.op_registers.get(operand as usize).copied().unwrap_or_default()
        } else {
            Register::None
        }
    }

    /// True if any operand is `OpKind::Memory`.
    #[must_use]
    pub fn has_memory_operand(&self) -> bool {
        (0..self.op_count()).any(|i| self.op_kind(i) == OpKind::Memory)
    }

    // ========================================================================
    // Immediates and branches
    // ========================================================================

    #[must_use]
    pub const fn immediate8(&self) -> u8 {
        self.immediate as u8
    }

    #[must_use]
    pub const fn immediate8_2nd(&self) -> u8 {
        self.immediate8_2nd
    }

    #[must_use]
    pub const fn immediate16(&self) -> u16 {
        self.immediate as u16
    }

    #[must_use]
    pub const fn immediate32(&self) -> u32 {
        self.immediate as u32
    }

    #[must_use]
    pub const fn immediate64(&self) -> u64 {
        self.immediate
    }

    #[must_use]
    pub const fn immediate8to16(&self) -> i16 {
        self.immediate as i8 as i16
    }

    #[must_use]
    pub const fn immediate8to32(&self) -> i32 {
        self.immediate as i8 as i32
    }

    #[must_use]
    pub const fn immediate8to64(&self) -> i64 {
        self.immediate as i8 as i64
    }

    #[must_use]
    pub const fn immediate32to64(&self) -> i64 {
        self.immediate as i32 as i64
    }

    /// Value of an immediate operand, zero- or sign-extended to 64 bits per its kind.
    /// Returns 0 for non-immediate operands.
    #[must_use]
    pub fn immediate(&self, operand: u32) -> u64 {
        match self.op_kind(operand) {
            OpKind::Immediate8 => u64::from(self.immediate8()),
            OpKind::Immediate8_2nd => u64::from(self.immediate8_2nd),
            OpKind::Immediate16 => u64::from(self.immediate16()),
            OpKind::Immediate32 => u64::from(self.immediate32()),
            OpKind::Immediate64 => self.immediate,
            OpKind::Immediate8to16 => self.immediate8to16() as u64,
            OpKind::Immediate8to32 => self.immediate8to32() as u64,
            OpKind::Immediate8to64 => self.immediate8to64() as u64,
            OpKind::Immediate32to64 => self.immediate32to64() as u64,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn near_branch16(&self) -> u16 {
        self.near_branch as u16
    }

    #[must_use]
    pub const fn near_branch32(&self) -> u32 {
        self.near_branch as u32
    }

    #[must_use]
    pub const fn near_branch64(&self) -> u64 {
        self.near_branch
    }

    #[must_use]
    pub const fn far_branch16(&self) -> u16 {
        self.far_branch as u16
    }

    #[must_use]
    pub const fn far_branch32(&self) -> u32 {
        self.far_branch
    }

    #[must_use]
    pub const fn far_branch_selector(&self) -> u16 {
        self.far_branch_selector
    }

    // ========================================================================
    // Memory operand
    // ========================================================================

    #[must_use]
    pub const fn memory_base(&self) -> Register {
        self.memory_base
    }

    #[must_use]
    pub const fn memory_index(&self) -> Register {
        self.memory_index
    }

    #[must_use]
    pub const fn memory_index_scale(&self) -> u32 {
        self.memory_scale
    }

    #[must_use]
    pub const fn memory_displacement64(&self) -> u64 {
        self.memory_displacement as u64
    }

    #[must_use]
    pub const fn memory_displacement32(&self) -> u32 {
        self.memory_displacement as u32
    }

    /// Encoded displacement size: 0, 1, 2, 4 or 8.
    #[must_use]
    pub const fn memory_displ_size(&self) -> u32 {
        self.memory_displ_size
    }

    #[must_use]
    pub const fn memory_size(&self) -> MemorySize {
        self.memory_size
    }

    pub const fn set_memory_size(&mut self, size: MemorySize) {
        self.memory_size = size;
    }

    /// Explicit segment override prefix, `Register::None` if absent.
    #[must_use]
    pub const fn segment_prefix(&self) -> Register {
        self.segment_prefix
    }

    #[must_use]
    pub const fn has_segment_prefix(&self) -> bool {
        !matches!(self.segment_prefix, Register::None)
    }

    /// Sets (or clears with `Register::None`) the segment override.
    ///
    /// # Errors
    ///
    /// Returns [`IsaError::NotSegmentRegister`] for non-segment registers.
    pub fn set_segment_prefix(&mut self, segment: Register) -> Result<(), IsaError> {
        if segment != Register::None && !segment.is_segment() {
            return Err(IsaError::NotSegmentRegister(segment));
        }
        self.segment_prefix = segment;
        Ok(())
    }

    /// Effective segment of the memory operand.
    #[must_use]
    pub fn memory_segment(&self) -> Register {
        if self.has_segment_prefix() {
            return self.segment_prefix;
        }
        match self.memory_base {
            Register::SP | Register::BP | Register::ESP | Register::EBP | Register::RSP | Register::RBP => {
                Register::SS
            }
            _ => Register::DS,
        }
    }

    #[must_use]
    pub const fn is_ip_rel_memory_operand(&self) -> bool {
        matches!(self.memory_base, Register::RIP | Register::EIP)
    }

    /// Absolute target of an `rip`/`eip`-relative memory operand.
    #[must_use]
    pub const fn ip_rel_memory_address(&self) -> u64 {
        let addr = self.next_ip().wrapping_add(self.memory_displacement as u64);
        if matches!(self.memory_base, Register::EIP) {
            addr as u32 as u64
        } else {
            addr
        }
    }

    // ========================================================================
    // Prefixes
    // ========================================================================

    const fn has_prefix(&self, bit: u8) -> bool {
        self.prefixes & bit != 0
    }

    const fn set_prefix(&mut self, bit: u8, value: bool) {
        if value {
            self.prefixes |= bit;
        } else {
            self.prefixes &= !bit;
        }
    }

    #[must_use]
    pub const fn has_xacquire_prefix(&self) -> bool {
        self.has_prefix(PREFIX_XACQUIRE)
    }

    pub const fn set_xacquire_prefix(&mut self, value: bool) {
        self.set_prefix(PREFIX_XACQUIRE, value);
    }

    #[must_use]
    pub const fn has_xrelease_prefix(&self) -> bool {
        self.has_prefix(PREFIX_XRELEASE)
    }

    pub const fn set_xrelease_prefix(&mut self, value: bool) {
        self.set_prefix(PREFIX_XRELEASE, value);
    }

    #[must_use]
    pub const fn has_lock_prefix(&self) -> bool {
        self.has_prefix(PREFIX_LOCK)
    }

    pub const fn set_lock_prefix(&mut self, value: bool) {
        self.set_prefix(PREFIX_LOCK, value);
    }

    #[must_use]
    pub const fn has_rep_prefix(&self) -> bool {
        self.has_prefix(PREFIX_REP)
    }

    /// Same bit as `rep`.
    #[must_use]
    pub const fn has_repe_prefix(&self) -> bool {
        self.has_prefix(PREFIX_REP)
    }

    pub const fn set_rep_prefix(&mut self, value: bool) {
        self.set_prefix(PREFIX_REP, value);
    }

    #[must_use]
    pub const fn has_repne_prefix(&self) -> bool {
        self.has_prefix(PREFIX_REPNE)
    }

    pub const fn set_repne_prefix(&mut self, value: bool) {
        self.set_prefix(PREFIX_REPNE, value);
    }

    // ========================================================================
    // EVEX decorators
    // ========================================================================

    #[must_use]
    pub const fn op_mask(&self) -> Register {
        self.op_mask
    }

    #[must_use]
    pub const fn has_op_mask(&self) -> bool {
        !matches!(self.op_mask, Register::None)
    }

    /// Sets the opmask register (`k1`..`k7`) or clears it with `Register::None`.
    ///
    /// # Errors
    ///
    /// Returns [`IsaError::NotOpMask`] for `k0` and non-opmask registers.
    pub fn set_op_mask(&mut self, mask: Register) -> Result<(), IsaError> {
        if mask != Register::None && (!mask.is_k() || mask == Register::K0) {
            return Err(IsaError::NotOpMask(mask));
        }
        self.op_mask = mask;
        Ok(())
    }

    #[must_use]
    pub const fn zeroing_masking(&self) -> bool {
        self.zeroing_masking
    }

    pub const fn set_zeroing_masking(&mut self, value: bool) {
        self.zeroing_masking = value;
    }

    #[must_use]
    pub const fn rounding_control(&self) -> RoundingControl {
        self.rounding_control
    }

    pub const fn set_rounding_control(&mut self, rc: RoundingControl) {
        self.rounding_control = rc;
    }

    #[must_use]
    pub const fn suppress_all_exceptions(&self) -> bool {
        self.suppress_all_exceptions
    }

    pub const fn set_suppress_all_exceptions(&mut self, value: bool) {
        self.suppress_all_exceptions = value;
    }

    #[must_use]
    pub const fn is_broadcast(&self) -> bool {
        self.broadcast
    }

    /// Turns embedded broadcast on or off, switching the memory size accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`IsaError::NoBroadcast`] when enabling broadcast on a form without one.
    pub fn set_broadcast(&mut self, value: bool) -> Result<(), IsaError> {
        if value {
            let size = self.code.broadcast_memory_size();
            if size == MemorySize::Unknown {
                return Err(IsaError::NoBroadcast(self.code));
            }
            self.memory_size = size;
        } else {
            self.memory_size = self.code.memory_size();
        }
        self.broadcast = value;
        Ok(())
    }

    // ========================================================================
    // Data declarations
    // ========================================================================

    /// Number of declared elements (`db 1,2,3` has 3).
    #[must_use]
    pub const fn declare_data_len(&self) -> usize {
        self.declare_data_len as usize
    }

    #[must_use]
    pub fn declare_byte_value(&self, index: usize) -> u8 {
        self.declare_data.get(index).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn declare_word_value(&self, index: usize) -> u16 {
        let mut bytes = [0; 2];
        if let Some(src) = self.declare_data.get(index * 2..index * 2 + 2) {
            bytes.copy_from_slice(src);
        }
        u16::from_le_bytes(bytes)
    }

    #[must_use]
    pub fn declare_dword_value(&self, index: usize) -> u32 {
        let mut bytes = [0; 4];
        if let Some(src) = self.declare_data.get(index * 4..index * 4 + 4) {
            bytes.copy_from_slice(src);
        }
        u32::from_le_bytes(bytes)
    }

    #[must_use]
    pub fn declare_qword_value(&self, index: usize) -> u64 {
        let mut bytes = [0; 8];
        if let Some(src) = self.declare_data.get(index * 8..index * 8 + 8) {
            bytes.copy_from_slice(src);
        }
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_operands() {
        let instr = Instruction::with_operands(
            Code::Add_rm32_r32,
            &[Operand::Register(Register::EAX), Operand::Register(Register::ECX)],
        )
        .unwrap();
        assert_eq!(instr.op_count(), 2);
        assert_eq!(instr.op_kind(0), OpKind::Register);
        assert_eq!(instr.op_register(1), Register::ECX);
        assert_eq!(instr.op_register(4), Register::None);
        assert!(!instr.has_memory_operand());
    }

    #[test]
    fn test_memory_operand() {
        let mem = MemoryOperand::base(Register::RAX)
            .with_index(Register::RCX, 4)
            .with_displacement(-0x10)
            .with_segment(Register::FS);
        let instr = Instruction::with_operands(
            Code::Mov_r32_rm32,
            &[Operand::Register(Register::EDX), Operand::Memory(mem)],
        )
        .unwrap();
        assert_eq!(instr.op_kind(1), OpKind::Memory);
        assert_eq!(instr.memory_base(), Register::RAX);
        assert_eq!(instr.memory_index_scale(), 4);
        assert_eq!(instr.memory_displ_size(), 1);
        assert_eq!(instr.memory_displacement64() as i64, -0x10);
        assert_eq!(instr.memory_segment(), Register::FS);
        assert_eq!(instr.memory_size(), MemorySize::UInt32);
    }

    #[test]
    fn test_default_segment() {
        let instr = Instruction::with_operands(
            Code::Push_rm64,
            &[Operand::Memory(MemoryOperand::base(Register::RBP).with_displacement(8))],
        )
        .unwrap();
        assert_eq!(instr.memory_segment(), Register::SS);
        assert!(!instr.has_segment_prefix());
    }

    #[test]
    fn test_immediates() {
        let instr = Instruction::with_operands(
            Code::Add_rm32_imm8,
            &[Operand::Register(Register::EAX), Operand::Immediate(-1)],
        )
        .unwrap();
        assert_eq!(instr.op_kind(1), OpKind::Immediate8to32);
        assert_eq!(instr.immediate8to32(), -1);
        assert_eq!(instr.immediate(1), u64::MAX);

        let err = Instruction::with_operands(
            Code::Add_rm32_imm8,
            &[Operand::Register(Register::EAX), Operand::Immediate(0x1234)],
        );
        assert!(matches!(err, Err(IsaError::ImmediateOutOfRange { index: 1, .. })));
    }

    #[test]
    fn test_enter_second_immediate() {
        let instr = Instruction::with_operands(
            Code::Enterq_imm16_imm8,
            &[Operand::Immediate(0x20), Operand::Immediate(1)],
        )
        .unwrap();
        assert_eq!(instr.immediate(0), 0x20);
        assert_eq!(instr.immediate(1), 1);
        assert_eq!(instr.op_kind(1), OpKind::Immediate8_2nd);
    }

    #[test]
    fn test_operand_errors() {
        assert!(matches!(
            Instruction::with_operands(Code::Add_rm32_r32, &[Operand::Register(Register::EAX)]),
            Err(IsaError::OperandCount { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            Instruction::with_operands(
                Code::Add_rm32_r32,
                &[Operand::Immediate(1), Operand::Register(Register::EAX)]
            ),
            Err(IsaError::OperandMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_string_operands() {
        let instr = Instruction::with_operands(
            Code::Movsb_m8_m8,
            &[
                Operand::Memory(MemoryOperand::base(Register::RDI)),
                Operand::Memory(MemoryOperand::base(Register::RSI)),
            ],
        )
        .unwrap();
        assert_eq!(instr.op_kind(0), OpKind::MemoryESRDI);
        assert_eq!(instr.op_kind(1), OpKind::MemorySegRSI);

        assert!(
            Instruction::with_operands(
                Code::Movsb_m8_m8,
                &[
                    Operand::Memory(MemoryOperand::base(Register::RSI)),
                    Operand::Memory(MemoryOperand::base(Register::RSI)),
                ],
            )
            .is_err()
        );
    }

    #[test]
    fn test_declare_data() {
        let instr = Instruction::with_declare_data(Code::DeclareWord, &[0x34, 0x12, 0x78, 0x56]).unwrap();
        assert_eq!(instr.declare_data_len(), 2);
        assert_eq!(instr.declare_word_value(0), 0x1234);
        assert_eq!(instr.declare_word_value(1), 0x5678);
        assert_eq!(instr.op_count(), 0);

        assert!(Instruction::with_declare_data(Code::DeclareDword, &[1, 2, 3]).is_err());
        assert!(Instruction::with_declare_data(Code::DeclareByte, &[0; 17]).is_err());
        assert!(Instruction::with_declare_data(Code::Nopd, &[0]).is_err());
    }

    #[test]
    fn test_prefixes_and_decorators() {
        let mut instr = Instruction::with_operands(
            Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
            &[
                Operand::Register(Register::ZMM1),
                Operand::Register(Register::ZMM2),
                Operand::Memory(MemoryOperand::base(Register::RAX)),
            ],
        )
        .unwrap();
        instr.set_lock_prefix(true);
        instr.set_repne_prefix(true);
        assert!(instr.has_lock_prefix());
        assert!(instr.has_repne_prefix());
        assert!(!instr.has_rep_prefix());
        instr.set_lock_prefix(false);
        assert!(!instr.has_lock_prefix());

        assert!(instr.set_op_mask(Register::K0).is_err());
        instr.set_op_mask(Register::K3).unwrap();
        assert_eq!(instr.op_mask(), Register::K3);

        instr.set_broadcast(true).unwrap();
        assert_eq!(instr.memory_size(), MemorySize::Broadcast512_Float32);
        instr.set_broadcast(false).unwrap();
        assert_eq!(instr.memory_size(), MemorySize::Packed512_Float32);

        assert!(instr.set_segment_prefix(Register::EAX).is_err());
    }

    #[test]
    fn test_ip_relative() {
        let mut instr = Instruction::with_operands(
            Code::Lea_r64_m,
            &[
                Operand::Register(Register::RAX),
                Operand::Memory(MemoryOperand::base(Register::RIP).with_displacement(0x100)),
            ],
        )
        .unwrap();
        instr.set_ip(0x1000);
        instr.set_len(7);
        assert!(instr.is_ip_rel_memory_operand());
        assert_eq!(instr.ip_rel_memory_address(), 0x1107);
    }
}
