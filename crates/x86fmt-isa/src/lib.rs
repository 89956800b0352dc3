//! x86 instruction model.
//!
//! This crate holds the read interface the formatters consume: opcode forms
//! ([`Code`]), registers, operand kinds, memory sizes and the [`Instruction`]
//! value itself. Nothing here decodes bytes; instructions are assembled from
//! typed operands with [`Instruction::with_operands`].
//!
//! ```ignore
//! use x86fmt_isa::{Code, CodeSize, Instruction, Operand, Register};
//!
//! let mut instr = Instruction::with_operands(
//!     Code::Add_rm32_r32,
//!     &[Operand::Register(Register::EAX), Operand::Register(Register::ECX)],
//! )?;
//! instr.set_code_size(CodeSize::Code64);
//! ```

mod code;
mod error;
mod instruction;
mod memory_size;
mod op_kind;
mod register;
mod types;

pub use code::{Code, CodeFlags, OpTemplate};
pub use error::IsaError;
pub use instruction::{Instruction, MemoryOperand, Operand};
pub use memory_size::MemorySize;
pub use op_kind::OpKind;
pub use register::Register;
pub use types::{CodeSize, OpAccess, RoundingControl};

/// Maximum number of operands an instruction (or formatted operand list) can have.
pub const MAX_OP_COUNT: usize = 5;
