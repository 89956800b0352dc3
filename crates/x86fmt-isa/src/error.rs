//! Instruction construction errors.

use thiserror::Error;

use crate::{Code, OpTemplate};

/// Error building or modifying an [`crate::Instruction`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IsaError {
    #[error("{code:?} takes {expected} operand(s), got {actual}")]
    OperandCount {
        code: Code,
        expected: usize,
        actual: usize,
    },

    #[error("operand {index} of {code:?} must be {template:?}")]
    OperandMismatch {
        code: Code,
        index: usize,
        template: OpTemplate,
    },

    #[error("immediate 0x{value:X} does not fit operand {index} of {code:?}")]
    ImmediateOutOfRange { code: Code, index: usize, value: i128 },

    #[error("invalid declared data length {len} for {code:?}")]
    DeclareDataLength { code: Code, len: usize },

    #[error("{0:?} is not a data declaration")]
    NotDeclareData(Code),

    #[error("{0:?} is not a segment register")]
    NotSegmentRegister(crate::Register),

    #[error("{0:?} is not an opmask register (k1-k7)")]
    NotOpMask(crate::Register),

    #[error("{0:?} has no broadcast form")]
    NoBroadcast(Code),

    #[error("invalid code {0}")]
    InvalidCode(u16),

    #[error("invalid code size {0}")]
    InvalidCodeSize(u32),
}
