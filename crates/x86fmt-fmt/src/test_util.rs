//! Instruction builders shared by unit tests.

use x86fmt_isa::{Code, CodeSize, Instruction, MemoryOperand, OpTemplate, Operand, Register};

/// An instance of `code` with placeholder operands. `memory` picks the memory
/// form of register-or-memory slots.
pub(crate) fn sample_instruction(code: Code, code_size: CodeSize, memory: bool) -> Instruction {
    let mut instruction = if code.is_declare_data() {
        Instruction::with_declare_data(code, &[0x11; 8]).unwrap()
    } else {
        let operands: Vec<Operand> = code
            .op_templates()
            .iter()
            .map(|&template| sample_operand(template, memory))
            .collect();
        Instruction::with_operands(code, &operands).unwrap()
    };
    instruction.set_code_size(code_size);
    instruction
}

fn sample_operand(template: OpTemplate, memory: bool) -> Operand {
    match template {
        OpTemplate::Register => Operand::Register(Register::ECX),
        OpTemplate::RegisterOrMemory if !memory => Operand::Register(Register::EDX),
        OpTemplate::Memory | OpTemplate::RegisterOrMemory => {
            Operand::Memory(MemoryOperand::base(Register::RAX).with_displacement(0x10))
        }
        OpTemplate::NearBranch16 | OpTemplate::NearBranch32 | OpTemplate::NearBranch64 => Operand::Branch(0x1234),
        OpTemplate::FarBranch16 | OpTemplate::FarBranch32 => Operand::FarBranch {
            selector: 0x10,
            offset: 0x20,
        },
        OpTemplate::StringSource => Operand::Memory(MemoryOperand::base(Register::RSI)),
        OpTemplate::StringDest | OpTemplate::StringSegDest => Operand::Memory(MemoryOperand::base(Register::RDI)),
        _ => Operand::Immediate(1),
    }
}

/// Every code in both operand forms and all code sizes.
pub(crate) fn all_samples() -> impl Iterator<Item = Instruction> {
    Code::values().flat_map(|code| {
        [CodeSize::Unknown, CodeSize::Code16, CodeSize::Code32, CodeSize::Code64]
            .into_iter()
            .flat_map(move |size| [false, true].into_iter().map(move |memory| sample_instruction(code, size, memory)))
    })
}
