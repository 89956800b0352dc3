//! Codes command.

use x86fmt::{Code, OpTemplate};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal;

/// Handle the `codes` command.
pub fn cmd_codes(filter: Option<&str>) -> i32 {
    let filter = filter.map(str::to_ascii_lowercase);
    let mut count = 0usize;
    let matches = |code: Code| {
        filter
            .as_deref()
            .is_none_or(|filter| code.name().to_ascii_lowercase().contains(filter))
    };
    for code in Code::values().filter(|&code| code != Code::INVALID && matches(code)) {
        println!("{}", describe(code));
        count += 1;
    }
    if count == 0 {
        terminal::warning("no matching codes");
        return EXIT_FAILURE;
    }
    EXIT_SUCCESS
}

fn describe(code: Code) -> String {
    let templates: Vec<&str> = code.op_templates().iter().map(|&template| template_name(template)).collect();
    if templates.is_empty() {
        code.name().to_string()
    } else {
        format!("{:<32} {}", code.name(), templates.join(", "))
    }
}

const fn template_name(template: OpTemplate) -> &'static str {
    match template {
        OpTemplate::Register => "reg",
        OpTemplate::Memory => "mem",
        OpTemplate::RegisterOrMemory => "reg/mem",
        OpTemplate::Immediate8 | OpTemplate::Immediate8_2nd => "imm8",
        OpTemplate::Immediate16 => "imm16",
        OpTemplate::Immediate32 => "imm32",
        OpTemplate::Immediate64 => "imm64",
        OpTemplate::Immediate8to16 | OpTemplate::Immediate8to32 | OpTemplate::Immediate8to64 => "simm8",
        OpTemplate::Immediate32to64 => "simm32",
        OpTemplate::NearBranch16 | OpTemplate::NearBranch32 | OpTemplate::NearBranch64 => "target",
        OpTemplate::FarBranch16 | OpTemplate::FarBranch32 => "sel:off",
        OpTemplate::StringSource | OpTemplate::StringDest | OpTemplate::StringSegDest => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_lists_templates() {
        assert!(describe(Code::Add_rm32_imm8).ends_with("reg/mem, simm8"));
        assert_eq!(describe(Code::Nopd), "Nopd");
    }
}
