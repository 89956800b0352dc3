//! Integration tests for the formatting pipeline and the CLI.

use std::io::Write;
use std::process::Command;

use x86fmt::{Error, FormatterFactory, InstructionParser, SymbolMap, Syntax, format_lines};

const PROGRAM: &str = "\
# prologue
Mov_r32_rm32 eax, [rbx+8]

Add_rm32_imm8 ecx, 5
Call_rel32_64 0x401000
";

fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn format_all(syntax: Syntax, text: &str) -> Vec<String> {
    let factory = FormatterFactory::new(syntax, syntax.default_options()).expect("factory");
    let parser = InstructionParser::new();
    format_lines(&factory, &parser, &lines(text))
        .into_iter()
        .map(|result| result.expect("format").text())
        .collect()
}

fn x86fmt() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_x86fmt"));
    command.args(["--color", "never"]);
    command
}

#[test]
fn test_program_in_each_dialect() {
    let nasm = format_all(Syntax::Nasm, PROGRAM);
    assert_eq!(nasm[..2], ["mov eax,[rbx+8]", "add ecx,5"]);
    assert!(nasm[2].starts_with("call ") && nasm[2].ends_with("401000h"), "{}", nasm[2]);

    let gas = format_all(Syntax::Gas, PROGRAM);
    assert_eq!(gas[..2], ["mov 8(%rbx),%eax", "add $5,%ecx"]);
    assert!(gas[2].starts_with("call 0x") && gas[2].ends_with("401000"), "{}", gas[2]);
}

#[test]
fn test_line_numbers_skip_blank_and_comments() {
    let factory = FormatterFactory::new(Syntax::Masm, Syntax::Masm.default_options()).expect("factory");
    let parser = InstructionParser::new();
    let numbers: Vec<usize> = format_lines(&factory, &parser, &lines(PROGRAM))
        .into_iter()
        .map(|result| result.expect("format").line)
        .collect();
    assert_eq!(numbers, [2, 4, 5]);
}

#[test]
fn test_symbols_and_errors() {
    let symbols: SymbolMap = [(0x40_1000, "main".to_string())].into_iter().collect();
    let factory = FormatterFactory::new(Syntax::Nasm, Syntax::Nasm.default_options())
        .expect("factory")
        .with_symbols(symbols);
    let parser = InstructionParser::new();
    let input = lines("Call_rel32_64 0x401000\nMov_r32_rm32 eax\n");
    let results = format_lines(&factory, &parser, &input);
    assert_eq!(results[0].as_ref().expect("call").text(), "call main");
    assert!(matches!(results[1], Err(Error::Parse { line: 2, .. })));
}

#[test]
fn test_uppercase_option() {
    let mut options = Syntax::Masm.default_options();
    options.uppercase_all = true;
    let factory = FormatterFactory::new(Syntax::Masm, options).expect("factory");
    let parser = InstructionParser::new();
    let instr = parser
        .parse_line("Mov_r32_rm32 eax, [rbx+8]")
        .expect("parse")
        .expect("instruction");
    assert_eq!(factory.build().format_to_string(&instr), "MOV EAX,[RBX+8]");
}

#[test]
fn test_cli_formats_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(PROGRAM.as_bytes()).expect("write");

    let output = x86fmt()
        .args(["format", "--syntax", "gas", "--symbol", "0x401000=main"])
        .arg(file.path())
        .output()
        .expect("run x86fmt");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "mov 8(%rbx),%eax\nadd $5,%ecx\ncall main\n"
    );
}

#[test]
fn test_cli_inline_and_failure() {
    let output = x86fmt()
        .args(["format", "-e", "Add_rm32_imm8 ecx, 5", "-e", "Nope eax"])
        .output()
        .expect("run x86fmt");
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "add ecx,5\n");
}

#[test]
fn test_cli_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = x86fmt()
        .arg("format")
        .arg(dir.path().join("missing.txt"))
        .output()
        .expect("run x86fmt");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_number_and_codes() {
    let output = x86fmt()
        .args(["number", "255", "--syntax", "gas"])
        .output()
        .expect("run x86fmt");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0xFF\n");

    let output = x86fmt().args(["codes", "add_rm32_imm8"]).output().expect("run x86fmt");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Add_rm32_imm8"));
}
