//! Styled terminal output.
//!
//! Formatted instructions go to stdout, colored by the text kind the
//! formatter tagged each piece with. Status messages go to stderr.

use console::{StyledObject, style};
use x86fmt::{FormattedLine, FormatterTextKind};

use crate::cli::ColorArg;

/// Apply the `--color` choice to both streams.
pub fn set_color(color: ColorArg) {
    match color {
        ColorArg::Auto => {}
        ColorArg::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorArg::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
    }
}

fn styled(text: &str, kind: FormatterTextKind) -> StyledObject<&str> {
    let text = style(text);
    match kind {
        FormatterTextKind::Mnemonic => text.cyan().bold(),
        FormatterTextKind::Prefix | FormatterTextKind::Directive => text.magenta(),
        FormatterTextKind::Keyword => text.blue(),
        FormatterTextKind::Register => text.green(),
        FormatterTextKind::Number | FormatterTextKind::SelectorValue => text.yellow(),
        FormatterTextKind::Decorator => text.magenta().dim(),
        FormatterTextKind::LabelAddress | FormatterTextKind::FunctionAddress => text.yellow().underlined(),
        FormatterTextKind::Label | FormatterTextKind::Function | FormatterTextKind::Data => text.white().bold(),
        FormatterTextKind::Operator | FormatterTextKind::Punctuation | FormatterTextKind::Text => text,
    }
}

/// Render a formatted line with per-kind colors.
pub fn render_line(line: &FormattedLine) -> String {
    line.parts
        .iter()
        .map(|(text, kind)| styled(text, *kind).to_string())
        .collect()
}

/// Print a formatted line to stdout, optionally prefixed with its line number.
pub fn print_line(line: &FormattedLine, line_numbers: bool) {
    if line_numbers {
        println!("{} {}", style(format!("{:>5}", line.line)).dim(), render_line(line));
    } else {
        println!("{}", render_line(line));
    }
}

// ============================================================================
// Styled output helpers
// ============================================================================

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_plain() {
        console::set_colors_enabled(false);
        let line = FormattedLine {
            line: 3,
            parts: vec![
                ("mov".to_string(), FormatterTextKind::Mnemonic),
                (" ".to_string(), FormatterTextKind::Text),
                ("eax".to_string(), FormatterTextKind::Register),
                (",".to_string(), FormatterTextKind::Punctuation),
                ("1".to_string(), FormatterTextKind::Number),
            ],
        };
        assert_eq!(render_line(&line), "mov eax,1");
    }
}
