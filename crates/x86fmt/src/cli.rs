//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use x86fmt::{CcGroup, Error, FormatterOptions, MemorySizeOptions, NumberBase, Result, SymbolMap, Syntax, parse_number};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "x86fmt")]
#[command(about = "x86 instruction formatter - NASM, MASM and GAS syntax")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color output by text kind
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format textual instructions read from a file, stdin or the command line
    Format {
        /// Input file, `-` for stdin. Ignored when instructions are given inline.
        #[arg(value_name = "FILE", default_value = "-")]
        input: PathBuf,

        /// Instructions to format instead of reading FILE
        #[arg(short = 'e', long = "instr", value_name = "INSTR")]
        instructions: Vec<String>,

        /// Number of worker threads (0 = auto)
        #[arg(short = 'j', long, default_value = "0")]
        jobs: usize,

        /// Prefix each line with its input line number
        #[arg(long)]
        line_numbers: bool,

        #[command(flatten)]
        style: StyleArgs,
    },
    /// List opcode forms and their operand templates
    Codes {
        /// Only list codes whose name contains FILTER (case-insensitive)
        #[arg(value_name = "FILTER")]
        filter: Option<String>,
    },
    /// Render a number with the numeric formatting options
    Number {
        /// Value, `0x`/`0o`/`0b` prefixed or decimal, optionally negative
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,

        /// Width in bits
        #[arg(long, value_enum, default_value = "64")]
        width: WidthArg,

        /// Format as a signed number
        #[arg(long)]
        signed: bool,

        #[command(flatten)]
        style: StyleArgs,
    },
}

/// Formatter options shared by the formatting commands.
#[derive(Args, Clone, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct StyleArgs {
    /// Assembler syntax
    #[arg(short, long, value_enum, default_value = "nasm")]
    pub syntax: SyntaxArg,

    /// Upper-case everything
    #[arg(long)]
    pub uppercase: bool,

    /// Number base
    #[arg(long, value_enum, default_value = "hex")]
    pub base: BaseArg,

    /// Digit group separator (e.g. `_`)
    #[arg(long, value_name = "SEP")]
    pub digit_separator: Option<String>,

    /// Lower-case hex digits
    #[arg(long)]
    pub lowercase_hex: bool,

    /// Add leading zeros to numbers
    #[arg(long)]
    pub leading_zeros: bool,

    /// Show signed immediates as negative numbers
    #[arg(long)]
    pub signed_immediates: bool,

    /// Condition code spelling, e.g. `ae=1` for `jnb`
    #[arg(long = "cc", value_name = "GROUP=INDEX")]
    pub cc: Vec<String>,

    /// Keep pseudo-op immediates (`cmpps xmm1,xmm2,0` instead of `cmpeqps`)
    #[arg(long)]
    pub no_pseudo_ops: bool,

    /// When to show memory size keywords
    #[arg(long, value_enum, default_value = "default")]
    pub memory_size: MemorySizeArg,

    /// Keep RIP-relative operands as `[rip+displ]`
    #[arg(long)]
    pub rip_relative: bool,

    /// Hide `short`/`near` branch size keywords
    #[arg(long)]
    pub no_branch_size: bool,

    /// Space after the operand separator
    #[arg(long)]
    pub space_after_comma: bool,

    /// Column of the first operand (0 = single space)
    #[arg(long, default_value = "0")]
    pub first_operand_column: u32,

    /// Tab size used to reach the operand column (0 = spaces only)
    #[arg(long, default_value = "0")]
    pub tab_size: u32,

    /// GAS: registers without `%`
    #[arg(long)]
    pub naked_registers: bool,

    /// GAS: always add mnemonic size suffixes
    #[arg(long)]
    pub size_suffix: bool,

    /// Symbol for an address, e.g. `0x401000=main` (repeatable)
    #[arg(long = "symbol", value_name = "ADDR=NAME")]
    pub symbols: Vec<String>,
}

impl StyleArgs {
    /// Maps the flags onto the dialect's default options.
    pub fn to_options(&self) -> Result<FormatterOptions> {
        let syntax = Syntax::from(self.syntax);
        let mut options = syntax.default_options();
        options.uppercase_all = self.uppercase;
        options.set_number_base(self.base.into());
        if let Some(separator) = &self.digit_separator {
            options.digit_separator.clone_from(separator);
        }
        options.uppercase_hex = !self.lowercase_hex;
        options.leading_zeros = self.leading_zeros;
        options.signed_immediate_operands = self.signed_immediates;
        options.use_pseudo_ops = !self.no_pseudo_ops;
        options.set_memory_size_options(self.memory_size.into());
        options.rip_relative_addresses = self.rip_relative;
        options.show_branch_size = !self.no_branch_size;
        options.space_after_operand_separator = self.space_after_comma;
        options.first_operand_char_index = self.first_operand_column;
        options.tab_size = self.tab_size;
        options.gas_naked_registers = self.naked_registers;
        options.gas_show_mnemonic_size_suffix = self.size_suffix;
        for selector in &self.cc {
            let (group, index) = selector
                .split_once('=')
                .ok_or_else(|| Error::InvalidOption(format!("expected GROUP=INDEX, got `{selector}`")))?;
            let group: CcGroup = group.parse()?;
            let index = index
                .parse()
                .map_err(|_| Error::InvalidOption(format!("invalid cc index `{index}`")))?;
            options.set_cc(group, index)?;
        }
        Ok(options)
    }

    /// Symbols given with `--symbol`, `None` when there are none.
    pub fn symbol_map(&self) -> Result<Option<SymbolMap>> {
        if self.symbols.is_empty() {
            return Ok(None);
        }
        let symbols = self
            .symbols
            .iter()
            .map(|entry| -> Result<(u64, String)> {
                let (address, name) = entry
                    .split_once('=')
                    .filter(|(_, name)| !name.is_empty())
                    .ok_or_else(|| Error::InvalidOption(format!("expected ADDR=NAME, got `{entry}`")))?;
                let value = parse_number(address).map_err(|e| Error::InvalidOption(format!("`{address}`: {e}")))?;
                let address = u64::try_from(value)
                    .map_err(|_| Error::InvalidOption(format!("address out of range `{address}`")))?;
                Ok((address, name.to_string()))
            })
            .collect::<Result<SymbolMap>>()?;
        Ok(Some(symbols))
    }
}

// ============================================================================
// Value enums
// ============================================================================

/// Assembler syntax.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SyntaxArg {
    #[default]
    Nasm,
    Masm,
    Gas,
}

impl From<SyntaxArg> for Syntax {
    fn from(arg: SyntaxArg) -> Self {
        match arg {
            SyntaxArg::Nasm => Self::Nasm,
            SyntaxArg::Masm => Self::Masm,
            SyntaxArg::Gas => Self::Gas,
        }
    }
}

/// Number base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BaseArg {
    #[default]
    Hex,
    Dec,
    Oct,
    Bin,
}

impl From<BaseArg> for NumberBase {
    fn from(arg: BaseArg) -> Self {
        match arg {
            BaseArg::Hex => Self::Hexadecimal,
            BaseArg::Dec => Self::Decimal,
            BaseArg::Oct => Self::Octal,
            BaseArg::Bin => Self::Binary,
        }
    }
}

/// Memory size keyword display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MemorySizeArg {
    #[default]
    Default,
    Always,
    Minimal,
    Never,
}

impl From<MemorySizeArg> for MemorySizeOptions {
    fn from(arg: MemorySizeArg) -> Self {
        match arg {
            MemorySizeArg::Default => Self::Default,
            MemorySizeArg::Always => Self::Always,
            MemorySizeArg::Minimal => Self::Minimal,
            MemorySizeArg::Never => Self::Never,
        }
    }
}

/// Number width for the `number` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum WidthArg {
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[default]
    #[value(name = "64")]
    W64,
}

/// Colored output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    #[default]
    Auto,
    Always,
    Never,
}
