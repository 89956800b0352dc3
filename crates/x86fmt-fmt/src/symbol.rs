//! Symbol lookup for address-like operands.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use x86fmt_isa::{Instruction, MemorySize};

use crate::FormatterTextKind;

/// Flags describing how a resolved symbol is written.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SymbolFlags(u32);

impl SymbolFlags {
    pub const NONE: Self = Self(0);
    /// The symbol is relative to the instruction (no `offset` keyword in MASM).
    pub const RELATIVE: Self = Self(1 << 0);
    /// The displacement from the symbol is signed (`sym-8` instead of `sym+FFF8`).
    pub const SIGNED: Self = Self(1 << 1);

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for SymbolFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One piece of symbol text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextPart {
    pub text: String,
    pub kind: FormatterTextKind,
}

/// A resolved symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolResult {
    /// Address of the symbol. If it differs from the looked-up address the
    /// difference is written as `+N`/`-N`.
    pub address: u64,
    pub parts: Vec<TextPart>,
    pub flags: SymbolFlags,
    /// Size of the data at the symbol; lets MASM drop a redundant `ptr` keyword.
    pub symbol_size: Option<MemorySize>,
}

impl SymbolResult {
    /// A label at `address`.
    #[must_use]
    pub fn new(address: u64, text: impl Into<String>) -> Self {
        Self::with_kind(address, text, FormatterTextKind::Label)
    }

    #[must_use]
    pub fn with_kind(address: u64, text: impl Into<String>, kind: FormatterTextKind) -> Self {
        Self {
            address,
            parts: vec![TextPart { text: text.into(), kind }],
            flags: SymbolFlags::NONE,
            symbol_size: None,
        }
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: SymbolFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub const fn with_symbol_size(mut self, size: MemorySize) -> Self {
        self.symbol_size = Some(size);
        self
    }
}

/// Resolves addresses to symbols.
pub trait SymbolResolver: Send {
    /// Looks up `address`. `address_size` is the operand's address width in
    /// bytes (2, 4 or 8). `None` means "no symbol"; the number is written instead.
    fn symbol(
        &mut self,
        instruction: &Instruction,
        operand: u32,
        instruction_operand: Option<u32>,
        address: u64,
        address_size: u32,
    ) -> Option<SymbolResult>;
}

/// A resolver backed by a map of exact addresses.
///
/// Cheap to clone; clones share the map.
#[derive(Clone, Debug, Default)]
pub struct SymbolMap {
    symbols: Arc<FxHashMap<u64, String>>,
}

impl SymbolMap {
    #[must_use]
    pub fn new(symbols: FxHashMap<u64, String>) -> Self {
        Self {
            symbols: Arc::new(symbols),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn get(&self, address: u64) -> Option<&str> {
        self.symbols.get(&address).map(String::as_str)
    }
}

impl FromIterator<(u64, String)> for SymbolMap {
    fn from_iter<T: IntoIterator<Item = (u64, String)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl SymbolResolver for SymbolMap {
    fn symbol(
        &mut self,
        instruction: &Instruction,
        _operand: u32,
        _instruction_operand: Option<u32>,
        address: u64,
        _address_size: u32,
    ) -> Option<SymbolResult> {
        let name = self.symbols.get(&address)?;
        let kind = if instruction.code().is_call_near() {
            FormatterTextKind::Function
        } else {
            FormatterTextKind::Label
        };
        Some(SymbolResult::with_kind(address, name.clone(), kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_map_lookup() {
        let mut map: SymbolMap = [(0x1000, "main".to_string())].into_iter().collect();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(0x1000), Some("main"));

        let instr = Instruction::default();
        let found = map.symbol(&instr, 0, Some(0), 0x1000, 8).unwrap();
        assert_eq!(found.address, 0x1000);
        assert_eq!(found.parts[0].text, "main");
        assert_eq!(found.parts[0].kind, FormatterTextKind::Label);
        assert!(map.symbol(&instr, 0, Some(0), 0x1001, 8).is_none());
    }

    #[test]
    fn test_flags() {
        let flags = SymbolFlags::RELATIVE | SymbolFlags::SIGNED;
        assert!(flags.contains(SymbolFlags::SIGNED));
        assert!(!SymbolFlags::NONE.contains(SymbolFlags::RELATIVE));
        let sym = SymbolResult::new(0, "x").with_flags(flags).with_symbol_size(MemorySize::UInt32);
        assert_eq!(sym.symbol_size, Some(MemorySize::UInt32));
    }
}
