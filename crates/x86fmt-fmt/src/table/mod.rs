//! Decoding of the compressed rule and string tables.
//!
//! Both rule tables share one layout: one entry per [`Code`], in code order.
//! An entry starts with a flag byte whose low 7 bits select the rule kind and
//! whose top bit asks for a `v` in front of the mnemonic. The payload that
//! follows is the mnemonic's string index and the kind's fields. Kind 0 is a
//! back-reference: the previous full entry is decoded again with the new `v`
//! bit, which keeps long runs of identical forms down to a single byte each.

mod strings_data;

use std::sync::Arc;

use x86fmt_isa::{Code, CodeSize, Register};

use crate::error::TableError;
use crate::pseudo_ops::{PseudoOps, PseudoOpsKind};

pub(crate) use strings_data::STRINGS_DATA;

/// Kind tag of the back-reference entry.
pub(crate) const KIND_PREVIOUS: u8 = 0;
const FLAG_V: u8 = 0x80;
const KIND_MASK: u8 = 0x7F;

// ============================================================================
// Byte cursor
// ============================================================================

/// Cursor over a table blob.
#[derive(Debug)]
pub(crate) struct DataReader<'a> {
    data: &'a [u8],
    index: usize,
}

impl<'a> DataReader<'a> {
    pub(crate) const fn new(data: &'a [u8]) -> Self {
        Self { data, index: 0 }
    }

    pub(crate) const fn index(&self) -> usize {
        self.index
    }

    pub(crate) const fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) const fn can_read(&self) -> bool {
        self.index < self.data.len()
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, TableError> {
        let byte = *self
            .data
            .get(self.index)
            .ok_or(TableError::Truncated { offset: self.index })?;
        self.index += 1;
        Ok(byte)
    }

    /// LEB128, at most 5 bytes.
    pub(crate) fn read_compressed_u32(&mut self) -> Result<u32, TableError> {
        let start = self.index;
        let mut result = 0u32;
        for shift in (0..35).step_by(7) {
            let byte = self.read_u8()?;
            result |= u32::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }
        Err(TableError::Overlong { offset: start })
    }

    pub(crate) fn read_bool(&mut self) -> Result<bool, TableError> {
        let offset = self.index;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(TableError::InvalidBool { value, offset }),
        }
    }

    /// A suffix character; 0 means "no suffix".
    pub(crate) fn read_char(&mut self) -> Result<Option<char>, TableError> {
        let offset = self.index;
        match self.read_u8()? {
            0 => Ok(None),
            value if value.is_ascii_graphic() => Ok(Some(char::from(value))),
            value => Err(TableError::InvalidValue {
                what: "suffix character",
                value: u32::from(value),
                offset,
            }),
        }
    }

    pub(crate) fn read_register(&mut self) -> Result<Register, TableError> {
        let offset = self.index;
        let value = self.read_u8()?;
        Register::from_index(value).ok_or(TableError::InvalidValue {
            what: "register",
            value: u32::from(value),
            offset,
        })
    }

    pub(crate) fn read_code_size(&mut self) -> Result<CodeSize, TableError> {
        let offset = self.index;
        let value = self.read_u8()?;
        CodeSize::try_from(value).map_err(|_| TableError::InvalidValue {
            what: "code size",
            value: u32::from(value),
            offset,
        })
    }

    /// A bitness field: 0 (any), 16, 32 or 64.
    pub(crate) fn read_bitness(&mut self) -> Result<u32, TableError> {
        let offset = self.index;
        match self.read_compressed_u32()? {
            value @ (0 | 16 | 32 | 64) => Ok(value),
            value => Err(TableError::InvalidValue {
                what: "bitness",
                value,
                offset,
            }),
        }
    }

    /// A small index field that must be below `limit`.
    pub(crate) fn read_index(&mut self, what: &'static str, limit: u32) -> Result<u32, TableError> {
        let offset = self.index;
        let value = self.read_compressed_u32()?;
        if value < limit {
            Ok(value)
        } else {
            Err(TableError::InvalidValue { what, value, offset })
        }
    }

    pub(crate) fn read_string(&mut self, strings: &Strings) -> Result<String, TableError> {
        let index = self.read_compressed_u32()?;
        strings.get(index).map(str::to_string)
    }
}

// ============================================================================
// String table
// ============================================================================

/// Decoded mnemonic strings.
#[derive(Debug)]
pub(crate) struct Strings(Vec<String>);

impl Strings {
    /// Decodes a string blob: a compressed count, then `len: u8` + ASCII bytes
    /// per string.
    pub(crate) fn read(data: &[u8]) -> Result<Self, TableError> {
        let mut reader = DataReader::new(data);
        let count = reader.read_compressed_u32()? as usize;
        let mut strings = Vec::with_capacity(count);
        for index in 0..count {
            let len = usize::from(reader.read_u8()?);
            let start = reader.index();
            let bytes = data
                .get(start..start + len)
                .ok_or(TableError::Truncated { offset: start })?;
            if !bytes.is_ascii() {
                return Err(TableError::InvalidUtf8 { index });
            }
            let text = std::str::from_utf8(bytes).map_err(|_| TableError::InvalidUtf8 { index })?;
            strings.push(text.to_string());
            reader.set_index(start + len);
        }
        if reader.can_read() {
            return Err(TableError::TrailingBytes {
                remaining: data.len() - reader.index(),
            });
        }
        Ok(Self(strings))
    }

    pub(crate) fn get(&self, index: u32) -> Result<&str, TableError> {
        self.0
            .get(index as usize)
            .map(String::as_str)
            .ok_or(TableError::StringIndex {
                index,
                count: self.0.len(),
            })
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

// ============================================================================
// Rule table
// ============================================================================

/// Decoded entry header passed to a table's rule reader.
#[derive(Debug)]
pub(crate) struct EntryHeader {
    pub(crate) kind: u8,
    /// Mnemonic with the `v` prefix already applied.
    pub(crate) mnemonic: String,
    pub(crate) offset: usize,
}

/// Decodes one rule per [`Code`] from `data`.
///
/// `read_rule` is called with the entry header and a reader positioned at the
/// kind's first field; it must consume exactly the kind's fields.
pub(crate) fn read_rules<R, F>(data: &[u8], strings: &Strings, mut read_rule: F) -> Result<Vec<R>, TableError>
where
    F: FnMut(&EntryHeader, &mut DataReader<'_>, &Strings) -> Result<R, TableError>,
{
    let mut reader = DataReader::new(data);
    let mut rules = Vec::with_capacity(Code::COUNT);
    // (kind, payload offset) of the last full entry
    let mut previous: Option<(u8, usize)> = None;

    for _ in 0..Code::COUNT {
        let offset = reader.index();
        let flag = reader.read_u8()?;
        let add_v = flag & FLAG_V != 0;
        let own_kind = flag & KIND_MASK;

        let (kind, resume) = if own_kind == KIND_PREVIOUS {
            let (kind, payload) = previous.ok_or(TableError::NoPrevious { offset })?;
            let resume = reader.index();
            reader.set_index(payload);
            (kind, Some(resume))
        } else {
            previous = Some((own_kind, reader.index()));
            (own_kind, None)
        };

        let base = reader.read_string(strings)?;
        let mnemonic = if add_v { format!("v{base}") } else { base };
        let header = EntryHeader { kind, mnemonic, offset };
        rules.push(read_rule(&header, &mut reader, strings)?);

        if let Some(resume) = resume {
            reader.set_index(resume);
        }
    }

    if reader.can_read() {
        return Err(TableError::TrailingBytes {
            remaining: data.len() - reader.index(),
        });
    }
    Ok(rules)
}

// ============================================================================
// Shared field readers
// ============================================================================

pub(crate) fn read_pseudo_ops(reader: &mut DataReader<'_>, pseudo_ops: &PseudoOps) -> Result<Arc<[String]>, TableError> {
    let offset = reader.index();
    let kind = PseudoOpsKind::from_selector(reader.read_u8()?, offset)?;
    Ok(pseudo_ops.get(kind))
}

pub(crate) fn read_cc(reader: &mut DataReader<'_>) -> Result<u32, TableError> {
    reader.read_index("condition code", 16)
}

/// Reads `extra` more mnemonics after `first`.
pub(crate) fn read_mnemonics(
    first: &str,
    extra: usize,
    reader: &mut DataReader<'_>,
    strings: &Strings,
) -> Result<Vec<String>, TableError> {
    let mut mnemonics = Vec::with_capacity(extra + 1);
    mnemonics.push(first.to_string());
    for _ in 0..extra {
        mnemonics.push(reader.read_string(strings)?);
    }
    Ok(mnemonics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<u8> {
        let mut out = vec![u8::try_from(names.len()).unwrap()];
        for name in names {
            out.push(u8::try_from(name.len()).unwrap());
            out.extend_from_slice(name.as_bytes());
        }
        out
    }

    #[test]
    fn test_compressed_u32() {
        let mut reader = DataReader::new(&[0x05, 0xE5, 0x8E, 0x26, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert_eq!(reader.read_compressed_u32().unwrap(), 5);
        assert_eq!(reader.read_compressed_u32().unwrap(), 624_485);
        assert_eq!(reader.read_compressed_u32().unwrap(), u32::MAX);
        assert!(!reader.can_read());
        assert_eq!(reader.read_u8(), Err(TableError::Truncated { offset: 9 }));
    }

    #[test]
    fn test_overlong_and_truncated() {
        let mut reader = DataReader::new(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]);
        assert_eq!(reader.read_compressed_u32(), Err(TableError::Overlong { offset: 0 }));

        let mut reader = DataReader::new(&[0x80]);
        assert_eq!(reader.read_compressed_u32(), Err(TableError::Truncated { offset: 1 }));
    }

    #[test]
    fn test_field_validation() {
        let mut reader = DataReader::new(&[2, 0xFF, 9, 0, b'l', 1]);
        assert_eq!(reader.read_bool(), Err(TableError::InvalidBool { value: 2, offset: 0 }));
        assert!(matches!(
            reader.read_register(),
            Err(TableError::InvalidValue { what: "register", .. })
        ));
        assert!(matches!(
            reader.read_code_size(),
            Err(TableError::InvalidValue { what: "code size", .. })
        ));
        assert_eq!(reader.read_char().unwrap(), None);
        assert_eq!(reader.read_char().unwrap(), Some('l'));
        assert!(matches!(
            reader.read_bitness(),
            Err(TableError::InvalidValue { what: "bitness", value: 1, .. })
        ));
    }

    #[test]
    fn test_strings() {
        let data = strings(&["add", "mov"]);
        let table = Strings::read(&data).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).unwrap(), "mov");
        assert_eq!(table.get(2), Err(TableError::StringIndex { index: 2, count: 2 }));

        let mut trailing = data;
        trailing.push(0);
        assert_eq!(Strings::read(&trailing).unwrap_err(), TableError::TrailingBytes { remaining: 1 });
        assert!(matches!(Strings::read(&[2, 3, b'a']), Err(TableError::Truncated { .. })));
    }

    #[test]
    fn test_builtin_strings_decode() {
        let table = Strings::read(&STRINGS_DATA).unwrap();
        assert!(table.len() > 100);
        assert!((0..table.len()).any(|i| table.get(u32::try_from(i).unwrap()).unwrap() == "mov"));
    }

    #[test]
    fn test_previous_reuses_payload() {
        let names = strings(&["add", "xor"]);
        let table = Strings::read(&names).unwrap();
        // kind 1 "add" field 7, then PREVIOUS with v, then PREVIOUS plain, ...
        let mut data = vec![1, 0, 7, KIND_PREVIOUS | FLAG_V, KIND_PREVIOUS];
        for _ in 3..Code::COUNT {
            data.extend_from_slice(&[2, 1]);
        }
        let rules = read_rules(&data, &table, |header, reader, _| {
            let field = if header.kind == 1 { reader.read_u8()? } else { 0 };
            Ok((header.kind, header.mnemonic.clone(), field))
        })
        .unwrap();
        assert_eq!(rules.len(), Code::COUNT);
        assert_eq!(rules[0], (1, "add".to_string(), 7));
        assert_eq!(rules[1], (1, "vadd".to_string(), 7));
        assert_eq!(rules[2], (1, "add".to_string(), 7));
        assert_eq!(rules[3], (2, "xor".to_string(), 0));
    }

    #[test]
    fn test_rule_stream_errors() {
        let table = Strings::read(&strings(&["nop"])).unwrap();
        let no_prev = read_rules(&[KIND_PREVIOUS], &table, |_, _, _| Ok(()));
        assert_eq!(no_prev, Err(TableError::NoPrevious { offset: 0 }));

        let bad_string = read_rules(&[1, 5], &table, |_, _, _| Ok(()));
        assert_eq!(bad_string, Err(TableError::StringIndex { index: 5, count: 1 }));

        let mut data = Vec::new();
        for _ in 0..Code::COUNT {
            data.extend_from_slice(&[1, 0]);
        }
        data.push(0xAA);
        let trailing = read_rules(&data, &table, |_, _, _| Ok(()));
        assert_eq!(trailing, Err(TableError::TrailingBytes { remaining: 1 }));
    }
}
