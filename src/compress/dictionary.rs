//! Encode-side dictionary
//!
//! Every entry is some existing entry extended by one byte, so an entry is
//! keyed by `(prefix code, byte)` instead of by its full byte string. Single
//! bytes are implicit: byte `b` is code `b`.

use std::collections::HashMap;

use crate::common::LITERAL_CODES;

/// Map from byte-string (as prefix code + byte) to code
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<(u32, u8), u32>,
}

impl Dictionary {
    /// Create a dictionary holding the 256 single-byte strings
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Code of a single byte
    #[inline]
    pub fn literal(byte: u8) -> u32 {
        byte as u32
    }

    /// Code of `prefix` extended by `byte`, if present
    #[inline]
    pub fn lookup(&self, prefix: u32, byte: u8) -> Option<u32> {
        self.entries.get(&(prefix, byte)).copied()
    }

    /// Register `prefix` + `byte` under `code`
    pub fn insert(&mut self, prefix: u32, byte: u8, code: u32) {
        self.entries.insert((prefix, byte), code);
    }

    /// Drop everything but the single-byte strings
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of strings, single bytes included
    pub fn len(&self) -> usize {
        LITERAL_CODES as usize + self.entries.len()
    }

    /// Always false: the single-byte strings are permanent
    pub fn is_empty(&self) -> bool {
        false
    }
}
