//! Decompression state management
//!
//! The string table mirrors the encoder's dictionary. Codes are assigned
//! densely, so the table is a plain vector indexed by code.

use crate::common::{CompressionStats, Header, LITERAL_CODES};
use crate::width::CodeWidth;

/// Per-call decoder state
#[derive(Debug)]
pub struct DecompressState {
    /// Code to byte-string table; the reserved RESET slot holds an empty string
    pub table: Vec<Vec<u8>>,
    /// Code size and next code, in lock-step with the encoder
    pub width: CodeWidth,
    /// Whether RESET codes may appear
    pub block_mode: bool,
    /// Next bit to read
    pub pos: usize,
    /// Running totals
    pub stats: CompressionStats,
}

impl DecompressState {
    /// Create a decoder state for a stream with the given header
    pub fn new(header: Header, start_bit: usize) -> Self {
        let mut state = Self {
            table: Vec::new(),
            width: CodeWidth::new(header.max_code_size, header.block_mode),
            block_mode: header.block_mode,
            pos: start_bit,
            stats: CompressionStats::default(),
        };
        state.reset();
        state
    }

    /// Reinitialize the string table and width state
    pub fn reset(&mut self) {
        self.table.clear();
        self.table
            .extend((0..LITERAL_CODES).map(|byte| vec![byte as u8]));
        // Reserved RESET slot
        while (self.table.len() as u32) < self.width.first_code() {
            self.table.push(Vec::new());
        }
        self.width.reset();
    }

    /// String for `code`, if it is a known entry
    pub fn lookup(&self, code: u32) -> Option<&[u8]> {
        self.table
            .get(code as usize)
            .filter(|entry| !entry.is_empty())
            .map(Vec::as_slice)
    }
}
