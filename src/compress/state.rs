//! Compression state management
//!
//! One `CompressState` lives for exactly one `compress` call: output buffer,
//! dictionary, code width and the block-mode ratio tracker all start clean.

use super::dictionary::Dictionary;
use crate::bitbuf::BitBuffer;
use crate::common::{CompressionStats, Header, CHECKPOINT_BITS, HEADER_SIZE, RESET_CODE};
use crate::width::CodeWidth;
use crate::BitOrder;

/// Per-call encoder state
#[derive(Debug)]
pub struct CompressState {
    /// Output stream, header included
    pub out: BitBuffer,
    /// Next free bit in `out`
    pub pos: usize,
    /// Byte-string to code map
    pub dict: Dictionary,
    /// Code size and next code
    pub width: CodeWidth,
    /// Whether RESET codes may be emitted
    pub block_mode: bool,
    /// Raw bytes consumed so far
    pub bytes_in: usize,
    /// Bit position of the next ratio check, armed once the dictionary froze
    pub checkpoint: Option<usize>,
    /// Best ratio seen since the checkpoint was armed
    pub last_ratio: f64,
    /// Codes emitted so far, RESET codes included
    pub codes: usize,
    /// RESET codes emitted so far
    pub resets: usize,
}

impl CompressState {
    /// Write the header into a fresh buffer and start the first epoch
    pub fn new(max_code_size: u8, block_mode: bool, order: BitOrder, size_hint: usize) -> Self {
        let header = Header {
            max_code_size,
            block_mode,
        };
        let mut bytes = Vec::with_capacity(HEADER_SIZE + size_hint / 2);
        bytes.extend_from_slice(&header.to_bytes());

        Self {
            out: BitBuffer::from_bytes(bytes, order),
            pos: HEADER_SIZE * 8,
            dict: Dictionary::new(),
            width: CodeWidth::new(max_code_size, block_mode),
            block_mode,
            bytes_in: 0,
            checkpoint: None,
            last_ratio: 0.0,
            codes: 0,
            resets: 0,
        }
    }

    /// Append `code` at the current code width
    pub fn emit(&mut self, code: u32) {
        let width = self.width.code_size();
        self.out.write_bits(self.pos, width, code);
        self.pos += width as usize;
        self.codes += 1;
    }

    /// Register `prefix` + `byte` under the next code, unless frozen
    ///
    /// Returns true when this call froze the dictionary.
    pub fn add_entry(&mut self, prefix: u32, byte: u8) -> bool {
        let was_frozen = self.width.is_frozen();
        match self.width.reserve() {
            Some(code) => {
                self.dict.insert(prefix, byte, code);
                false
            }
            None => !was_frozen,
        }
    }

    /// Ratio of consumed input bytes to produced output bytes
    fn ratio(&self) -> f64 {
        self.bytes_in as f64 / (self.pos as f64 / 8.0)
    }

    /// Block-mode ratio monitoring, run after every emitted code
    pub fn check_ratio(&mut self, just_froze: bool) {
        if !self.block_mode || !self.width.is_frozen() {
            return;
        }

        if just_froze {
            self.last_ratio = self.ratio();
            self.checkpoint = Some(self.pos + CHECKPOINT_BITS);
            log::debug!(
                "dictionary frozen at bit {}, ratio {:.3}",
                self.pos,
                self.last_ratio
            );
            return;
        }

        let Some(checkpoint) = self.checkpoint else {
            return;
        };
        if self.pos < checkpoint {
            return;
        }

        let ratio = self.ratio();
        if ratio >= self.last_ratio {
            self.last_ratio = ratio;
            self.checkpoint = Some(self.pos + CHECKPOINT_BITS);
            log::debug!("checkpoint at bit {}, ratio {:.3} holds", self.pos, ratio);
        } else {
            log::debug!(
                "ratio fell from {:.3} to {:.3} at bit {}, resetting dictionary",
                self.last_ratio,
                ratio,
                self.pos
            );
            self.emit(RESET_CODE);
            self.reset_dictionary();
        }
    }

    /// Start a new epoch without touching the header or output
    pub fn reset_dictionary(&mut self) {
        self.dict.reset();
        self.width.reset();
        self.checkpoint = None;
        self.last_ratio = 0.0;
        self.resets += 1;
    }

    /// Hand back the packed bytes and what it took to produce them
    pub fn finish(self) -> (Vec<u8>, CompressionStats) {
        let stats = CompressionStats {
            bytes_in: self.bytes_in,
            bytes_out: self.out.len(),
            codes: self.codes,
            resets: self.resets,
            final_code_size: self.width.code_size(),
        };
        (self.out.into_bytes(), stats)
    }
}
