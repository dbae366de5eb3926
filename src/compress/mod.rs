//! LZW compression
//!
//! This module provides the encoder for the compress(1) format: a greedy
//! longest-match scan over the input, emitting one variable-width code per
//! dictionary miss, growing the code width as the dictionary fills and, in
//! block mode, resetting the dictionary when the compression ratio degrades.

mod dictionary;
mod state;

pub use dictionary::Dictionary;
pub use state::CompressState;

use crate::common::{validate_max_code_size, CompressionStats, DEFAULT_MAX_CODE_SIZE};
use crate::{BitOrder, Result};

/// Scaling LZW compressor
///
/// Configuration is fixed at construction; every call to [`Compressor::compress`]
/// starts from a clean dictionary.
#[derive(Debug, Clone)]
pub struct Compressor {
    block_mode: bool,
    max_code_size: u8,
    order: BitOrder,
}

impl Compressor {
    /// Create a compressor
    ///
    /// # Arguments
    /// * `block_mode` - Allow dictionary resets when the ratio degrades
    /// * `max_code_size` - Widest code in bits (9 to 31)
    /// * `order` - Bit order used to pack codes
    pub fn new(block_mode: bool, max_code_size: u8, order: BitOrder) -> Result<Self> {
        validate_max_code_size(max_code_size)?;
        Ok(Self {
            block_mode,
            max_code_size,
            order,
        })
    }

    /// Whether block mode is enabled
    pub fn block_mode(&self) -> bool {
        self.block_mode
    }

    /// Widest code this compressor emits
    pub fn max_code_size(&self) -> u8 {
        self.max_code_size
    }

    /// Bit order used to pack codes
    pub fn bit_order(&self) -> BitOrder {
        self.order
    }

    /// Compress `data` into a header followed by packed codes
    pub fn compress(&self, data: &[u8]) -> Vec<u8> {
        self.compress_with_stats(data).0
    }

    /// Compress `data` and report how the stream was built
    pub fn compress_with_stats(&self, data: &[u8]) -> (Vec<u8>, CompressionStats) {
        let mut state =
            CompressState::new(self.max_code_size, self.block_mode, self.order, data.len());

        let mut bytes = data.iter().copied();
        let Some(first) = bytes.next() else {
            return state.finish();
        };
        state.bytes_in = 1;
        let mut seen = Dictionary::literal(first);

        for byte in bytes {
            state.bytes_in += 1;

            if let Some(code) = state.dict.lookup(seen, byte) {
                seen = code;
                continue;
            }

            state.emit(seen);
            let just_froze = state.add_entry(seen, byte);
            seen = Dictionary::literal(byte);
            state.check_ratio(just_froze);
        }

        state.emit(seen);
        state.finish()
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self {
            block_mode: true,
            max_code_size: DEFAULT_MAX_CODE_SIZE,
            order: BitOrder::default(),
        }
    }
}

/// Convenience function to compress data in memory with default settings
pub fn compress_bytes(data: &[u8]) -> Vec<u8> {
    Compressor::default().compress(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LzwError;

    #[test]
    fn test_rejects_invalid_code_size() {
        assert!(matches!(
            Compressor::new(true, 8, BitOrder::LsbFirst),
            Err(LzwError::InvalidConfig(_))
        ));
        assert!(matches!(
            Compressor::new(true, 35, BitOrder::LsbFirst),
            Err(LzwError::InvalidConfig(_))
        ));
        assert!(Compressor::new(false, 14, BitOrder::MsbFirst).is_ok());
    }

    #[test]
    fn test_accessors() {
        let c = Compressor::default();
        assert!(c.block_mode());
        assert_eq!(c.max_code_size(), 16);
        assert_eq!(c.bit_order(), BitOrder::LsbFirst);
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let out = Compressor::default().compress(b"");
        assert_eq!(out, vec![0x1F, 0x9D, 0x90]);
    }

    #[test]
    fn test_known_codes() {
        // "abab": a, b, then "ab" (257) is known and emitted last
        let c = Compressor::new(true, 16, BitOrder::LsbFirst).unwrap();
        let (out, stats) = c.compress_with_stats(b"abab");
        assert_eq!(stats.codes, 3);

        let buf = crate::BitBuffer::from_bytes(out, BitOrder::LsbFirst);
        assert_eq!(buf.get_varint(24, 9), Some(b'a' as u32));
        assert_eq!(buf.get_varint(33, 9), Some(b'b' as u32));
        assert_eq!(buf.get_varint(42, 9), Some(257));
    }

    #[test]
    fn test_non_block_mode_starts_at_256() {
        let c = Compressor::new(false, 16, BitOrder::LsbFirst).unwrap();
        let out = c.compress(b"abab");
        let buf = crate::BitBuffer::from_bytes(out, BitOrder::LsbFirst);
        assert_eq!(buf.get_varint(42, 9), Some(256));
    }

    #[test]
    fn test_compress_is_repeatable() {
        let c = Compressor::default();
        let data = b"TOBEORNOTTOBEORTOBEORNOT".repeat(50);
        assert_eq!(c.compress(&data), c.compress(&data));
    }

    #[test]
    fn test_width_capped() {
        let c = Compressor::new(true, 9, BitOrder::LsbFirst).unwrap();
        let data: Vec<u8> = (0..20_000u32).map(|i| (i * 7 % 251) as u8).collect();
        let (_, stats) = c.compress_with_stats(&data);
        assert_eq!(stats.final_code_size, 9);
    }
}
