//! LZW - Rust implementation of the Unix compress(1) format
//!
//! This crate provides a pure Rust scaling LZW compressor and decompressor that
//! reads and writes the on-disk format of the classic `compress` utility: a
//! 3-byte header followed by variable-width codes whose width grows as the
//! dictionary fills, with optional "block mode" dictionary resets when the
//! compression ratio degrades.
//!
//! # Features
//!
//! - Code widths from 9 up to 31 bits
//! - Block mode with ratio-driven RESET codes
//! - LSB-first (compress(1) compatible) or MSB-first code packing
//! - Strict or lenient handling of corrupt code streams
//! - Bit-addressable [`BitBuffer`] for custom packing
//!
//! # Example
//!
//! ```
//! use lzw::{BitOrder, Compressor, Decompressor};
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressor = Compressor::new(true, 16, BitOrder::LsbFirst)?;
//! let packed = compressor.compress(data);
//!
//! let decompressor = Decompressor::new(BitOrder::LsbFirst);
//! let unpacked = decompressor.decompress(&packed)?;
//! assert_eq!(&unpacked[..], &data[..]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Example - Default settings
//!
//! ```
//! use lzw::{compress_bytes, decompress_bytes};
//!
//! let packed = compress_bytes(b"hello hello hello");
//! assert_eq!(decompress_bytes(&packed)?, b"hello hello hello");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod bitbuf;
pub mod common;
pub mod compress;
pub mod decompress;
pub mod error;
pub mod simple;
pub mod width;

// Re-export commonly used types
pub use bitbuf::BitBuffer;
pub use common::{
    BitOrder, CompressionStats, Header, LzwError, Result, CHECKPOINT_BITS,
    DEFAULT_MAX_CODE_SIZE, MAGIC, MAX_CODE_SIZE, MIN_CODE_SIZE, RESET_CODE,
};
pub use compress::Compressor;
pub use decompress::{DecodePolicy, Decompressor};
pub use simple::Simple;

// Convenience functions

/// Compress data with block mode, 16-bit maximum codes and LSB-first packing
///
/// # Arguments
/// * `data` - The data to compress
///
/// # Returns
/// A vector containing the header and packed codes
pub fn compress_bytes(data: &[u8]) -> Vec<u8> {
    compress::compress_bytes(data)
}

/// Decompress LSB-first packed data
///
/// # Arguments
/// * `data` - The compressed data
///
/// # Returns
/// A vector containing the decompressed data
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    decompress::decompress_bytes(data)
}
