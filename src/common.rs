//! Common types and constants for the compress(1) LZW format
//!
//! This module defines the core types, constants, and structures used by both
//! the compression and decompression engines.

use std::fmt;
use thiserror::Error;

/// Magic bytes opening every compressed stream
pub const MAGIC: [u8; 2] = [0x1F, 0x9D];

/// Size of the stream header (magic + flags byte)
pub const HEADER_SIZE: usize = 3;

/// Flags bit signalling block mode
pub const BLOCK_MODE_FLAG: u8 = 0x80;

/// Flags bits holding the maximum code size
pub const MAX_CODE_SIZE_MASK: u8 = 0x1F;

/// Flags bits that must be zero
pub const RESERVED_FLAGS_MASK: u8 = 0x60;

/// Code width every epoch starts at
pub const INIT_CODE_SIZE: u8 = 9;

/// Smallest accepted maximum code size
pub const MIN_CODE_SIZE: u8 = 9;

/// Largest maximum code size the 5-bit header field can carry
pub const MAX_CODE_SIZE: u8 = 31;

/// Maximum code size used when none is given
pub const DEFAULT_MAX_CODE_SIZE: u8 = 16;

/// In-stream dictionary reset signal (block mode only)
pub const RESET_CODE: u32 = 256;

/// Distance in output bits between compression ratio checkpoints
pub const CHECKPOINT_BITS: usize = 10_000;

/// Number of single-byte entries every dictionary starts with
pub const LITERAL_CODES: u32 = 256;

/// Bit packing order for multi-bit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Least significant code bit first (the compress(1) wire order)
    #[default]
    LsbFirst,
    /// Most significant code bit first
    MsbFirst,
}

impl BitOrder {
    /// Parse a bit order from its short name (`lsb` or `msb`)
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "lsb" | "lsb0" | "little" => Ok(BitOrder::LsbFirst),
            "msb" | "msb0" | "big" => Ok(BitOrder::MsbFirst),
            _ => Err(LzwError::InvalidConfig(format!("unknown bit order '{name}'"))),
        }
    }
}

impl fmt::Display for BitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitOrder::LsbFirst => f.write_str("lsb-first"),
            BitOrder::MsbFirst => f.write_str("msb-first"),
        }
    }
}

/// Error type for LZW operations
#[derive(Debug, Error)]
pub enum LzwError {
    /// Invalid construction parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A single-bit write received something other than 0 or 1
    #[error("Invalid bit value: {0} (expected 0 or 1)")]
    InvalidBitValue(u8),

    /// A varint write received a value that does not fit its width
    #[error("Integer overflow: {value} does not fit in {width} bits")]
    IntegerOverflow {
        /// Value that was written
        value: u32,
        /// Declared width in bits
        width: u8,
    },

    /// A varint width outside 1..=31
    #[error("Invalid varint width: {0} (expected 1 to 31)")]
    InvalidWidth(u8),

    /// Missing, truncated or malformed stream header
    #[error("Corrupt header: {0}")]
    CorruptHeader(String),

    /// A code that is neither known nor the next code to be assigned
    #[error("Corrupt stream: unexpected code {code} at bit offset {offset}")]
    CorruptStream {
        /// Offending code
        code: u32,
        /// Bit offset the code was read from
        offset: usize,
    },
}

/// Result type alias for LZW operations
pub type Result<T> = std::result::Result<T, LzwError>;

/// Check that a maximum code size is usable
pub fn validate_max_code_size(max_code_size: u8) -> Result<()> {
    if !(MIN_CODE_SIZE..=MAX_CODE_SIZE).contains(&max_code_size) {
        return Err(LzwError::InvalidConfig(format!(
            "max_code_size must be between {MIN_CODE_SIZE} and {MAX_CODE_SIZE}, got {max_code_size}"
        )));
    }
    Ok(())
}

/// Stream header: magic bytes followed by one flags byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Widest code the stream may contain
    pub max_code_size: u8,
    /// Whether RESET codes may appear in the stream
    pub block_mode: bool,
}

impl Header {
    /// Serialize the header into its three wire bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut flags = self.max_code_size & MAX_CODE_SIZE_MASK;
        if self.block_mode {
            flags |= BLOCK_MODE_FLAG;
        }
        [MAGIC[0], MAGIC[1], flags]
    }

    /// Parse and validate the header at the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(LzwError::CorruptHeader(format!(
                "need {HEADER_SIZE} bytes, got {}",
                data.len()
            )));
        }

        if data[..2] != MAGIC {
            return Err(LzwError::CorruptHeader(format!(
                "bad magic {:02x} {:02x}",
                data[0], data[1]
            )));
        }

        let flags = data[2];
        if flags & RESERVED_FLAGS_MASK != 0 {
            return Err(LzwError::CorruptHeader(format!(
                "reserved flag bits set in {flags:#04x}"
            )));
        }

        let max_code_size = flags & MAX_CODE_SIZE_MASK;
        if max_code_size < MIN_CODE_SIZE {
            return Err(LzwError::CorruptHeader(format!(
                "max_code_size {max_code_size} is below {MIN_CODE_SIZE}"
            )));
        }

        Ok(Self {
            max_code_size,
            block_mode: flags & BLOCK_MODE_FLAG != 0,
        })
    }
}

/// Statistics for compression/decompression operations
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompressionStats {
    /// Uncompressed bytes consumed or produced
    pub bytes_in: usize,
    /// Compressed bytes produced or consumed, header included
    pub bytes_out: usize,
    /// Number of codes in the stream, RESET codes included
    pub codes: usize,
    /// Number of block-mode dictionary resets
    pub resets: usize,
    /// Code width in effect when the stream ended
    pub final_code_size: u8,
}

impl CompressionStats {
    /// Uncompressed size divided by compressed size
    pub fn ratio(&self) -> f64 {
        if self.bytes_out == 0 {
            0.0
        } else {
            self.bytes_in as f64 / self.bytes_out as f64
        }
    }
}
