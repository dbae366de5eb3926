//! LZW decompression
//!
//! This module parses the compress(1) header and replays the encoder's
//! dictionary and code-width growth to rebuild the original bytes.

mod decoder;
mod state;

pub use state::DecompressState;

use crate::bitbuf::BitBuffer;
use crate::common::{CompressionStats, Header, HEADER_SIZE};
use crate::{BitOrder, Result};

/// What to do with a code that is neither known nor the next code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Fail with `CorruptStream`
    #[default]
    Strict,
    /// Log a warning, substitute a best-effort string and keep going
    Lenient,
}

/// Scaling LZW decompressor
#[derive(Debug, Clone, Default)]
pub struct Decompressor {
    order: BitOrder,
    policy: DecodePolicy,
}

impl Decompressor {
    /// Create a strict decompressor for streams packed in `order`
    pub fn new(order: BitOrder) -> Self {
        Self {
            order,
            policy: DecodePolicy::Strict,
        }
    }

    /// Use `policy` for desynchronized codes
    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bit order codes are read in
    pub fn bit_order(&self) -> BitOrder {
        self.order
    }

    /// Policy for desynchronized codes
    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Decompress a header-prefixed code stream
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.decompress_with_stats(data).map(|(output, _)| output)
    }

    /// Decompress and report what the stream contained
    pub fn decompress_with_stats(&self, data: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let header = Header::parse(data)?;
        let buf = BitBuffer::from_bytes(data.to_vec(), self.order);

        let mut state = DecompressState::new(header, HEADER_SIZE * 8);
        let output = state.decode(&buf, self.policy)?;

        let mut stats = state.stats;
        stats.bytes_in = output.len();
        stats.bytes_out = data.len();
        stats.final_code_size = state.width.code_size();
        Ok((output, stats))
    }
}

/// Convenience function to decompress data in memory
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    Decompressor::default().decompress(data)
}
