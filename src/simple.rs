//! Single-call facade with default settings
//!
//! `Simple` never fails: decode errors are logged and turned into an empty
//! result. Use [`Decompressor`] directly to see the error.

use crate::{Compressor, Decompressor};

/// Default compressor and decompressor behind two infallible calls
#[derive(Debug, Clone, Default)]
pub struct Simple {
    compressor: Compressor,
    decompressor: Decompressor,
}

impl Simple {
    /// Create a facade with block mode, 16-bit codes and LSB-first packing
    pub fn new() -> Self {
        Self::default()
    }

    /// Compress `data`
    pub fn compress(&self, data: &[u8]) -> Vec<u8> {
        self.compressor.compress(data)
    }

    /// Decompress `data`, yielding an empty vector if it is not a valid stream
    pub fn decompress(&self, data: &[u8]) -> Vec<u8> {
        match self.decompressor.decompress(data) {
            Ok(output) => output,
            Err(e) => {
                log::warn!("decompression failed: {e}");
                Vec::new()
            }
        }
    }
}
