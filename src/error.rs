//! Error handling for LZW operations
//!
//! This module re-exports the error type used throughout the crate. It uses
//! thiserror for ergonomic error handling; construction, bit-buffer misuse and
//! corrupt input each have their own variants.

pub use crate::common::LzwError;
pub use crate::common::Result;
