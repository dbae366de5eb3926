//! Code width bookkeeping shared by encoder and decoder
//!
//! Both sides of the codec must grow the code width and freeze the dictionary
//! at exactly the same code, so the rule lives in one place.

use crate::common::{INIT_CODE_SIZE, LITERAL_CODES, RESET_CODE};

/// Code size, next code and growth threshold for one dictionary epoch
#[derive(Debug, Clone)]
pub struct CodeWidth {
    max_code_size: u8,
    first_code: u32,
    code_size: u8,
    next_code: u32,
    next_increase: u64,
    frozen: bool,
}

impl CodeWidth {
    /// Start a fresh epoch
    ///
    /// In block mode code 256 is reserved for RESET and assignment starts at 257.
    pub fn new(max_code_size: u8, block_mode: bool) -> Self {
        let first_code = if block_mode {
            RESET_CODE + 1
        } else {
            LITERAL_CODES
        };
        Self {
            max_code_size,
            first_code,
            code_size: INIT_CODE_SIZE,
            next_code: first_code,
            next_increase: 1u64 << INIT_CODE_SIZE,
            frozen: false,
        }
    }

    /// Return to the initial epoch state
    pub fn reset(&mut self) {
        self.code_size = INIT_CODE_SIZE;
        self.next_code = self.first_code;
        self.next_increase = 1u64 << INIT_CODE_SIZE;
        self.frozen = false;
    }

    /// Claim the next code for a new dictionary entry
    ///
    /// Grows the width first when the next code no longer fits. Once the width
    /// is at `max_code_size` and full, the dictionary freezes and `None` is
    /// returned until the next reset.
    pub fn reserve(&mut self) -> Option<u32> {
        if self.frozen {
            return None;
        }

        if u64::from(self.next_code) >= self.next_increase {
            if self.code_size < self.max_code_size {
                self.code_size += 1;
                self.next_increase <<= 1;
                log::trace!("code width grew to {} bits", self.code_size);
            } else {
                self.frozen = true;
                log::trace!("dictionary frozen at {} codes", self.next_code);
                return None;
            }
        }

        let code = self.next_code;
        self.next_code += 1;
        Some(code)
    }

    /// Current width in bits
    pub fn code_size(&self) -> u8 {
        self.code_size
    }

    /// Code the next entry would receive
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    /// First code assigned in every epoch
    pub fn first_code(&self) -> u32 {
        self.first_code
    }

    /// True once no further entries will be assigned this epoch
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}
