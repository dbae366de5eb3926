//! Code stream decoding
//!
//! This module implements the decode loop: replay the encoder's width growth,
//! rebuild each dictionary entry one code late, resolve the code that refers
//! to the entry still being built, and honour RESET codes in block mode.

use super::{state::DecompressState, DecodePolicy};
use crate::bitbuf::BitBuffer;
use crate::common::{LITERAL_CODES, RESET_CODE};
use crate::{LzwError, Result};

impl DecompressState {
    /// Read the next code at the current width, or `None` at end of stream
    fn read_code(&mut self, buf: &BitBuffer) -> Option<(u32, usize)> {
        let offset = self.pos;
        let width = self.width.code_size();
        let code = buf.get_varint(offset, width)?;
        self.pos += width as usize;
        self.stats.codes += 1;
        Some((code, offset))
    }

    /// Read the first code of an epoch, which must be a single byte
    fn read_first(&mut self, buf: &BitBuffer, policy: DecodePolicy) -> Result<Option<Vec<u8>>> {
        let Some((code, offset)) = self.read_code(buf) else {
            return Ok(None);
        };

        if code < LITERAL_CODES {
            return Ok(Some(vec![code as u8]));
        }

        match policy {
            DecodePolicy::Strict => Err(LzwError::CorruptStream { code, offset }),
            DecodePolicy::Lenient => {
                log::warn!("first code {code} at bit {offset} is not a literal, using its low byte");
                Ok(Some(vec![code as u8]))
            }
        }
    }

    /// Decode every code in `buf`, starting at the current position
    pub fn decode(&mut self, buf: &BitBuffer, policy: DecodePolicy) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(buf.len() * 2);

        let Some(mut prev) = self.read_first(buf, policy)? else {
            return Ok(output);
        };
        output.extend_from_slice(&prev);

        loop {
            // The encoder added its entry right after emitting `prev`
            let slot = self.width.reserve();

            let Some((code, offset)) = self.read_code(buf) else {
                break;
            };

            if self.block_mode && code == RESET_CODE {
                log::debug!("dictionary reset at bit {offset}");
                self.stats.resets += 1;
                self.reset();
                match self.read_first(buf, policy)? {
                    Some(first) => {
                        output.extend_from_slice(&first);
                        prev = first;
                        continue;
                    }
                    None => break,
                }
            }

            let entry = match self.lookup(code) {
                Some(known) => known.to_vec(),
                None if slot == Some(code) => {
                    let mut entry = prev.clone();
                    entry.push(prev[0]);
                    entry
                }
                None => match policy {
                    DecodePolicy::Strict => {
                        return Err(LzwError::CorruptStream { code, offset });
                    }
                    DecodePolicy::Lenient => {
                        log::warn!(
                            "unexpected code {code} at bit {offset} (next code {:?}), substituting",
                            slot
                        );
                        let mut entry = prev.clone();
                        entry.push(prev[0]);
                        entry
                    }
                },
            };

            if slot.is_some() {
                let mut added = prev;
                added.push(entry[0]);
                self.table.push(added);
            }

            output.extend_from_slice(&entry);
            prev = entry;
        }

        Ok(output)
    }
}
