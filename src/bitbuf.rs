//! Bit-addressable growable byte buffer
//!
//! `BitBuffer` stores and retrieves unsigned integers of 1 to 31 bits at
//! arbitrary bit offsets. Single-bit access always uses absolute LSB0 indexing
//! (bit `n` is `1 << (n % 8)` of byte `n / 8`); only multi-bit varints honour
//! the configured [`BitOrder`].

use crate::{BitOrder, LzwError, Result};
use std::fmt;

/// Widest varint the buffer packs
pub const MAX_VARINT_WIDTH: u8 = 31;

/// Growable byte buffer addressed at bit granularity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    field: Vec<u8>,
    order: BitOrder,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new(order: BitOrder) -> Self {
        Self {
            field: Vec::new(),
            order,
        }
    }

    /// Wrap existing bytes
    pub fn from_bytes(bytes: Vec<u8>, order: BitOrder) -> Self {
        Self {
            field: bytes,
            order,
        }
    }

    /// Bit order used for varint packing
    pub fn order(&self) -> BitOrder {
        self.order
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.field
    }

    /// Consume the buffer and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.field
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.field.len()
    }

    /// True when no byte has been defined yet
    pub fn is_empty(&self) -> bool {
        self.field.is_empty()
    }

    /// Length in bits
    pub fn bit_len(&self) -> usize {
        self.field.len() * 8
    }

    /// Grow (zero-filled, whole bytes) so that bit `pos` exists
    fn ensure_bit(&mut self, pos: usize) {
        let needed = pos / 8 + 1;
        if self.field.len() < needed {
            self.field.resize(needed, 0);
        }
    }

    /// Read the bit at absolute index `pos`, growing the buffer if needed
    pub fn get_bit(&mut self, pos: usize) -> u8 {
        self.ensure_bit(pos);
        (self.field[pos / 8] >> (pos % 8)) & 1
    }

    /// Write the bit at absolute index `pos`, growing the buffer if needed
    pub fn set_bit(&mut self, pos: usize, value: u8) -> Result<()> {
        if value > 1 {
            return Err(LzwError::InvalidBitValue(value));
        }
        self.ensure_bit(pos);
        self.put_bit(pos, value == 1);
        Ok(())
    }

    #[inline]
    fn put_bit(&mut self, pos: usize, on: bool) {
        let mask = 1u8 << (pos % 8);
        if on {
            self.field[pos / 8] |= mask;
        } else {
            self.field[pos / 8] &= !mask;
        }
    }

    /// Absolute index of bit `b` of a `width`-bit varint starting at `pos`
    #[inline]
    fn varint_bit(&self, pos: usize, width: u8, b: u8) -> usize {
        match self.order {
            BitOrder::LsbFirst => pos + b as usize,
            BitOrder::MsbFirst => pos + (width - 1 - b) as usize,
        }
    }

    /// Write `value` as a `width`-bit unsigned integer starting at bit `pos`
    pub fn set_varint(&mut self, pos: usize, width: u8, value: u32) -> Result<&mut Self> {
        if width == 0 || width > MAX_VARINT_WIDTH {
            return Err(LzwError::InvalidWidth(width));
        }
        if value >> width != 0 {
            return Err(LzwError::IntegerOverflow { value, width });
        }

        self.write_bits(pos, width, value);
        Ok(self)
    }

    /// Unchecked varint write; callers guarantee `value < 2^width`
    pub(crate) fn write_bits(&mut self, pos: usize, width: u8, value: u32) {
        debug_assert!(width > 0 && width <= MAX_VARINT_WIDTH && value >> width == 0);
        self.ensure_bit(pos + width as usize - 1);
        for b in 0..width {
            let at = self.varint_bit(pos, width, b);
            self.put_bit(at, (value >> b) & 1 == 1);
        }
    }

    /// Read a `width`-bit unsigned integer starting at bit `pos`
    ///
    /// Returns `None` without growing the buffer when the range runs past the
    /// defined bits or `width` is outside 1..=31.
    pub fn get_varint(&self, pos: usize, width: u8) -> Option<u32> {
        if width == 0 || width > MAX_VARINT_WIDTH {
            return None;
        }
        if pos.checked_add(width as usize)? > self.bit_len() {
            return None;
        }

        let mut value = 0u32;
        for b in 0..width {
            let at = self.varint_bit(pos, width, b);
            let bit = (self.field[at / 8] >> (at % 8)) & 1;
            value |= (bit as u32) << b;
        }
        Some(value)
    }

    /// Iterate over every bit in absolute index order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.field
            .iter()
            .flat_map(|&byte| (0..8u8).map(move |b| (byte >> b) & 1))
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bit_in_existing_byte() {
        let mut buf = BitBuffer::from_bytes(vec![0x00], BitOrder::LsbFirst);
        buf.set_bit(5, 1).unwrap();
        assert_eq!(buf.as_bytes(), &[0x20]);
    }

    #[test]
    fn test_set_bit_beyond_size() {
        let mut buf = BitBuffer::new(BitOrder::LsbFirst);
        for pos in 8..16 {
            buf.set_bit(pos, 1).unwrap();
        }
        assert_eq!(buf.as_bytes(), &[0x00, 0xFF]);
    }

    #[test]
    fn test_set_bit_rejects_non_binary() {
        let mut buf = BitBuffer::new(BitOrder::LsbFirst);
        assert!(matches!(buf.set_bit(0, 2), Err(LzwError::InvalidBitValue(2))));
    }

    #[test]
    fn test_get_bit_grows() {
        let mut buf = BitBuffer::new(BitOrder::LsbFirst);
        assert_eq!(buf.get_bit(9), 0);
        assert_eq!(buf.len(), 2);

        let mut buf = BitBuffer::new(BitOrder::LsbFirst);
        assert_eq!(buf.get_bit(32), 0);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn test_display_and_iter() {
        let buf = BitBuffer::from_bytes(vec![0xFF], BitOrder::LsbFirst);
        assert_eq!(buf.to_string(), "11111111");
        assert_eq!(buf.iter().filter(|&b| b == 1).count(), 8);
    }

    #[test]
    fn test_varint_store_and_fetch() {
        let mut buf = BitBuffer::new(BitOrder::LsbFirst);
        buf.set_varint(0, 12, (1 << 12) - 1).unwrap();
        assert_eq!(buf.to_string(), "1111111111110000");
        assert_eq!(buf.get_varint(0, 12), Some((1 << 12) - 1));
    }

    #[test]
    fn test_varint_overflow() {
        let mut buf = BitBuffer::new(BitOrder::LsbFirst);
        assert!(matches!(
            buf.set_varint(0, 9, 512),
            Err(LzwError::IntegerOverflow {
                value: 512,
                width: 9
            })
        ));
        assert!(matches!(
            buf.set_varint(0, 32, 1),
            Err(LzwError::InvalidWidth(32))
        ));
    }

    #[test]
    fn test_get_varint_beyond_end() {
        let buf = BitBuffer::new(BitOrder::LsbFirst);
        assert_eq!(buf.get_varint(32, 9), None);
        assert!(buf.is_empty());

        let buf = BitBuffer::from_bytes(vec![0xAB, 0xCD], BitOrder::LsbFirst);
        assert_eq!(buf.get_varint(8, 9), None);
        assert_eq!(buf.len(), 2);
        assert!(buf.get_varint(7, 9).is_some());
    }

    #[test]
    fn test_subscript_ignores_order() {
        let mut lsb = BitBuffer::new(BitOrder::LsbFirst);
        lsb.set_bit(4, 1).unwrap();

        let mut msb = BitBuffer::new(BitOrder::MsbFirst);
        msb.set_bit(4, 1).unwrap();

        assert_eq!(lsb.as_bytes(), msb.as_bytes());
    }

    #[test]
    fn test_varint_bit_order() {
        let mut lsb = BitBuffer::new(BitOrder::LsbFirst);
        lsb.set_varint(0, 8, 15).unwrap();
        assert_eq!(lsb.to_string(), "11110000");

        let mut msb = BitBuffer::new(BitOrder::MsbFirst);
        msb.set_varint(0, 8, 15).unwrap();
        assert_eq!(msb.to_string(), "00001111");

        assert_ne!(lsb.as_bytes(), msb.as_bytes());
        assert_eq!(msb.get_varint(0, 8), Some(15));
    }

    #[test]
    fn test_unaligned_varints() {
        for order in [BitOrder::LsbFirst, BitOrder::MsbFirst] {
            let mut buf = BitBuffer::new(order);
            let values = [(9u8, 300u32), (13, 8000), (31, 0x7FFF_FFFF), (1, 1), (10, 0)];
            let mut pos = 3;
            for &(width, value) in &values {
                buf.set_varint(pos, width, value).unwrap();
                pos += width as usize;
            }

            let mut pos = 3;
            for &(width, value) in &values {
                assert_eq!(buf.get_varint(pos, width), Some(value), "{order}");
                pos += width as usize;
            }
        }
    }

    #[test]
    fn test_overwrite_clears_bits() {
        let mut buf = BitBuffer::from_bytes(vec![0xFF, 0xFF], BitOrder::LsbFirst);
        buf.set_varint(4, 8, 0).unwrap();
        assert_eq!(buf.as_bytes(), &[0x0F, 0xF0]);
    }
}
