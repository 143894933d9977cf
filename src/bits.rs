// Bit-field values cut out of an encoded container, plus the display
// grouping helper. Bit 0 is the least-significant bit everywhere in this
// crate; most-significant-first ordering exists only when rendering.

use crate::formats::{mask, FloatFormat};
use std::fmt;

/// A contiguous group of bits, held right-aligned in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    value: u64,
    width: u32,
}

impl BitField {
    /// Build a field from the low `width` bits of `value`; higher bits are
    /// discarded.
    pub const fn new(value: u64, width: u32) -> BitField {
        BitField {
            value: value & mask(width),
            width,
        }
    }

    pub fn value(self) -> u64 {
        self.value
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn is_zero(self) -> bool {
        self.value == 0
    }

    /// All bits of the field set.
    pub fn is_max(self) -> bool {
        self.value == mask(self.width)
    }

    /// Bit at `index`, 0 = least significant. Out-of-range indices read 0.
    pub fn bit(self, index: u32) -> u8 {
        if index >= self.width {
            0
        } else {
            ((self.value >> index) & 1) as u8
        }
    }
}

/// Renders zero-padded binary, most-significant bit first.
impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (0..self.width).rev() {
            f.write_str(if self.bit(index) == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Sign, exponent, and mantissa of one decoded value. Produced fresh on
/// every decode and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitFields {
    /// Raw sign bit: 0 = positive, 1 = negative.
    pub sign: u8,
    pub exponent: BitField,
    pub mantissa: BitField,
}

impl BitFields {
    pub fn is_negative(&self) -> bool {
        self.sign == 1
    }

    /// Put the fields back at their container positions. Bits outside the
    /// declared fields (TF32's unused low 13, for example) read back as 0.
    pub fn reassemble(&self, fmt: &FloatFormat) -> u64 {
        (u64::from(self.sign) << (fmt.width - 1))
            | (self.exponent.value() << fmt.exponent.1)
            | (self.mantissa.value() << fmt.mantissa.1)
    }
}

/// Group a rendered bit string into `_`-separated nibbles, working from the
/// most-significant end, for readability in the bit grid.
pub fn group_bits(bits: &str) -> String {
    let mut grouped = String::with_capacity(bits.len() + bits.len() / 4);
    for (i, c) in bits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            grouped.push('_');
        }
        grouped.push(c);
    }
    grouped
}
