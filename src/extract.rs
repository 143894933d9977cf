// Input validation and field extraction. Raw text comes in as
// `0x`/`0b`-prefixed digits; out comes the container's sign, exponent, and
// mantissa fields. Decoding is pure: no state survives a call, and a failed
// decode cannot affect a later one.

use crate::bits::{BitField, BitFields};
use crate::formats::FloatFormat;
use log::{debug, trace};
use thiserror::Error;

/// Numeral base of a prefixed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Hex,
    Bin,
}

impl Base {
    fn radix(self) -> u32 {
        match self {
            Base::Hex => 16,
            Base::Bin => 2,
        }
    }

    fn bits_per_digit(self) -> u32 {
        match self {
            Base::Hex => 4,
            Base::Bin => 1,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Base::Hex => "Hex",
            Base::Bin => "Binary",
        }
    }
}

/// Failure turning a raw input string into bit fields.
///
/// Each variant echoes the offending fragment so the message can be shown
/// to the user verbatim. Decoding is deterministic, so retrying the same
/// input reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No recognized `0x`/`0b` prefix, or the input is shorter than one.
    #[error("Input must start with 0x or 0b: [{input}]")]
    MissingPrefix { input: String },

    /// A character after the prefix is outside the base's digit set.
    #[error("Invalid {} Value: [{digits}]", .base.label())]
    InvalidDigit { digits: String, base: Base },

    /// The requested format name is not in the catalog.
    #[error("Unknown format: [{name}]")]
    UnknownFormat { name: String },
}

/// Validate `raw_input` and slice it into sign/exponent/mantissa fields.
///
/// The input is trimmed and `_` separators are stripped before the grammar
/// is checked. The prefix and hex digits are case-insensitive. An empty
/// digit string decodes as zero. Input wider than the container keeps its
/// low-order bits, the way a fixed-width register would.
pub fn extract(raw_input: &str, fmt: &FloatFormat) -> Result<BitFields, DecodeError> {
    let cleaned: String = raw_input.trim().chars().filter(|&c| c != '_').collect();
    let (base, digits) = split_prefix(&cleaned)?;
    let pattern = accumulate(digits, base, fmt)?;
    trace!("{}: [{}] -> {:#x}", fmt.name, cleaned, pattern);
    Ok(slice(pattern, fmt))
}

fn split_prefix(cleaned: &str) -> Result<(Base, &str), DecodeError> {
    let base = match cleaned.get(..2) {
        Some(p) if p.eq_ignore_ascii_case("0x") => Base::Hex,
        Some(p) if p.eq_ignore_ascii_case("0b") => Base::Bin,
        _ => {
            return Err(DecodeError::MissingPrefix {
                input: cleaned.to_string(),
            });
        }
    };
    Ok((base, &cleaned[2..]))
}

// Fold the digits into a u64, letting bits that outgrow it fall off the
// top, then clip to the container width.
fn accumulate(digits: &str, base: Base, fmt: &FloatFormat) -> Result<u64, DecodeError> {
    let mut pattern = 0u64;
    let mut dropped = false;
    for c in digits.chars() {
        let digit = c
            .to_digit(base.radix())
            .ok_or_else(|| DecodeError::InvalidDigit {
                digits: digits.to_string(),
                base,
            })?;
        dropped |= pattern >> (64 - base.bits_per_digit()) != 0;
        pattern = (pattern << base.bits_per_digit()) | u64::from(digit);
    }
    let clipped = pattern & fmt.container_mask();
    if dropped || clipped != pattern {
        debug!(
            "{}: input [{}] wider than {} bits, keeping the low-order bits",
            fmt.name, digits, fmt.width
        );
    }
    Ok(clipped)
}

fn slice(pattern: u64, fmt: &FloatFormat) -> BitFields {
    BitFields {
        sign: ((pattern >> (fmt.width - 1)) & 1) as u8,
        exponent: BitField::new(pattern >> fmt.exponent.1, fmt.exponent_bits()),
        mantissa: BitField::new(pattern >> fmt.mantissa.1, fmt.mantissa_bits()),
    }
}
