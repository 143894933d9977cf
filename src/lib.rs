//! Decode textual floating-point encodings into their bit fields and say
//! what each pattern means.
//!
//! Input is a hex or binary string (`0x3C00`, `0b0111_1100`); the format is
//! one of the catalog entries in [`formats::CATALOG`], from FP64 down to
//! the two FP8 variants. Decoding slices the container into sign, exponent,
//! and mantissa fields, and classification names the value class: zero,
//! subnormal, normal, infinity, or NaN, carrying the unbiased exponent and
//! fraction bits for the finite classes.
//!
//! ```
//! use fpbits::decode_and_classify;
//!
//! let (fields, class) = decode_and_classify("FP32", "0x41460000")?;
//! assert_eq!(fields.sign, 0);
//! assert_eq!(
//!     class.to_string(),
//!     "Normal: sign:0, exponent:3, mantissa: 1.10001100000000000000000"
//! );
//! # Ok::<(), fpbits::DecodeError>(())
//! ```

pub mod bits;
pub mod classify;
pub mod extract;
pub mod formats;

pub use crate::bits::{BitField, BitFields};
pub use crate::classify::{classify, Classification};
pub use crate::extract::{extract, DecodeError};
pub use crate::formats::{by_name, FloatFormat, CATALOG};

/// Decode `raw_input` under the named format and classify the result.
///
/// The two halves are also available separately as [`extract`] and
/// [`classify`] when the caller already holds a [`FloatFormat`].
pub fn decode_and_classify(
    format_name: &str,
    raw_input: &str,
) -> Result<(BitFields, Classification), DecodeError> {
    let fmt = lookup(format_name)?;
    let fields = extract::extract(raw_input, fmt)?;
    let class = classify::classify(&fields, fmt);
    Ok((fields, class))
}

/// Catalog names in display order.
pub fn list_formats() -> impl Iterator<Item = &'static str> {
    formats::CATALOG.iter().map(|fmt| fmt.name)
}

/// Container width in bits of the named format.
pub fn format_width(format_name: &str) -> Result<u32, DecodeError> {
    Ok(lookup(format_name)?.width)
}

fn lookup(format_name: &str) -> Result<&'static FloatFormat, DecodeError> {
    formats::by_name(format_name).ok_or_else(|| DecodeError::UnknownFormat {
        name: format_name.to_string(),
    })
}
