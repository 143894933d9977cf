// Classification of decoded bit fields. The rules are the IEEE-754
// interchange rules, with the OFP8 E4M3 exception folded in through the
// descriptor's `has_infinity` flag rather than by format name.

use crate::bits::{BitField, BitFields};
use crate::formats::FloatFormat;
use std::fmt;

/// The numeric class a bit pattern falls into under a given format.
///
/// `Normal` and `Subnormal` carry the sign bit, the unbiased exponent, and
/// the mantissa's fraction bits; the other classes are fully described by
/// their name. The `Display` form is the line shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    PositiveZero,
    NegativeZero,
    Subnormal {
        sign: u8,
        exponent: i32,
        mantissa: BitField,
    },
    Normal {
        sign: u8,
        exponent: i32,
        mantissa: BitField,
    },
    PositiveInfinity,
    NegativeInfinity,
    NaN,
}

/// Classify decoded fields under `fmt`'s interpretation rules.
pub fn classify(fields: &BitFields, fmt: &FloatFormat) -> Classification {
    let exponent = fields.exponent;
    let mantissa = fields.mantissa;
    if exponent.is_zero() {
        if mantissa.is_zero() {
            return if fields.is_negative() {
                Classification::NegativeZero
            } else {
                Classification::PositiveZero
            };
        }
        // Subnormals report the exponent of the minimum normal, one above
        // the all-zero field's own position, so both share a scale.
        return Classification::Subnormal {
            sign: fields.sign,
            exponent: 1 - fmt.bias(),
            mantissa,
        };
    }
    if exponent.is_max() {
        if fmt.has_infinity {
            if mantissa.is_zero() {
                return if fields.is_negative() {
                    Classification::NegativeInfinity
                } else {
                    Classification::PositiveInfinity
                };
            }
            return Classification::NaN;
        }
        // Without an infinity encoding the top exponent row holds finite
        // values, keeping a single all-ones NaN mantissa.
        if mantissa.is_max() {
            return Classification::NaN;
        }
    }
    Classification::Normal {
        sign: fields.sign,
        exponent: exponent.value() as i32 - fmt.bias(),
        mantissa,
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::PositiveZero => f.write_str("+Zero"),
            Classification::NegativeZero => f.write_str("-Zero"),
            Classification::PositiveInfinity => f.write_str("+Inf"),
            Classification::NegativeInfinity => f.write_str("-Inf"),
            Classification::NaN => f.write_str("NaN"),
            Classification::Subnormal {
                sign,
                exponent,
                mantissa,
            } => write!(
                f,
                "Subnormal: sign:{sign}, exponent:{exponent}, mantissa: 0.{mantissa}"
            ),
            Classification::Normal {
                sign,
                exponent,
                mantissa,
            } => write!(
                f,
                "Normal: sign:{sign}, exponent:{exponent}, mantissa: 1.{mantissa}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use crate::formats::{by_name, CATALOG};

    fn class_of(input: &str, name: &str) -> Classification {
        let fmt = by_name(name).unwrap();
        classify(&extract(input, fmt).unwrap(), fmt)
    }

    #[test]
    fn zero_patterns_split_on_the_sign_bit() {
        for fmt in &CATALOG {
            let zero = classify(&extract("0x0", fmt).unwrap(), fmt);
            assert_eq!(zero, Classification::PositiveZero, "{}", fmt.name);

            let sign_only = 1u64 << (fmt.width - 1);
            let input = format!("{sign_only:#x}");
            let negative = classify(&extract(&input, fmt).unwrap(), fmt);
            assert_eq!(negative, Classification::NegativeZero, "{}", fmt.name);
        }
    }

    #[test]
    fn ordinary_normal_value() {
        // 12.375f32
        assert_eq!(
            class_of("0x41460000", "FP32"),
            Classification::Normal {
                sign: 0,
                exponent: 3,
                mantissa: BitField::new(0x460000, 23),
            }
        );
    }

    #[test]
    fn subnormals_report_the_minimum_normal_exponent() {
        let expected = [
            ("FP64", -1022),
            ("FP32", -126),
            ("TF32", -126),
            ("FP16", -14),
            ("BF16", -126),
            ("FP8_E4M3", -6),
            ("FP8_E5M2", -14),
        ];
        for (name, reported) in expected {
            let fmt = by_name(name).unwrap();
            // Smallest subnormal: mantissa LSB only.
            let fields = extract(&format!("{:#x}", 1u64 << fmt.mantissa.1), fmt).unwrap();
            match classify(&fields, fmt) {
                Classification::Subnormal { sign, exponent, .. } => {
                    assert_eq!(sign, 0, "{name}");
                    assert_eq!(exponent, reported, "{name}");
                }
                other => panic!("{name}: expected a subnormal, got {other:?}"),
            }
        }
    }

    #[test]
    fn infinities_need_an_all_ones_exponent_and_zero_mantissa() {
        assert_eq!(class_of("0x7F800000", "FP32"), Classification::PositiveInfinity);
        assert_eq!(class_of("0xFF800000", "FP32"), Classification::NegativeInfinity);
        assert_eq!(class_of("0x7C00", "FP16"), Classification::PositiveInfinity);
        assert_eq!(class_of("0x7C", "FP8_E5M2"), Classification::PositiveInfinity);
        assert_eq!(class_of("0xFC", "FP8_E5M2"), Classification::NegativeInfinity);
    }

    #[test]
    fn any_nonzero_mantissa_under_a_full_exponent_is_nan() {
        assert_eq!(class_of("0x7F800001", "FP32"), Classification::NaN);
        assert_eq!(class_of("0x7FC00000", "FP32"), Classification::NaN);
        assert_eq!(class_of("0xFFFFFFFF", "FP32"), Classification::NaN);
        assert_eq!(class_of("0x7D", "FP8_E5M2"), Classification::NaN);
    }

    #[test]
    fn e4m3_spends_the_top_row_on_finite_values() {
        // 448, the E4M3 maximum finite value.
        assert_eq!(
            class_of("0x7E", "FP8_E4M3"),
            Classification::Normal {
                sign: 0,
                exponent: 8,
                mantissa: BitField::new(0b110, 3),
            }
        );
        // Only the all-ones pattern is NaN, in both signs.
        assert_eq!(class_of("0x7F", "FP8_E4M3"), Classification::NaN);
        assert_eq!(class_of("0xFF", "FP8_E4M3"), Classification::NaN);
        // The top row's bottom step is an ordinary normal too.
        assert_eq!(
            class_of("0x78", "FP8_E4M3"),
            Classification::Normal {
                sign: 0,
                exponent: 8,
                mantissa: BitField::new(0, 3),
            }
        );
    }

    #[test]
    fn rendered_lines_match_the_expected_shape() {
        assert_eq!(
            class_of("0x41460000", "FP32").to_string(),
            "Normal: sign:0, exponent:3, mantissa: 1.10001100000000000000000"
        );
        assert_eq!(
            class_of("0x00000001", "FP32").to_string(),
            "Subnormal: sign:0, exponent:-126, mantissa: 0.00000000000000000000001"
        );
        assert_eq!(
            class_of("0x3C00", "FP16").to_string(),
            "Normal: sign:0, exponent:0, mantissa: 1.0000000000"
        );
        assert_eq!(class_of("0x0", "FP64").to_string(), "+Zero");
        assert_eq!(class_of("0x8000000000000000", "FP64").to_string(), "-Zero");
        assert_eq!(class_of("0x7F800000", "FP32").to_string(), "+Inf");
        assert_eq!(class_of("0xFF800000", "FP32").to_string(), "-Inf");
        assert_eq!(class_of("0x7FC00000", "FP32").to_string(), "NaN");
    }
}
