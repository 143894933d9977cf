// Floating-point layout descriptors and the fixed format catalog.
// Every format the decoder understands is one entry in CATALOG; nothing
// here is mutated after process start, so the table can be shared freely.

/// Describes one fixed-width floating-point layout.
///
/// Field boundaries are inclusive `(msb, lsb)` positions counted from the
/// least-significant bit of the container. The sign always occupies the
/// single top bit, `width - 1`, and is not listed as a range. A format may
/// leave a trailing gap below the mantissa (TF32 declares a 32-bit container
/// of which only the top 19 bits carry meaning).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    pub name: &'static str,
    pub width: u32,
    pub exponent: (u32, u32),
    pub mantissa: (u32, u32),
    /// Whether the top exponent row encodes infinities. OFP8 E4M3-style
    /// formats trade them for one extra binade and a single NaN pattern.
    pub has_infinity: bool,
}

impl FloatFormat {
    /// Number of exponent bits.
    pub fn exponent_bits(&self) -> u32 {
        self.exponent.0 - self.exponent.1 + 1
    }

    /// Number of mantissa bits.
    pub fn mantissa_bits(&self) -> u32 {
        self.mantissa.0 - self.mantissa.1 + 1
    }

    /// Exponent bias: `2^(exponent_bits - 1) - 1`.
    pub fn bias(&self) -> i32 {
        (1 << (self.exponent_bits() - 1)) - 1
    }

    /// Largest raw exponent field value (the NaN/infinity row).
    pub fn max_exponent(&self) -> u64 {
        mask(self.exponent_bits())
    }

    /// Mask covering the whole container.
    pub fn container_mask(&self) -> u64 {
        mask(self.width)
    }
}

/// Low `width` bits set.
pub(crate) const fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// The supported formats, in the order `list_formats` reports them.
pub static CATALOG: [FloatFormat; 7] = [
    FloatFormat {
        name: "FP64",
        width: 64,
        exponent: (62, 52),
        mantissa: (51, 0),
        has_infinity: true,
    },
    FloatFormat {
        name: "FP32",
        width: 32,
        exponent: (30, 23),
        mantissa: (22, 0),
        has_infinity: true,
    },
    FloatFormat {
        name: "TF32",
        width: 32,
        exponent: (30, 23),
        mantissa: (22, 13),
        has_infinity: true,
    },
    FloatFormat {
        name: "FP16",
        width: 16,
        exponent: (14, 10),
        mantissa: (9, 0),
        has_infinity: true,
    },
    FloatFormat {
        name: "BF16",
        width: 16,
        exponent: (14, 7),
        mantissa: (6, 0),
        has_infinity: true,
    },
    FloatFormat {
        name: "FP8_E4M3",
        width: 8,
        exponent: (6, 3),
        mantissa: (2, 0),
        has_infinity: false,
    },
    FloatFormat {
        name: "FP8_E5M2",
        width: 8,
        exponent: (6, 2),
        mantissa: (1, 0),
        has_infinity: true,
    },
];

/// Look a format up by its catalog name. Names are exact; there is no
/// case folding.
pub fn by_name(name: &str) -> Option<&'static FloatFormat> {
    CATALOG.iter().find(|f| f.name == name)
}
