use std::fmt;

use crate::{getter::FieldGetter, FloatFormat, RawBits, RawBits32, RawBits64};

/// Sign, exponent and mantissa of a float as fixed-width strings of '0'/'1'.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldTriple {
    sign: String,
    exponent: String,
    mantissa: String,
}

impl FieldTriple {
    pub fn extract<F: FloatFormat>(bits: RawBits<F>) -> FieldTriple {
        let fields = FieldTriple {
            sign: if bits.sign() { "1" } else { "0" }.to_string(),
            exponent: binary(bits.exp(), F::EXP_WIDTH),
            mantissa: binary(bits.sig(), F::SIG_WIDTH),
        };
        log::trace!("extract {} -> {}", bits, fields);
        fields
    }

    pub fn sign(&self) -> &str {
        &self.sign
    }

    pub fn exponent(&self) -> &str {
        &self.exponent
    }

    pub fn mantissa(&self) -> &str {
        &self.mantissa
    }

    /// `(sign, exponent, mantissa)`, in table column order.
    pub fn cells(&self) -> (&str, &str, &str) {
        (&self.sign, &self.exponent, &self.mantissa)
    }
}

impl fmt::Display for FieldTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.sign, self.exponent, self.mantissa)
    }
}

// `v` is already masked to `width` bits, so the padding never truncates.
fn binary(v: u64, width: u32) -> String {
    format!("{:0width$b}", v, width = width as usize)
}

pub fn extract64(bits: RawBits64) -> FieldTriple {
    FieldTriple::extract(bits)
}

pub fn extract32(bits: RawBits32) -> FieldTriple {
    FieldTriple::extract(bits)
}
