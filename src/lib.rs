//! Bit-level inspection of IEEE-754 `f32` and `f64` values.
//!
//! A float is reinterpreted as its raw bit pattern ([`RawBits`]), which can be
//! written as big-endian hex or split into its sign, exponent and mantissa
//! fields ([`FieldTriple`]). Two values can be laid side by side in a table
//! that marks every differing bit ([`Comparison`]).
//!
//! ```
//! assert_eq!(floatbits::float_to_hex64(0.1), "3fb999999999999a");
//! assert_eq!(floatbits::hex_to_float32("3dcccccd"), Ok(0.1));
//!
//! let fields = floatbits::fields_of64(-11111.0);
//! assert_eq!(fields.sign(), "1");
//! assert_eq!(fields.exponent(), "10000001100");
//! ```

extern crate either;

mod compare;
mod constructor;
mod diff;
mod error;
mod fields;
mod format;
mod getter;
mod raw;

pub use compare::{compare32, compare64, Comparison};
pub use constructor::FieldConstructor;
pub use diff::{diff, FieldDiff, MATCH, MISMATCH};
pub use error::{EncodingError, Error};
pub use fields::{extract32, extract64, FieldTriple};
pub use format::{FloatFormat, Precision};
pub use getter::FieldGetter;
pub use raw::{decode32, decode64, encode32, encode64, RawBits, RawBits32, RawBits64};

/// Big-endian hex of `value`, 16 lowercase digits.
pub fn float_to_hex64(value: f64) -> String {
    encode64(value).to_hex()
}

pub fn hex_to_float64(hex: &str) -> Result<f64, Error> {
    decode64(hex)
}

/// Big-endian hex of `value`, 8 lowercase digits.
pub fn float_to_hex32(value: f32) -> String {
    encode32(value).to_hex()
}

pub fn hex_to_float32(hex: &str) -> Result<f32, Error> {
    decode32(hex)
}

pub fn fields_of64(value: f64) -> FieldTriple {
    extract64(encode64(value))
}

pub fn fields_of32(value: f32) -> FieldTriple {
    extract32(encode32(value))
}

pub fn compare_bits64(value1: f64, value2: f64) -> String {
    compare64(value1, value2)
}

pub fn compare_bits32(value1: f32, value2: f32) -> String {
    compare32(value1, value2)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn signed_zero_fields() {
        assert_eq!(fields_of64(-0.0).sign(), "1");
        assert_eq!(fields_of64(0.0).sign(), "0");
        assert_eq!(fields_of32(-0.0).sign(), "1");
        assert_eq!(fields_of32(0.0).sign(), "0");
    }

    #[test]
    fn hex_round_trip() {
        for &x in &[0.0, -0.0, 1.0, 0.1, -11111.0, f64::MAX, f64::MIN_POSITIVE, f64::EPSILON] {
            let back = hex_to_float64(&float_to_hex64(x)).unwrap();
            assert_eq!(back.to_bits(), x.to_bits());
        }
        for &x in &[0.0f32, -0.0, 1.0, 0.1, 100000008.0, f32::MAX, f32::MIN_POSITIVE] {
            let back = hex_to_float32(&float_to_hex32(x)).unwrap();
            assert_eq!(back.to_bits(), x.to_bits());
        }
    }

    #[test]
    fn errors_surface() {
        match hex_to_float64("xyz") {
            Err(Error::InvalidEncoding(EncodingError::Length { expected: 16, found: 3 })) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(hex_to_float32("zzzzzzzz").is_err());
    }
}
