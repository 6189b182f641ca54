use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Error, FloatFormat};

/// The verbatim bit pattern of an `f32` or `f64`.
///
/// Hex text produced from a `RawBits` is always big-endian: the first two
/// digits are the most significant byte, whatever the host byte order.
pub struct RawBits<F: FloatFormat> {
    v: F::Bits,
}

pub type RawBits32 = RawBits<f32>;
pub type RawBits64 = RawBits<f64>;

impl<F: FloatFormat> RawBits<F> {
    pub fn new(v: F::Bits) -> RawBits<F> {
        RawBits { v }
    }

    pub fn encode(value: F) -> RawBits<F> {
        let bits = RawBits::new(value.raw_bits());
        log::trace!("encode {:?} -> {}", value, bits);
        bits
    }

    pub fn decode(self) -> F {
        F::from_raw_bits(self.v)
    }

    pub fn bits(self) -> F::Bits {
        self.v
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Parses exactly `F::HEX_DIGITS` hex digits, most significant first.
    /// Either letter case is accepted.
    pub fn from_hex(hex: &str) -> Result<RawBits<F>, Error> {
        let found = hex.chars().count();
        if found != F::HEX_DIGITS {
            log::debug!("rejecting {:?}: length {} != {}", hex, found, F::HEX_DIGITS);
            return Err(Error::length(F::HEX_DIGITS, found));
        }

        let mut v = 0u64;
        for (position, c) in hex.chars().enumerate() {
            let digit = match c.to_digit(16) {
                Some(digit) => digit,
                None => {
                    log::debug!("rejecting {:?}: bad digit {:?} at {}", hex, c, position);
                    return Err(Error::digit(position, c));
                }
            };
            v = (v << 4) | u64::from(digit);
        }

        let bits = RawBits::from_wide(v);
        log::trace!("decode {:?} -> {:?}", hex, bits.decode());
        Ok(bits)
    }

    pub(crate) fn wide(self) -> u64 {
        self.v.into()
    }

    pub(crate) fn from_wide(v: u64) -> RawBits<F> {
        RawBits::new(F::narrow(v))
    }
}

impl<F: FloatFormat> Clone for RawBits<F> {
    fn clone(&self) -> RawBits<F> {
        *self
    }
}

impl<F: FloatFormat> Copy for RawBits<F> {}

impl<F: FloatFormat> PartialEq for RawBits<F> {
    fn eq(&self, other: &RawBits<F>) -> bool {
        self.v == other.v
    }
}

impl<F: FloatFormat> Eq for RawBits<F> {}

impl<F: FloatFormat> Hash for RawBits<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.v.hash(state)
    }
}

impl<F: FloatFormat> fmt::Debug for RawBits<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawBits({:#0width$x})", self.v, width = F::HEX_DIGITS + 2)
    }
}

impl<F: FloatFormat> fmt::LowerHex for RawBits<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.v, f)
    }
}

impl<F: FloatFormat> fmt::Display for RawBits<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.v, width = F::HEX_DIGITS)
    }
}

impl From<f32> for RawBits32 {
    fn from(f: f32) -> RawBits32 {
        RawBits::encode(f)
    }
}

impl From<f64> for RawBits64 {
    fn from(f: f64) -> RawBits64 {
        RawBits::encode(f)
    }
}

pub fn encode64(value: f64) -> RawBits64 {
    RawBits::encode(value)
}

pub fn encode32(value: f32) -> RawBits32 {
    RawBits::encode(value)
}

pub fn decode64(hex: &str) -> Result<f64, Error> {
    RawBits64::from_hex(hex).map(RawBits::decode)
}

pub fn decode32(hex: &str) -> Result<f32, Error> {
    RawBits32::from_hex(hex).map(RawBits::decode)
}
