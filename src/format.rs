use std::fmt::{Debug, LowerHex};
use std::hash::Hash;

/// Storage precision of a binary interchange format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    pub fn exp_width(self) -> u32 {
        match self {
            Precision::Single => f32::EXP_WIDTH,
            Precision::Double => f64::EXP_WIDTH,
        }
    }

    pub fn sig_width(self) -> u32 {
        match self {
            Precision::Single => f32::SIG_WIDTH,
            Precision::Double => f64::SIG_WIDTH,
        }
    }
}

/// Layout of an IEEE-754 binary format.
///
/// Field values are handled as `u64` regardless of the storage width, so the
/// masks below are valid for both `f32` and `f64`.
pub trait FloatFormat: Copy + PartialEq + Debug {
    type Bits: Copy + Eq + Hash + Debug + LowerHex + Into<u64>;

    const PRECISION: Precision;
    const EXP_WIDTH: u32;
    const SIG_WIDTH: u32;
    const BIT_WIDTH: u32 = 1 + Self::EXP_WIDTH + Self::SIG_WIDTH;
    const HEX_DIGITS: usize = (Self::BIT_WIDTH / 4) as usize;

    fn raw_bits(self) -> Self::Bits;
    fn from_raw_bits(bits: Self::Bits) -> Self;

    /// Truncates a working value to the storage width.
    fn narrow(v: u64) -> Self::Bits;

    fn sign_mask() -> u64 {
        1 << (Self::EXP_WIDTH + Self::SIG_WIDTH)
    }

    fn exp_mask() -> u64 {
        (1 << Self::EXP_WIDTH) - 1
    }

    fn sig_mask() -> u64 {
        (1 << Self::SIG_WIDTH) - 1
    }
}

macro_rules! float_format_impl {
    ($float:ty, $bits:ty, $precision:expr, $exp:expr, $sig:expr) => {
        impl FloatFormat for $float {
            type Bits = $bits;

            const PRECISION: Precision = $precision;
            const EXP_WIDTH: u32 = $exp;
            const SIG_WIDTH: u32 = $sig;

            fn raw_bits(self) -> $bits {
                self.to_bits()
            }

            fn from_raw_bits(bits: $bits) -> $float {
                <$float>::from_bits(bits)
            }

            fn narrow(v: u64) -> $bits {
                v as $bits
            }
        }
    };
}

float_format_impl!(f32, u32, Precision::Single, 8, 23);
float_format_impl!(f64, u64, Precision::Double, 11, 52);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(f32::BIT_WIDTH, 32);
        assert_eq!(f64::BIT_WIDTH, 64);
        assert_eq!(f32::HEX_DIGITS, 8);
        assert_eq!(f64::HEX_DIGITS, 16);
        assert_eq!(Precision::Single.exp_width(), 8);
        assert_eq!(Precision::Double.sig_width(), 52);
        assert_eq!(f32::PRECISION, Precision::Single);
    }

    #[test]
    fn masks_cover_the_whole_word() {
        assert_eq!(
            f64::sign_mask() | (f64::exp_mask() << f64::SIG_WIDTH) | f64::sig_mask(),
            u64::MAX
        );
        assert_eq!(
            f32::sign_mask() | (f32::exp_mask() << f32::SIG_WIDTH) | f32::sig_mask(),
            u64::from(u32::MAX)
        );
        assert_eq!(f32::exp_mask(), 0xFF);
        assert_eq!(f64::exp_mask(), 0x7FF);
        assert_eq!(f32::sig_mask(), 0x7F_FFFF);
        assert_eq!(f64::sig_mask(), 0xF_FFFF_FFFF_FFFF);
    }
}
