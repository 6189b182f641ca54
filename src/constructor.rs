use crate::{FloatFormat, RawBits};

/// Builds raw patterns from field values, e.g. NaN payloads or boundary
/// exponents to inspect with `FieldTriple::extract`.
pub trait FieldConstructor: Sized {
  /// Packs the fields into a raw pattern. Bits outside each field's width are dropped.
  fn compose(sign: bool, exp: u64, sig: u64) -> Self;
  fn default_nan() -> Self;
  fn zero(sign: bool) -> Self;
  fn infinite(sign: bool) -> Self;
}

impl<F: FloatFormat> FieldConstructor for RawBits<F> {
  fn compose(sign: bool, exp: u64, sig: u64) -> RawBits<F> {
    let sign = if sign { F::sign_mask() } else { 0 };
    let exp = (exp & F::exp_mask()) << F::SIG_WIDTH;
    let sig = sig & F::sig_mask();

    RawBits::from_wide(sign | exp | sig)
  }

  fn default_nan() -> RawBits<F> {
    RawBits::compose(true, F::exp_mask(), 1 << (F::SIG_WIDTH - 1))
  }

  fn zero(sign: bool) -> RawBits<F> {
    RawBits::compose(sign, 0, 0)
  }

  fn infinite(sign: bool) -> RawBits<F> {
    RawBits::compose(sign, F::exp_mask(), 0)
  }
}
