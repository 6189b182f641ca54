use crate::{FloatFormat, RawBits};

pub trait FieldGetter {
  fn sign(self) -> bool;
  fn exp(self) -> u64;
  fn sig(self) -> u64;
}

impl<F: FloatFormat> FieldGetter for RawBits<F> {
  fn sign(self) -> bool { self.wide() & F::sign_mask() != 0 }
  fn exp(self) -> u64 { (self.wide() >> F::SIG_WIDTH) & F::exp_mask() }
  fn sig(self) -> u64 { self.wide() & F::sig_mask() }
}

#[cfg(test)]
mod test {
  use super::FieldGetter;
  use crate::RawBits;

  #[test]
  fn split_f64() {
    let bits = RawBits::encode(-11111.0f64);
    assert!(bits.sign());
    assert_eq!(bits.exp(), 0b100_0000_1100);
    assert_eq!(bits.sig(), 0x5_b380_0000_0000);
  }

  #[test]
  fn split_f32() {
    let bits = RawBits::encode(0.1f32);
    assert!(!bits.sign());
    assert_eq!(bits.exp(), 0b0111_1011);
    assert_eq!(bits.sig(), 0x4c_cccd);
  }
}
