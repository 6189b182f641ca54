use crate::FieldTriple;

pub const MATCH: char = '-';
pub const MISMATCH: char = 'x';

/// Marks each position of `a` and `b` with [`MATCH`] or [`MISMATCH`].
///
/// Inputs of unequal length are compared up to the shorter one.
pub fn diff(a: &str, b: &str) -> String {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a != len_b {
        log::debug!("diff of unequal lengths {} and {}, truncating", len_a, len_b);
    }

    a.chars()
        .zip(b.chars())
        .map(|(x, y)| if x == y { MATCH } else { MISMATCH })
        .collect()
}

/// Per-field markers for two [`FieldTriple`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDiff {
    sign: String,
    exponent: String,
    mantissa: String,
}

impl FieldDiff {
    pub fn between(a: &FieldTriple, b: &FieldTriple) -> FieldDiff {
        FieldDiff {
            sign: diff(a.sign(), b.sign()),
            exponent: diff(a.exponent(), b.exponent()),
            mantissa: diff(a.mantissa(), b.mantissa()),
        }
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

    /// Number of differing bit positions.
    pub fn count(&self) -> usize {
        [&self.sign, &self.exponent, &self.mantissa]
            .iter()
            .map(|s| s.chars().filter(|&c| c == MISMATCH).count())
            .sum()
    }

    pub fn is_identical(&self) -> bool {
        self.count() == 0
    }
}
