use std::fmt;
use std::marker::PhantomData;

use either::Either;

use crate::{FieldDiff, FieldTriple, FloatFormat, Precision, RawBits};

// Text width of the sign column, wide enough for its header.
const SIGN_WIDTH: usize = 4;

/// Field-by-field comparison of two values of the same format.
///
/// Renders as a box-drawn table:
///
/// ```text
/// ┌──────┬──────────┬─────────────────────────┐
/// │ Sign │ Exponent │ Mantissa                │
/// │    0 │ 01111101 │ 00110011001100110011010 │
/// │    0 │ 01111110 │ 00000000000000000000000 │
/// │    - │ ------xx │ --xx--xx--xx--xx--xx-x- │
/// └──────┴──────────┴─────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison<F: FloatFormat> {
    first: FieldTriple,
    second: FieldTriple,
    diff: FieldDiff,
    format: PhantomData<F>,
}

impl<F: FloatFormat> Comparison<F> {
    pub fn new(first: F, second: F) -> Comparison<F> {
        log::trace!("compare {:?} with {:?} ({:?})", first, second, F::PRECISION);
        let first = FieldTriple::extract(RawBits::encode(first));
        let second = FieldTriple::extract(RawBits::encode(second));
        let diff = FieldDiff::between(&first, &second);

        Comparison { first, second, diff, format: PhantomData }
    }

    pub fn precision(&self) -> Precision {
        F::PRECISION
    }

    pub fn first(&self) -> &FieldTriple {
        &self.first
    }

    pub fn second(&self) -> &FieldTriple {
        &self.second
    }

    pub fn diff(&self) -> &FieldDiff {
        &self.diff
    }

    /// Renders the table, with the marker row when `show_diff` is set.
    /// The result always ends with a newline.
    pub fn render(&self, show_diff: bool) -> String {
        let mut rows = vec![Either::Left(&self.first), Either::Left(&self.second)];
        if show_diff {
            rows.push(Either::Right(&self.diff));
        }

        let precision = self.precision();
        let mut out = border(precision, '┌', '┬', '┐');
        out += &line(precision, ("Sign", "Exponent", "Mantissa"));
        for row in rows {
            out += &line(precision, row.either(FieldTriple::cells, FieldDiff::cells));
        }
        out += &border(precision, '└', '┴', '┘');
        out
    }
}

impl<F: FloatFormat> fmt::Display for Comparison<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

fn border(precision: Precision, left: char, junction: char, right: char) -> String {
    let rule = |width: u32| "─".repeat(width as usize + 2);
    format!(
        "{}{}{}{}{}{}{}\n",
        left,
        rule(SIGN_WIDTH as u32),
        junction,
        rule(precision.exp_width()),
        junction,
        rule(precision.sig_width()),
        right
    )
}

fn line(precision: Precision, (sign, exponent, mantissa): (&str, &str, &str)) -> String {
    format!(
        "│ {:>sw$} │ {:<ew$} │ {:<mw$} │\n",
        sign,
        exponent,
        mantissa,
        sw = SIGN_WIDTH,
        ew = precision.exp_width() as usize,
        mw = precision.sig_width() as usize
    )
}

pub fn compare64(value1: f64, value2: f64) -> String {
    Comparison::new(value1, value2).render(true)
}

pub fn compare32(value1: f32, value2: f32) -> String {
    Comparison::new(value1, value2).render(true)
}
