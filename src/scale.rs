//! Drawing scale given as a ratio `"a:b"`: `a` canvas units correspond to
//! `b` real units.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    text: String,
    factor: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self::parse("1:1")
    }
}

impl Scale {
    /// Parse a ratio like `"1:100"`.
    ///
    /// Never fails: when either side is missing, zero or not a finite number,
    /// or the ratio overflows or underflows, the factor falls back to 1.
    /// Anything after a second `:` is ignored.
    pub fn parse(text: &str) -> Self {
        Self {
            text: text.to_string(),
            factor: ratio_factor(text).unwrap_or(1.0),
        }
    }

    /// Real units per canvas unit.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_identity(&self) -> bool {
        self.factor == 1.0
    }

    /// Scale a canvas length.
    pub fn length(&self, canvas_length: f64) -> f64 {
        canvas_length * self.factor
    }

    /// Scale a canvas area; areas grow with the square of the factor.
    pub fn area(&self, canvas_area: f64) -> f64 {
        canvas_area * self.factor * self.factor
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn ratio_factor(text: &str) -> Option<f64> {
    let mut parts = text.split(':');
    let a = parse_side(parts.next()?)?;
    let b = parse_side(parts.next()?)?;
    // Extreme sides can still overflow to infinity or underflow to zero.
    let f = b / a;
    (f.is_finite() && f != 0.0).then_some(f)
}

fn parse_side(s: &str) -> Option<f64> {
    let v: f64 = s.trim().parse().ok()?;
    (v.is_finite() && v != 0.0).then_some(v)
}
