//! Exact "whole + fraction" display values for dimension labels.
use std::fmt;

use num::{One, Zero};

use crate::config::Measure;

/// A rational split into an optional whole part and the proper remainder.
///
/// Values below one have no whole part (`2/3`), integers have no fraction
/// (`4`), everything else shows both (`1 1/3`). The arithmetic is exact all the
/// way through; nothing here touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifiedFraction {
    value: Measure,
    whole: Option<i64>,
    fraction: Measure,
}

impl SimplifiedFraction {
    pub fn new(value: Measure) -> SimplifiedFraction {
        if value < Measure::one() {
            SimplifiedFraction {
                value,
                whole: None,
                fraction: value,
            }
        } else {
            let whole = value.trunc();
            SimplifiedFraction {
                value,
                whole: Some(whole.to_integer()),
                fraction: value - whole,
            }
        }
    }

    pub fn value(&self) -> Measure {
        self.value
    }

    pub fn whole(&self) -> Option<i64> {
        self.whole
    }

    pub fn fraction(&self) -> Measure {
        self.fraction
    }

    /// `W`, `N/D` or `W N/D`.
    pub fn display(&self) -> String {
        match self.whole {
            Some(whole) if self.fraction.is_zero() => whole.to_string(),
            Some(whole) => format!("{} {}", whole, ratio_text(&self.fraction)),
            None => ratio_text(&self.fraction),
        }
    }

    /// Display text with a unit suffix, e.g. `1 1/2 in`.
    pub fn with_unit(&self, unit: &str) -> String {
        if unit.is_empty() {
            self.display()
        } else {
            format!("{} {}", self.display(), unit)
        }
    }
}

impl From<Measure> for SimplifiedFraction {
    fn from(value: Measure) -> Self {
        SimplifiedFraction::new(value)
    }
}

impl fmt::Display for SimplifiedFraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn ratio_text(r: &Measure) -> String {
    if r.is_integer() {
        r.to_integer().to_string()
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

/// Shorthand used by the annotation engine.
pub fn simplify(value: Measure) -> SimplifiedFraction {
    SimplifiedFraction::new(value)
}
