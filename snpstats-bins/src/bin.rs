use std::fmt::{self, Display};

use serde::Serialize;

///
/// A numeric range keeping the count and running mean of the values added
/// to it. The values themselves are not kept.
///
/// Membership is strict on both ends: a value equal to `minimum` or `maximum`
/// is in no bin built from adjacent edges.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    minimum: f64,
    maximum: f64,
    n: u64,
    mean: f64,
}

impl Bin {
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Bin {
            minimum,
            maximum,
            n: 0,
            mean: 0.0,
        }
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn count(&self) -> u64 {
        self.n
    }

    /// Mean of everything added so far, `None` while the bin is empty.
    pub fn mean(&self) -> Option<f64> {
        (self.n > 0).then_some(self.mean)
    }

    /// `"{minimum}-{maximum}"`, e.g. `"0.001-0.002"`.
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn add(&mut self, value: f64) {
        self.n += 1;
        self.mean += (value - self.mean) / self.n as f64;
    }

    pub fn in_range(&self, x: f64) -> bool {
        self.minimum < x && x < self.maximum
    }

    ///
    /// Add `value` if `key` falls in this bin's range.
    ///
    /// # Arguments
    /// - key: what decides membership (e.g. a MAF)
    /// - value: what gets averaged (e.g. an info score)
    pub fn add_if_in_range(&mut self, key: f64, value: f64) -> bool {
        if self.in_range(key) {
            self.add(value);
            true
        } else {
            false
        }
    }
}

impl Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.minimum, self.maximum)
    }
}
