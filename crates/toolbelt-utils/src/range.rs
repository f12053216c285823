//! Float-capable ranges
//!
//! `XRange` behaves like an integer range but accepts fractional bounds and
//! steps. Values are computed as `start + i * step` and rounded to four
//! decimal places, so long ranges do not accumulate floating-point drift.

use crate::{Error, Result};

/// Maximum number of decimal places accepted in any argument.
pub const MAX_DECIMALS: usize = 3;

const ROUND_FACTOR: f64 = 10_000.0;
const EPSILON: f64 = 1e-9;

/// Iterator over `start, start + step, ...` up to (or before) `stop`.
#[derive(Debug, Clone, PartialEq)]
pub struct XRange {
    start: f64,
    stop: f64,
    step: f64,
    index: u64,
}

/// Create a range from `start` towards `stop` in increments of `step`.
///
/// `stop` is excluded unless `inclusive` is set. A negative `step` counts
/// down. A step pointing away from `stop` gives an empty range.
///
/// ```
/// use toolbelt_utils::xrange;
///
/// let values: Vec<f64> = xrange(0.0, 1.0, 0.25, true).unwrap().collect();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn xrange(start: f64, stop: f64, step: f64, inclusive: bool) -> Result<XRange> {
    if step == 0.0 {
        return Err(Error::ZeroStep);
    }
    for (arg, value) in [("start", start), ("stop", stop), ("step", step)] {
        if decimal_places(value) > MAX_DECIMALS {
            return Err(Error::TooManyDecimals {
                arg,
                max: MAX_DECIMALS,
            });
        }
    }

    let stop = if inclusive { stop } else { round(stop - step) };
    tracing::trace!(start, stop, step, "xrange");

    Ok(XRange {
        start,
        stop,
        step,
        index: 0,
    })
}

impl XRange {
    /// `0, 1, 2, ...` up to but excluding `stop`.
    pub fn up_to(stop: f64) -> Result<Self> {
        xrange(0.0, stop, 1.0, false)
    }

    /// `start, start + 1, ...` up to but excluding `stop`.
    pub fn between(start: f64, stop: f64) -> Result<Self> {
        xrange(start, stop, 1.0, false)
    }

    fn value_at(&self, index: u64) -> f64 {
        round(self.start + index as f64 * self.step)
    }

    fn in_bounds(&self, value: f64) -> bool {
        if self.step > 0.0 {
            value <= self.stop + EPSILON
        } else {
            value >= self.stop - EPSILON
        }
    }
}

impl Iterator for XRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.value_at(self.index);
        if !self.in_bounds(value) {
            return None;
        }
        self.index += 1;
        Some(value)
    }
}

fn round(value: f64) -> f64 {
    (value * ROUND_FACTOR).round() / ROUND_FACTOR
}

fn decimal_places(value: f64) -> usize {
    let text = format!("{}", value.abs());
    text.split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(range: Result<XRange>) -> Vec<f64> {
        range.unwrap().collect()
    }

    #[test]
    fn test_integer_steps() {
        assert_eq!(collect(XRange::up_to(4.0)), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(collect(XRange::between(2.0, 5.0)), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_fractional_step() {
        assert_eq!(
            collect(xrange(0.0, 0.5, 0.1, false)),
            vec![0.0, 0.1, 0.2, 0.3, 0.4]
        );
    }

    #[test]
    fn test_inclusive() {
        assert_eq!(collect(xrange(1.0, 3.0, 1.0, true)), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_counting_down() {
        assert_eq!(
            collect(xrange(3.0, 0.0, -1.0, false)),
            vec![3.0, 2.0, 1.0]
        );
        assert_eq!(
            collect(xrange(1.0, 0.0, -0.25, true)),
            vec![1.0, 0.75, 0.5, 0.25, 0.0]
        );
    }

    #[test]
    fn test_wrong_direction_is_empty() {
        assert!(collect(xrange(0.0, 10.0, -1.0, false)).is_empty());
        assert!(collect(xrange(10.0, 0.0, 1.0, false)).is_empty());
    }

    #[test]
    fn test_start_equal_to_stop() {
        assert!(collect(xrange(1.0, 1.0, 1.0, false)).is_empty());
        assert_eq!(collect(xrange(1.0, 1.0, 1.0, true)), vec![1.0]);
    }

    #[test]
    fn test_zero_step_rejected() {
        assert!(matches!(xrange(0.0, 1.0, 0.0, false), Err(Error::ZeroStep)));
    }

    #[test]
    fn test_too_many_decimals_rejected() {
        let err = xrange(0.0, 1.0, 0.0001, false).unwrap_err();
        assert!(matches!(err, Error::TooManyDecimals { arg: "step", .. }));
    }

    #[test]
    fn test_no_drift_over_long_range() {
        let last = xrange(0.0, 100.0, 0.01, true).unwrap().last().unwrap();
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(1.0), 0);
        assert_eq!(decimal_places(0.125), 3);
        assert_eq!(decimal_places(-2.5), 1);
    }
}
