use crate::error::{Axis, InvalidInputError};

/// Validated knot table together with the per-interval geometry derived from it.
/// - `x` - strictly increasing abscissas,
/// - `y` - ordinates,
/// - `h` - interval widths `x[i+1] - x[i]`,
/// - `delta` - secant slopes `(y[i+1] - y[i]) / h[i]`, infinite when the
///   quotient overflows (near duplicate abscissas, huge ordinate jumps).
///   Widths are always finite.
#[derive(Debug, Clone)]
pub(crate) struct KnotTable {
    x: Vec<f64>,
    y: Vec<f64>,
    h: Vec<f64>,
    delta: Vec<f64>,
}

impl KnotTable {
    /// Copies and validates the tables. Nothing is built when any check fails.
    pub(crate) fn new(x: &[f64], y: &[f64]) -> Result<Self, InvalidInputError> {
        if x.len() != y.len() {
            return Err(InvalidInputError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InvalidInputError::InsufficientPoints { got: x.len() });
        }
        if let Some(idx) = non_finite_idx(x) {
            return Err(InvalidInputError::NonFinite { axis: Axis::X, idx });
        }
        if let Some(idx) = non_finite_idx(y) {
            return Err(InvalidInputError::NonFinite { axis: Axis::Y, idx });
        }
        if let Some(idx) = (1..x.len()).find(|&i| x[i] <= x[i - 1]) {
            return Err(InvalidInputError::NonIncreasingX {
                idx,
                previous: x[idx - 1],
                current: x[idx],
            });
        }

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        if let Some(idx) = non_finite_idx(&h) {
            return Err(InvalidInputError::IntervalOverflow { idx });
        }
        let delta = y
            .windows(2)
            .zip(h.iter())
            .map(|(w, hi)| (w[1] - w[0]) / hi)
            .collect();

        Ok(KnotTable { x: x.to_vec(), y: y.to_vec(), h, delta })
    }

    pub(crate) fn len(&self) -> usize {
        self.x.len()
    }

    pub(crate) fn number_of_intervals(&self) -> usize {
        self.h.len()
    }

    pub(crate) fn x(&self) -> &[f64] {
        &self.x
    }

    pub(crate) fn y(&self) -> &[f64] {
        &self.y
    }

    pub(crate) fn h(&self) -> &[f64] {
        &self.h
    }

    pub(crate) fn delta(&self) -> &[f64] {
        &self.delta
    }

    pub(crate) fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub(crate) fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Index `klo` of the interval `[x[klo], x[klo + 1]]` bracketing `x`.
    ///
    /// Queries left of the table resolve to the first interval and queries
    /// right of it (or on the last knot) to the last one.
    pub(crate) fn find_interval(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.x.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.x[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    /// Same as [KnotTable::find_interval], but tries `hint` and the interval
    /// after it first.
    pub(crate) fn find_interval_with_hint(&self, hint: usize, x: f64) -> usize {
        let last = self.number_of_intervals() - 1;
        if hint <= last && self.is_in_interval(hint, x) {
            return hint;
        }
        if hint < last && self.is_in_interval(hint + 1, x) {
            return hint + 1;
        }
        self.find_interval(x)
    }

    fn is_in_interval(&self, interval_index: usize, x: f64) -> bool {
        let last = self.number_of_intervals() - 1;
        let above_lo = interval_index == 0 || self.x[interval_index] <= x;
        let below_hi = if interval_index == last {
            true
        } else {
            x < self.x[interval_index + 1]
        };
        above_lo && below_hi
    }
}

fn non_finite_idx(values: &[f64]) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn geometry() {
        let eps = 1e-12;
        let table = KnotTable::new(&[0.0, 0.5, 2.0], &[1.0, 2.0, -1.0]).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.number_of_intervals(), 2);
        assert_approx_eq!(table.h()[0], 0.5, eps);
        assert_approx_eq!(table.h()[1], 1.5, eps);
        assert_approx_eq!(table.delta()[0], 2.0, eps);
        assert_approx_eq!(table.delta()[1], -2.0, eps);
        assert_eq!(table.min_x(), 0.0);
        assert_eq!(table.max_x(), 2.0);
    }

    #[test]
    fn rejects_unequal_length() {
        let err = KnotTable::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, InvalidInputError::UnequalLength { x_len: 3, y_len: 2 });
    }

    #[test]
    fn rejects_single_knot() {
        let err = KnotTable::new(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(err, InvalidInputError::InsufficientPoints { got: 1 });

        let err = KnotTable::new(&[], &[]).unwrap_err();
        assert_eq!(err, InvalidInputError::InsufficientPoints { got: 0 });
    }

    #[test]
    fn rejects_duplicate_and_decreasing_x() {
        let err = KnotTable::new(&[1.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, InvalidInputError::NonIncreasingX { idx: 1, previous: 1.0, current: 1.0 });

        let err = KnotTable::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, InvalidInputError::NonIncreasingX { idx: 2, previous: 2.0, current: 1.0 });
    }

    #[test]
    fn rejects_non_finite() {
        let err = KnotTable::new(&[0.0, f64::NAN], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, InvalidInputError::NonFinite { axis: Axis::X, idx: 1 });

        let err = KnotTable::new(&[0.0, 1.0], &[f64::INFINITY, 1.0]).unwrap_err();
        assert_eq!(err, InvalidInputError::NonFinite { axis: Axis::Y, idx: 0 });
    }

    #[test]
    fn rejects_overflowing_width() {
        let err = KnotTable::new(&[-1e308, 1e308], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, InvalidInputError::IntervalOverflow { idx: 0 });

        // 9e307 - (-9e307) exceeds f64::MAX
        let err = KnotTable::new(&[-1e308, -9e307, 9e307], &[0.0; 3]).unwrap_err();
        assert_eq!(err, InvalidInputError::IntervalOverflow { idx: 1 });
    }

    #[test]
    fn overflowing_secant_is_kept_infinite() {
        let table = KnotTable::new(&[0.0, 1e-310, 1.0], &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(table.delta()[0], f64::INFINITY);
        assert!(table.h().iter().all(|h| h.is_finite()));

        let table = KnotTable::new(&[0.0, 1.0, 2.0], &[-1e308, 1e308, 1e308]).unwrap();
        assert_eq!(table.delta()[0], f64::INFINITY);
        assert_eq!(table.delta()[1], 0.0);
    }

    #[test]
    fn find_interval() {
        let table = KnotTable::new(&[0.0, 1.0, 2.0, 4.0, 8.0], &[0.0; 5]).unwrap();

        assert_eq!(table.find_interval(0.0), 0);
        assert_eq!(table.find_interval(0.5), 0);
        assert_eq!(table.find_interval(1.0), 1);
        assert_eq!(table.find_interval(3.9), 2);
        assert_eq!(table.find_interval(4.0), 3);
        assert_eq!(table.find_interval(8.0), 3);

        // out of range queries resolve to the boundary intervals
        assert_eq!(table.find_interval(-10.0), 0);
        assert_eq!(table.find_interval(100.0), 3);
    }

    #[test]
    fn find_interval_with_hint() {
        let table = KnotTable::new(&[0.0, 1.0, 2.0, 4.0, 8.0], &[0.0; 5]).unwrap();

        for x in [-1.0, 0.0, 0.3, 1.0, 1.5, 2.0, 3.0, 4.0, 7.5, 8.0, 9.0] {
            for hint in 0..6 {
                assert_eq!(table.find_interval_with_hint(hint, x), table.find_interval(x));
            }
        }
    }
}
