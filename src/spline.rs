use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{debug, warn};

use crate::{
    derivatives::Derivatives,
    error::SplineError,
    hermite,
    knot::KnotTable,
    status::MonotonicStatus,
};

/// Monotone cubic Hermite interpolant through a table of `(x, y)` samples.
///
/// Between two knots the interpolant is the cubic determined by the knot
/// values and tangents. Tangents are adjusted with the Fritsch–Carlson
/// procedure, so on every interval where the data is monotone the
/// interpolant is monotone as well.
///
/// Queries outside `[x_min, x_max]` evaluate the first or last cubic piece
/// at the query point. Every query on an empty interpolant returns `NaN`.
#[derive(Debug, Clone, Default)]
pub struct MonotoneCubicSpline {
    state: Option<State>,
}

#[derive(Debug, Clone)]
struct State {
    table: KnotTable,
    derivatives: Derivatives,
    status: MonotonicStatus,
}

impl MonotoneCubicSpline {
    /// Creates an interpolant without data; load it with [MonotoneCubicSpline::set_data].
    pub fn new() -> Self {
        MonotoneCubicSpline { state: None }
    }

    /// Creates an interpolant and loads `x`, `y` into it.
    /// # Example
    /// ```
    /// use monotone_cubic::{MonotoneCubicSpline, MonotonicStatus};
    ///
    /// let spline = MonotoneCubicSpline::with_data(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(spline.monotonic_status(), Some(MonotonicStatus::NotMonotonic));
    /// assert_eq!(spline.sample(1.0), 1.0);
    /// ```
    pub fn with_data(x: &[f64], y: &[f64]) -> Result<Self, SplineError> {
        let mut spline = MonotoneCubicSpline::new();
        spline.set_data(x, y)?;
        Ok(spline)
    }

    /// Replaces the data and recomputes all tangents.
    ///
    /// # Errors
    /// [SplineError::InvalidInput] when `x` and `y` differ in length, hold
    /// fewer than 2 knots, contain non-finite values, `x` is not strictly
    /// increasing or an interval width overflows. The previously loaded data is kept in that case.
    /// ```
    /// use monotone_cubic::MonotoneCubicSpline;
    ///
    /// let mut spline = MonotoneCubicSpline::with_data(&[0.0, 1.0], &[0.0, 2.0]).unwrap();
    /// assert!(spline.set_data(&[1.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).is_err());
    /// assert_eq!(spline.sample_size(), 2);
    /// ```
    pub fn set_data(&mut self, x: &[f64], y: &[f64]) -> Result<(), SplineError> {
        let table = match KnotTable::new(x, y) {
            Ok(table) => table,
            Err(err) => {
                warn!(%err, "rejected interpolation data");
                return Err(err.into());
            }
        };

        let status = MonotonicStatus::classify(table.delta());
        if !status.is_monotone() {
            debug!("data set is not monotonic, monotonicity is preserved per interval only");
        }
        let derivatives = Derivatives::solve(&table, status);
        debug!(knots = table.len(), %status, "loaded interpolation data");

        self.state = Some(State { table, derivatives, status });
        Ok(())
    }

    /// Interpolated value at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        self.evaluate(x, hermite::p)
    }

    /// First derivative of the interpolant at `x`.
    pub fn sample_derivative(&self, x: f64) -> f64 {
        self.evaluate(x, hermite::p_prime)
    }

    /// Second derivative of the interpolant at `x`.
    pub fn sample_2nd_derivative(&self, x: f64) -> f64 {
        self.evaluate(x, hermite::p_double_prime)
    }

    /// Interpolated values at all `x_vector` points. Sorted input is the fast path.
    pub fn sample_many(&self, x_vector: &[f64]) -> Vec<f64> {
        let state = match &self.state {
            Some(state) => state,
            None => return vec![f64::NAN; x_vector.len()],
        };

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;
        for x in x_vector {
            index = state.table.find_interval_with_hint(index, *x);
            results.push(state.evaluate_in(index, *x, hermite::p));
        }
        results
    }

    /// Writes one `x,y` row per entry of `xnew`, replacing the file at `path`.
    ///
    /// # Errors
    /// [SplineError::Io] when the file cannot be created or written.
    pub fn dump_csv<P: AsRef<Path>>(&self, path: P, xnew: &[f64]) -> Result<(), SplineError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        for (x, y) in xnew.iter().zip(self.sample_many(xnew)) {
            writeln!(writer, "{},{}", x, y)?;
        }
        writer.flush()?;

        debug!(rows = xnew.len(), path = %path.as_ref().display(), "dumped samples");
        Ok(())
    }

    /// Number of knots currently loaded.
    pub fn sample_size(&self) -> usize {
        self.state.as_ref().map_or(0, |state| state.table.len())
    }

    /// `true` until data was loaded successfully.
    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    /// Trend of the loaded data, `None` before any data was loaded.
    pub fn monotonic_status(&self) -> Option<MonotonicStatus> {
        self.state.as_ref().map(|state| state.status)
    }

    /// `(x_min, x_max)` of the loaded data.
    pub fn domain(&self) -> Option<(f64, f64)> {
        self.state
            .as_ref()
            .map(|state| (state.table.min_x(), state.table.max_x()))
    }

    /// Loaded abscissas, empty before any data was loaded.
    pub fn x(&self) -> &[f64] {
        self.state.as_ref().map(|state| state.table.x()).unwrap_or(&[])
    }

    /// Loaded ordinates.
    pub fn y(&self) -> &[f64] {
        self.state.as_ref().map(|state| state.table.y()).unwrap_or(&[])
    }

    /// Tangents at the knots after the monotonicity adjustment.
    pub fn derivatives(&self) -> &[f64] {
        self.state
            .as_ref()
            .map(|state| state.derivatives.yp.as_slice())
            .unwrap_or(&[])
    }

    /// Per interval ratio `yp[i] / delta[i]` before that interval was adjusted.
    pub fn alpha(&self) -> &[f64] {
        self.state
            .as_ref()
            .map(|state| state.derivatives.alpha.as_slice())
            .unwrap_or(&[])
    }

    /// Per interval ratio `yp[i + 1] / delta[i]` before that interval was adjusted.
    pub fn beta(&self) -> &[f64] {
        self.state
            .as_ref()
            .map(|state| state.derivatives.beta.as_slice())
            .unwrap_or(&[])
    }

    fn evaluate(&self, x: f64, piece: PieceFn) -> f64 {
        match &self.state {
            Some(state) => state.evaluate_in(state.table.find_interval(x), x, piece),
            None => f64::NAN,
        }
    }
}

type PieceFn = fn(f64, f64, f64, f64, f64, f64, f64) -> f64;

impl State {
    fn evaluate_in(&self, klo: usize, x: f64, piece: PieceFn) -> f64 {
        let khi = klo + 1;
        let (xs, ys, yp) = (self.table.x(), self.table.y(), &self.derivatives.yp);
        piece(xs[khi], xs[klo], ys[khi], ys[klo], yp[khi], yp[klo], x)
    }
}
