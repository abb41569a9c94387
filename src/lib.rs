//! Monotone cubic Hermite interpolation.
//! The interpolant passes through every knot and never oscillates where the
//! data does not: tangents are limited with the Fritsch–Carlson procedure so
//! each interval with monotone data yields a monotone cubic piece.
//!
//! # Example
//! ```
//! use monotone_cubic::{MonotoneCubicSpline, MonotonicStatus};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![0.0, 1.0, 8.0, 27.0];
//! let spline = MonotoneCubicSpline::with_data(&x, &y).unwrap();
//!
//! assert_eq!(spline.monotonic_status(), Some(MonotonicStatus::Increasing));
//! assert_eq!(spline.sample(2.0), 8.0);
//! assert!(spline.sample(1.5) > 1.0 && spline.sample(1.5) < 8.0);
//! assert_approx_eq!(spline.sample_derivative(0.5), (spline.sample(0.5 + 1e-7) - spline.sample(0.5 - 1e-7)) / 2e-7, 1e-5);
//! ```

mod derivatives;
mod error;
mod hermite;
mod knot;
mod spline;
mod status;

pub use error::{Axis, InvalidInputError, SplineError};
pub use spline::MonotoneCubicSpline;
pub use status::MonotonicStatus;
