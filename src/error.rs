use std::fmt::Display;

use thiserror::Error;

/// Coordinate table an input problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Reasons a knot table is rejected by [crate::MonotoneCubicSpline::set_data].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("non-finite value in {axis} at index {idx}")]
    NonFinite { axis: Axis, idx: usize },

    #[error("x-values must be strictly increasing: x[{idx}] = {current} follows {previous}")]
    NonIncreasingX { idx: usize, previous: f64, current: f64 },

    #[error("width of interval {idx} overflows")]
    IntervalOverflow { idx: usize },
}

#[derive(Debug, Error)]
pub enum SplineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("failed to write samples: {0}")]
    Io(#[from] std::io::Error),
}
