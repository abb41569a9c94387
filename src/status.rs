use std::fmt::Display;

/// Trend of the whole data set, derived from the signs of the secant slopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonotonicStatus {
    Increasing,
    Decreasing,
    Constant,
    NotMonotonic,
}

impl MonotonicStatus {
    /// Classifies a sequence of secant slopes.
    /// - [MonotonicStatus::Constant] if every slope is zero,
    /// - [MonotonicStatus::Increasing] if every slope is `>= 0`,
    /// - [MonotonicStatus::Decreasing] if every slope is `<= 0`,
    /// - [MonotonicStatus::NotMonotonic] otherwise.
    pub fn classify(delta: &[f64]) -> Self {
        let any_rising = delta.iter().any(|d| *d > 0.0);
        let any_falling = delta.iter().any(|d| *d < 0.0);

        match (any_rising, any_falling) {
            (false, false) => MonotonicStatus::Constant,
            (true, false) => MonotonicStatus::Increasing,
            (false, true) => MonotonicStatus::Decreasing,
            (true, true) => MonotonicStatus::NotMonotonic,
        }
    }

    pub fn is_monotone(&self) -> bool {
        *self != MonotonicStatus::NotMonotonic
    }
}

impl Display for MonotonicStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MonotonicStatus::Increasing => "monotonic increase",
            MonotonicStatus::Decreasing => "monotonic decrease",
            MonotonicStatus::Constant => "monotonic constant",
            MonotonicStatus::NotMonotonic => "not monotonic",
        };
        write!(f, "{}", name)
    }
}
