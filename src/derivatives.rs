//! Knot tangents of the monotone cubic Hermite interpolant (Fritsch–Carlson).
//!
//! Tangents are first estimated from the secant slopes and then rescaled
//! interval by interval until every pair `(alpha, beta)` of tangent to secant
//! ratios lies inside the circle `alpha² + beta² <= 9`.

use tracing::trace;

use crate::{knot::KnotTable, status::MonotonicStatus};

/// Radius of the monotonicity circle in the `(alpha, beta)` plane.
const MONOTONICITY_RADIUS: f64 = 3.0;

/// Tangents at the knots and the ratios seen by the clamp sweep.
/// - `yp` - final tangent at every knot,
/// - `alpha` - `yp[i] / delta[i]` before interval `i` was clamped,
/// - `beta` - `yp[i + 1] / delta[i]` before interval `i` was clamped.
#[derive(Debug, Clone)]
pub(crate) struct Derivatives {
    pub(crate) yp: Vec<f64>,
    pub(crate) alpha: Vec<f64>,
    pub(crate) beta: Vec<f64>,
}

impl Derivatives {
    pub(crate) fn solve(table: &KnotTable, status: MonotonicStatus) -> Self {
        let number_of_intervals = table.number_of_intervals();
        let mut derivatives = Derivatives {
            yp: vec![0.0; table.len()],
            alpha: vec![0.0; number_of_intervals],
            beta: vec![0.0; number_of_intervals],
        };

        if status == MonotonicStatus::Constant {
            return derivatives;
        }

        // an overflowed secant slope (near duplicate abscissas) yields infinite estimates
        derivatives.yp = initialize_derivs(table.h(), table.delta())
            .into_iter()
            .map(finite_or_zero)
            .collect();

        for i in 0..number_of_intervals {
            let delta = table.delta()[i];
            if delta == 0.0 {
                derivatives.yp[i] = 0.0;
                derivatives.yp[i + 1] = 0.0;
                continue;
            }

            let alpha = derivatives.yp[i] / delta;
            let beta = derivatives.yp[i + 1] / delta;
            derivatives.alpha[i] = alpha;
            derivatives.beta[i] = beta;

            if alpha.hypot(beta) > MONOTONICITY_RADIUS {
                let (yp_lo, yp_hi) = modify_derivs(alpha, beta, delta);
                trace!(interval = i, alpha, beta, yp_lo, yp_hi, "clamped tangents");
                derivatives.yp[i] = finite_or_zero(yp_lo);
                derivatives.yp[i + 1] = finite_or_zero(yp_hi);
            }
        }

        derivatives
    }
}

/// Raw tangent estimates, which may still violate monotonicity.
///
/// Interior knots use the weighted harmonic mean of the neighbouring secant
/// slopes and are zero where those slopes do not share a strict sign. The
/// boundary knots use the one-sided three-point estimate, zeroed when its
/// sign disagrees with the adjacent secant slope.
pub(crate) fn initialize_derivs(h: &[f64], delta: &[f64]) -> Vec<f64> {
    let number_of_knots = delta.len() + 1;
    if number_of_knots == 2 {
        return vec![delta[0], delta[0]];
    }

    let mut yp = vec![0.0; number_of_knots];
    for i in 1..number_of_knots - 1 {
        let (d0, d1) = (delta[i - 1], delta[i]);
        if sign(d0) * sign(d1) <= 0.0 {
            continue;
        }
        let w0 = 2.0 * h[i] + h[i - 1];
        let w1 = h[i] + 2.0 * h[i - 1];
        yp[i] = (w0 + w1) / (w0 / d0 + w1 / d1);
    }

    let last = number_of_knots - 2;
    yp[0] = endpoint_slope(h[0], h[1], delta[0], delta[1]);
    yp[number_of_knots - 1] = endpoint_slope(h[last], h[last - 1], delta[last], delta[last - 1]);
    yp
}

/// One-sided three-point slope at a boundary knot. `h_near`, `d_near` belong
/// to the interval touching the knot, `h_far`, `d_far` to its neighbour.
fn endpoint_slope(h_near: f64, h_far: f64, d_near: f64, d_far: f64) -> f64 {
    let slope = ((2.0 * h_near + h_far) * d_near - h_near * d_far) / (h_near + h_far);
    if sign(slope) != sign(d_near) {
        0.0
    } else {
        slope
    }
}

/// Rescales a tangent pair onto the monotonicity circle, returning the new
/// `(yp_lo, yp_hi)`. An infinite ratio takes the whole radius.
pub(crate) fn modify_derivs(alpha: f64, beta: f64, delta: f64) -> (f64, f64) {
    let (alpha, beta) = if alpha.is_finite() && beta.is_finite() {
        (alpha, beta)
    } else {
        (unit_if_infinite(alpha), unit_if_infinite(beta))
    };
    let tau = MONOTONICITY_RADIUS / alpha.hypot(beta);
    (tau * alpha * delta, tau * beta * delta)
}

fn unit_if_infinite(ratio: f64) -> f64 {
    if ratio.is_infinite() {
        1.0_f64.copysign(ratio)
    } else {
        0.0
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sign of `x` with zero mapped to zero (unlike [f64::signum]).
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
