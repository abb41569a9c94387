//! Cubic Hermite basis on a single interval `[xlo, xhi]`.
//!
//! The basis is written in the local coordinate `t = (x - xlo) / (xhi - xlo)`;
//! derivatives are taken with respect to `x`, so they carry the chain rule
//! factors `1 / h` and `1 / h²` with `h = xhi - xlo`.

use nalgebra::Vector4;

fn local(xhi: f64, xlo: f64, x: f64) -> (f64, f64) {
    let h = xhi - xlo;
    ((x - xlo) / h, h)
}

pub(crate) fn h1(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, _) = local(xhi, xlo, x);
    (2.0 * t - 3.0) * t * t + 1.0
}

pub(crate) fn h2(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, _) = local(xhi, xlo, x);
    (3.0 - 2.0 * t) * t * t
}

pub(crate) fn h3(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, _) = local(xhi, xlo, x);
    ((t - 2.0) * t + 1.0) * t
}

pub(crate) fn h4(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, _) = local(xhi, xlo, x);
    (t - 1.0) * t * t
}

pub(crate) fn h1_prime(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, h) = local(xhi, xlo, x);
    6.0 * (t - 1.0) * t / h
}

pub(crate) fn h2_prime(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, h) = local(xhi, xlo, x);
    6.0 * (1.0 - t) * t / h
}

pub(crate) fn h3_prime(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, h) = local(xhi, xlo, x);
    ((3.0 * t - 4.0) * t + 1.0) / h
}

pub(crate) fn h4_prime(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, h) = local(xhi, xlo, x);
    (3.0 * t - 2.0) * t / h
}

pub(crate) fn h1_double_prime(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, h) = local(xhi, xlo, x);
    (12.0 * t - 6.0) / (h * h)
}

pub(crate) fn h2_double_prime(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, h) = local(xhi, xlo, x);
    (6.0 - 12.0 * t) / (h * h)
}

pub(crate) fn h3_double_prime(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, h) = local(xhi, xlo, x);
    (6.0 * t - 4.0) / (h * h)
}

pub(crate) fn h4_double_prime(xhi: f64, xlo: f64, x: f64) -> f64 {
    let (t, h) = local(xhi, xlo, x);
    (6.0 * t - 2.0) / (h * h)
}

/// Endpoint data of one interval; tangents are scaled by the interval width.
fn coefficients(xhi: f64, xlo: f64, fhi: f64, flo: f64, dhi: f64, dlo: f64) -> Vector4<f64> {
    let h = xhi - xlo;
    Vector4::new(flo, fhi, h * dlo, h * dhi)
}

/// Value of the cubic through `(xlo, flo)` and `(xhi, fhi)` with end slopes `dlo`, `dhi`.
pub(crate) fn p(xhi: f64, xlo: f64, fhi: f64, flo: f64, dhi: f64, dlo: f64, x: f64) -> f64 {
    let basis = Vector4::new(h1(xhi, xlo, x), h2(xhi, xlo, x), h3(xhi, xlo, x), h4(xhi, xlo, x));
    basis.dot(&coefficients(xhi, xlo, fhi, flo, dhi, dlo))
}

pub(crate) fn p_prime(xhi: f64, xlo: f64, fhi: f64, flo: f64, dhi: f64, dlo: f64, x: f64) -> f64 {
    let basis = Vector4::new(
        h1_prime(xhi, xlo, x),
        h2_prime(xhi, xlo, x),
        h3_prime(xhi, xlo, x),
        h4_prime(xhi, xlo, x),
    );
    basis.dot(&coefficients(xhi, xlo, fhi, flo, dhi, dlo))
}

pub(crate) fn p_double_prime(xhi: f64, xlo: f64, fhi: f64, flo: f64, dhi: f64, dlo: f64, x: f64) -> f64 {
    let basis = Vector4::new(
        h1_double_prime(xhi, xlo, x),
        h2_double_prime(xhi, xlo, x),
        h3_double_prime(xhi, xlo, x),
        h4_double_prime(xhi, xlo, x),
    );
    basis.dot(&coefficients(xhi, xlo, fhi, flo, dhi, dlo))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn basis_at_interval_ends() {
        let (xlo, xhi) = (2.0, 5.0);

        assert_eq!(h1(xhi, xlo, xlo), 1.0);
        assert_eq!(h2(xhi, xlo, xlo), 0.0);
        assert_eq!(h3(xhi, xlo, xlo), 0.0);
        assert_eq!(h4(xhi, xlo, xlo), 0.0);

        assert_eq!(h1(xhi, xlo, xhi), 0.0);
        assert_eq!(h2(xhi, xlo, xhi), 1.0);
        assert_eq!(h3(xhi, xlo, xhi), 0.0);
        assert_eq!(h4(xhi, xlo, xhi), 0.0);
    }

    #[test]
    fn basis_sums_to_one() {
        let eps = 1e-12;
        for x in [-1.0, 0.0, 0.3, 0.77, 1.0, 2.5] {
            assert_approx_eq!(h1(1.0, 0.0, x) + h2(1.0, 0.0, x), 1.0, eps);
            assert_approx_eq!(h1_prime(1.0, 0.0, x) + h2_prime(1.0, 0.0, x), 0.0, eps);
        }
    }

    #[test]
    fn reproduces_cubic() {
        // f(x) = x^3 - 2x on [1, 3]
        let eps = 1e-9;
        let f = |x: f64| x.powi(3) - 2.0 * x;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let ddf = |x: f64| 6.0 * x;
        let (xlo, xhi) = (1.0, 3.0);

        let (fhi, flo, dhi, dlo) = (f(xhi), f(xlo), df(xhi), df(xlo));

        for x in [1.0, 1.25, 1.9, 2.4, 3.0, 3.5, 0.0] {
            assert_approx_eq!(p(xhi, xlo, fhi, flo, dhi, dlo, x), f(x), eps);
            assert_approx_eq!(p_prime(xhi, xlo, fhi, flo, dhi, dlo, x), df(x), eps);
            assert_approx_eq!(p_double_prime(xhi, xlo, fhi, flo, dhi, dlo, x), ddf(x), eps);
        }
    }

    #[test]
    fn end_slopes() {
        let eps = 1e-12;
        let (xlo, xhi) = (0.0, 0.5);
        assert_approx_eq!(p_prime(xhi, xlo, 4.0, 1.0, -2.0, 7.0, xlo), 7.0, eps);
        assert_approx_eq!(p_prime(xhi, xlo, 4.0, 1.0, -2.0, 7.0, xhi), -2.0, eps);
    }
}
