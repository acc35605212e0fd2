//! # Colebrook-White Equation
//!
//! The Colebrook-White equation relates the Darcy friction factor to
//! relative roughness and Reynolds number for turbulent flow:
//!
//! `1/sqrt(f) = -2 * log10( (e/D)/3.7 + 2.51/(Re * sqrt(f)) )`
//!
//! It is implicit in `f`, so [`colebrook_residual`] packages it as a
//! residual function for the secant solver. The explicit
//! [`swamee_jain`] approximation is provided as a cross-check.

/// Build the Colebrook-White residual for a given pipe and Reynolds number.
///
/// The returned closure evaluates
///
/// `r(f) = 1/sqrt(f) + 2 * log10( (e/D)/3.7 + 2.51/(Re * sqrt(f)) )`
///
/// which is zero at the turbulent friction factor. The residual is only
/// defined for `f > 0` (it takes `sqrt(f)`), so solve it with a lower
/// bound of zero in place.
pub fn colebrook_residual(
    roughness_m: f64,
    reynolds: f64,
    diameter_m: f64,
) -> impl Fn(f64) -> f64 {
    let relative_roughness = roughness_m / diameter_m;
    move |friction_factor: f64| {
        let sqrt_f = friction_factor.sqrt();
        1.0 / sqrt_f + 2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * sqrt_f)).log10()
    }
}

/// Swamee-Jain explicit approximation to the Colebrook-White equation.
///
/// # Formula
///
/// `f = 0.25 / ( log10( e/(3.7*D) + 5.74/Re^0.9 ) )^2`
///
/// Accurate to about 1% of the implicit solution for
/// `5e3 <= Re <= 1e8` and `1e-6 <= e/D <= 1e-2`. Useful as a sanity
/// check on the iterative solve, or as a fast first estimate.
pub fn swamee_jain(roughness_m: f64, reynolds: f64, diameter_m: f64) -> f64 {
    let relative_roughness = roughness_m / diameter_m;
    let log_term = (relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9)).log10();
    0.25 / (log_term * log_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SecantSolver;

    // water in 100 mm commercial steel pipe
    const ROUGHNESS: f64 = 0.000_045;
    const REYNOLDS: f64 = 254_090.8;
    const DIAMETER: f64 = 0.1;

    #[test]
    fn test_residual_changes_sign_across_root() {
        let residual = colebrook_residual(ROUGHNESS, REYNOLDS, DIAMETER);
        // bracket typical of turbulent Darcy friction factors
        assert!(residual(0.005) > 0.0);
        assert!(residual(0.1) < 0.0);
    }

    #[test]
    fn test_residual_root_matches_published_value() {
        let residual = colebrook_residual(ROUGHNESS, REYNOLDS, DIAMETER);
        let root = SecantSolver::default()
            .with_lower_bound(0.0)
            .solve("Colebrook-White", &residual, 0.02)
            .unwrap();
        assert!((root - 0.018_16).abs() < 1e-4);
        assert!(residual(root).abs() < 1e-6);
    }

    #[test]
    fn test_residual_undefined_at_zero() {
        let residual = colebrook_residual(ROUGHNESS, REYNOLDS, DIAMETER);
        assert!(!residual(0.0).is_finite());
        assert!(residual(-0.01).is_nan());
    }

    #[test]
    fn test_swamee_jain_agrees_with_implicit_solution() {
        let residual = colebrook_residual(ROUGHNESS, REYNOLDS, DIAMETER);
        let implicit = SecantSolver::default()
            .with_lower_bound(0.0)
            .solve("Colebrook-White", residual, 0.02)
            .unwrap();
        let explicit = swamee_jain(ROUGHNESS, REYNOLDS, DIAMETER);
        assert!(((explicit - implicit) / implicit).abs() < 0.02);
    }
}
