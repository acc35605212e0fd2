//! # Friction Factor Resolution
//!
//! Picks and evaluates the right friction model for a Reynolds number:
//!
//! - **Laminar** (Re < 2000): the exact `64/Re` result
//! - **Turbulent** (Re > 4000): the Colebrook-White root, found iteratively
//! - **Transition** (2000 <= Re <= 4000): neither model is reliable, so the
//!   result is the arithmetic mean of both, with the two estimates reported
//!   alongside so the uncertainty is visible
//!
//! The returned [`FrictionResult`] keeps the regime attached to the number,
//! so downstream consumers cannot mistake a blended transition estimate for
//! a converged turbulent solution.

use serde::{Deserialize, Serialize};

use crate::equations::colebrook::colebrook_residual;
use crate::equations::hydraulics::laminar_friction;
use crate::errors::{CalcError, CalcResult};
use crate::regime::FlowRegime;
use crate::solver::SecantSolver;

/// Starting guess for the Colebrook-White solve.
///
/// Turbulent Darcy friction factors for ordinary pipes land in roughly
/// [0.005, 0.1], and the residual is close to monotonic there, so a seed
/// in the middle of that band converges for any realistic pipe.
pub const TURBULENT_SEED: f64 = 0.02;

/// Friction factor together with the regime that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "regime")]
pub enum FrictionResult {
    /// Exact laminar result, `64/Re`
    Laminar { factor: f64 },
    /// Converged Colebrook-White root
    Turbulent { factor: f64 },
    /// Mean of the laminar and turbulent estimates, both reported
    Transition {
        factor: f64,
        laminar: f64,
        turbulent: f64,
    },
}

impl FrictionResult {
    /// The friction factor to use in the pressure-drop equation
    pub fn factor(&self) -> f64 {
        match self {
            FrictionResult::Laminar { factor }
            | FrictionResult::Turbulent { factor }
            | FrictionResult::Transition { factor, .. } => *factor,
        }
    }

    /// The regime this factor was computed for
    pub fn regime(&self) -> FlowRegime {
        match self {
            FrictionResult::Laminar { .. } => FlowRegime::Laminar,
            FrictionResult::Turbulent { .. } => FlowRegime::Turbulent,
            FrictionResult::Transition { .. } => FlowRegime::Transition,
        }
    }

    /// The `(laminar, turbulent)` estimates behind a transition blend
    pub fn components(&self) -> Option<(f64, f64)> {
        match self {
            FrictionResult::Transition {
                laminar, turbulent, ..
            } => Some((*laminar, *turbulent)),
            _ => None,
        }
    }
}

/// Resolve the Darcy friction factor for a Reynolds number and pipe geometry.
///
/// # Arguments
///
/// * `reynolds` - Reynolds number of the flow (must be positive)
/// * `roughness_m` - Absolute roughness of the pipe wall (m)
/// * `diameter_m` - Inner pipe diameter (m)
///
/// # Returns
///
/// * `Ok(FrictionResult)` - Factor tagged with its regime
/// * `Err(CalcError)` - Invalid inputs, or the Colebrook-White solve
///   failed to converge
pub fn resolve_friction_factor(
    reynolds: f64,
    roughness_m: f64,
    diameter_m: f64,
) -> CalcResult<FrictionResult> {
    if !(reynolds > 0.0) || !reynolds.is_finite() {
        return Err(CalcError::invalid_input(
            "reynolds",
            reynolds.to_string(),
            "Reynolds number must be a positive, finite number",
        ));
    }

    match FlowRegime::from_reynolds(reynolds) {
        FlowRegime::Laminar => Ok(FrictionResult::Laminar {
            factor: laminar_friction(reynolds)?,
        }),
        FlowRegime::Turbulent => Ok(FrictionResult::Turbulent {
            factor: solve_turbulent(reynolds, roughness_m, diameter_m)?,
        }),
        FlowRegime::Transition => {
            let laminar = laminar_friction(reynolds)?;
            let turbulent = solve_turbulent(reynolds, roughness_m, diameter_m)?;
            Ok(FrictionResult::Transition {
                factor: (laminar + turbulent) / 2.0,
                laminar,
                turbulent,
            })
        }
    }
}

/// Solve Colebrook-White for the turbulent friction factor.
fn solve_turbulent(reynolds: f64, roughness_m: f64, diameter_m: f64) -> CalcResult<f64> {
    if !(diameter_m > 0.0) || !diameter_m.is_finite() {
        return Err(CalcError::invalid_input(
            "diameter_m",
            diameter_m.to_string(),
            "Diameter must be a positive, finite number",
        ));
    }
    if roughness_m < 0.0 || !roughness_m.is_finite() {
        return Err(CalcError::invalid_input(
            "roughness_m",
            roughness_m.to_string(),
            "Roughness must be a non-negative, finite number",
        ));
    }

    let residual = colebrook_residual(roughness_m, reynolds, diameter_m);
    SecantSolver::default()
        .with_lower_bound(0.0)
        .solve("Colebrook-White", residual, TURBULENT_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::colebrook::colebrook_residual;

    #[test]
    fn test_laminar_factor_is_exact() {
        let friction = resolve_friction_factor(1500.0, 0.000_045, 0.1).unwrap();
        assert_eq!(friction.regime(), FlowRegime::Laminar);
        assert_eq!(friction.factor(), 64.0 / 1500.0);
        assert_eq!(friction.components(), None);
    }

    #[test]
    fn test_laminar_factor_ignores_roughness() {
        let smooth = resolve_friction_factor(1500.0, 0.0, 0.1).unwrap();
        let rough = resolve_friction_factor(1500.0, 0.003, 0.1).unwrap();
        assert_eq!(smooth.factor(), rough.factor());
    }

    #[test]
    fn test_turbulent_factor_solves_colebrook() {
        // water in 100 mm commercial steel pipe
        let friction = resolve_friction_factor(254_090.8, 0.000_045, 0.1).unwrap();
        assert_eq!(friction.regime(), FlowRegime::Turbulent);
        assert!((friction.factor() - 0.018_16).abs() < 1e-4);

        // the returned factor is an actual root of the residual
        let residual = colebrook_residual(0.000_045, 254_090.8, 0.1);
        assert!(residual(friction.factor()).abs() < 1e-6);
    }

    #[test]
    fn test_transition_factor_is_mean_of_estimates() {
        let friction = resolve_friction_factor(3000.0, 0.000_05, 0.1).unwrap();
        assert_eq!(friction.regime(), FlowRegime::Transition);

        let (laminar, turbulent) = friction.components().unwrap();
        assert_eq!(laminar, 64.0 / 3000.0);
        assert!((turbulent - 0.043_97).abs() < 1e-4);
        assert_eq!(friction.factor(), (laminar + turbulent) / 2.0);
        assert!((friction.factor() - 0.032_65).abs() < 5e-4);
    }

    #[test]
    fn test_regime_boundaries_blend() {
        // both limits are inside the transition band
        let at_laminar_limit = resolve_friction_factor(2000.0, 0.000_045, 0.1).unwrap();
        assert_eq!(at_laminar_limit.regime(), FlowRegime::Transition);

        let at_turbulent_limit = resolve_friction_factor(4000.0, 0.000_045, 0.1).unwrap();
        assert_eq!(at_turbulent_limit.regime(), FlowRegime::Transition);

        let above = resolve_friction_factor(4000.1, 0.000_045, 0.1).unwrap();
        assert_eq!(above.regime(), FlowRegime::Turbulent);
    }

    #[test]
    fn test_invalid_reynolds_rejected() {
        assert!(matches!(
            resolve_friction_factor(0.0, 0.000_045, 0.1),
            Err(CalcError::InvalidInput { .. })
        ));
        assert!(matches!(
            resolve_friction_factor(-100.0, 0.000_045, 0.1),
            Err(CalcError::InvalidInput { .. })
        ));
        assert!(matches!(
            resolve_friction_factor(f64::NAN, 0.000_045, 0.1),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_invalid_geometry_rejected_for_turbulent() {
        assert!(resolve_friction_factor(250_000.0, 0.000_045, 0.0).is_err());
        assert!(resolve_friction_factor(250_000.0, -0.000_045, 0.1).is_err());
    }

    #[test]
    fn test_serialization_is_regime_tagged() {
        let friction = resolve_friction_factor(3000.0, 0.000_05, 0.1).unwrap();
        let json = serde_json::to_string(&friction).unwrap();
        assert!(json.contains("\"regime\":\"Transition\""));
        assert!(json.contains("\"laminar\""));
        assert!(json.contains("\"turbulent\""));

        let roundtrip: FrictionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(friction, roundtrip);
    }
}
