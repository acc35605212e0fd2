//! # Basic Pipe Hydraulics
//!
//! Continuity, Reynolds number, laminar friction, and the Darcy-Weisbach
//! pressure drop for steady incompressible flow in circular pipes.
//!
//! All functions take SI units: meters, kilograms, seconds, pascals.

use crate::errors::{CalcError, CalcResult};

/// Cross-sectional flow area of a circular pipe.
///
/// # Formula
///
/// `A = pi * (D/2)^2`
pub fn flow_area(diameter_m: f64) -> CalcResult<f64> {
    if !(diameter_m > 0.0) || !diameter_m.is_finite() {
        return Err(CalcError::invalid_input(
            "diameter_m",
            diameter_m.to_string(),
            "Diameter must be a positive, finite number",
        ));
    }
    let radius = diameter_m / 2.0;
    Ok(std::f64::consts::PI * radius * radius)
}

/// Average (bulk) velocity from volumetric flow rate and pipe diameter.
///
/// # Formula
///
/// `v = Q / A`
pub fn average_velocity(flow_rate_m3_per_s: f64, diameter_m: f64) -> CalcResult<f64> {
    if !(flow_rate_m3_per_s > 0.0) || !flow_rate_m3_per_s.is_finite() {
        return Err(CalcError::invalid_input(
            "flow_rate_m3_per_s",
            flow_rate_m3_per_s.to_string(),
            "Flow rate must be a positive, finite number",
        ));
    }
    let area = flow_area(diameter_m)?;
    Ok(flow_rate_m3_per_s / area)
}

/// Reynolds number for internal pipe flow.
///
/// # Formula
///
/// `Re = rho * v * D / mu`
///
/// Dimensionless; it compares inertial to viscous forces and drives the
/// regime classification in [`crate::regime::FlowRegime::from_reynolds`].
pub fn reynolds_number(
    density_kg_per_m3: f64,
    velocity_m_per_s: f64,
    diameter_m: f64,
    viscosity_pa_s: f64,
) -> CalcResult<f64> {
    if !(density_kg_per_m3 > 0.0) || !density_kg_per_m3.is_finite() {
        return Err(CalcError::invalid_input(
            "density_kg_per_m3",
            density_kg_per_m3.to_string(),
            "Density must be a positive, finite number",
        ));
    }
    if !(viscosity_pa_s > 0.0) || !viscosity_pa_s.is_finite() {
        return Err(CalcError::invalid_input(
            "viscosity_pa_s",
            viscosity_pa_s.to_string(),
            "Dynamic viscosity must be a positive, finite number",
        ));
    }
    if !(diameter_m > 0.0) || !diameter_m.is_finite() {
        return Err(CalcError::invalid_input(
            "diameter_m",
            diameter_m.to_string(),
            "Diameter must be a positive, finite number",
        ));
    }
    Ok(density_kg_per_m3 * velocity_m_per_s * diameter_m / viscosity_pa_s)
}

/// Darcy friction factor for laminar flow.
///
/// # Formula
///
/// `f = 64 / Re`
///
/// Exact for fully developed laminar flow in a circular pipe; only
/// meaningful below the laminar limit.
pub fn laminar_friction(reynolds: f64) -> CalcResult<f64> {
    if !(reynolds > 0.0) || !reynolds.is_finite() {
        return Err(CalcError::invalid_input(
            "reynolds",
            reynolds.to_string(),
            "Reynolds number must be a positive, finite number",
        ));
    }
    Ok(64.0 / reynolds)
}

/// Darcy-Weisbach pressure drop over a pipe run.
///
/// # Formula
///
/// `dp = f * (L/D) * (rho * v^2 / 2)`
///
/// Inputs are assumed already validated; the pipeline in
/// [`crate::calculations::pipe_flow`] guarantees this.
#[inline]
pub fn pressure_drop(
    friction_factor: f64,
    length_m: f64,
    diameter_m: f64,
    density_kg_per_m3: f64,
    velocity_m_per_s: f64,
) -> f64 {
    let dynamic_pressure = density_kg_per_m3 * velocity_m_per_s * velocity_m_per_s / 2.0;
    friction_factor * (length_m / diameter_m) * dynamic_pressure
}
