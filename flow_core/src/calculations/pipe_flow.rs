//! # Pipe Flow Analysis
//!
//! End-to-end calculation for steady incompressible flow in a circular
//! pipe: average velocity, Reynolds number, flow regime, Darcy friction
//! factor, and Darcy-Weisbach pressure drop.
//!
//! ## Calculation Sequence
//!
//! 1. Validate all inputs
//! 2. `v = Q / A` (continuity)
//! 3. `Re = rho * v * D / mu`
//! 4. Classify regime and resolve the friction factor
//!    (Colebrook-White solve when turbulent)
//! 5. `dp = f * (L/D) * (rho * v^2 / 2)` (Darcy-Weisbach)
//!
//! ## Example
//!
//! ```rust
//! use flow_core::calculations::pipe_flow::{calculate, PipeFlowInput};
//!
//! // water at 20 C through 100 m of commercial steel pipe
//! let input = PipeFlowInput {
//!     label: "P-1".to_string(),
//!     density_kg_per_m3: 998.0,
//!     viscosity_pa_s: 0.001,
//!     flow_rate_m3_per_s: 0.02,
//!     diameter_m: 0.1,
//!     length_m: 100.0,
//!     roughness_m: 0.000_045,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Velocity:      {:.4} m/s", result.velocity_m_per_s);
//! println!("Reynolds:      {:.1}", result.reynolds_number);
//! println!("Regime:        {}", result.regime);
//! println!("Pressure drop: {:.2} kPa", result.pressure_drop_kpa().value());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::friction::resolve_friction_factor;
use crate::equations::hydraulics::{average_velocity, pressure_drop, reynolds_number};
use crate::errors::{CalcError, CalcResult};
use crate::regime::FlowRegime;
use crate::units::{Bar, CubicMetersPerHour, CubicMetersPerSecond, Kilopascals, Pascals};

/// Input parameters for a pipe flow calculation.
///
/// All quantities are SI. Fluid properties are taken at the operating
/// temperature; the calculation itself is isothermal.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "density_kg_per_m3": 998.0,
///   "viscosity_pa_s": 0.001,
///   "flow_rate_m3_per_s": 0.02,
///   "diameter_m": 0.1,
///   "length_m": 100.0,
///   "roughness_m": 0.000045
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeFlowInput {
    /// User-provided identifier (e.g., "P-1", "Cooling loop supply")
    pub label: String,
    /// Fluid density (kg/m^3)
    pub density_kg_per_m3: f64,
    /// Dynamic viscosity (Pa*s)
    pub viscosity_pa_s: f64,
    /// Volumetric flow rate (m^3/s)
    pub flow_rate_m3_per_s: f64,
    /// Inner pipe diameter (m)
    pub diameter_m: f64,
    /// Pipe length (m)
    pub length_m: f64,
    /// Absolute wall roughness (m); zero means hydraulically smooth
    pub roughness_m: f64,
}

impl PipeFlowInput {
    /// Validate input parameters.
    ///
    /// Every quantity must be finite; density, viscosity, flow rate,
    /// diameter, and length must be positive; roughness must be
    /// non-negative and smaller than the diameter.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.density_kg_per_m3 > 0.0) || !self.density_kg_per_m3.is_finite() {
            return Err(CalcError::invalid_input(
                "density_kg_per_m3",
                self.density_kg_per_m3.to_string(),
                "Density must be a positive, finite number",
            ));
        }
        if !(self.viscosity_pa_s > 0.0) || !self.viscosity_pa_s.is_finite() {
            return Err(CalcError::invalid_input(
                "viscosity_pa_s",
                self.viscosity_pa_s.to_string(),
                "Dynamic viscosity must be a positive, finite number",
            ));
        }
        if !(self.flow_rate_m3_per_s > 0.0) || !self.flow_rate_m3_per_s.is_finite() {
            return Err(CalcError::invalid_input(
                "flow_rate_m3_per_s",
                self.flow_rate_m3_per_s.to_string(),
                "Flow rate must be a positive, finite number",
            ));
        }
        if !(self.diameter_m > 0.0) || !self.diameter_m.is_finite() {
            return Err(CalcError::invalid_input(
                "diameter_m",
                self.diameter_m.to_string(),
                "Diameter must be a positive, finite number",
            ));
        }
        if !(self.length_m > 0.0) || !self.length_m.is_finite() {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be a positive, finite number",
            ));
        }
        if self.roughness_m < 0.0 || !self.roughness_m.is_finite() {
            return Err(CalcError::invalid_input(
                "roughness_m",
                self.roughness_m.to_string(),
                "Roughness must be a non-negative, finite number",
            ));
        }
        if self.roughness_m >= self.diameter_m {
            return Err(CalcError::invalid_input(
                "roughness_m",
                self.roughness_m.to_string(),
                "Roughness must be smaller than the pipe diameter",
            ));
        }
        Ok(())
    }

    /// Relative roughness `e/D` of the pipe wall
    pub fn relative_roughness(&self) -> f64 {
        self.roughness_m / self.diameter_m
    }

    /// Flow rate expressed in m^3/h for display
    pub fn flow_rate_m3_per_h(&self) -> CubicMetersPerHour {
        CubicMetersPerSecond(self.flow_rate_m3_per_s).into()
    }
}

/// Results from a pipe flow calculation.
///
/// The transition-regime component fields are only present when the
/// regime is `Transition`; in that band the friction factor is the mean
/// of the two estimates and both are reported.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "velocity_m_per_s": 2.5465,
///   "reynolds_number": 254138.6,
///   "regime": "Turbulent",
///   "friction_factor": 0.0182,
///   "pressure_drop_pa": 58766.9
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeFlowResult {
    /// Label copied from the input
    pub label: String,
    /// Average velocity (m/s)
    pub velocity_m_per_s: f64,
    /// Reynolds number (dimensionless)
    pub reynolds_number: f64,
    /// Flow regime classification
    pub regime: FlowRegime,
    /// Darcy friction factor (dimensionless)
    pub friction_factor: f64,
    /// Laminar estimate behind a transition blend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laminar_component: Option<f64>,
    /// Turbulent estimate behind a transition blend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbulent_component: Option<f64>,
    /// Pressure drop over the pipe run (Pa)
    pub pressure_drop_pa: f64,
}

impl PipeFlowResult {
    /// Pressure drop in kilopascals for display
    pub fn pressure_drop_kpa(&self) -> Kilopascals {
        Pascals(self.pressure_drop_pa).into()
    }

    /// Pressure drop in bar for display
    pub fn pressure_drop_bar(&self) -> Bar {
        Pascals(self.pressure_drop_pa).into()
    }
}

/// Calculate velocity, Reynolds number, friction factor, and pressure drop
/// for a pipe flow.
///
/// # Arguments
///
/// * `input` - Fluid properties, flow rate, and pipe geometry
///
/// # Returns
///
/// * `Ok(PipeFlowResult)` - Full calculation results
/// * `Err(CalcError)` - Invalid input, or the friction solve failed
///   to converge
pub fn calculate(input: &PipeFlowInput) -> CalcResult<PipeFlowResult> {
    input.validate()?;

    let velocity = average_velocity(input.flow_rate_m3_per_s, input.diameter_m)?;
    let reynolds = reynolds_number(
        input.density_kg_per_m3,
        velocity,
        input.diameter_m,
        input.viscosity_pa_s,
    )?;
    let friction = resolve_friction_factor(reynolds, input.roughness_m, input.diameter_m)?;
    let (laminar_component, turbulent_component) = match friction.components() {
        Some((laminar, turbulent)) => (Some(laminar), Some(turbulent)),
        None => (None, None),
    };
    let drop_pa = pressure_drop(
        friction.factor(),
        input.length_m,
        input.diameter_m,
        input.density_kg_per_m3,
        velocity,
    );

    Ok(PipeFlowResult {
        label: input.label.clone(),
        velocity_m_per_s: velocity,
        reynolds_number: reynolds,
        regime: friction.regime(),
        friction_factor: friction.factor(),
        laminar_component,
        turbulent_component,
        pressure_drop_pa: drop_pa,
    })
}
