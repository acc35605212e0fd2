//! # Hydraulic Equations
//!
//! The individual formulas behind the pipe flow pipeline. Everything here
//! works on plain SI floats so each equation stays easy to test and reuse
//! on its own.
//!
//! ## Available Equations
//!
//! - [`hydraulics`] - Continuity, Reynolds number, laminar friction,
//!   Darcy-Weisbach pressure drop
//! - [`colebrook`] - Colebrook-White residual for the implicit turbulent
//!   friction factor, plus the Swamee-Jain explicit approximation

pub mod colebrook;
pub mod hydraulics;

// Re-export commonly used functions
pub use colebrook::{colebrook_residual, swamee_jain};
pub use hydraulics::{
    average_velocity, flow_area, laminar_friction, pressure_drop, reynolds_number,
};
