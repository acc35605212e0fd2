//! # Flow Calculations
//!
//! This module contains the calculation pipelines. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`pipe_flow`] - Velocity, Reynolds number, friction factor, and
//!   pressure drop for a single pipe run
//! - [`friction`] - Regime-aware Darcy friction factor resolution

pub mod friction;
pub mod pipe_flow;

// Re-export commonly used types
pub use friction::{resolve_friction_factor, FrictionResult, TURBULENT_SEED};
pub use pipe_flow::{calculate, PipeFlowInput, PipeFlowResult};
