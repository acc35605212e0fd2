//! # flow_core - Pipe Flow Calculation Engine
//!
//! `flow_core` is the computational heart of Streamline, providing pipe flow
//! hydraulics with a clean, LLM-friendly API. All inputs and outputs are
//! JSON-serializable, making it ideal for integration with AI assistants via
//! MCP or similar protocols.
//!
//! Given fluid properties, a flow rate, and pipe geometry, it computes the
//! average velocity, Reynolds number, flow regime, Darcy friction factor
//! (solving Colebrook-White iteratively when the flow is turbulent), and the
//! Darcy-Weisbach pressure drop.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use flow_core::{calculate, PipeFlowInput};
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
//! println!("{} drops {:.2} kPa over the run", result.label,
//!     result.pressure_drop_kpa().value());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Pipe flow pipeline and friction factor resolution
//! - [`equations`] - The individual hydraulic formulas
//! - [`solver`] - Secant root-finder for implicit equations
//! - [`materials`] - Pipe material roughness catalog
//! - [`regime`] - Flow regime classification
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod regime;
pub mod solver;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, FrictionResult, PipeFlowInput, PipeFlowResult};
pub use errors::{CalcError, CalcResult};
pub use materials::PipeMaterial;
pub use regime::FlowRegime;
