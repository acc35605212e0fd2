//! # Error Types
//!
//! Structured error types for flow_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use flow_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(diameter_m: f64) -> CalcResult<()> {
//!     if diameter_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "diameter_m".to_string(),
//!             value: diameter_m.to_string(),
//!             reason: "Diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for flow_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value violates a precondition (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The iterative solver exhausted its budget or left the valid domain
    /// without locating a root
    #[error("Convergence failed for {equation}: no root after {iterations} iterations (last residual {residual:.3e})")]
    ConvergenceFailed {
        equation: String,
        iterations: usize,
        residual: f64,
    },

    /// Material not found in the roughness catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConvergenceFailed error
    pub fn convergence_failed(equation: impl Into<String>, iterations: usize, residual: f64) -> Self {
        CalcError::ConvergenceFailed {
            equation: equation.into(),
            iterations,
            residual,
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    ///
    /// Convergence failures are recoverable: a caller can retry with a
    /// different seed or a widened tolerance. Input errors are not - the
    /// input itself has to change.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::ConvergenceFailed { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ConvergenceFailed { .. } => "CONVERGENCE_FAILED",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("diameter_m", "-0.1", "Diameter must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_convergence_error_serialization() {
        let error = CalcError::convergence_failed("Colebrook-White", 100, 0.004217);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_input("viscosity_pa_s", "0", "Viscosity must be positive").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            CalcError::convergence_failed("Colebrook-White", 100, 1.0).error_code(),
            "CONVERGENCE_FAILED"
        );
        assert_eq!(CalcError::material_not_found("adamantium").error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_recoverability() {
        assert!(CalcError::convergence_failed("Colebrook-White", 100, 1.0).is_recoverable());
        assert!(!CalcError::invalid_input("length_m", "0", "Length must be positive").is_recoverable());
        assert!(!CalcError::material_not_found("adamantium").is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let error = CalcError::invalid_input("density_kg_per_m3", "-5", "Density must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'density_kg_per_m3': -5 - Density must be positive"
        );

        let error = CalcError::convergence_failed("Colebrook-White", 100, 0.5);
        assert!(error.to_string().contains("Colebrook-White"));
        assert!(error.to_string().contains("100 iterations"));
    }
}
