//! # Flow Regime Classification
//!
//! Classifies internal pipe flow by Reynolds number into laminar,
//! transition, or turbulent. The thresholds are the conventional ones
//! for circular pipes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this Reynolds number the flow is laminar
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// Above this Reynolds number the flow is turbulent
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// Flow regime of an internal pipe flow.
///
/// Determined solely by Reynolds number:
/// - `Laminar`: Re < 2000
/// - `Transition`: 2000 <= Re <= 4000 (both ends inclusive)
/// - `Turbulent`: Re > 4000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    Transition,
    Turbulent,
}

impl FlowRegime {
    /// All regimes in order of increasing Reynolds number
    pub const ALL: [FlowRegime; 3] = [
        FlowRegime::Laminar,
        FlowRegime::Transition,
        FlowRegime::Turbulent,
    ];

    /// Classify a Reynolds number.
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else if reynolds > TURBULENT_LIMIT {
            FlowRegime::Turbulent
        } else {
            FlowRegime::Transition
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::Transition => "Transition",
            FlowRegime::Turbulent => "Turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
