//! # Unit Types
//!
//! Type-safe wrappers for hydraulic units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Pipe flow calculations use a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! Streamline works in SI internally; every calculation takes and returns
//! SI quantities:
//! - Pressure: pascals (Pa)
//! - Volumetric flow: cubic meters per second (m³/s)
//! - Length: meters (m)
//!
//! The kilopascal, bar, and m³/h wrappers exist for display and data entry,
//! where industry convention prefers them over raw SI.
//!
//! ## Example
//!
//! ```rust
//! use flow_core::units::{Pascals, Kilopascals};
//!
//! let drop = Pascals(58222.4);
//! let display: Kilopascals = drop.into();
//! assert!((display.0 - 58.2224).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in pascals (Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure in kilopascals (kPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilopascals(pub f64);

/// Pressure in bar (1 bar = 100 000 Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bar(pub f64);

impl From<Pascals> for Kilopascals {
    fn from(pa: Pascals) -> Self {
        Kilopascals(pa.0 / 1000.0)
    }
}

impl From<Kilopascals> for Pascals {
    fn from(kpa: Kilopascals) -> Self {
        Pascals(kpa.0 * 1000.0)
    }
}

impl From<Pascals> for Bar {
    fn from(pa: Pascals) -> Self {
        Bar(pa.0 / 100_000.0)
    }
}

impl From<Bar> for Pascals {
    fn from(bar: Bar) -> Self {
        Pascals(bar.0 * 100_000.0)
    }
}

impl From<Kilopascals> for Bar {
    fn from(kpa: Kilopascals) -> Self {
        Bar(kpa.0 / 100.0)
    }
}

impl From<Bar> for Kilopascals {
    fn from(bar: Bar) -> Self {
        Kilopascals(bar.0 * 100.0)
    }
}

// ============================================================================
// Volumetric Flow Units
// ============================================================================

/// Volumetric flow rate in cubic meters per second (m³/s)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerSecond(pub f64);

/// Volumetric flow rate in cubic meters per hour (m³/h)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerHour(pub f64);

impl From<CubicMetersPerSecond> for CubicMetersPerHour {
    fn from(m3s: CubicMetersPerSecond) -> Self {
        CubicMetersPerHour(m3s.0 * 3600.0)
    }
}

impl From<CubicMetersPerHour> for CubicMetersPerSecond {
    fn from(m3h: CubicMetersPerHour) -> Self {
        CubicMetersPerSecond(m3h.0 / 3600.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Pascals);
impl_arithmetic!(Kilopascals);
impl_arithmetic!(Bar);
impl_arithmetic!(CubicMetersPerSecond);
impl_arithmetic!(CubicMetersPerHour);
