//! # Pipe Material Catalog
//!
//! Absolute roughness values for common pipe materials, as tabulated on the
//! Moody chart. Values are in meters and represent new, clean pipe; aged or
//! fouled pipe can be several times rougher, which is why a custom roughness
//! entry path exists alongside this catalog.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Common pipe materials with tabulated absolute roughness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeMaterial {
    /// Glass: 0.0000003 m
    Glass,
    /// Drawn tubing (copper, brass): 0.0000015 m
    DrawnTubing,
    /// PVC and other plastics: 0.0000015 m
    Pvc,
    /// Commercial steel: 0.000045 m
    CommercialSteel,
    /// Wrought iron: 0.000046 m
    WroughtIron,
    /// Asphalted cast iron: 0.00012 m
    AsphaltedCastIron,
    /// Galvanized iron: 0.00015 m
    GalvanizedIron,
    /// Cast iron: 0.00026 m
    CastIron,
    /// Concrete: 0.001 m
    Concrete,
    /// Riveted steel: 0.003 m
    RivetedSteel,
}

impl PipeMaterial {
    /// All materials, smoothest first, for UI selection
    pub const ALL: [PipeMaterial; 10] = [
        PipeMaterial::Glass,
        PipeMaterial::DrawnTubing,
        PipeMaterial::Pvc,
        PipeMaterial::CommercialSteel,
        PipeMaterial::WroughtIron,
        PipeMaterial::AsphaltedCastIron,
        PipeMaterial::GalvanizedIron,
        PipeMaterial::CastIron,
        PipeMaterial::Concrete,
        PipeMaterial::RivetedSteel,
    ];

    /// Absolute roughness in meters
    pub fn roughness_m(&self) -> f64 {
        match self {
            PipeMaterial::Glass => 0.000_000_3,
            PipeMaterial::DrawnTubing => 0.000_001_5,
            PipeMaterial::Pvc => 0.000_001_5,
            PipeMaterial::CommercialSteel => 0.000_045,
            PipeMaterial::WroughtIron => 0.000_046,
            PipeMaterial::AsphaltedCastIron => 0.000_12,
            PipeMaterial::GalvanizedIron => 0.000_15,
            PipeMaterial::CastIron => 0.000_26,
            PipeMaterial::Concrete => 0.001,
            PipeMaterial::RivetedSteel => 0.003,
        }
    }

    /// Look up by 1-based catalog position, matching the order of [`ALL`](Self::ALL).
    pub fn from_index(index: usize) -> CalcResult<Self> {
        if index == 0 || index > Self::ALL.len() {
            return Err(CalcError::material_not_found(format!("#{index}")));
        }
        Ok(Self::ALL[index - 1])
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "GLASS" => Ok(PipeMaterial::Glass),
            "DRAWN-TUBING" | "COPPER" | "BRASS" => Ok(PipeMaterial::DrawnTubing),
            "PVC" | "PLASTIC" => Ok(PipeMaterial::Pvc),
            "COMMERCIAL-STEEL" | "STEEL" => Ok(PipeMaterial::CommercialSteel),
            "WROUGHT-IRON" => Ok(PipeMaterial::WroughtIron),
            "ASPHALTED-CAST-IRON" => Ok(PipeMaterial::AsphaltedCastIron),
            "GALVANIZED-IRON" | "GALVANIZED" => Ok(PipeMaterial::GalvanizedIron),
            "CAST-IRON" => Ok(PipeMaterial::CastIron),
            "CONCRETE" => Ok(PipeMaterial::Concrete),
            "RIVETED-STEEL" => Ok(PipeMaterial::RivetedSteel),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PipeMaterial::Glass => "Glass",
            PipeMaterial::DrawnTubing => "Drawn tubing (copper, brass)",
            PipeMaterial::Pvc => "PVC, plastic",
            PipeMaterial::CommercialSteel => "Commercial steel",
            PipeMaterial::WroughtIron => "Wrought iron",
            PipeMaterial::AsphaltedCastIron => "Asphalted cast iron",
            PipeMaterial::GalvanizedIron => "Galvanized iron",
            PipeMaterial::CastIron => "Cast iron",
            PipeMaterial::Concrete => "Concrete",
            PipeMaterial::RivetedSteel => "Riveted steel",
        }
    }
}

impl std::fmt::Display for PipeMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_complete_and_ordered() {
        assert_eq!(PipeMaterial::ALL.len(), 10);
        // smoothest-to-roughest ordering, ties allowed (drawn tubing vs PVC)
        for pair in PipeMaterial::ALL.windows(2) {
            assert!(pair[0].roughness_m() <= pair[1].roughness_m());
        }
    }

    #[test]
    fn test_roughness_values() {
        assert_eq!(PipeMaterial::Glass.roughness_m(), 3.0e-7);
        assert_eq!(PipeMaterial::CommercialSteel.roughness_m(), 4.5e-5);
        assert_eq!(PipeMaterial::RivetedSteel.roughness_m(), 3.0e-3);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(
            PipeMaterial::from_index(1).unwrap(),
            PipeMaterial::Glass
        );
        assert_eq!(
            PipeMaterial::from_index(4).unwrap(),
            PipeMaterial::CommercialSteel
        );
        assert_eq!(
            PipeMaterial::from_index(10).unwrap(),
            PipeMaterial::RivetedSteel
        );
        assert!(PipeMaterial::from_index(0).is_err());
        assert!(PipeMaterial::from_index(11).is_err());
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            PipeMaterial::from_str_flexible("commercial steel").unwrap(),
            PipeMaterial::CommercialSteel
        );
        assert_eq!(
            PipeMaterial::from_str_flexible("GALVANIZED").unwrap(),
            PipeMaterial::GalvanizedIron
        );
        assert_eq!(
            PipeMaterial::from_str_flexible("cast_iron").unwrap(),
            PipeMaterial::CastIron
        );
        assert!(matches!(
            PipeMaterial::from_str_flexible("unobtainium"),
            Err(CalcError::MaterialNotFound { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PipeMaterial::CastIron).unwrap();
        assert_eq!(json, "\"CastIron\"");
        let back: PipeMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PipeMaterial::CastIron);
    }
}
