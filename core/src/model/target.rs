use serde::{Deserialize, Serialize};
use std::fmt;

/// Monitoring subject tracked along the coast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EcosystemTarget {
    #[serde(rename = "Shoreline Dynamics")]
    Shoreline,
    Mangroves,
    #[serde(rename = "Coral Reefs")]
    CoralReefs,
    Seagrass,
}

impl EcosystemTarget {
    pub const ALL: [EcosystemTarget; 4] = [
        EcosystemTarget::Shoreline,
        EcosystemTarget::Mangroves,
        EcosystemTarget::CoralReefs,
        EcosystemTarget::Seagrass,
    ];

    /// Accent color used for map features and the legend, as linear RGB.
    pub fn accent_rgb(self) -> (f32, f32, f32) {
        match self {
            EcosystemTarget::Shoreline => (0.231, 0.510, 0.965),
            EcosystemTarget::Mangroves => (0.063, 0.725, 0.506),
            EcosystemTarget::CoralReefs => (0.961, 0.620, 0.043),
            EcosystemTarget::Seagrass => (0.518, 0.800, 0.086),
        }
    }
}

impl fmt::Display for EcosystemTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EcosystemTarget::Shoreline => "Shoreline Dynamics",
            EcosystemTarget::Mangroves => "Mangroves",
            EcosystemTarget::CoralReefs => "Coral Reefs",
            EcosystemTarget::Seagrass => "Seagrass",
        };
        f.write_str(label)
    }
}

/// Spectral index derived from the Sentinel-2 archive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpectralIndex {
    #[serde(rename = "NDVI")]
    Ndvi,
    #[serde(rename = "MNDWI")]
    Mndwi,
    #[serde(rename = "NDTI")]
    Ndti,
}

impl SpectralIndex {
    pub const ALL: [SpectralIndex; 3] = [
        SpectralIndex::Ndvi,
        SpectralIndex::Mndwi,
        SpectralIndex::Ndti,
    ];

    /// Tint of the simulated raster overlay drawn when the index is active.
    pub fn overlay_rgb(self) -> (f32, f32, f32) {
        match self {
            SpectralIndex::Ndvi => (0.063, 0.725, 0.506),
            SpectralIndex::Mndwi => (0.231, 0.510, 0.965),
            SpectralIndex::Ndti => (0.961, 0.620, 0.043),
        }
    }
}

impl fmt::Display for SpectralIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpectralIndex::Ndvi => "NDVI",
            SpectralIndex::Mndwi => "MNDWI",
            SpectralIndex::Ndti => "NDTI",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_labels_match_display() {
        assert_eq!(EcosystemTarget::Shoreline.to_string(), "Shoreline Dynamics");
        assert_eq!(EcosystemTarget::CoralReefs.to_string(), "Coral Reefs");
    }

    #[test]
    fn enums_round_trip_as_labels() {
        let json = serde_json::to_string(&EcosystemTarget::CoralReefs).unwrap();
        assert_eq!(json, "\"Coral Reefs\"");
        let back: EcosystemTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EcosystemTarget::CoralReefs);
    }

    #[test]
    fn unknown_index_is_rejected() {
        let parsed: Result<SpectralIndex, _> = serde_json::from_str("\"EVI\"");
        assert!(parsed.is_err());
    }
}
