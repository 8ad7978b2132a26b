use crate::model::target::EcosystemTarget;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a health-index series over the recent monitoring window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
        };
        f.write_str(label)
    }
}

/// Headline figures for one monitored ecosystem, shown on the health cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EcosystemStats {
    pub target: EcosystemTarget,
    /// Fraction in [0, 1]; rendered as a percentage.
    pub health_index: f32,
    pub trend: Trend,
    pub coverage_km2: f32,
}

/// Illustrative baseline figures pending a live analytics feed.
pub fn baseline_stats() -> [EcosystemStats; 4] {
    [
        EcosystemStats {
            target: EcosystemTarget::Mangroves,
            health_index: 0.82,
            trend: Trend::Improving,
            coverage_km2: 450.0,
        },
        EcosystemStats {
            target: EcosystemTarget::CoralReefs,
            health_index: 0.45,
            trend: Trend::Declining,
            coverage_km2: 210.0,
        },
        EcosystemStats {
            target: EcosystemTarget::Seagrass,
            health_index: 0.67,
            trend: Trend::Stable,
            coverage_km2: 180.0,
        },
        EcosystemStats {
            target: EcosystemTarget::Shoreline,
            health_index: 0.55,
            trend: Trend::Stable,
            coverage_km2: 600.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_covers_every_target() {
        let stats = baseline_stats();
        for target in EcosystemTarget::ALL {
            assert!(stats.iter().any(|s| s.target == target));
        }
        for stat in stats {
            assert!((0.0..=1.0).contains(&stat.health_index));
        }
    }
}
