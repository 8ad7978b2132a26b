use crate::model::{EcosystemTarget, MapRegion};
use rand::Rng;

/// Illustrative hotspot rendered on the map while no live feed exists.
#[derive(Debug, Clone, PartialEq)]
pub struct MockFeature {
    pub id: usize,
    pub label: String,
    /// (latitude, longitude), jittered off the source region.
    pub coords: (f64, f64),
    /// Uniform in [0.5, 1.0); drives marker opacity.
    pub intensity: f32,
}

/// Jitter applied to each axis of a region anchor, in degrees.
const JITTER_DEG: f64 = 0.05;

/// Produces one hotspot per region for the active target.
///
/// Deliberately unseeded: every call re-rolls positions and intensities, so
/// the map shimmers on each selection change. Returns nothing when no target
/// is active.
pub fn generate_features(
    target: Option<EcosystemTarget>,
    regions: &[MapRegion],
) -> Vec<MockFeature> {
    let target = match target {
        Some(target) => target,
        None => return Vec::new(),
    };

    let mut rng = rand::thread_rng();
    regions
        .iter()
        .enumerate()
        .map(|(id, region)| MockFeature {
            id,
            label: format!("{} at {}", target, region.name),
            coords: (
                region.coords.0 + rng.gen_range(-JITTER_DEG..JITTER_DEG),
                region.coords.1 + rng.gen_range(-JITTER_DEG..JITTER_DEG),
            ),
            intensity: rng.gen_range(0.5..1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::REGIONS;

    #[test]
    fn no_target_yields_no_features() {
        assert!(generate_features(None, &REGIONS).is_empty());
        assert!(generate_features(None, &[]).is_empty());
    }

    #[test]
    fn one_feature_per_region_within_jitter() {
        let features = generate_features(Some(EcosystemTarget::Mangroves), &REGIONS);
        assert_eq!(features.len(), REGIONS.len());

        for (feature, region) in features.iter().zip(REGIONS.iter()) {
            assert_eq!(feature.label, format!("Mangroves at {}", region.name));
            assert!((feature.coords.0 - region.coords.0).abs() <= JITTER_DEG);
            assert!((feature.coords.1 - region.coords.1).abs() <= JITTER_DEG);
            assert!((0.5..1.0).contains(&feature.intensity));
        }
    }

    #[test]
    fn features_are_rerolled_on_every_call() {
        let first = generate_features(Some(EcosystemTarget::Seagrass), &REGIONS);
        let second = generate_features(Some(EcosystemTarget::Seagrass), &REGIONS);
        // Nine independent uniform draws colliding exactly is not a thing.
        assert_ne!(first, second);
    }
}
