pub use crate::advisory::{spectral_prompt, AdvisoryClient, AdvisoryPanel, FALLBACK_GUIDANCE};
pub use crate::features::{generate_features, MockFeature};
pub use crate::model::{
    baseline_stats, EcosystemStats, EcosystemTarget, MapRegion, SpectralIndex, Trend,
    COAST_BOUNDS, REGIONS,
};
pub use crate::selection::SelectionState;
