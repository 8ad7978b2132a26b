pub mod region;
pub mod stats;
pub mod target;

pub use region::{MapRegion, COAST_BOUNDS, REGIONS};
pub use stats::{baseline_stats, EcosystemStats, Trend};
pub use target::{EcosystemTarget, SpectralIndex};
