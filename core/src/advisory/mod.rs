pub mod client;
pub mod panel;
pub mod wire;

pub use client::{spectral_prompt, AdvisoryClient, AdvisoryError, FALLBACK_GUIDANCE};
pub use panel::AdvisoryPanel;
