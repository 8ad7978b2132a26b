//! Domain core for the Kenyan coastal ecosystem dashboard.
//!
//! The modules cover the monitoring vocabulary (targets, spectral indices,
//! coastal regions), the selection state driving the map, the illustrative
//! feature generator, and the client for the hosted advisory service.

pub mod advisory;
pub mod features;
pub mod model;
pub mod prelude;
pub mod selection;
pub mod telemetry;

pub use prelude::*;
