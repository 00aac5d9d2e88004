pub mod alerts;
pub mod batch;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod evacuation;
pub mod model;
pub mod risk;
pub mod tiers;

pub use error::{AegisError, Result};
