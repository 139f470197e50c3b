//! Backend for the sustainability dashboard: sensor history, HVAC policy
//! simulation with remote delegation and local fallback, and curated
//! recommendations.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod policy;
pub mod repo;
pub mod seed;
pub mod state;
pub mod telemetry;

pub use state::AppState;
