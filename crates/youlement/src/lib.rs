//! Career archetype matching for the YouLement assessment.
//!
//! The [`assessment`] module holds the matching engine: profile extraction, the
//! archetype catalog, the scorer, and the ranker. The remaining modules carry the
//! configuration, error, and telemetry plumbing shared with the API service.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
