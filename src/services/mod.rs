//! Service layer module
//!
//! Contains the policy table, prompt builder, text metrics, pricing and
//! the generation orchestrator

pub mod metrics;
pub mod orchestrator;
pub mod policy;
pub mod pricing;
pub mod prompt;

pub use orchestrator::Orchestrator;
pub use pricing::Pricing;
