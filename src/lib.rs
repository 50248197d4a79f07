//! Minimal HTTP data service.
//!
//! Exposes a health check, a static user listing, a user-creation stub, and a
//! numeric batch-processing endpoint, plus a standalone batch processor that
//! validates and categorizes data records.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP API routes and handlers
//! - [`processor`]: Batch record validation and transformation
//! - [`metrics`]: Request and processing counters
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod processor;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError, ValidationError};
pub use processor::DataProcessor;
