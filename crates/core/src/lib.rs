//! EphemeralDB core types
//!
//! Contains:
//! - Bucket / Value: the two-level data model
//! - StoreError: error taxonomy shared by storage and persistence
//! - StoreConfig: storage directory settings

mod bucket;
mod config;
mod error;

pub use bucket::*;
pub use config::*;
pub use error::*;
