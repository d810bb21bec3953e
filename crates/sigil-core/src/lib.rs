//! Sigil Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the sigil indicator:
//! - Identifiers (StateName, IconResource)
//! - Construction configuration (IndicatorConfig)
//! - Error taxonomy

pub mod config;
pub mod error;
pub mod name;

pub use config::*;
pub use error::*;
pub use name::*;
