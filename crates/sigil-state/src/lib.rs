//! Sigil State - Priority registry and active-state resolution
//!
//! This crate implements the state model of the indicator:
//! - Priority table with declaration-order defaults and overrides
//! - Active-set management (ordered, duplicate-free)
//! - Winner resolution with a documented tie-break rule

pub mod active;
pub mod priority;
pub mod resolve;

pub use active::*;
pub use priority::*;
pub use resolve::*;
