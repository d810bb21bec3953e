//! Sigil Engine - State resolver and cross-view sync engine
//!
//! Owns the set of currently active states, resolves the single winning
//! state under the priority order, hands the winner's resource to the
//! render sink, and replicates the active set to peer views through the
//! shared channel so that every view of the origin converges to the same
//! indicator.

pub mod engine;
pub mod sink;

pub use engine::*;
pub use sink::*;
