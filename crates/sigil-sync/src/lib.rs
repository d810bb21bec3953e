//! Sigil Sync - Shared cross-view channel and snapshot codec
//!
//! This crate implements the replication side of the indicator:
//! - The shared channel seam (`SharedChannel`, `ChannelEvent`)
//! - The active-set snapshot wire format (JSON array of names)
//! - An in-process broadcast hub for tests, demos, and multi-instance hosts
//!
//! Replication is last-write-wins and best-effort: only the most recent
//! publish is observable by peers, and a peer that is not listening when a
//! write lands simply misses it.

pub mod channel;
pub mod memory;
pub mod snapshot;

pub use channel::*;
pub use memory::*;
pub use snapshot::*;
