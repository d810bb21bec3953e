//! Active-set snapshot wire format
//!
//! Snapshots travel between views as a JSON array of state name strings,
//! e.g. `["notification","error"]`. Order is significant: it is the
//! insertion order of the publishing view's active set, which the receiver
//! adopts verbatim.

use thiserror::Error;

use sigil_core::StateName;

/// Snapshot decode failures.
///
/// These never propagate out of the notification handler; the receiving
/// view logs them and keeps its previous active set.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot is not a JSON array of strings: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Encode an active-set snapshot for publication.
pub fn encode(names: &[StateName]) -> String {
    // Serializing a slice of plain strings cannot fail.
    serde_json::to_string(names).unwrap_or_else(|_| "[]".to_owned())
}

/// Decode an inbound snapshot payload.
pub fn decode(payload: &str) -> Result<Vec<StateName>, SnapshotError> {
    Ok(serde_json::from_str(payload)?)
}
