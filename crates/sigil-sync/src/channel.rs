//! Shared channel seam - key-value broadcast storage between views

use thiserror::Error;

use sigil_core::SigilError;

/// Reserved key under which the active-set snapshot is published.
pub const CHANNEL_KEY: &str = "faviconState";

/// Channel write failures - quota, availability, detached backends.
///
/// These surface to the caller of the operation that triggered the publish;
/// the engine does not retry or swallow them.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("channel write failed: {0}")]
    WriteFailed(String),
}

impl From<ChannelError> for SigilError {
    fn from(err: ChannelError) -> Self {
        SigilError::Channel(err.to_string())
    }
}

/// A change notification as observed by a peer view.
///
/// Mirrors a storage-change event: the writer itself never receives one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEvent {
    /// Key the write landed under
    pub key: String,
    /// Value before the write, if any
    pub old_value: Option<String>,
    /// Value after the write
    pub new_value: String,
}

/// Write side of the shared cross-view channel.
///
/// Implementations are last-write-wins key-value stores scoped to the
/// application origin. Delivery to peers is the host's concern; the engine
/// only ever calls `publish`.
pub trait SharedChannel {
    fn publish(&self, key: &str, value: &str) -> Result<(), ChannelError>;
}

/// Inbound side: a mailbox of change notifications for one view.
///
/// The host drains this at its own cadence and feeds each event to the
/// engine; there is no blocking wait.
pub trait ChannelInbox {
    fn drain(&self) -> Vec<ChannelEvent>;
}
