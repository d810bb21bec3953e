//! In-process broadcast hub
//!
//! Stands in for the host's origin-scoped shared storage: one hub per
//! "origin", one attached channel per "view". A publish stores the
//! last-written value and queues a change notification to every attached
//! channel except the writer, matching storage-event semantics. Delivery
//! is pull-based: each view drains its own mailbox when its host dispatch
//! runs, so tests can interleave views deterministically.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{ChannelError, ChannelEvent, ChannelInbox, SharedChannel};

#[derive(Default)]
struct HubInner {
    values: HashMap<String, String>,
    mailboxes: HashMap<u64, VecDeque<ChannelEvent>>,
    next_id: u64,
}

/// Origin-scoped broadcast hub shared by a set of views.
#[derive(Clone, Default)]
pub struct MemoryHub {
    inner: Arc<Mutex<HubInner>>,
}

impl MemoryHub {
    pub fn new() -> Self {
        MemoryHub::default()
    }

    /// Attach a new view to the hub.
    pub fn attach(&self) -> MemoryChannel {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.mailboxes.insert(id, VecDeque::new());
        MemoryChannel {
            inner: Arc::clone(&self.inner),
            id,
        }
    }

    /// Last value written under a key, if any.
    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.lock().values.get(key).cloned()
    }
}

/// One view's handle on the hub: write side plus its own mailbox.
pub struct MemoryChannel {
    inner: Arc<Mutex<HubInner>>,
    id: u64,
}

impl SharedChannel for MemoryChannel {
    fn publish(&self, key: &str, value: &str) -> Result<(), ChannelError> {
        let mut inner = self.inner.lock();
        let old_value = inner.values.insert(key.to_owned(), value.to_owned());
        let event = ChannelEvent {
            key: key.to_owned(),
            old_value,
            new_value: value.to_owned(),
        };

        let writer = self.id;
        for (id, mailbox) in inner.mailboxes.iter_mut() {
            if *id != writer {
                mailbox.push_back(event.clone());
            }
        }
        Ok(())
    }
}

impl ChannelInbox for MemoryChannel {
    fn drain(&self) -> Vec<ChannelEvent> {
        let mut inner = self.inner.lock();
        match inner.mailboxes.get_mut(&self.id) {
            Some(mailbox) => mailbox.drain(..).collect(),
            None => Vec::new(),
        }
    }
}

impl Drop for MemoryChannel {
    fn drop(&mut self) {
        self.inner.lock().mailboxes.remove(&self.id);
    }
}
