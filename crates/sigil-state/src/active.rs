//! Active set - the states currently "on" in this view

use sigil_core::StateName;

/// Ordered, duplicate-free sequence of currently active state names.
///
/// Insertion order is irrelevant to which state wins resolution except as
/// the tie-break input; it is preserved for inspection and for faithful
/// replication to peer views.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActiveSet {
    names: Vec<StateName>,
}

impl ActiveSet {
    pub fn new() -> Self {
        ActiveSet::default()
    }

    /// Append a name if not already present. Returns true if it was added.
    pub fn insert(&mut self, name: StateName) -> bool {
        if self.names.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove a name if present. Returns true if it was removed.
    pub fn remove(&mut self, name: &StateName) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Drop all active names
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Replace the whole set with an authoritative snapshot.
    ///
    /// Duplicates in the snapshot are collapsed, keeping the first
    /// occurrence, so the no-duplicates invariant holds for any input.
    pub fn replace(&mut self, names: Vec<StateName>) {
        self.names.clear();
        for name in names {
            self.insert(name);
        }
    }

    pub fn contains(&self, name: &StateName) -> bool {
        self.names.contains(name)
    }

    /// Get number of active names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &StateName> {
        self.names.iter()
    }

    /// Snapshot copy in insertion order
    pub fn snapshot(&self) -> Vec<StateName> {
        self.names.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = ActiveSet::new();
        assert!(set.insert("n".into()));
        assert!(!set.insert("n".into()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = ActiveSet::new();
        set.insert("n".into());
        assert!(!set.remove(&"e".into()));
        assert!(set.remove(&"n".into()));
        assert!(set.is_empty());
    }

    #[test]
    fn test_replace_preserves_order_and_dedupes() {
        let mut set = ActiveSet::new();
        set.insert("x".into());

        set.replace(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(set.snapshot(), vec!["a".into(), "b".into()]);
        assert!(!set.contains(&"x".into()));
    }
}
