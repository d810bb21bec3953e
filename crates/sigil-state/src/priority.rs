//! Priority table - stable, overridable total order over state names

use std::collections::HashMap;

use sigil_core::{SigilError, SigilResult, StateName};

/// Priority table mapping each registered state name to a numeric rank.
///
/// Populated once at construction from the declaration order of the state
/// table (position 0, 1, 2, …). The key set is fixed for the table's
/// lifetime; only the values may be overridden.
#[derive(Debug, Default)]
pub struct PriorityTable {
    priorities: HashMap<StateName, i64>,
}

impl PriorityTable {
    /// Build from declared names, assigning each its declaration index.
    pub fn from_declarations<I>(names: I) -> Self
    where
        I: IntoIterator<Item = StateName>,
    {
        let priorities = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| (name, index as i64))
            .collect();
        PriorityTable { priorities }
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &StateName) -> bool {
        self.priorities.contains_key(name)
    }

    /// Current priority of a registered name
    pub fn get(&self, name: &StateName) -> Option<i64> {
        self.priorities.get(name).copied()
    }

    /// Override the priority of an already-registered name
    pub fn set(&mut self, name: &StateName, priority: i64) -> SigilResult<()> {
        match self.priorities.get_mut(name) {
            Some(slot) => {
                tracing::debug!("priority override: {} {} -> {}", name, slot, priority);
                *slot = priority;
                Ok(())
            }
            None => Err(SigilError::UnknownState(name.to_string())),
        }
    }

    /// Get number of registered names
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    /// Iterate over all registered names and their priorities
    pub fn iter(&self) -> impl Iterator<Item = (&StateName, i64)> {
        self.priorities.iter().map(|(name, p)| (name, *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PriorityTable {
        PriorityTable::from_declarations(
            ["notification", "error", "success"].map(StateName::from),
        )
    }

    #[test]
    fn test_declaration_order_defaults() {
        let table = table();
        assert_eq!(table.get(&"notification".into()), Some(0));
        assert_eq!(table.get(&"error".into()), Some(1));
        assert_eq!(table.get(&"success".into()), Some(2));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_override_priority() {
        let mut table = table();
        table.set(&"notification".into(), 10).unwrap();
        assert_eq!(table.get(&"notification".into()), Some(10));
    }

    #[test]
    fn test_set_unknown_state_fails() {
        let mut table = table();
        let err = table.set(&"bogus".into(), 1).unwrap_err();
        assert!(matches!(err, SigilError::UnknownState(_)));
    }
}
