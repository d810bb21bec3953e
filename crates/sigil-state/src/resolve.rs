//! Winner resolution over the active set
//!
//! Given the active set and the priority table, pick the single state that
//! is visually represented. The rule is a total order: highest priority
//! wins, and among equal priorities the state inserted later into the
//! active set takes precedence. An empty active set resolves to no winner
//! (the caller falls back to the default resource).

use sigil_core::StateName;

use crate::{ActiveSet, PriorityTable};

/// Resolve the winning active state, if any.
///
/// Names missing from the table (which the engine's validation prevents
/// from ever entering the set) rank below every registered name, so they
/// can never displace a registered winner.
pub fn resolve<'a>(active: &'a ActiveSet, table: &PriorityTable) -> Option<&'a StateName> {
    active
        .iter()
        .enumerate()
        .max_by_key(|(index, name)| (table.get(name), *index))
        .map(|(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PriorityTable {
        PriorityTable::from_declarations(["n", "e", "s"].map(StateName::from))
    }

    #[test]
    fn test_empty_set_has_no_winner() {
        let active = ActiveSet::new();
        assert_eq!(resolve(&active, &table()), None);
    }

    #[test]
    fn test_highest_priority_wins() {
        let table = table();
        let mut active = ActiveSet::new();
        active.insert("e".into());
        active.insert("n".into());

        // "e" was declared after "n", so it outranks "n" regardless of
        // activation order.
        assert_eq!(resolve(&active, &table), Some(&"e".into()));
    }

    #[test]
    fn test_override_changes_winner() {
        let mut table = table();
        let mut active = ActiveSet::new();
        active.insert("n".into());
        active.insert("e".into());
        assert_eq!(resolve(&active, &table), Some(&"e".into()));

        table.set(&"n".into(), 5).unwrap();
        assert_eq!(resolve(&active, &table), Some(&"n".into()));
    }

    #[test]
    fn test_tie_breaks_by_later_insertion() {
        let mut table = table();
        table.set(&"n".into(), 7).unwrap();
        table.set(&"e".into(), 7).unwrap();

        let mut active = ActiveSet::new();
        active.insert("n".into());
        active.insert("e".into());

        // Equal priority: the later insertion wins, and repeated
        // resolution without mutation keeps picking the same winner.
        for _ in 0..10 {
            assert_eq!(resolve(&active, &table), Some(&"e".into()));
        }
    }
}
