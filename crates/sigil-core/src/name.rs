//! Identity types for the sigil indicator
//!
//! Both identifiers are opaque strings supplied by the hosting application.
//! Neither is ever interpreted; a resource locator in particular is never
//! checked for reachability.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A caller-defined name for an indicator state (e.g. "notification").
///
/// A name is only meaningful once registered in a priority table; operations
/// referencing an unregistered name are rejected. On the wire a name is a
/// bare JSON string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateName(String);

impl StateName {
    pub fn new(name: impl Into<String>) -> Self {
        StateName(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State({})", self.0)
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateName {
    fn from(s: &str) -> Self {
        StateName(s.to_owned())
    }
}

impl From<String> for StateName {
    fn from(s: String) -> Self {
        StateName(s)
    }
}

/// An opaque locator for the resource rendered for a state (or the default
/// baseline). The empty locator is legal and is the fallback default.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct IconResource(String);

impl IconResource {
    pub fn new(locator: impl Into<String>) -> Self {
        IconResource(locator.into())
    }

    /// The empty resource, used when no default icon is configured.
    pub fn empty() -> Self {
        IconResource(String::new())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for IconResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Icon({})", self.0)
    }
}

impl fmt::Display for IconResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconResource {
    fn from(s: &str) -> Self {
        IconResource(s.to_owned())
    }
}

impl From<String> for IconResource {
    fn from(s: String) -> Self {
        IconResource(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_name_roundtrip() {
        let name = StateName::new("notification");
        assert_eq!(name.as_str(), "notification");
        assert_eq!(name, StateName::from("notification"));
        assert_eq!(name.into_string(), "notification");
    }

    #[test]
    fn test_icon_resource_empty() {
        assert!(IconResource::empty().is_empty());
        assert_eq!(IconResource::default(), IconResource::empty());
        assert!(!IconResource::new("a.ico").is_empty());
    }
}
