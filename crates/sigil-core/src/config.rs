//! Construction configuration for an indicator instance

use crate::{IconResource, SigilError, SigilResult, StateName};

/// Indicator configuration
///
/// The state table is a declaration-ordered sequence: the position of a state
/// in the table becomes its default priority (0, 1, 2, …), with later
/// declarations outranking earlier ones until a priority is overridden.
#[derive(Clone, Debug, Default)]
pub struct IndicatorConfig {
    /// Fallback resource rendered when no state is active
    pub default_icon: IconResource,
    /// Declared states and their resources, in declaration order
    pub states: Vec<(StateName, IconResource)>,
}

impl IndicatorConfig {
    pub fn new() -> Self {
        IndicatorConfig::default()
    }

    pub fn with_default_icon(mut self, icon: impl Into<IconResource>) -> Self {
        self.default_icon = icon.into();
        self
    }

    pub fn with_state(
        mut self,
        name: impl Into<StateName>,
        icon: impl Into<IconResource>,
    ) -> Self {
        self.states.push((name.into(), icon.into()));
        self
    }

    /// Reject malformed declaration tables before any construction happens.
    pub fn validate(&self) -> SigilResult<()> {
        for (i, (name, _)) in self.states.iter().enumerate() {
            if self.states[..i].iter().any(|(n, _)| n == name) {
                return Err(SigilError::InvalidConfig(format!(
                    "duplicate state declaration: {name}"
                )));
            }
        }
        Ok(())
    }
}
