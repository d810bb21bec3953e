//! Indicator engine - resolution, rendering and replication pipeline

use std::collections::HashMap;

use sigil_core::{IconResource, IndicatorConfig, SigilError, SigilResult, StateName};
use sigil_state::{resolve, ActiveSet, PriorityTable};
use sigil_sync::{snapshot, ChannelEvent, ChannelInbox, SharedChannel, CHANNEL_KEY};

use crate::RenderSink;

/// State resolver and sync engine for one view.
///
/// Every mutation of the active set runs the same pipeline: recompute the
/// winning state, hand its resource to the render sink, then publish the
/// full active set to the shared channel so peer views converge. Inbound
/// snapshots from peers run resolution and rendering but never re-publish,
/// which keeps two live views from ping-ponging notifications forever.
pub struct IndicatorEngine<S: RenderSink, C: SharedChannel> {
    /// Priority registry, keys fixed at construction
    priorities: PriorityTable,
    /// Resource for each registered state
    icons: HashMap<StateName, IconResource>,
    /// Fallback when nothing is active
    default_icon: IconResource,
    /// States currently "on" in this view
    active: ActiveSet,
    /// Last resource the sink actually accepted
    current: IconResource,
    sink: S,
    channel: C,
}

impl<S: RenderSink, C: SharedChannel> IndicatorEngine<S, C> {
    /// Build an engine from its configuration and collaborators.
    ///
    /// Renders the default resource immediately, so a fresh view shows the
    /// baseline indicator before any state is activated.
    pub fn new(config: IndicatorConfig, sink: S, channel: C) -> SigilResult<Self> {
        config.validate()?;

        let priorities =
            PriorityTable::from_declarations(config.states.iter().map(|(name, _)| name.clone()));
        let icons = config.states.into_iter().collect();

        let mut engine = IndicatorEngine {
            priorities,
            icons,
            default_icon: config.default_icon,
            active: ActiveSet::new(),
            current: IconResource::empty(),
            sink,
            channel,
        };
        let baseline = engine.default_icon.clone();
        engine.render(baseline);
        Ok(engine)
    }

    /// Turn a registered state on.
    ///
    /// Already-active states are left untouched: no re-render, no publish.
    pub fn activate(&mut self, name: impl Into<StateName>) -> SigilResult<()> {
        let name = name.into();
        self.ensure_registered(&name)?;

        if self.active.insert(name) {
            self.apply();
            self.publish()?;
        }
        Ok(())
    }

    /// Turn a state off. Removing an absent state is a no-op removal, but
    /// the resolve/render/publish pipeline still runs.
    pub fn deactivate(&mut self, name: impl Into<StateName>) -> SigilResult<()> {
        let name = name.into();
        self.active.remove(&name);
        self.apply();
        self.publish()
    }

    /// Drop every active state and fall back to the default resource.
    pub fn clear_all(&mut self) -> SigilResult<()> {
        self.active.clear();
        self.apply();
        self.publish()
    }

    /// Render a resource directly, bypassing resolution.
    ///
    /// The active set is untouched and nothing is published; the next
    /// activate/deactivate will resolve and overwrite this.
    pub fn force_render(&mut self, resource: impl Into<IconResource>) {
        self.render(resource.into());
    }

    /// Override a registered state's priority and re-run the pipeline.
    /// Can flip the winner without any activation change.
    pub fn set_priority(&mut self, name: impl Into<StateName>, priority: i64) -> SigilResult<()> {
        let name = name.into();
        self.priorities.set(&name, priority)?;
        self.apply();
        self.publish()
    }

    /// Snapshot copy of the active set, in insertion order.
    pub fn active_states(&self) -> Vec<StateName> {
        self.active.snapshot()
    }

    /// The last resource the sink accepted.
    pub fn current_resource(&self) -> &IconResource {
        &self.current
    }

    /// Get reference to the render sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get mutable reference to the render sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Apply a change notification from a peer view.
    ///
    /// The payload is authoritative: the local active set is replaced
    /// wholesale, then resolution and rendering run. No re-publish happens
    /// here. A payload that fails to decode, or that references a state
    /// this view never registered, is logged and discarded with the
    /// previous active set retained.
    pub fn apply_remote(&mut self, event: &ChannelEvent) {
        if event.key != CHANNEL_KEY {
            return;
        }

        let names = match snapshot::decode(&event.new_value) {
            Ok(names) => names,
            Err(err) => {
                tracing::warn!("discarding malformed peer snapshot: {}", err);
                return;
            }
        };

        if let Some(unknown) = names.iter().find(|n| !self.priorities.contains(n)) {
            tracing::warn!("discarding peer snapshot naming unregistered state: {}", unknown);
            return;
        }

        self.active.replace(names);
        self.apply();
    }

    fn ensure_registered(&self, name: &StateName) -> SigilResult<()> {
        if self.priorities.contains(name) {
            Ok(())
        } else {
            Err(SigilError::UnknownState(name.to_string()))
        }
    }

    /// Resolution + render: pick the winner and hand its resource to the
    /// sink, or fall back to the default when nothing is active.
    fn apply(&mut self) {
        let resource = match resolve(&self.active, &self.priorities) {
            Some(winner) => self
                .icons
                .get(winner)
                .cloned()
                .unwrap_or_else(|| self.default_icon.clone()),
            None => self.default_icon.clone(),
        };
        self.render(resource);
    }

    /// Hand a resource to the sink. A sink failure is isolated here: it is
    /// logged and the previously accepted resource stays current.
    fn render(&mut self, resource: IconResource) {
        match self.sink.render(&resource) {
            Ok(()) => self.current = resource,
            Err(err) => {
                tracing::warn!("render sink rejected {:?}: {}", resource, err);
            }
        }
    }

    /// Publish the active set as the origin's snapshot of record.
    /// Channel failures (quota, availability) propagate to the caller.
    fn publish(&mut self) -> SigilResult<()> {
        let payload = snapshot::encode(&self.active.snapshot());
        self.channel.publish(CHANNEL_KEY, &payload)?;
        Ok(())
    }
}

impl<S: RenderSink, C: SharedChannel + ChannelInbox> IndicatorEngine<S, C> {
    /// Drain pending peer notifications and apply each in arrival order.
    ///
    /// Hosts with their own event dispatch can instead feed events to
    /// [`apply_remote`](Self::apply_remote) directly.
    pub fn pump(&mut self) {
        for event in self.channel.drain() {
            self.apply_remote(&event);
        }
    }
}
