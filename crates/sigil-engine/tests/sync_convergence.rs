//! Cross-view convergence through the shared channel
//!
//! Each engine here plays the role of one open view of the origin; the
//! memory hub plays the origin's shared storage. Views are pumped
//! explicitly, standing in for the host's event dispatch.

use sigil_core::IndicatorConfig;
use sigil_engine::{IndicatorEngine, RecordingSink};
use sigil_sync::{ChannelInbox, MemoryChannel, MemoryHub, SharedChannel, CHANNEL_KEY};

type View = IndicatorEngine<RecordingSink, MemoryChannel>;

fn config() -> IndicatorConfig {
    IndicatorConfig::new()
        .with_default_icon("d")
        .with_state("a", "A")
        .with_state("b", "B")
}

fn view(hub: &MemoryHub) -> View {
    IndicatorEngine::new(config(), RecordingSink::new(), hub.attach()).unwrap()
}

#[test]
fn peer_adopts_published_snapshot_verbatim() {
    let hub = MemoryHub::new();
    let mut writer = view(&hub);
    let mut reader = view(&hub);

    writer.activate("a").unwrap();
    writer.activate("b").unwrap();

    reader.pump();
    assert_eq!(reader.active_states(), vec!["a".into(), "b".into()]);
    assert_eq!(reader.current_resource(), writer.current_resource());
}

#[test]
fn inbound_snapshot_does_not_republish() {
    let hub = MemoryHub::new();
    let mut writer = view(&hub);
    let mut reader = view(&hub);
    let observer = hub.attach();

    writer.activate("a").unwrap();
    observer.drain();

    // reader applies the snapshot; if it republished, both the writer and
    // the observer would hear about it and two live views would ping-pong
    reader.pump();
    writer.pump();
    assert!(observer.drain().is_empty());
    assert_eq!(writer.active_states(), vec!["a".into()]);
}

#[test]
fn malformed_payload_leaves_view_unchanged() {
    let hub = MemoryHub::new();
    let mut reader = view(&hub);
    let raw = hub.attach();

    reader.activate("a").unwrap();
    raw.drain();

    for garbage in ["not json", "{\"a\":1}", "[1,2,3]", ""] {
        raw.publish(CHANNEL_KEY, garbage).unwrap();
        reader.pump();
        assert_eq!(reader.active_states(), vec!["a".into()]);
        assert_eq!(reader.current_resource(), &"A".into());
    }
}

#[test]
fn unrelated_keys_are_ignored() {
    let hub = MemoryHub::new();
    let mut reader = view(&hub);
    let raw = hub.attach();

    raw.publish("someOtherKey", "[\"a\"]").unwrap();
    reader.pump();
    assert!(reader.active_states().is_empty());
    assert_eq!(reader.current_resource(), &"d".into());
}

#[test]
fn snapshot_naming_unregistered_state_is_discarded() {
    let hub = MemoryHub::new();
    let mut reader = view(&hub);
    let raw = hub.attach();

    reader.activate("b").unwrap();
    raw.drain();

    raw.publish(CHANNEL_KEY, "[\"a\",\"zzz\"]").unwrap();
    reader.pump();
    assert_eq!(reader.active_states(), vec!["b".into()]);
}

#[test]
fn late_joiner_converges_on_next_publish() {
    let hub = MemoryHub::new();
    let mut writer = view(&hub);

    writer.activate("a").unwrap();

    // a view attached after the write has missed it: best-effort delivery
    let mut late = view(&hub);
    late.pump();
    assert!(late.active_states().is_empty());

    // the next publish brings it in line
    writer.activate("b").unwrap();
    late.pump();
    assert_eq!(late.active_states(), writer.active_states());
}

#[test]
fn replaying_the_same_snapshot_is_a_no_op() {
    let hub = MemoryHub::new();
    let mut reader = view(&hub);
    let raw = hub.attach();

    raw.publish(CHANNEL_KEY, "[\"a\"]").unwrap();
    raw.publish(CHANNEL_KEY, "[\"a\"]").unwrap();
    reader.pump();

    assert_eq!(reader.active_states(), vec!["a".into()]);
    assert_eq!(reader.current_resource(), &"A".into());
}

#[test]
fn concurrent_writers_settle_on_last_write() {
    let hub = MemoryHub::new();
    let mut left = view(&hub);
    let mut right = view(&hub);
    let mut reader = view(&hub);

    left.activate("a").unwrap();
    right.activate("b").unwrap();

    // the reader observes both writes in arrival order; the later one is
    // the snapshot of record
    reader.pump();
    assert_eq!(reader.active_states(), vec!["b".into()]);
    assert_eq!(reader.current_resource(), &"B".into());
}
