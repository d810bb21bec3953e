//! Multi-View Convergence Example
//!
//! This example runs two indicator "views" of the same origin in one
//! process, wired through the in-memory hub, and shows how priority
//! resolution and last-write-wins replication keep them in agreement.

use sigil_core::IndicatorConfig;
use sigil_engine::{IndicatorEngine, RecordingSink};
use sigil_sync::MemoryHub;

fn main() {
    println!("=== Sigil Multi-View Example ===\n");

    let config = IndicatorConfig::new()
        .with_default_icon("icons/default.ico")
        .with_state("notification", "icons/notification.ico")
        .with_state("error", "icons/error.ico")
        .with_state("success", "icons/success.ico");

    // 1. Two views of the same origin
    println!("1. Opening two views...");
    let hub = MemoryHub::new();
    let mut tab_a =
        IndicatorEngine::new(config.clone(), RecordingSink::new(), hub.attach()).unwrap();
    let mut tab_b = IndicatorEngine::new(config, RecordingSink::new(), hub.attach()).unwrap();
    println!("   A shows: {}", tab_a.current_resource());
    println!("   B shows: {}", tab_b.current_resource());

    // 2. Activate states in view A
    println!("\n2. View A activates notification, then error...");
    tab_a.activate("notification").unwrap();
    println!("   A shows: {}", tab_a.current_resource());
    tab_a.activate("error").unwrap();
    println!("   A shows: {} (error outranks notification)", tab_a.current_resource());

    // 3. View B catches up through the shared channel
    println!("\n3. View B pumps its notifications...");
    tab_b.pump();
    println!("   B active: {:?}", tab_b.active_states());
    println!("   B shows: {}", tab_b.current_resource());

    // 4. Priority override flips the winner without any activation change
    println!("\n4. View A promotes notification to priority 5...");
    tab_a.set_priority("notification", 5).unwrap();
    println!("   A shows: {}", tab_a.current_resource());

    // 5. Clearing converges both views back to the default
    println!("\n5. View A clears all states...");
    tab_a.clear_all().unwrap();
    tab_b.pump();
    println!("   A shows: {}", tab_a.current_resource());
    println!("   B shows: {}", tab_b.current_resource());

    println!("\nRender history of view B:");
    for resource in tab_b.sink().rendered() {
        println!("   {resource}");
    }
}
