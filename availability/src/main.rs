//! Availability selection demo
//!
//! Replays a pointer session over a small grid: hover, anchor, preview,
//! commit. Set `VARAAMO_ADMIN=true` to use staff rules.

use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use varaamo_availability::{
    AvailabilityAction, AvailabilityConfig, AvailabilityEnvironment, AvailabilityReducer,
    AvailabilityState, Selection, Slot, view,
};
use varaamo_core::environment::SystemClock;
use varaamo_runtime::Store;

/// Slots as the grid would emit them for one resource
const GRID: &str = r#"[
    {"resourceId": "A", "begin": "2024-01-01T09:00:00+02:00", "end": "2024-01-01T09:30:00+02:00",
     "minPeriod": "00:30:00", "maxPeriod": "02:00:00"},
    {"resourceId": "A", "begin": "2024-01-01T09:30:00+02:00", "end": "2024-01-01T10:00:00+02:00",
     "minPeriod": "00:30:00", "maxPeriod": "02:00:00"},
    {"resourceId": "A", "begin": "2024-01-01T10:00:00+02:00", "end": "2024-01-01T10:30:00+02:00",
     "minPeriod": "00:30:00", "maxPeriod": "02:00:00"}
]"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "varaamo_availability=debug,varaamo_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Availability Selection ===\n");

    let config = AvailabilityConfig::from_env()?;
    let env = AvailabilityEnvironment::new(config).with_handler(Arc::new(|selection: Selection| {
        println!(
            "\n>>> onSelect: {} from {} to {}",
            selection.resource_id(),
            selection.begin(),
            selection.end()
        );
    }));
    let store = Store::new(AvailabilityState::today(&SystemClock), AvailabilityReducer::new(), env);

    let slots: Vec<Slot> = serde_json::from_str(GRID)?;
    let (Some(first), Some(second)) = (slots.first(), slots.get(1)) else {
        return Err("demo grid needs two slots".into());
    };

    let steps = [
        ("Hover first slot", AvailabilityAction::HoverEntered { slot: first.clone() }),
        ("Click first slot", AvailabilityAction::SlotClicked { slot: first.clone() }),
        ("Leave first slot", AvailabilityAction::HoverLeft { slot: first.clone() }),
        ("Hover second slot", AvailabilityAction::HoverEntered { slot: second.clone() }),
    ];

    for (label, action) in steps {
        println!("\n>>> {label}");
        store.send(action).await?;
        let model = store.state(view::view_model).await;
        println!("{}", serde_json::to_string_pretty(&model)?);
    }

    println!("\n>>> Click second slot");
    let mut handle = store
        .send(AvailabilityAction::SlotClicked { slot: second.clone() })
        .await?;
    handle.wait_with_timeout(Duration::from_secs(1)).await?;

    let model = store.state(view::view_model).await;
    println!("\nAfter commit: {}", serde_json::to_string(&model)?);

    store.close().await?;
    println!("\n=== Demo Complete ===");
    Ok(())
}
