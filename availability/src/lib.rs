//! Reservation time-slot selection for the Varaamo availability view.
//!
//! The availability grid shows one timeline per resource. Users pick a
//! reservation by clicking a first slot (the anchor) and then the slot the
//! reservation should end in; hovering previews the result. This crate holds
//! that interaction as a reducer, so any UI runtime can host it:
//!
//! - [`AvailabilityReducer`] applies grid events to [`AvailabilityState`]
//! - committed selections go to the [`SelectionHandler`] in the environment
//! - [`view::view_model`] derives what the grid and sidebar highlight
//!
//! Clicks that break a rule (other resource, backwards, too short or too long
//! for a regular user) are ignored without any error.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use varaamo_availability::{
//!     AvailabilityAction, AvailabilityConfig, AvailabilityEnvironment, AvailabilityReducer,
//!     AvailabilityState, Selection, Slot,
//! };
//! use varaamo_core::environment::SystemClock;
//! use varaamo_runtime::Store;
//!
//! # async fn example(first: Slot, last: Slot) -> Result<(), Box<dyn std::error::Error>> {
//! let env = AvailabilityEnvironment::new(AvailabilityConfig::from_env()?)
//!     .with_handler(Arc::new(|selection: Selection| {
//!         println!("Reserve {} from {}", selection.resource_id(), selection.begin());
//!     }));
//! let store = Store::new(AvailabilityState::today(&SystemClock), AvailabilityReducer::new(), env);
//!
//! store.send(AvailabilityAction::SlotClicked { slot: first }).await?;
//! let mut handle = store.send(AvailabilityAction::SlotClicked { slot: last }).await?;
//! handle.wait().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod period;
pub mod reducer;
pub mod rules;
pub mod slot;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::AvailabilityConfig;
pub use error::{ConfigError, SelectionRejection, SlotError};
pub use period::PolicyDuration;
pub use reducer::{AvailabilityEnvironment, AvailabilityReducer, SelectionHandler};
pub use slot::{ResourceId, Selection, Slot, Timestamp};
pub use types::{AvailabilityAction, AvailabilityState, SelectionState};
pub use view::{AvailabilityViewModel, DisplayedSelection, SelectionKind};
