//! Topic-based event bus for runtime events.
//!
//! Match events are published to the topic matching their category, and every
//! simulated tick publishes a frame snapshot. Consumers subscribe only to the
//! topics they need.

mod bus;

pub use bus::{Event, EventBus, Topic};
