//! Runtime orchestration for the arena match simulation.
//!
//! This crate wires together the input provider abstraction, the simulation
//! worker and the event bus into a cohesive runtime API. Consumers embed
//! [`Runtime`] to run a match at a fixed tick rate, subscribe to events, and
//! pause or inspect the match through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    IdleInputProvider, InputProvider, Result, RuntimeError, RuntimeHandle, ScriptedInputProvider,
    SharedInputProvider,
};
pub use events::{Event, EventBus, Topic};
pub use runtime::{Pacing, Runtime, RuntimeBuilder, RuntimeConfig};
