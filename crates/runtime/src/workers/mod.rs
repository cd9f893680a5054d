//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the match controller and advances it at the
//! configured pace while serving commands from [`crate::RuntimeHandle`].

mod simulation;

pub use simulation::{Command, SimulationWorker};
