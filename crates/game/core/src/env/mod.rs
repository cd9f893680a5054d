//! Injected environment for the simulation.
//!
//! The only ambient input the rules need is randomness: combat jitter,
//! opponent decisions, special-move selection and stage hazards all draw from
//! an [`RngSource`] supplied by the caller.
mod rng;

pub use rng::{PcgRng, RngSource, ScriptedRng, compute_seed};
