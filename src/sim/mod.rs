//! Fixed-timestep simulation module
//!
//! All physics lives here. This module stays free of presentation:
//! - Fixed timestep only
//! - One seeded RNG per run
//! - Insertion-ordered bodies (order decides which body of a pair is "first")
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::{Body, BodyId};
pub use collision::{Response, bodies_collide, resolve_collision};
pub use state::SimState;
pub use tick::{StepOrder, StepStats, TickInput, TickOutcome, advance_and_resolve, tick};
