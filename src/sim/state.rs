//! Simulation state and the body collection

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyId};
use super::tick::{StepOrder, StepStats};
use crate::Viewport;

/// Complete simulation state
///
/// Owns the bodies and the single RNG every random draw in a run comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Viewport the bodies bounce inside
    pub viewport: Viewport,
    /// How updates and pair checks are ordered within a tick
    pub step_order: StepOrder,
    /// Bodies in spawn order (never removed)
    pub bodies: Vec<Body>,
    /// Simulated seconds since the last spawn
    pub spawn_timer: f32,
    /// Collision counters summed over every tick so far
    pub totals: StepStats,
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
    /// Next body ID
    next_id: u32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl SimState {
    /// Create an empty simulation with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            viewport: Viewport::default(),
            step_order: StepOrder::default(),
            bodies: Vec::new(),
            spawn_timer: 0.0,
            totals: StepStats::default(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_step_order(mut self, step_order: StepOrder) -> Self {
        self.step_order = step_order;
        self
    }

    /// Shared RNG, also used by the shell for presentation draws
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Allocate a new body ID
    pub fn next_body_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn a body at the viewport centre heading in a random whole-degree direction
    pub fn spawn_body(&mut self) -> BodyId {
        let id = self.next_body_id();
        let mut body = Body::new(id, &mut self.rng);
        body.set_position(self.viewport.center());

        let degrees = self.rng.random_range(0..360u32) as f32;
        body.launch(degrees.to_radians());

        log::debug!(
            "Spawned {:?}: radius={} speed={} heading={}deg",
            id,
            body.radius(),
            body.speed(),
            degrees
        );

        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Total kinetic energy with unit mass per body
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(|b| 0.5 * b.vel.length_squared()).sum()
    }
}
