//! Simulated discs
//!
//! A body is physics-only: position, velocity, radius and launch speed.
//! Colour and outline live in the renderer's `Appearance`, keyed by `BodyId`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Viewport, polar_to_cartesian};

/// Stable identifier joining a body to its presentation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// A disc moving at constant velocity between collisions
///
/// `pos` is the top-left corner of the disc's bounding box, not its centre.
/// Wall bounces and pair distances are both measured from this corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    speed: f32,
}

impl Body {
    /// Create a body with random radius and speed, at rest at the origin
    pub fn new<R: Rng + ?Sized>(id: BodyId, rng: &mut R) -> Self {
        let radius = (BODY_RADIUS_MIN + rng.random_range(0..BODY_RADIUS_SPAN)) as f32;
        let speed = (BODY_SPEED_MIN + rng.random_range(0..BODY_SPEED_SPAN)) as f32;
        Self::with_params(id, radius, speed)
    }

    /// Create a body with a fixed radius and speed
    pub fn with_params(id: BodyId, radius: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            speed,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Launch speed, only read when the body is spawned
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Geometric centre of the disc
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    /// Place the body (spawn-time only)
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Assign the initial velocity (spawn-time only)
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    /// Set velocity to `speed` along `angle` (radians)
    pub fn launch(&mut self, angle: f32) {
        self.vel = polar_to_cartesian(self.speed, angle);
    }

    /// Advance by one step and bounce off the viewport edges
    ///
    /// The wall test uses the disc's bounding box, so a disc grazing a corner
    /// bounces slightly early. Position is never clamped: a fast disc can sit
    /// outside the viewport for a tick before the flipped velocity returns it.
    pub fn update(&mut self, dt: f32, viewport: &Viewport) {
        self.pos += self.vel * dt;

        let diameter = self.radius * 2.0;

        if self.pos.x < 0.0 || self.pos.x + diameter > viewport.width {
            self.vel.x = -self.vel.x;
        }

        if self.pos.y < 0.0 || self.pos.y + diameter > viewport.height {
            self.vel.y = -self.vel.y;
        }
    }
}
