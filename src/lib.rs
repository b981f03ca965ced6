//! Bounce Pit - discs bouncing around a fixed viewport
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (bodies, wall bounce, pairwise collisions)
//! - `renderer`: Presentation records and CPU vertex generation
//! - `settings`: Shell configuration loaded from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (75 Hz)
    pub const SIM_DT: f32 = 1.0 / 75.0;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 1200.0;
    pub const VIEWPORT_HEIGHT: f32 = 900.0;

    /// Body radius is drawn from [MIN, MIN + SPAN)
    pub const BODY_RADIUS_MIN: u32 = 15;
    pub const BODY_RADIUS_SPAN: u32 = 5;
    /// Body speed is drawn from [MIN, MIN + SPAN)
    pub const BODY_SPEED_MIN: u32 = 75;
    pub const BODY_SPEED_SPAN: u32 = 100;

    /// Simulated seconds between spawns while the spawn key is held
    pub const SPAWN_COOLDOWN: f32 = 0.5;

    /// Disc outline thickness (pixels)
    pub const OUTLINE_THICKNESS: f32 = 4.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Viewport extent the simulation bounces bodies against
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(consts::VIEWPORT_WIDTH, consts::VIEWPORT_HEIGHT)
    }
}
