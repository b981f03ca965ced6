//! Fixed timestep simulation tick
//!
//! Advances every body, then resolves collisions between every pair. Work is
//! O(n^2) in the number of bodies per tick and there is no broad phase.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use super::body::{Body, BodyId};
use super::collision::{bodies_collide, resolve_collision};
use super::state::SimState;
use crate::Viewport;
use crate::consts::SPAWN_COOLDOWN;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Spawn key is held (spawns at most once per cooldown)
    pub spawn_held: bool,
    /// Close/escape requested, checked by the shell between ticks
    pub quit: bool,
}

/// Order in which bodies move and pairs are checked within one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOrder {
    /// Move body i, then check it against every j > i before moving i + 1.
    /// Bodies after i are checked at their previous-tick positions.
    #[default]
    Interleaved,
    /// Move every body first, then check every pair i < j
    Simultaneous,
}

/// Collision counters for one or more ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepStats {
    /// Pairs run through the distance test
    pub pairs_tested: u64,
    /// Pairs found touching or overlapping
    pub contacts: u64,
    /// Contacts that actually exchanged velocity
    pub impulses: u64,
}

impl AddAssign for StepStats {
    fn add_assign(&mut self, other: Self) {
        self.pairs_tested += other.pairs_tested;
        self.contacts += other.contacts;
        self.impulses += other.impulses;
    }
}

/// What happened during one call to `tick`
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub spawned: Option<BodyId>,
    pub stats: StepStats,
}

/// Advance every body by `dt` and resolve pairwise collisions
///
/// Pairs are visited i < j in insertion order. A body hit by several others in
/// one tick sees the velocity left by the earlier pairs.
pub fn advance_and_resolve(
    bodies: &mut [Body],
    viewport: &Viewport,
    dt: f32,
    order: StepOrder,
) -> StepStats {
    let mut stats = StepStats::default();

    match order {
        StepOrder::Interleaved => {
            for i in 0..bodies.len() {
                bodies[i].update(dt, viewport);
                resolve_against_later(bodies, i, &mut stats);
            }
        }
        StepOrder::Simultaneous => {
            for body in bodies.iter_mut() {
                body.update(dt, viewport);
            }
            for i in 0..bodies.len() {
                resolve_against_later(bodies, i, &mut stats);
            }
        }
    }

    stats
}

/// Resolve body `i` against every body after it
fn resolve_against_later(bodies: &mut [Body], i: usize, stats: &mut StepStats) {
    let (head, tail) = bodies.split_at_mut(i + 1);
    let a = &mut head[i];

    for b in tail.iter_mut() {
        stats.pairs_tested += 1;
        if bodies_collide(a, b) {
            stats.contacts += 1;
            if resolve_collision(a, b).applied() {
                stats.impulses += 1;
            }
        }
    }
}

/// Advance the simulation by one fixed timestep
///
/// Simulated time always moves by exactly `dt`, however long the frame took.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> TickOutcome {
    state.time_ticks += 1;

    let mut outcome = TickOutcome::default();

    if input.spawn_held && state.spawn_timer >= SPAWN_COOLDOWN {
        outcome.spawned = Some(state.spawn_body());
        state.spawn_timer = 0.0;
    }
    state.spawn_timer += dt;

    let viewport = state.viewport;
    outcome.stats = advance_and_resolve(&mut state.bodies, &viewport, dt, state.step_order);
    state.totals += outcome.stats;

    if outcome.stats.impulses > 0 {
        log::trace!(
            "Tick {}: {} contacts, {} impulses",
            state.time_ticks,
            outcome.stats.contacts,
            outcome.stats.impulses
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn body(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Body {
        let mut body = Body::with_params(BodyId(id), radius, 100.0);
        body.set_position(pos);
        body.set_velocity(vel);
        body
    }

    #[test]
    fn test_pair_count_is_quadratic() {
        let mut bodies: Vec<Body> = (0..6)
            .map(|i| body(i, Vec2::new(50.0 + 100.0 * i as f32, 50.0), Vec2::ZERO, 15.0))
            .collect();

        let stats = advance_and_resolve(
            &mut bodies,
            &Viewport::default(),
            SIM_DT,
            StepOrder::Interleaved,
        );
        assert_eq!(stats.pairs_tested, 15);
        assert_eq!(stats.contacts, 0);
    }

    #[test]
    fn test_empty_and_single() {
        let mut bodies: Vec<Body> = Vec::new();
        let stats = advance_and_resolve(
            &mut bodies,
            &Viewport::default(),
            SIM_DT,
            StepOrder::Interleaved,
        );
        assert_eq!(stats, StepStats::default());

        let mut bodies = vec![body(1, Vec2::new(100.0, 100.0), Vec2::new(75.0, 0.0), 15.0)];
        let stats = advance_and_resolve(
            &mut bodies,
            &Viewport::default(),
            SIM_DT,
            StepOrder::Interleaved,
        );
        assert_eq!(stats.pairs_tested, 0);
        assert!((bodies[0].pos.x - 101.0).abs() < 0.0001);
    }

    #[test]
    fn test_head_on_pair_swaps() {
        // Already touching: radius 15 each, 30 apart after the step
        let mut bodies = vec![
            body(1, Vec2::new(99.0, 300.0), Vec2::new(75.0, 0.0), 15.0),
            body(2, Vec2::new(131.0, 300.0), Vec2::new(-75.0, 0.0), 15.0),
        ];

        let stats = advance_and_resolve(
            &mut bodies,
            &Viewport::default(),
            SIM_DT,
            StepOrder::Simultaneous,
        );
        assert_eq!(stats.impulses, 1);
        assert_eq!(bodies[0].vel, Vec2::new(-75.0, 0.0));
        assert_eq!(bodies[1].vel, Vec2::new(75.0, 0.0));
    }

    #[test]
    fn test_interleaved_checks_later_bodies_before_they_move() {
        // Body 2 is about to move out of range of body 1. Interleaved checks it
        // at its old position and collides; simultaneous moves it first.
        let make = || {
            vec![
                body(1, Vec2::new(100.0, 300.0), Vec2::ZERO, 15.0),
                body(2, Vec2::new(129.0, 300.0), Vec2::new(150.0, 0.0), 15.0),
            ]
        };

        let mut interleaved = make();
        let stats = advance_and_resolve(
            &mut interleaved,
            &Viewport::default(),
            SIM_DT,
            StepOrder::Interleaved,
        );
        assert_eq!(stats.contacts, 1);
        // Moving apart, so no impulse
        assert_eq!(stats.impulses, 0);

        let mut simultaneous = make();
        let stats = advance_and_resolve(
            &mut simultaneous,
            &Viewport::default(),
            SIM_DT,
            StepOrder::Simultaneous,
        );
        assert_eq!(stats.contacts, 0);
    }

    #[test]
    fn test_later_pairs_see_updated_velocity() {
        // The middle body is hit by the first one before it reaches the third
        let mut bodies = vec![
            body(1, Vec2::new(100.0, 300.0), Vec2::new(60.0, 0.0), 15.0),
            body(2, Vec2::new(128.0, 300.0), Vec2::ZERO, 15.0),
            body(3, Vec2::new(156.0, 300.0), Vec2::ZERO, 15.0),
        ];

        advance_and_resolve(&mut bodies, &Viewport::default(), 0.0, StepOrder::Interleaved);

        // First hands its velocity to the middle, which passes it on
        assert_eq!(bodies[0].vel, Vec2::ZERO);
        assert_eq!(bodies[1].vel, Vec2::ZERO);
        assert_eq!(bodies[2].vel, Vec2::new(60.0, 0.0));
    }

    #[test]
    fn test_tick_counts_and_accumulates() {
        let mut state = SimState::new(12345);
        let input = TickInput::default();
        for _ in 0..10 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.time_ticks, 10);
        assert!(state.bodies.is_empty());
    }

    #[test]
    fn test_spawn_cooldown() {
        let mut state = SimState::new(12345);
        let input = TickInput {
            spawn_held: true,
            ..Default::default()
        };

        // 0.5 s at 75 Hz is 37.5 ticks, so the first spawn lands on tick 39
        for _ in 0..38 {
            assert!(tick(&mut state, &input, SIM_DT).spawned.is_none());
        }
        assert!(tick(&mut state, &input, SIM_DT).spawned.is_some());
        assert_eq!(state.bodies.len(), 1);

        for _ in 0..37 {
            assert!(tick(&mut state, &input, SIM_DT).spawned.is_none());
        }
        assert!(tick(&mut state, &input, SIM_DT).spawned.is_some());
        assert_eq!(state.bodies.len(), 2);
    }

    #[test]
    fn test_no_spawn_without_input() {
        let mut state = SimState::new(12345);
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.bodies.is_empty());

        // Cooldown has long elapsed, so holding spawns right away
        let held = TickInput {
            spawn_held: true,
            ..Default::default()
        };
        assert!(tick(&mut state, &held, SIM_DT).spawned.is_some());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = SimState::new(99999);
        let mut state2 = SimState::new(99999);
        let input = TickInput {
            spawn_held: true,
            ..Default::default()
        };

        for _ in 0..600 {
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }

        assert_eq!(state1.bodies.len(), state2.bodies.len());
        assert_eq!(state1.totals, state2.totals);
        for (a, b) in state1.bodies.iter().zip(&state2.bodies) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
    }
}
