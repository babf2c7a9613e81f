//! Simulation core.
//!
//! Engine-agnostic and deterministic: plain `f32` playfield math, no Bevy
//! types, every tick a pure function of (state, input). The Bevy layer in
//! `crate::game` owns scheduling and rendering; this module owns the rules.
//!
//! Playfield coordinates: origin top-left, y grows downward, 800x500 units.

pub mod collision;
pub mod geometry;
pub mod input;
pub mod level;
pub mod physics;

use collision::resolve;
use input::InputSnapshot;
use level::Level;
use physics::{integrate, PlayerBody};

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// A hazard reset fired this tick.
    pub reset: bool,
    /// Where the body was when the reset fired (playfield coords), for
    /// the particle burst.
    pub reset_from: Option<(f32, f32)>,
}

/// Everything the simulation mutates.
#[derive(Debug, Clone)]
pub struct SimState {
    pub player: PlayerBody,
    /// Flipped on a wall-clock interval by the scheduler, outside the tick.
    pub creature_visible: bool,
    pub tick: u64,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            player: PlayerBody::spawn(),
            creature_visible: true,
            tick: 0,
        }
    }
}

/// Run one simulation tick: integrate, then resolve.
pub fn tick(state: &mut SimState, input: &InputSnapshot, level: &Level) -> TickResult {
    let mut result = TickResult::default();

    state.tick += 1;

    // 1. Physics integration from the latest input snapshot
    let prev = state.player;
    let integrated = integrate(prev, input);

    // 2. Collision resolution against the static level and the creature
    let (resolved, reset) = resolve(&prev, integrated, level, state.creature_visible);
    if reset {
        result.reset = true;
        result.reset_from = Some((integrated.x, integrated.y));
    }

    state.player = resolved;
    result
}
