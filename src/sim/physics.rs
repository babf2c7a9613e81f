//! Physics integrator.
//!
//! Advances the player one tick from gravity, input, friction and jump-hold
//! state. All constants are per-tick values; the integrator is total over
//! all numeric inputs and returns a new body by value.

use crate::sim::input::InputSnapshot;
use crate::sim::level::{PLAYFIELD_H, PLAYFIELD_W};

/// Downward acceleration per tick (playfield y grows downward).
pub const GRAVITY: f32 = 0.3;
/// Horizontal acceleration added per tick while a move key is held.
pub const MOVE_ACCEL: f32 = 0.5;
/// Horizontal damping applied every tick, input or not.
pub const FRICTION: f32 = 0.9;
/// Upward impulse on liftoff.
pub const JUMP_IMPULSE: f32 = -10.0;
/// Extra upward impulse per tick while the jump key stays held.
pub const HOLD_BOOST: f32 = -0.5;
/// Ticks of hold-boost available after liftoff.
pub const MAX_HOLD_TICKS: u32 = 10;

/// Player collision box width.
pub const PLAYER_W: f32 = 40.0;
/// Player collision box height.
pub const PLAYER_H: f32 = 40.0;

/// The player's simulated body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub is_jumping: bool,
    pub jump_hold_ticks: u32,
}

impl PlayerBody {
    /// Fixed spawn position.
    pub const SPAWN_X: f32 = 50.0;
    /// Fixed spawn position.
    pub const SPAWN_Y: f32 = 200.0;

    /// Body in its initial spawn state. Also the state restored on a
    /// hazard reset.
    pub const fn spawn() -> Self {
        Self {
            x: Self::SPAWN_X,
            y: Self::SPAWN_Y,
            vx: 0.0,
            vy: 0.0,
            is_jumping: false,
            jump_hold_ticks: 0,
        }
    }
}

/// Run one integration tick.
///
/// Steps, in order: horizontal control, friction, horizontal move, jump
/// state, gravity, vertical move, playfield clamp. Never touches collision;
/// the resolver runs afterwards on the result.
pub fn integrate(body: PlayerBody, input: &InputSnapshot) -> PlayerBody {
    let mut p = body;

    // 1. Horizontal control - accelerate, never set (momentum feel)
    if input.left {
        p.vx -= MOVE_ACCEL;
    }
    if input.right {
        p.vx += MOVE_ACCEL;
    }

    // 2. Friction decays horizontal motion toward zero
    p.vx *= FRICTION;

    // 3. Horizontal move
    p.x += p.vx;

    // 4. Jump: initial impulse on press, smaller boosts while held
    if input.jump {
        if !p.is_jumping {
            p.vy = JUMP_IMPULSE;
            p.is_jumping = true;
            p.jump_hold_ticks = 0;
        } else if p.jump_hold_ticks < MAX_HOLD_TICKS {
            p.vy += HOLD_BOOST;
            p.jump_hold_ticks += 1;
        }
    } else {
        // Releasing forfeits the remaining boost, nothing else
        p.jump_hold_ticks = MAX_HOLD_TICKS;
    }

    // 5. Gravity, unconditionally
    p.vy += GRAVITY;

    // 6. Vertical move
    p.y += p.vy;

    // 7. Keep the body inside the playfield
    p.x = p.x.clamp(0.0, PLAYFIELD_W - PLAYER_W);
    p.y = p.y.clamp(0.0, PLAYFIELD_H - PLAYER_H);

    p
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resting() -> PlayerBody {
        PlayerBody {
            y: 400.0 - PLAYER_H,
            ..PlayerBody::spawn()
        }
    }

    #[test]
    fn test_gravity_applies_every_tick() {
        let p = integrate(resting(), &InputSnapshot::IDLE);
        assert_eq!(p.vy, GRAVITY);

        let p = integrate(p, &InputSnapshot::IDLE);
        assert_eq!(p.vy, GRAVITY * 2.0);
    }

    #[test]
    fn test_horizontal_acceleration_and_friction() {
        let input = InputSnapshot {
            right: true,
            ..InputSnapshot::IDLE
        };
        let p = integrate(resting(), &input);
        // Acceleration is applied before friction
        assert_eq!(p.vx, MOVE_ACCEL * FRICTION);
        assert!(p.x > PlayerBody::SPAWN_X);

        // With the key released, friction decays vx geometrically
        let coasting = integrate(p, &InputSnapshot::IDLE);
        assert_eq!(coasting.vx, p.vx * FRICTION);
    }

    #[test]
    fn test_friction_decays_to_standstill() {
        let mut p = resting();
        p.vx = 8.0;
        for _ in 0..200 {
            p = integrate(p, &InputSnapshot::IDLE);
        }
        assert!(p.vx.abs() < 1e-3);
    }

    #[test]
    fn test_jump_press_from_grounded() {
        let input = InputSnapshot {
            jump: true,
            ..InputSnapshot::IDLE
        };
        let p = integrate(resting(), &input);

        // Initial impulse plus the same-tick gravity
        assert_eq!(p.vy, JUMP_IMPULSE + GRAVITY);
        assert!(p.is_jumping);
        assert_eq!(p.jump_hold_ticks, 0);
    }

    #[test]
    fn test_hold_boost_capped() {
        let held = InputSnapshot {
            jump: true,
            ..InputSnapshot::IDLE
        };
        let mut p = integrate(resting(), &held);

        for _ in 0..(MAX_HOLD_TICKS + 20) {
            p = integrate(p, &held);
            assert!(p.jump_hold_ticks <= MAX_HOLD_TICKS);
        }
        assert_eq!(p.jump_hold_ticks, MAX_HOLD_TICKS);
    }

    #[test]
    fn test_release_forfeits_remaining_boost() {
        let held = InputSnapshot {
            jump: true,
            ..InputSnapshot::IDLE
        };
        let mut p = integrate(resting(), &held);
        p = integrate(p, &held);
        assert_eq!(p.jump_hold_ticks, 1);

        // Release: counter jumps to max, flight state untouched
        p = integrate(p, &InputSnapshot::IDLE);
        assert_eq!(p.jump_hold_ticks, MAX_HOLD_TICKS);
        assert!(p.is_jumping);

        // Re-holding mid-flight grants no further boost
        let vy_before = p.vy;
        p = integrate(p, &held);
        assert_eq!(p.vy, vy_before + GRAVITY);
    }

    #[test]
    fn test_clamp_keeps_body_in_playfield() {
        let mut p = PlayerBody::spawn();
        let slam_left = InputSnapshot {
            left: true,
            jump: true,
            ..InputSnapshot::IDLE
        };
        for _ in 0..1000 {
            p = integrate(p, &slam_left);
            assert!(p.x >= 0.0 && p.x <= PLAYFIELD_W - PLAYER_W);
            assert!(p.y >= 0.0 && p.y <= PLAYFIELD_H - PLAYER_H);
        }
        // Without landings the body ends up pinned to the floor edge
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, PLAYFIELD_H - PLAYER_H);
    }

    #[test]
    fn test_integrator_total_over_weird_inputs() {
        let mut p = PlayerBody {
            x: -1.0e6,
            y: 1.0e6,
            vx: f32::MAX,
            vy: f32::MIN,
            is_jumping: true,
            jump_hold_ticks: MAX_HOLD_TICKS,
        };
        p = integrate(p, &InputSnapshot::IDLE);
        assert!(p.x >= 0.0 && p.x <= PLAYFIELD_W - PLAYER_W);
        assert!(p.y >= 0.0 && p.y <= PLAYFIELD_H - PLAYER_H);
    }
}
