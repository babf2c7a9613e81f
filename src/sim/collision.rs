//! Collision resolution.
//!
//! Runs after integration each tick. Order matters: platforms first, then
//! the creature (a platform only while visible), then hazards - a hazard
//! overlap is failure and overrides any landing snap from the same tick.

use crate::sim::geometry::{overlaps, Rect};
use crate::sim::level::Level;
use crate::sim::physics::{PlayerBody, PLAYER_H, PLAYER_W};

/// Slack on the landing-from-above check, in playfield units.
///
/// The heuristic compares the pre-tick bottom edge against the platform
/// top; a fast fall can tunnel a thin platform in one tick. Known and kept.
pub const LANDING_TOLERANCE: f32 = 5.0;

/// The player's collision box at its current position.
#[inline]
pub fn body_rect(p: &PlayerBody) -> Rect {
    Rect::new(p.x, p.y, PLAYER_W, PLAYER_H)
}

/// Resolve the integrated body against the level.
///
/// `prev` is the body before this tick's integration; its bottom edge
/// drives the landing-from-above heuristic. Returns the resolved body and
/// whether a hazard reset fired.
pub fn resolve(prev: &PlayerBody, integrated: PlayerBody, level: &Level, creature_visible: bool) -> (PlayerBody, bool) {
    let mut p = integrated;
    let prev_bottom = prev.y + PLAYER_H;

    // Platforms: land on top when falling onto them. Overlaps are checked
    // independently in order; the layout keeps platforms disjoint so the
    // last snap winning is fine.
    for platform in &level.platforms {
        try_land(&mut p, platform, prev_bottom);
    }

    // The creature is a platform only while visible; invisible means no
    // collision check at all.
    if creature_visible {
        try_land(&mut p, &level.creature, prev_bottom);
    }

    // Hazards last: a hit throws away everything above and respawns.
    for hazard in &level.hazards {
        if overlaps(&body_rect(&p), hazard) {
            return (PlayerBody::spawn(), true);
        }
    }

    (p, false)
}

/// Snap the body onto `surface` if it overlaps and came from above.
fn try_land(p: &mut PlayerBody, surface: &Rect, prev_bottom: f32) {
    if overlaps(&body_rect(p), surface) && prev_bottom <= surface.top() + LANDING_TOLERANCE {
        p.y = surface.top() - PLAYER_H;
        p.vy = 0.0;
        p.is_jumping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::physics::MAX_HOLD_TICKS;

    fn level() -> Level {
        Level::default()
    }

    fn falling_onto_ground() -> (PlayerBody, PlayerBody) {
        // Bottom edge one unit above the ground, falling fast enough to
        // penetrate this tick
        let prev = PlayerBody {
            x: 100.0,
            y: 400.0 - PLAYER_H - 1.0,
            vy: 4.0,
            ..PlayerBody::spawn()
        };
        let integrated = PlayerBody {
            y: prev.y + prev.vy,
            is_jumping: true,
            ..prev
        };
        (prev, integrated)
    }

    #[test]
    fn test_landing_snaps_and_grounds() {
        let (prev, integrated) = falling_onto_ground();
        let (resolved, reset) = resolve(&prev, integrated, &level(), false);

        assert!(!reset);
        assert_eq!(resolved.y, 400.0 - PLAYER_H);
        assert_eq!(resolved.vy, 0.0);
        assert!(!resolved.is_jumping);
    }

    #[test]
    fn test_rest_on_ground_round_trip() {
        // At rest on the ground, a gravity-only tick sinks the body 0.3
        // units into the slab; resolution puts it straight back.
        let prev = PlayerBody {
            x: 100.0,
            y: 400.0 - PLAYER_H,
            ..PlayerBody::spawn()
        };
        let integrated = PlayerBody {
            y: prev.y + 0.3,
            vy: 0.3,
            ..prev
        };
        let (resolved, reset) = resolve(&prev, integrated, &level(), false);

        assert!(!reset);
        assert_eq!(resolved.y, 400.0 - PLAYER_H);
        assert_eq!(resolved.vy, 0.0);
    }

    #[test]
    fn test_side_approach_does_not_snap() {
        // Overlapping a ledge from the side: pre-tick bottom already below
        // the ledge top, so the landing heuristic must not fire.
        let ledge = level().platforms[1]; // (150, 320, 120, 20)
        let prev = PlayerBody {
            x: 100.0,
            y: ledge.top() - 10.0, // bottom = top + 30, past tolerance
            vx: 6.0,
            ..PlayerBody::spawn()
        };
        let integrated = PlayerBody {
            x: ledge.x - PLAYER_W + 5.0,
            ..prev
        };
        let (resolved, _) = resolve(&prev, integrated, &level(), false);
        assert_eq!(resolved.y, integrated.y);
        assert_eq!(resolved.vy, integrated.vy);
    }

    #[test]
    fn test_hazard_resets_to_exact_spawn_state() {
        let hazard = level().hazards[0];
        let prev = PlayerBody {
            x: hazard.x - 2.0,
            y: hazard.y,
            vx: 7.0,
            vy: -3.0,
            is_jumping: true,
            jump_hold_ticks: MAX_HOLD_TICKS,
        };
        let integrated = PlayerBody {
            x: hazard.x + 1.0,
            ..prev
        };
        let (resolved, reset) = resolve(&prev, integrated, &level(), false);

        assert!(reset);
        assert_eq!(resolved, PlayerBody::spawn());
        assert_eq!(resolved.x, 50.0);
        assert_eq!(resolved.y, 200.0);
    }

    #[test]
    fn test_hazard_overrides_platform_snap() {
        // Land on the ground right inside the ground hazard's footprint:
        // the snap happens first but the reset must win.
        let hazard = level().hazards[0]; // (380, 370, 40, 30), sits on ground
        let prev = PlayerBody {
            x: hazard.x,
            y: hazard.bottom() - PLAYER_H - 1.0,
            vy: 4.0,
            ..PlayerBody::spawn()
        };
        let integrated = PlayerBody {
            y: prev.y + prev.vy,
            ..prev
        };
        let (resolved, reset) = resolve(&prev, integrated, &level(), false);

        assert!(reset);
        assert_eq!(resolved, PlayerBody::spawn());
    }

    #[test]
    fn test_visible_creature_is_a_platform() {
        let creature = level().creature; // (470, 150, 60, 30)
        let prev = PlayerBody {
            x: creature.x,
            y: creature.top() - PLAYER_H - 1.0,
            vy: 4.0,
            is_jumping: true,
            ..PlayerBody::spawn()
        };
        let integrated = PlayerBody {
            y: prev.y + prev.vy,
            ..prev
        };
        let (resolved, reset) = resolve(&prev, integrated, &level(), true);

        assert!(!reset);
        assert_eq!(resolved.y, creature.top() - PLAYER_H);
        assert_eq!(resolved.vy, 0.0);
        assert!(!resolved.is_jumping);
    }

    #[test]
    fn test_invisible_creature_is_passed_through() {
        let creature = level().creature;
        let prev = PlayerBody {
            x: creature.x,
            y: creature.top() - PLAYER_H - 1.0,
            vy: 4.0,
            ..PlayerBody::spawn()
        };
        let integrated = PlayerBody {
            y: prev.y + prev.vy,
            ..prev
        };
        let (resolved, reset) = resolve(&prev, integrated, &level(), false);

        assert!(!reset);
        assert_eq!(resolved, integrated);
    }
}
