//! Static level data.
//!
//! The playfield layout is fixed at startup: one ground slab, three
//! floating ledges, two hazards and the toggled creature's perch. The star
//! field is deterministic scenery, precomputed once from a trig hash of the
//! star index so the pattern never changes between frames.

use crate::sim::geometry::Rect;

/// Playfield width in units.
pub const PLAYFIELD_W: f32 = 800.0;
/// Playfield height in units.
pub const PLAYFIELD_H: f32 = 500.0;

/// Number of background stars.
pub const STAR_COUNT: usize = 48;

/// Wall-clock seconds between creature visibility flips.
pub const CREATURE_TOGGLE_SECS: f32 = 2.0;

/// Immutable level geometry.
#[derive(Debug, Clone)]
pub struct Level {
    pub platforms: Vec<Rect>,
    pub hazards: Vec<Rect>,
    pub creature: Rect,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            platforms: vec![
                // Ground slab
                Rect::new(0.0, 400.0, 800.0, 100.0),
                // Floating ledges, left to right, rising
                Rect::new(150.0, 320.0, 120.0, 20.0),
                Rect::new(350.0, 250.0, 120.0, 20.0),
                Rect::new(560.0, 180.0, 120.0, 20.0),
            ],
            hazards: vec![
                // On the ground path
                Rect::new(380.0, 370.0, 40.0, 30.0),
                // Guards the approach to the high ledge
                Rect::new(640.0, 360.0, 30.0, 40.0),
            ],
            creature: Rect::new(470.0, 150.0, 60.0, 30.0),
        }
    }
}

/// One background star: position plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Precompute the star field.
///
/// Pseudo-random but fully determined by the star index (sine hashing), so
/// every call yields the identical pattern.
pub fn starfield() -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|i| {
            let i = i as f32;
            let x = hash01(i * 12.9898) * PLAYFIELD_W;
            let y = hash01(i * 78.233) * (PLAYFIELD_H * 0.7);
            let size = 1.0 + hash01(i * 37.719) * 2.0;
            Star { x, y, size }
        })
        .collect()
}

/// Map a seed to [0, 1) via the classic sine-fract hash.
fn hash01(seed: f32) -> f32 {
    let n = (seed.sin() * 43758.547).abs();
    n - n.floor()
}
