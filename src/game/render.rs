//! Frame composition and drawing.
//!
//! `compose_frame` is a pure function of resolved simulation state: it
//! returns the dynamic draw list (creature, trail ghosts, player) and calls
//! with identical state return identical ops. Static scenery (background,
//! star field, platforms, hazards) never changes, so it is spawned once at
//! startup from the same level data.
//!
//! The simulation speaks playfield coordinates (origin top-left, y down);
//! only this module converts to Bevy world space (origin center, y up).

use bevy::prelude::*;

use crate::game::skin::PlayerSkin;
use crate::game::Game;
use crate::sim::geometry::Rect;
use crate::sim::level::{starfield, Level, PLAYFIELD_H, PLAYFIELD_W};
use crate::sim::physics::{PlayerBody, PLAYER_H, PLAYER_W};
use crate::sim::SimState;

// ============================================================================
// PALETTE & LAYERS
// ============================================================================

const BACKGROUND_COLOR: Color = Color::srgb(0.05, 0.05, 0.12);
const STAR_COLOR: Color = Color::srgb(0.9, 0.9, 1.0);
const PLATFORM_COLOR: Color = Color::srgb(0.36, 0.55, 0.36);
const PLATFORM_DETAIL_COLOR: Color = Color::srgb(0.24, 0.40, 0.26);
const HAZARD_COLOR: [f32; 4] = [0.90, 0.25, 0.20, 1.0];
const CREATURE_COLOR: [f32; 4] = [0.75, 0.45, 0.95, 1.0];
const PLAYER_COLOR: [f32; 3] = [1.0, 0.62, 0.25];

const Z_BACKGROUND: f32 = -100.0;
const Z_STARS: f32 = -90.0;
const Z_PLATFORM: f32 = -50.0;
const Z_PLATFORM_DETAIL: f32 = -49.0;
const Z_HAZARD: f32 = -40.0;
const Z_CREATURE: f32 = 5.0;
const Z_PLAYER: f32 = 10.0;

/// Ghost count for the motion trail.
const TRAIL_GHOSTS: u32 = 3;
/// Horizontal offset per ghost, in ticks worth of velocity.
const TRAIL_SPACING: f32 = 1.5;
/// Ghost opacities, nearest first.
const TRAIL_ALPHAS: [f32; 3] = [0.30, 0.20, 0.10];

/// Spacing of the darker stripes along a platform top.
const DETAIL_STRIDE: f32 = 24.0;
const DETAIL_W: f32 = 8.0;
const DETAIL_H: f32 = 6.0;

// ============================================================================
// FRAME COMPOSITION (pure)
// ============================================================================

/// One dynamic draw call: a rectangle in playfield coordinates.
///
/// `use_skin` marks player/ghost ops; the sync system swaps in the uploaded
/// character image (tinted to the op's alpha) when one is active.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub rect: Rect,
    pub color: [f32; 4],
    pub z: f32,
    pub use_skin: bool,
}

/// Build the dynamic draw list for one frame, in paint order: creature
/// (only while visible), trail ghosts far-to-near, then the player.
pub fn compose_frame(state: &SimState, level: &Level) -> Vec<DrawOp> {
    let mut ops = Vec::with_capacity(TRAIL_GHOSTS as usize + 2);
    let p = &state.player;

    if state.creature_visible {
        ops.push(DrawOp {
            rect: level.creature,
            color: CREATURE_COLOR,
            z: Z_CREATURE,
            use_skin: false,
        });
    }

    // Trail: ghosts offset opposite the motion vector, fading with distance
    for i in (1..=TRAIL_GHOSTS).rev() {
        let [r, g, b] = PLAYER_COLOR;
        ops.push(DrawOp {
            rect: Rect::new(p.x - p.vx * TRAIL_SPACING * i as f32, p.y, PLAYER_W, PLAYER_H),
            color: [r, g, b, TRAIL_ALPHAS[(i - 1) as usize]],
            z: Z_PLAYER - i as f32,
            use_skin: true,
        });
    }

    let [r, g, b] = PLAYER_COLOR;
    ops.push(DrawOp {
        rect: body_rect(p),
        color: [r, g, b, 1.0],
        z: Z_PLAYER,
        use_skin: true,
    });

    ops
}

fn body_rect(p: &PlayerBody) -> Rect {
    Rect::new(p.x, p.y, PLAYER_W, PLAYER_H)
}

/// Convert a playfield rect to a world-space transform at `z`.
pub fn playfield_to_world(rect: &Rect, z: f32) -> Transform {
    Transform::from_translation(Vec3::new(
        rect.x + rect.w / 2.0 - PLAYFIELD_W / 2.0,
        PLAYFIELD_H / 2.0 - (rect.y + rect.h / 2.0),
        z,
    ))
}

// ============================================================================
// STATIC SCENERY
// ============================================================================

/// Marker for sprites respawned every frame from the draw list.
#[derive(Component)]
pub struct FrameSprite;

/// Spawn the never-changing scenery: background fill, precomputed star
/// field, platforms with their stripe detail, hazards.
pub fn setup_scene(mut commands: Commands, game: Res<Game>) {
    // Background fill
    commands.spawn((
        Sprite {
            color: BACKGROUND_COLOR,
            custom_size: Some(Vec2::new(PLAYFIELD_W, PLAYFIELD_H)),
            ..default()
        },
        playfield_to_world(&Rect::new(0.0, 0.0, PLAYFIELD_W, PLAYFIELD_H), Z_BACKGROUND),
    ));

    // Star field - deterministic, computed once
    for star in starfield() {
        commands.spawn((
            Sprite {
                color: STAR_COLOR,
                custom_size: Some(Vec2::splat(star.size)),
                ..default()
            },
            playfield_to_world(&Rect::new(star.x, star.y, star.size, star.size), Z_STARS),
        ));
    }

    for platform in &game.level.platforms {
        commands.spawn((
            Sprite {
                color: PLATFORM_COLOR,
                custom_size: Some(Vec2::new(platform.w, platform.h)),
                ..default()
            },
            playfield_to_world(platform, Z_PLATFORM),
        ));

        // Stripe pattern along the top edge
        let mut sx = platform.x + DETAIL_STRIDE / 2.0;
        while sx + DETAIL_W <= platform.x + platform.w {
            commands.spawn((
                Sprite {
                    color: PLATFORM_DETAIL_COLOR,
                    custom_size: Some(Vec2::new(DETAIL_W, DETAIL_H)),
                    ..default()
                },
                playfield_to_world(&Rect::new(sx, platform.y, DETAIL_W, DETAIL_H), Z_PLATFORM_DETAIL),
            ));
            sx += DETAIL_STRIDE;
        }
    }

    for hazard in &game.level.hazards {
        let [r, g, b, a] = HAZARD_COLOR;
        commands.spawn((
            Sprite {
                color: Color::srgba(r, g, b, a),
                custom_size: Some(Vec2::new(hazard.w, hazard.h)),
                ..default()
            },
            playfield_to_world(hazard, Z_HAZARD),
        ));
    }

    info!("Scenery spawned: {} platforms, {} hazards, {} stars",
        game.level.platforms.len(), game.level.hazards.len(), starfield().len());
}

// ============================================================================
// PER-FRAME SYNC
// ============================================================================

/// Replace last frame's dynamic sprites with this frame's draw list.
pub fn sync_frame(
    mut commands: Commands,
    game: Res<Game>,
    skin: Res<PlayerSkin>,
    stale: Query<Entity, With<FrameSprite>>,
) {
    for entity in stale.iter() {
        commands.entity(entity).despawn();
    }

    for op in compose_frame(&game.sim, &game.level) {
        let size = Vec2::new(op.rect.w, op.rect.h);
        let sprite = match (&skin.active, op.use_skin) {
            (Some(image), true) => Sprite {
                image: image.clone(),
                // White tint keeps the image's own colors; alpha carries
                // the ghost fade
                color: Color::srgba(1.0, 1.0, 1.0, op.color[3]),
                custom_size: Some(size),
                ..default()
            },
            _ => Sprite {
                color: Color::srgba(op.color[0], op.color[1], op.color[2], op.color[3]),
                custom_size: Some(size),
                ..default()
            },
        };

        commands.spawn((FrameSprite, sprite, playfield_to_world(&op.rect, op.z)));
    }
}
