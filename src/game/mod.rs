//! Bevy glue around the simulation core.
//!
//! The sim steps on `FixedUpdate` at 60 Hz; everything visual runs on
//! `Update`. The creature's visibility timer ticks on real (wall-clock)
//! time so its cadence is independent of the sim step - it only flips one
//! bool that the next tick and the renderer read.

use bevy::prelude::*;

pub mod effects;
pub mod render;
pub mod skin;

use crate::sim::input::InputSnapshot;
use crate::sim::level::{Level, CREATURE_TOGGLE_SECS};
use crate::sim::{tick, SimState};
use render::playfield_to_world;
use skin::PlayerSkin;

// ============================================================================
// RESOURCES & EVENTS
// ============================================================================

/// The whole game: simulation state plus the immutable level.
#[derive(Resource, Default)]
pub struct Game {
    pub sim: SimState,
    pub level: Level,
}

/// Latest per-tick input snapshot.
#[derive(Resource, Default)]
pub struct SampledInput(pub InputSnapshot);

/// Wall-clock timer flipping the creature's visibility.
#[derive(Resource)]
pub struct CreatureClock(pub Timer);

impl Default for CreatureClock {
    fn default() -> Self {
        Self(Timer::from_seconds(CREATURE_TOGGLE_SECS, TimerMode::Repeating))
    }
}

/// A hazard caught the player; position is in world space.
#[derive(Event)]
pub struct PlayerResetEvent {
    pub position: Vec2,
}

// ============================================================================
// GAME PLUGIN
// ============================================================================

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<Game>()
            .init_resource::<SampledInput>()
            .init_resource::<CreatureClock>()
            .init_resource::<PlayerSkin>()

            // Events
            .add_event::<PlayerResetEvent>()

            // Scene
            .add_systems(Startup, (render::setup_scene, setup_hint))

            // Simulation (fixed timestep for consistency)
            .add_systems(FixedUpdate, (
                sample_input,
                step_simulation,
            ).chain())

            // Visual updates (variable timestep)
            .add_systems(Update, (
                toggle_creature,
                skin::handle_dropped_files,
                skin::poll_pending_skin,
                render::sync_frame,
                effects::spawn_reset_particles,
                effects::update_reset_particles,
            ));
    }
}

// ============================================================================
// SIMULATION DRIVE
// ============================================================================

/// Sample the keyboard into the per-tick input snapshot.
///
/// Key events merely set and clear flags; the sim reads the latest state
/// once per tick, so only "latest wins" matters.
fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut sampled: ResMut<SampledInput>) {
    sampled.0 = InputSnapshot {
        left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
        jump: keyboard.pressed(KeyCode::Space)
            || keyboard.pressed(KeyCode::KeyW)
            || keyboard.pressed(KeyCode::ArrowUp),
    };
}

/// Run one sim tick and surface hazard resets as events.
fn step_simulation(
    mut game: ResMut<Game>,
    sampled: Res<SampledInput>,
    mut reset_events: EventWriter<PlayerResetEvent>,
) {
    let Game { sim, level } = &mut *game;
    let result = tick(sim, &sampled.0, level);

    if let Some((x, y)) = result.reset_from {
        use crate::sim::geometry::Rect;
        use crate::sim::physics::{PLAYER_H, PLAYER_W};

        let world = playfield_to_world(&Rect::new(x, y, PLAYER_W, PLAYER_H), 0.0);
        reset_events.send(PlayerResetEvent {
            position: world.translation.truncate(),
        });
        info!("Player caught by a hazard, back to spawn");
    }
}

/// Flip the creature on its wall-clock interval.
fn toggle_creature(time: Res<Time<Real>>, mut clock: ResMut<CreatureClock>, mut game: ResMut<Game>) {
    clock.0.tick(time.delta());
    if clock.0.just_finished() {
        game.sim.creature_visible = !game.sim.creature_visible;
    }
}

// ============================================================================
// HINT OVERLAY
// ============================================================================

fn setup_hint(mut commands: Commands) {
    commands.spawn((
        Text::new("A/D move  -  Space jump (hold for height)  -  drop an image to change your character"),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(Color::srgba(0.8, 0.8, 0.9, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(6.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}
