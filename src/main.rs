//! Skyhopper - a tiny 2D platformer
//!
//! Hop between platforms under floaty physics, dodge the hazards, and use
//! the blinking creature as a stepping stone while it lasts. Drop an image
//! onto the window to play as your own character.

mod game;
mod sim;

use bevy::prelude::*;
use bevy::window::WindowResolution;

use game::GamePlugin;
use sim::level::{PLAYFIELD_H, PLAYFIELD_W};

fn main() {
    App::new()
        // Bevy defaults with a fixed-size window matching the playfield
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skyhopper".into(),
                resolution: WindowResolution::new(PLAYFIELD_W, PLAYFIELD_H),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        // Simulation cadence: one tick per 60th of a second
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .add_plugins(GamePlugin)
        .add_systems(Startup, setup_camera)
        .run();
}

/// 2D camera over the playfield, clearing to the background color.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.05, 0.05, 0.12)),
            ..default()
        },
    ));

    info!("Skyhopper initialized");
}
