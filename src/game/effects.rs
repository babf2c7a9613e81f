//! Visual effects for hazard resets.

use bevy::prelude::*;

use super::PlayerResetEvent;

/// Particle from a reset burst.
#[derive(Component)]
pub struct ResetParticle {
    pub velocity: Vec2,
    pub lifetime: f32,
}

/// Spawn a radial burst where the player was when a hazard caught them.
pub fn spawn_reset_particles(
    mut commands: Commands,
    mut reset_events: EventReader<PlayerResetEvent>,
) {
    for event in reset_events.read() {
        let particle_count = 8;
        for i in 0..particle_count {
            let angle = (i as f32 / particle_count as f32) * std::f32::consts::TAU;
            let speed = 90.0 + rand::random::<f32>() * 60.0;
            let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;

            commands.spawn((
                ResetParticle {
                    velocity,
                    lifetime: 0.4 + rand::random::<f32>() * 0.2,
                },
                Sprite {
                    color: Color::srgb(1.0, 0.5, 0.2),
                    custom_size: Some(Vec2::splat(5.0 + rand::random::<f32>() * 4.0)),
                    ..default()
                },
                Transform::from_translation(event.position.extend(12.0)),
            ));
        }
    }
}

/// Drift, fade, shrink and finally despawn reset particles.
pub fn update_reset_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ResetParticle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut transform, mut sprite) in query.iter_mut() {
        transform.translation.x += particle.velocity.x * dt;
        transform.translation.y += particle.velocity.y * dt;

        particle.velocity *= 0.94;
        particle.lifetime -= dt;

        if particle.lifetime <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        let progress = 1.0 - (particle.lifetime / 0.6).min(1.0);
        sprite.color = sprite.color.with_alpha(1.0 - progress);

        if let Some(size) = &mut sprite.custom_size {
            *size *= 0.97;
        }
    }
}
