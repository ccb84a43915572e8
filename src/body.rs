//! Shared kinematic body state and the generic integrator
//!
//! Players and the ball carry the same `Body` + `Velocity` pair and go through
//! the same per-frame step: gravity, position integration, ground bounce with
//! drag, side-wall bounce. Type-specific behavior (Magnus lift, locomotion,
//! ceiling override) runs before or after this in the frame chain.

use bevy::prelude::*;

use crate::constants::*;
use crate::tuning::PhysicsTweaks;
use crate::world::Pitch;

/// Physical parameters of a simulated body. Fixed after spawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct Body {
    pub radius: f32,
    pub mass: f32,
    /// Velocity retained after a bounce
    pub restitution: f32,
    /// Horizontal velocity retained per ground contact frame
    pub drag: f32,
}

/// 2D velocity vector - shared by player and ball
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct Velocity(pub Vec2);

/// Whether a body is resting on the ground. Players only.
#[derive(Component, Debug)]
pub struct Grounded(pub bool);

/// Generic per-frame integration for every body: gravity, move, ground
/// bounce, wall bounce. Velocities are per-frame quantities, so no dt scaling.
pub fn integrate_bodies(
    tweaks: Res<PhysicsTweaks>,
    pitch: Res<Pitch>,
    mut query: Query<(&mut Transform, &mut Velocity, &Body, Option<&mut Grounded>)>,
) {
    for (mut transform, mut velocity, body, grounded) in &mut query {
        velocity.0.y += tweaks.gravity;
        transform.translation.x += velocity.0.x;
        transform.translation.y += velocity.0.y;

        // Ground bounce with anti-jitter snap
        if transform.translation.y + body.radius > pitch.ground_y {
            transform.translation.y = pitch.ground_y - body.radius;
            velocity.0.y *= -body.restitution;
            velocity.0.x *= body.drag;
            if velocity.0.y.abs() < MICRO_BOUNCE_CUTOFF {
                velocity.0.y = 0.0;
            }
        }

        // Side walls
        if transform.translation.x - body.radius < 0.0 {
            transform.translation.x = body.radius;
            velocity.0.x *= -tweaks.wall_bounce;
        }
        if transform.translation.x + body.radius > pitch.width {
            transform.translation.x = pitch.width - body.radius;
            velocity.0.x *= -tweaks.wall_bounce;
        }

        // Grounded check uses a 1 px tolerance so a resting body stays grounded
        if let Some(mut grounded) = grounded {
            grounded.0 = transform.translation.y + body.radius >= pitch.ground_y - 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::HeadlessAppBuilder;
    use crate::teams::MatchConfig;

    fn test_app() -> App {
        HeadlessAppBuilder::new(MatchConfig::default()).build()
    }

    fn body_at(app: &mut App, x: f32, y: f32, vel: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_xyz(x, y, 0.0),
                Velocity(vel),
                Body {
                    radius: 10.0,
                    mass: 1.0,
                    restitution: 0.6,
                    drag: 0.9,
                },
                Grounded(false),
            ))
            .id()
    }

    #[test]
    fn test_resting_body_does_not_jitter() {
        let mut app = test_app();
        let e = body_at(&mut app, 400.0, PITCH_GROUND_Y - 10.0, Vec2::ZERO);

        for _ in 0..120 {
            app.update();
        }

        let transform = app.world().get::<Transform>(e).unwrap();
        let velocity = app.world().get::<Velocity>(e).unwrap();
        assert_eq!(velocity.0.y, 0.0, "vertical velocity must stay snapped");
        assert!((transform.translation.y - (PITCH_GROUND_Y - 10.0)).abs() < 1e-3);
        assert!(app.world().get::<Grounded>(e).unwrap().0);
    }

    #[test]
    fn test_falling_body_bounces_with_restitution() {
        let mut app = test_app();
        let e = body_at(&mut app, 400.0, PITCH_GROUND_Y - 15.0, Vec2::new(0.0, 8.0));

        app.update();

        let velocity = app.world().get::<Velocity>(e).unwrap();
        // 8.0 + gravity 0.5 carries it into the ground; bounce retains 0.6
        assert!((velocity.0.y - (-8.5 * 0.6)).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_clamps_and_reflects() {
        let mut app = test_app();
        let e = body_at(&mut app, 12.0, 200.0, Vec2::new(-6.0, 0.0));

        app.update();

        let transform = app.world().get::<Transform>(e).unwrap();
        let velocity = app.world().get::<Velocity>(e).unwrap();
        assert_eq!(transform.translation.x, 10.0);
        assert!((velocity.0.x - 3.0).abs() < 1e-5);
    }
}
