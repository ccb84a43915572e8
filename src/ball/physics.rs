//! Ball physics systems: spin-induced curve, ceiling override, playfield clamp

use bevy::prelude::*;

use crate::ball::{Ball, BallSpin};
use crate::body::{Body, Velocity};
use crate::constants::*;
use crate::tuning::PhysicsTweaks;
use crate::world::Pitch;

/// Pre-integration aerodynamics: a lift impulse perpendicular to the current
/// velocity, proportional to spin (Magnus effect), plus geometric spin decay.
/// With y down, backspin (omega < 0) on a rightward ball produces upward lift.
pub fn ball_aerodynamics(
    tweaks: Res<PhysicsTweaks>,
    mut query: Query<(&mut Velocity, &mut BallSpin), With<Ball>>,
) {
    for (mut velocity, mut spin) in &mut query {
        let lift_x = -velocity.0.y * spin.omega * tweaks.magnus_strength;
        let lift_y = velocity.0.x * spin.omega * tweaks.magnus_strength;
        velocity.0.x += lift_x;
        velocity.0.y += lift_y;

        spin.omega *= tweaks.spin_decay;
        spin.angle += spin.omega;
    }
}

/// Post-integration ceiling override, distinct from the generic wall clamp:
/// restitution only, no drag.
pub fn ball_ceiling(
    mut query: Query<(&mut Transform, &mut Velocity, &Body), With<Ball>>,
) {
    for (mut transform, mut velocity, body) in &mut query {
        if transform.translation.y - body.radius < 0.0 {
            transform.translation.y = body.radius;
            velocity.0.y *= -body.restitution;
        }
    }
}

/// Playfield clamp, run once per frame after the collision pass. The goal
/// back nets coincide with the screen edges, so this is also the net
/// boundary. Damping here differs from the generic wall bounce.
pub fn constrain_ball(
    pitch: Res<Pitch>,
    mut query: Query<(&mut Transform, &mut Velocity, &Body), With<Ball>>,
) {
    for (mut transform, mut velocity, body) in &mut query {
        if transform.translation.x - body.radius < 0.0 {
            transform.translation.x = body.radius;
            velocity.0.x *= -CLAMP_WALL_DAMPING;
        }
        if transform.translation.x + body.radius > pitch.width {
            transform.translation.x = pitch.width - body.radius;
            velocity.0.x *= -CLAMP_WALL_DAMPING;
        }

        if transform.translation.y < 0.0 {
            transform.translation.y = body.radius;
            velocity.0.y *= -CLAMP_CEILING_DAMPING;
        }

        let floor_y = pitch.ground_y - body.radius;
        if transform.translation.y > floor_y {
            transform.translation.y = floor_y;
            velocity.0.y *= -body.restitution;
            if velocity.0.y.abs() < MICRO_BOUNCE_CUTOFF {
                velocity.0.y = 0.0;
            }
        }
    }
}
