//! Utility functions for headball

use bevy::prelude::*;

/// Move a value toward a target by a maximum delta
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Reflect a velocity about a unit contact normal with the given restitution,
/// i.e. `v -= (1 + restitution) * (v . n) * n`.
pub fn reflect_about_normal(velocity: &mut Vec2, normal: Vec2, restitution: f32) {
    let dot = velocity.dot(normal);
    *velocity -= (1.0 + restitution) * dot * normal;
}

/// Mirror a canonical facing-right angle for a left-facing body.
/// `look` is +1.0 (right) or -1.0 (left).
pub fn mirror_angle(angle: f32, look: f32) -> f32 {
    if look < 0.0 {
        std::f32::consts::PI - angle
    } else {
        angle
    }
}
