//! Ball components

use bevy::prelude::*;

/// Marker for the ball entity
#[derive(Component)]
pub struct Ball;

/// Spin state. `omega` is radians per frame; `angle` is the accumulated
/// visual rotation a renderer would apply.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct BallSpin {
    pub angle: f32,
    pub omega: f32,
}
