//! Static pitch geometry
//!
//! Screen coordinates: x grows right, y grows down. The goal back nets
//! coincide with the screen edges, so the playfield clamp doubles as the
//! net boundary and no separate net geometry exists.

use bevy::prelude::*;

use crate::constants::*;

/// A goal post modeled as a static circle at the crossbar tip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalPost {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// A sloped roof segment over a goal mouth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofSegment {
    pub a: Vec2,
    pub b: Vec2,
}

/// Immutable per-match pitch description
#[derive(Resource, Debug, Clone)]
pub struct Pitch {
    pub width: f32,
    pub height: f32,
    pub ground_y: f32,
    pub goal_width: f32,
    pub goal_height: f32,
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            width: PITCH_WIDTH,
            height: PITCH_HEIGHT,
            ground_y: PITCH_GROUND_Y,
            goal_width: GOAL_WIDTH,
            goal_height: GOAL_HEIGHT,
        }
    }
}

impl Pitch {
    /// Height of the crossbar line (goal mouth top)
    pub fn crossbar_y(&self) -> f32 {
        self.ground_y - self.goal_height
    }

    pub fn left_post(&self) -> GoalPost {
        GoalPost {
            x: self.goal_width,
            y: self.crossbar_y(),
            radius: POST_RADIUS,
        }
    }

    pub fn right_post(&self) -> GoalPost {
        GoalPost {
            x: self.width - self.goal_width,
            y: self.crossbar_y(),
            radius: POST_RADIUS,
        }
    }

    /// Roof segments slope down toward the pitch so a ball rolls off
    /// instead of resting on top of the goal.
    pub fn roof_segments(&self) -> [RoofSegment; 2] {
        let cross_y = self.crossbar_y();
        [
            RoofSegment {
                a: Vec2::new(0.0, cross_y),
                b: Vec2::new(self.goal_width, cross_y + ROOF_SLOPE),
            },
            RoofSegment {
                a: Vec2::new(self.width - self.goal_width, cross_y + ROOF_SLOPE),
                b: Vec2::new(self.width, cross_y),
            },
        ]
    }
}
