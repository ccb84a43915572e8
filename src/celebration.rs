//! Goal celebration pause
//!
//! After a goal the physics freezes for a short window while the clock keeps
//! running. When the window expires everything is repositioned for kickoff
//! and play resumes on the next frame.

use bevy::prelude::*;

use crate::ball::{Ball, BallSpin};
use crate::body::{Grounded, Velocity};
use crate::constants::*;
use crate::player::{KickLeg, Player, Team};

/// Celebration window state. Inactive between goals.
#[derive(Resource, Debug, Default)]
pub struct Celebration {
    pub timer: f32,
    pub active: bool,
}

impl Celebration {
    pub fn start(&mut self, duration: f32) {
        self.timer = duration;
        self.active = true;
    }
}

/// Tick the celebration window down and reset for kickoff when it expires
pub fn update_celebration(
    mut celebration: ResMut<Celebration>,
    mut ball: Query<
        (&mut Transform, &mut Velocity, &mut BallSpin),
        (With<Ball>, Without<Player>),
    >,
    mut players: Query<
        (
            &mut Transform,
            &mut Velocity,
            &mut Grounded,
            &mut KickLeg,
            &Team,
        ),
        With<Player>,
    >,
) {
    if !celebration.active {
        return;
    }

    celebration.timer -= SIM_DT;
    if celebration.timer > 0.0 {
        return;
    }
    celebration.active = false;

    for (mut transform, mut velocity, mut spin) in &mut ball {
        transform.translation.x = KICKOFF_BALL.0;
        transform.translation.y = KICKOFF_BALL.1;
        velocity.0 = Vec2::ZERO;
        *spin = BallSpin::default();
    }

    for (mut transform, mut velocity, mut grounded, mut leg, team) in &mut players {
        let (x, y) = match team {
            Team::Left => KICKOFF_LEFT_PLAYER,
            Team::Right => KICKOFF_RIGHT_PLAYER,
        };
        transform.translation.x = x;
        transform.translation.y = y;
        velocity.0 = Vec2::ZERO;
        grounded.0 = false;
        *leg = KickLeg::default();
    }
}
