//! Render-ready state snapshot
//!
//! The simulation never draws. Instead it publishes a serializable snapshot
//! of everything a renderer or spectator needs, refreshed every frame even
//! while physics is frozen for a celebration.

use bevy::prelude::*;
use serde::Serialize;

use crate::ball::{Ball, BallSpin};
use crate::body::Grounded;
use crate::celebration::Celebration;
use crate::clock::MatchClock;
use crate::player::{Facing, Foot, Player, Team};
use crate::scoring::Score;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    /// Accumulated visual rotation in radians
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub facing: f32,
    pub foot_x: f32,
    pub foot_y: f32,
    /// World-frame leg angle, already mirrored
    pub foot_angle: f32,
    pub grounded: bool,
}

/// Full per-frame view of the match
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchSnapshot {
    pub ball: BallSnapshot,
    pub left_player: PlayerSnapshot,
    pub right_player: PlayerSnapshot,
    pub score_left: u32,
    pub score_right: u32,
    /// Whole seconds still to play
    pub time_remaining: u32,
    pub celebrating: bool,
    pub last_scorer: Option<Team>,
    pub ended: bool,
}

/// The most recent snapshot, readable by the embedding host after any frame
#[derive(Resource, Default)]
pub struct LatestSnapshot(pub MatchSnapshot);

/// Rebuild the snapshot at the end of every frame, ungated
pub fn capture_snapshot(
    score: Res<Score>,
    clock: Res<MatchClock>,
    celebration: Res<Celebration>,
    mut latest: ResMut<LatestSnapshot>,
    ball: Query<(&Transform, &BallSpin), With<Ball>>,
    players: Query<(&Transform, &Team, &Facing, &Foot, &Grounded), With<Player>>,
) {
    let mut snapshot = MatchSnapshot {
        score_left: score.left,
        score_right: score.right,
        time_remaining: clock.time_left,
        celebrating: celebration.active,
        last_scorer: score.last_scorer,
        ended: clock.ended,
        ..Default::default()
    };

    if let Ok((transform, spin)) = ball.single() {
        snapshot.ball = BallSnapshot {
            x: transform.translation.x,
            y: transform.translation.y,
            angle: spin.angle,
        };
    }

    for (transform, team, facing, foot, grounded) in &players {
        let view = PlayerSnapshot {
            x: transform.translation.x,
            y: transform.translation.y,
            facing: facing.0,
            foot_x: foot.pos.x,
            foot_y: foot.pos.y,
            foot_angle: foot.angle,
            grounded: grounded.0,
        };
        match team {
            Team::Left => snapshot.left_player = view,
            Team::Right => snapshot.right_player = view,
        }
    }

    latest.0 = snapshot;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::simulation::HeadlessAppBuilder;
    use crate::teams::MatchConfig;

    #[test]
    fn test_snapshot_tracks_kickoff_layout() {
        let mut app = HeadlessAppBuilder::new(MatchConfig::default()).build();
        app.update();

        let snapshot = &app.world().resource::<LatestSnapshot>().0;
        assert_eq!(snapshot.score_left, 0);
        assert_eq!(snapshot.score_right, 0);
        assert!(!snapshot.celebrating);
        assert!((snapshot.ball.x - KICKOFF_BALL.0).abs() < 1.0);
        assert!(snapshot.left_player.x < snapshot.right_player.x);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut app = HeadlessAppBuilder::new(MatchConfig::default()).build();
        app.update();

        let snapshot = &app.world().resource::<LatestSnapshot>().0;
        let json = serde_json::to_string(snapshot).unwrap();
        assert!(json.contains("\"ball\""));
        assert!(json.contains("\"time_remaining\""));
    }
}
