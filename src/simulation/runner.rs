//! Headless match runner

use bevy::prelude::*;
use serde::Serialize;

use crate::clock::MatchClock;
use crate::scoring::Score;
use crate::teams::MatchConfig;

use super::HeadlessAppBuilder;

/// Final outcome of a completed match
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub score_left: u32,
    pub score_right: u32,
    /// Simulated frames until the final whistle
    pub frames: u64,
    /// Simulated seconds until the final whistle
    pub duration: f32,
    pub seed: u64,
}

/// Run a full AI vs AI match to completion and return the result.
///
/// The loop drives the app directly, so a 90 second match finishes as fast
/// as the host CPU allows. A frame cap slightly past the configured
/// duration guards against a stalled clock.
pub fn run_match(config: MatchConfig) -> MatchResult {
    let seed = config.seed;
    let max_frames =
        ((config.duration_secs as f32 + config.celebration_secs + 5.0) * 60.0) as u64;
    let mut app = HeadlessAppBuilder::new(config).with_ai().build();

    let mut frames = 0_u64;
    while frames < max_frames {
        app.update();
        frames += 1;
        if app.world().resource::<MatchClock>().ended {
            break;
        }
    }

    let score = app.world().resource::<Score>();
    let clock = app.world().resource::<MatchClock>();
    MatchResult {
        score_left: score.left,
        score_right: score.right,
        frames,
        duration: clock.elapsed,
        seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::ball::{Ball, BallSpin};
    use crate::body::Velocity;
    use crate::celebration::Celebration;
    use crate::constants::*;
    use crate::player::{Player, Team};
    use crate::snapshot::LatestSnapshot;
    use crate::teams::OnMatchEnd;

    fn short_match(duration_secs: u32) -> MatchConfig {
        MatchConfig {
            duration_secs,
            ..Default::default()
        }
    }

    #[test]
    fn test_untouched_match_ends_goalless_with_callback() {
        let mut app = HeadlessAppBuilder::new(short_match(2)).build();

        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::new(AtomicU32::new(u32::MAX));
        {
            let calls = Arc::clone(&calls);
            let seen = Arc::clone(&seen);
            app.world_mut().resource_mut::<OnMatchEnd>().0 =
                Some(Box::new(move |left, right| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    seen.store(left + right, Ordering::SeqCst);
                }));
        }

        // 2 seconds plus slack; no input and no AI means nobody scores
        for _ in 0..180 {
            app.update();
        }

        assert!(app.world().resource::<MatchClock>().ended);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "callback fires exactly once");
        assert_eq!(seen.load(Ordering::SeqCst), 0);
        let score = app.world().resource::<Score>();
        assert_eq!((score.left, score.right), (0, 0));
    }

    #[test]
    fn test_scripted_goal_pauses_then_resets_for_kickoff() {
        let mut app = HeadlessAppBuilder::new(short_match(30)).build();
        app.update();

        // Drive the ball into the right goal mouth
        {
            let mut query = app
                .world_mut()
                .query_filtered::<(&mut Transform, &mut Velocity), With<Ball>>();
            let (mut transform, mut velocity) = query.single_mut(app.world_mut()).unwrap();
            transform.translation.x = 770.0;
            transform.translation.y = 350.0;
            velocity.0 = Vec2::ZERO;
        }
        app.update();

        let score = app.world().resource::<Score>();
        assert_eq!(score.left, 1);
        assert!(app.world().resource::<Celebration>().active);
        let clock_before = app.world().resource::<MatchClock>().elapsed;

        // Physics frozen: the ball stays in the net during the celebration
        for _ in 0..30 {
            app.update();
        }
        {
            let snapshot = &app.world().resource::<LatestSnapshot>().0;
            assert!(snapshot.celebrating);
            assert!(snapshot.ball.x > 740.0, "ball must stay put while frozen");
        }
        // The clock keeps running through the pause
        let clock_after = app.world().resource::<MatchClock>().elapsed;
        assert!(clock_after > clock_before);

        // Past the 2 second window everything is back at kickoff
        for _ in 0..100 {
            app.update();
        }
        let snapshot = &app.world().resource::<LatestSnapshot>().0;
        assert!(!snapshot.celebrating);
        assert!((snapshot.ball.x - KICKOFF_BALL.0).abs() < 1.0);
        assert!((snapshot.left_player.x - KICKOFF_LEFT_PLAYER.0).abs() < 1.0);
        assert!((snapshot.right_player.x - KICKOFF_RIGHT_PLAYER.0).abs() < 1.0);
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let config = MatchConfig {
            duration_secs: 10,
            seed: 42,
            ..Default::default()
        };

        let snapshot_after = |config: MatchConfig| {
            let mut app = HeadlessAppBuilder::new(config).with_ai().build();
            for _ in 0..300 {
                app.update();
            }
            serde_json::to_string(&app.world().resource::<LatestSnapshot>().0).unwrap()
        };

        let first = snapshot_after(config.clone());
        let second = snapshot_after(config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_match_reports_frames_and_duration() {
        let result = run_match(short_match(2));
        // 2 seconds of fixed steps. A goal in the final second defers the
        // whistle through the celebration, so allow one full window on top.
        assert!(result.frames >= 120);
        let max_frames = ((2.0 + CELEBRATION_SECS) * 60.0) as u64 + 60;
        assert!(result.frames <= max_frames);
        assert!(result.duration >= 2.0);
    }

    #[test]
    fn test_spin_and_players_reset_after_a_goal() {
        let mut app = HeadlessAppBuilder::new(short_match(30)).build();
        app.update();

        {
            let mut query = app
                .world_mut()
                .query_filtered::<(&mut Transform, &mut Velocity, &mut BallSpin), With<Ball>>();
            let (mut transform, mut velocity, mut spin) =
                query.single_mut(app.world_mut()).unwrap();
            transform.translation.x = 30.0;
            transform.translation.y = 350.0;
            velocity.0 = Vec2::new(-4.0, 1.0);
            spin.omega = 5.0;
        }

        // Goal, celebration, reset
        for _ in 0..200 {
            app.update();
        }

        let mut ball_query = app
            .world_mut()
            .query_filtered::<(&Velocity, &BallSpin), With<Ball>>();
        let (velocity, spin) = ball_query.single(app.world()).unwrap();
        assert_eq!(spin.omega, 0.0);
        // Fresh from kickoff: at most a few frames of free fall
        assert!(velocity.0.x.abs() < 1e-3);

        let mut player_query = app
            .world_mut()
            .query_filtered::<(&Transform, &Team), With<Player>>();
        for (transform, team) in player_query.iter(app.world()) {
            let expected = match team {
                Team::Left => KICKOFF_LEFT_PLAYER.0,
                Team::Right => KICKOFF_RIGHT_PLAYER.0,
            };
            assert!((transform.translation.x - expected).abs() < 1.0);
        }
    }
}
