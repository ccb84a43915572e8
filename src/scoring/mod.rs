//! Goal detection and the score sheet

use bevy::prelude::*;

use crate::ball::Ball;
use crate::body::Body;
use crate::celebration::Celebration;
use crate::events::{EventBus, GameEvent, PlayerId};
use crate::player::Team;
use crate::teams::MatchConfig;
use crate::world::Pitch;

/// Current score sheet for the match
#[derive(Resource, Default, Debug, Clone)]
pub struct Score {
    pub left: u32,
    pub right: u32,
    pub last_scorer: Option<Team>,
}

/// Detect the ball fully inside a goal mouth and award the point.
///
/// A goal requires the whole ball below the crossbar line and fully past
/// the goal line, so a ball clipping the line or bouncing on the crossbar
/// never scores. The celebration starts immediately, which also gates this
/// system off until the kickoff reset, so one crossing scores exactly once.
pub fn check_goal(
    pitch: Res<Pitch>,
    config: Res<MatchConfig>,
    mut score: ResMut<Score>,
    mut bus: ResMut<EventBus>,
    mut celebration: ResMut<Celebration>,
    ball: Query<(&Transform, &Body), With<Ball>>,
) {
    let Ok((transform, body)) = ball.single() else {
        return;
    };
    let x = transform.translation.x;
    let y = transform.translation.y;

    if y <= pitch.crossbar_y() {
        return;
    }

    let scorer = if x + body.radius < pitch.goal_width {
        Some(Team::Right)
    } else if x - body.radius > pitch.width - pitch.goal_width {
        Some(Team::Left)
    } else {
        None
    };

    if let Some(team) = scorer {
        match team {
            Team::Left => score.left += 1,
            Team::Right => score.right += 1,
        }
        score.last_scorer = Some(team);
        bus.emit(GameEvent::Goal {
            player: PlayerId::from(team),
            score_left: score.left,
            score_right: score.right,
        });
        celebration.start(config.celebration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Velocity;
    use crate::constants::*;
    use crate::simulation::HeadlessAppBuilder;

    fn place_ball(app: &mut App, x: f32, y: f32) {
        let mut query = app
            .world_mut()
            .query_filtered::<(&mut Transform, &mut Velocity), With<Ball>>();
        let (mut transform, mut velocity) = query.single_mut(app.world_mut()).unwrap();
        transform.translation.x = x;
        transform.translation.y = y;
        velocity.0 = Vec2::ZERO;
    }

    #[test]
    fn test_ball_inside_left_goal_scores_for_the_right_side() {
        let mut app = HeadlessAppBuilder::new(MatchConfig::default()).build();
        app.update();

        // Fully past the line: x + r = 44 < 60, below the bar: y = 350 > 240
        place_ball(&mut app, 30.0, 350.0);
        app.update();

        let score = app.world().resource::<Score>();
        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0);
        assert_eq!(score.last_scorer, Some(Team::Right));
        assert!(app.world().resource::<Celebration>().active);
    }

    #[test]
    fn test_one_crossing_emits_one_goal_event() {
        let mut app = HeadlessAppBuilder::new(MatchConfig::default()).build();
        app.update();
        app.world_mut().resource_mut::<EventBus>().drain();

        place_ball(&mut app, 770.0, 350.0);
        for _ in 0..30 {
            app.update();
        }

        let mut bus = app.world_mut().resource_mut::<EventBus>();
        let goals = bus
            .drain()
            .iter()
            .filter(|e| matches!(e.event, GameEvent::Goal { .. }))
            .count();
        assert_eq!(goals, 1);
        let score = app.world().resource::<Score>();
        assert_eq!(score.left, 1);
    }

    #[test]
    fn test_ball_clipping_the_line_does_not_score() {
        let mut app = HeadlessAppBuilder::new(MatchConfig::default()).build();
        app.update();

        // Center past the line but the trailing edge still outside
        place_ball(&mut app, GOAL_WIDTH - 5.0, 350.0);
        app.update();

        let score = app.world().resource::<Score>();
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_ball_above_the_crossbar_does_not_score() {
        let mut app = HeadlessAppBuilder::new(MatchConfig::default()).build();
        app.update();

        place_ball(&mut app, 30.0, 200.0);
        app.update();

        let score = app.world().resource::<Score>();
        assert_eq!(score.right, 0);
    }
}
