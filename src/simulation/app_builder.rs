//! Headless App Builder
//!
//! Reusable builder for assembling a complete match as a headless Bevy app.
//! Used by the runner, the test suite, and any embedding host.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;

use crate::ai::{InputState, MatchRng, ai_decision};
use crate::ball::{Ball, BallSpin, ball_aerodynamics, ball_ceiling, constrain_ball};
use crate::body::{Body, Grounded, Velocity, integrate_bodies};
use crate::celebration::{Celebration, update_celebration};
use crate::clock::{MatchClock, celebrating, match_live, match_running, update_clock};
use crate::constants::*;
use crate::events::{EventBus, GameEvent, update_event_bus_time};
use crate::input::{PlayerInput, copy_human_input};
use crate::player::{Controller, Facing, Foot, KickLeg, Player, Team, apply_input, update_kick_leg};
use crate::scoring::{Score, check_goal};
use crate::snapshot::{LatestSnapshot, capture_snapshot};
use crate::teams::{MatchConfig, OnMatchEnd};
use crate::tuning::{self, GameplayTuning, PhysicsTweaks};
use crate::world::Pitch;

/// Whether AI drives the non-human players (tests usually leave it off)
#[derive(Resource, Debug, Clone, Copy)]
pub struct AiEnabled(pub bool);

/// Builder for creating headless match apps
pub struct HeadlessAppBuilder {
    config: MatchConfig,
    fps: f32,
    minimal_threads: bool,
    ai_enabled: bool,
    tuning: Option<GameplayTuning>,
}

impl HeadlessAppBuilder {
    /// Create a new builder with default settings
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            fps: 60.0,
            minimal_threads: false,
            ai_enabled: false,
            tuning: None,
        }
    }

    /// Set the pacing FPS for run() loops (default: 60). Manual update()
    /// calls are unaffected; one call is always one fixed step.
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Enable minimal thread mode (task pools = 1)
    ///
    /// Use this when running many apps in parallel to avoid hitting OS
    /// thread limits.
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Drive the non-human players with the AI policy
    pub fn with_ai(mut self) -> Self {
        self.ai_enabled = true;
        self
    }

    /// Override gameplay tuning instead of reading the config file
    pub fn with_tuning(mut self, tuning: GameplayTuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    /// Build the app with minimal plugins, all match resources, and the
    /// full per-frame system chain. The match spawns on the first update.
    pub fn build(self) -> App {
        let mut app = App::new();

        if self.minimal_threads {
            app.add_plugins(
                MinimalPlugins
                    .set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f32(
                        1.0 / self.fps,
                    )))
                    .set(TaskPoolPlugin {
                        task_pool_options: TaskPoolOptions::with_num_threads(1),
                    }),
            );
        } else {
            app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
                Duration::from_secs_f32(1.0 / self.fps),
            )));
        }
        app.add_plugins(bevy::transform::TransformPlugin);

        app.init_resource::<Pitch>();
        app.init_resource::<Score>();
        app.init_resource::<Celebration>();
        app.init_resource::<PlayerInput>();
        app.init_resource::<LatestSnapshot>();
        app.init_resource::<OnMatchEnd>();
        app.init_resource::<PhysicsTweaks>();
        match self.tuning {
            Some(tuning) => {
                tuning.apply_to(&mut app.world_mut().resource_mut::<PhysicsTweaks>());
            }
            None => {
                if let Err(err) = tuning::apply_global_tuning(
                    &mut app.world_mut().resource_mut::<PhysicsTweaks>(),
                ) {
                    warn!("Gameplay tuning not applied: {err}");
                }
            }
        }

        app.insert_resource(MatchClock::new(self.config.duration_secs));
        app.insert_resource(MatchRng::from_seed(self.config.seed));
        app.insert_resource(EventBus::new());
        app.insert_resource(AiEnabled(self.ai_enabled));
        app.insert_resource(self.config);

        app.add_systems(Startup, spawn_match);

        app.add_systems(
            Update,
            (
                copy_human_input,
                ai_decision.run_if(match_live),
                apply_input.run_if(match_live),
                ball_aerodynamics.run_if(match_live),
                integrate_bodies.run_if(match_live),
                ball_ceiling.run_if(match_live),
                update_kick_leg.run_if(match_live),
                crate::collision::resolve_collisions.run_if(match_live),
                constrain_ball.run_if(match_live),
                check_goal.run_if(match_live),
                update_celebration.run_if(celebrating),
                update_clock.run_if(match_running),
                update_event_bus_time,
                capture_snapshot,
            )
                .chain(),
        );

        app
    }
}

/// Spawn the ball and both players at their kickoff spots and emit
/// MatchStart. Controller assignment: the configured human side gets Human,
/// the rest get Ai when enabled, otherwise None (neutral input).
fn spawn_match(
    mut commands: Commands,
    config: Res<MatchConfig>,
    ai: Res<AiEnabled>,
    tweaks: Res<PhysicsTweaks>,
    mut bus: ResMut<EventBus>,
) {
    // Body parameters come from the tweaks resource so the tuning file
    // reaches the spawned bodies, not just the per-frame systems
    commands.spawn((
        Transform::from_xyz(KICKOFF_BALL.0, KICKOFF_BALL.1, 0.0),
        Ball,
        Velocity::default(),
        Body {
            radius: BALL_RADIUS,
            mass: BALL_MASS,
            restitution: tweaks.ball_restitution,
            drag: tweaks.ball_drag,
        },
        BallSpin::default(),
    ));

    for (team, spawn) in [
        (Team::Left, KICKOFF_LEFT_PLAYER),
        (Team::Right, KICKOFF_RIGHT_PLAYER),
    ] {
        let controller = if config.human_side == Some(team) {
            Controller::Human
        } else if ai.0 {
            Controller::Ai
        } else {
            Controller::None
        };

        commands.spawn((
            Transform::from_xyz(spawn.0, spawn.1, 0.0),
            Player,
            team,
            controller,
            Facing(team.look()),
            Velocity::default(),
            Body {
                radius: PLAYER_RADIUS,
                mass: PLAYER_MASS,
                restitution: PLAYER_RESTITUTION,
                drag: tweaks.player_drag,
            },
            Grounded(false),
            KickLeg::default(),
            Foot::default(),
            InputState::default(),
        ));
    }

    bus.emit(GameEvent::MatchStart {
        session_id: uuid::Uuid::new_v4().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        home: config.home.name.clone(),
        away: config.away.name.clone(),
        duration_secs: config.duration_secs,
        seed: config.seed,
    });
}
