//! Headball - the real-time core of a two-player arcade soccer match
//!
//! Fixed-step kinematic simulation: two head-and-foot players, a spinning
//! ball, composite collision hitboxes, goals, celebrations, and a match
//! clock. The crate never draws; it publishes a per-frame snapshot and an
//! event stream for whatever host embeds it.

// Core modules
pub mod celebration;
pub mod clock;
pub mod constants;
pub mod events;
pub mod helpers;
pub mod simulation;
pub mod snapshot;
pub mod teams;
pub mod tuning;

// Gameplay modules
pub mod ai;
pub mod ball;
pub mod body;
pub mod collision;
pub mod input;
pub mod player;
pub mod scoring;
pub mod world;

// Re-export commonly used types for convenience
pub use ai::{AiView, InputState, MatchRng, ai_decision, decide};
pub use ball::{Ball, BallSpin, ball_aerodynamics, ball_ceiling, constrain_ball};
pub use body::{Body, Grounded, Velocity, integrate_bodies};
pub use celebration::{Celebration, update_celebration};
pub use clock::{MatchClock, celebrating, match_live, match_running, update_clock};
pub use collision::{
    BallBody, CircleBody, FootProfile, HeadProfile, HeadRegion, collide_circles, resolve_collisions,
    resolve_foot, resolve_head, resolve_post, resolve_segment,
};
pub use constants::*;
pub use events::{BusEvent, EventBus, GameEvent, PlayerId, update_event_bus_time};
pub use helpers::*;
pub use input::{PlayerInput, copy_human_input};
pub use player::{
    Controller, Facing, Foot, KickLeg, Player, Team, apply_input, update_kick_leg,
};
pub use scoring::{Score, check_goal};
pub use simulation::{AiEnabled, HeadlessAppBuilder, MatchResult, run_match};
pub use snapshot::{
    BallSnapshot, LatestSnapshot, MatchSnapshot, PlayerSnapshot, capture_snapshot,
};
pub use teams::{MatchConfig, OnMatchEnd, TeamInfo};
pub use tuning::{GAMEPLAY_TUNING_FILE, GameplayTuning, PhysicsTweaks};
pub use world::{GoalPost, Pitch, RoofSegment};
