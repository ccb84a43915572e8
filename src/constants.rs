//! Tunable constants for headball
//!
//! All gameplay values are defined here for easy tweaking. Positions use
//! screen coordinates: x grows right, y grows down, ground at PITCH_GROUND_Y.
//! Velocities and accelerations are per-frame values at the fixed SIM_DT step.

use std::f32::consts::PI;

// =============================================================================
// SIMULATION STEP
// =============================================================================

/// Canonical fixed timestep. One App::update() advances exactly this much.
pub const SIM_DT: f32 = 1.0 / 60.0;

// =============================================================================
// PITCH GEOMETRY
// =============================================================================

pub const PITCH_WIDTH: f32 = 800.0;
pub const PITCH_HEIGHT: f32 = 450.0;
pub const PITCH_GROUND_Y: f32 = 400.0;

/// Horizontal depth of each goal mouth, measured from the screen edge
pub const GOAL_WIDTH: f32 = 60.0;
/// Crossbar height above the ground line
pub const GOAL_HEIGHT: f32 = 160.0;
pub const POST_RADIUS: f32 = 5.0;
/// Vertical drop of the goal roof toward the pitch, so balls roll off
pub const ROOF_SLOPE: f32 = 5.0;

// =============================================================================
// SHARED BODY PHYSICS
// =============================================================================

/// Downward acceleration per frame (y grows down)
pub const GRAVITY: f32 = 0.5;
/// Horizontal velocity retained when bouncing off a side wall
pub const WALL_BOUNCE: f32 = 0.5;
/// |vy| below this after a ground bounce is snapped to zero (anti-jitter)
pub const MICRO_BOUNCE_CUTOFF: f32 = 1.0;

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: f32 = 14.0;
pub const BALL_MASS: f32 = 0.8;
pub const BALL_RESTITUTION: f32 = 0.5;
pub const BALL_DRAG: f32 = 0.955;
/// Spin magnitude retained each frame
pub const SPIN_DECAY: f32 = 0.99;
/// Strength of the spin-induced curve (Magnus) impulse
pub const MAGNUS_STRENGTH: f32 = 0.002;

// =============================================================================
// PLAYER
// =============================================================================

pub const PLAYER_RADIUS: f32 = 30.0;
pub const PLAYER_MASS: f32 = 1.0;
pub const PLAYER_RESTITUTION: f32 = 0.0;
pub const PLAYER_DRAG: f32 = 0.85;
pub const PLAYER_SPEED: f32 = 4.5;
/// Negative = upward. Tuned for ~110 px apex against a 160 px goal
pub const JUMP_FORCE: f32 = -10.5;
/// Horizontal velocity retained per frame with no movement command
pub const IDLE_DECAY: f32 = 0.8;
/// Restitution between the two players
pub const PLAYER_PLAYER_BOUNCE: f32 = 0.5;

// =============================================================================
// KICK LEG
// =============================================================================

/// Rest angle of the leg in the canonical facing-right frame (down-back)
pub const LEG_REST_ANGLE: f32 = PI / 2.5;
/// Swing target (forward-up)
pub const LEG_KICK_ANGLE: f32 = -PI / 4.0;
/// Angular speed while swinging, rad/s
pub const LEG_SWING_SPEED: f32 = 12.0;
/// Angular speed while returning to rest, rad/s
pub const LEG_RETURN_SPEED: f32 = 5.0;
/// The swing completes once within this of the target
pub const LEG_SWING_TOLERANCE: f32 = 0.2;
/// Below this the leg counts as settled (zero angular velocity)
pub const LEG_SETTLE_TOLERANCE: f32 = 0.01;
/// Refractory period between kicks, seconds
pub const KICK_COOLDOWN: f32 = 0.4;
pub const FOOT_RADIUS: f32 = 12.0;
/// Ankle distance from the body center
pub const FOOT_DIST: f32 = 35.0;

// =============================================================================
// HEAD HITBOX (fractions of the player radius unless noted)
// =============================================================================

/// Restitution of every head-surface reflection, independent of ball tuning
pub const HEAD_BOUNCINESS: f32 = 0.5;
/// Flat-top band sits this far above center
pub const HEAD_FLAT_TOP_Y: f32 = 0.85;
/// Half-width of the flat top; the rest of the circle stays exposed as shoulders
pub const HEAD_FLAT_HALF_WIDTH: f32 = 0.4;
/// Vertical slack below the band that still counts as resting on it (px)
pub const HEAD_FLAT_SLACK: f32 = 8.0;
/// Vertical damping of a flat-top bounce, applied on top of ball restitution
pub const HEAD_FLAT_DAMPING: f32 = 0.5;
/// Fraction of the player's velocity blended into the ball on a flat-top bounce
pub const HEAD_FLAT_BLEND: f32 = 0.1;
/// Nose circle center offset ahead of the face
pub const HEAD_NOSE_OFFSET: f32 = 0.6;
pub const HEAD_NOSE_RADIUS: f32 = 0.7;
/// Impulse amplification for a forehead clip
pub const HEAD_NOSE_POWER: f32 = 1.1;
/// Depth of the back/neck exclusion box behind the face
pub const HEAD_BACK_EXCLUSION: f32 = 0.8;
pub const HEAD_BACK_BOX_TOP: f32 = 0.5;
pub const HEAD_BACK_BOX_BOTTOM: f32 = 0.8;
/// Horizontal shove applied when ejecting a ball trapped behind the head (px/frame)
pub const HEAD_BACK_EJECT_PUSH: f32 = 200.0 * 0.016;

// =============================================================================
// FOOT HITBOX
// =============================================================================

/// Physics radius relative to the visual foot
pub const FOOT_HITBOX_SCALE: f32 = 1.5;
/// Center shift toward the toe, fraction of the physics radius
pub const FOOT_TOE_SHIFT: f32 = 0.4;
/// Upward bias added to upward-pointing contact normals (ramp-shaped sole)
pub const FOOT_RAMP_BIAS: f32 = 0.5;
/// Foot velocity scale in the impulse (driven-mass assumption)
pub const FOOT_DRIVE_FACTOR: f32 = 0.7;
pub const FOOT_BOUNCINESS: f32 = 0.4;
/// Tangential relative velocity to ball angular velocity
pub const FOOT_SPIN_FACTOR: f32 = 0.05;
/// Fraction of the overlap fed back into the leg angle when the kick is blocked
pub const FOOT_BLOCK_FEEDBACK: f32 = 0.8;

// =============================================================================
// STATIC GEOMETRY RESPONSE
// =============================================================================

/// Velocity retained when reflecting off a post
pub const POST_DAMPING: f32 = 0.8;
/// Restitution used by the roof-segment reflection, as (1 + this)
pub const SEGMENT_BOUNCE: f32 = 0.5;
/// Normals steeper than this count as ground contact for players
pub const SEGMENT_GROUND_NORMAL: f32 = -0.5;

// =============================================================================
// PLAYFIELD CLAMP (distinct from the generic wall bounce)
// =============================================================================

pub const CLAMP_WALL_DAMPING: f32 = 0.6;
pub const CLAMP_CEILING_DAMPING: f32 = 0.5;

// =============================================================================
// MATCH FLOW
// =============================================================================

/// Default match length in whole seconds
pub const MATCH_DURATION_SECS: u32 = 90;
/// Physics freeze after a goal, seconds
pub const CELEBRATION_SECS: f32 = 2.0;

// =============================================================================
// KICKOFF POSITIONS
// =============================================================================

pub const KICKOFF_BALL: (f32, f32) = (400.0, 200.0);
pub const KICKOFF_LEFT_PLAYER: (f32, f32) = (150.0, 300.0);
pub const KICKOFF_RIGHT_PLAYER: (f32, f32) = (650.0, 300.0);

// =============================================================================
// AI
// =============================================================================

/// Hold position this far goal-side of the ball
pub const AI_GOAL_SIDE_BUFFER: f32 = 40.0;
/// Deadband around the ideal position before moving
pub const AI_POSITION_DEADBAND: f32 = 10.0;
/// Ball within this horizontal range is jumpable
pub const AI_JUMP_BALL_RANGE: f32 = 50.0;
/// Ball must be at least this far above the head to jump for it
pub const AI_JUMP_BALL_HEIGHT: f32 = 50.0;
/// Chance per frame of an unprompted jump
pub const AI_RANDOM_JUMP_CHANCE: f64 = 0.01;
/// Chance per frame of pausing movement (don't be a robot)
pub const AI_RANDOM_PAUSE_CHANCE: f64 = 0.02;
/// Chance per frame of contesting an aerial near the opponent
pub const AI_CONTEST_JUMP_CHANCE: f64 = 0.02;
pub const AI_CONTEST_OPPONENT_RANGE: f32 = 60.0;
pub const AI_CONTEST_BALL_RANGE: f32 = 40.0;
/// Ball within this distance is kickable
pub const AI_KICK_RADIUS: f32 = 60.0;
/// Ball within this of the defended edge forces a clearance attempt
pub const AI_CLEARANCE_MARGIN: f32 = 100.0;
/// Success roll per eligible frame, so kicks are not robotic
pub const AI_KICK_CHANCE: f64 = 0.1;
