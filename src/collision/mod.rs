//! Collision resolution
//!
//! Every resolver is a pure function over plain copied-out state so the
//! contact math is testable without an ECS world. `resolve_collisions` is
//! the system adapter: it copies body state out, runs the resolvers in a
//! fixed order, and writes the results back.
//!
//! Resolution order each frame:
//! 1. player vs player (mass-weighted circles)
//! 2. left player's head, then foot, against the ball
//! 3. right player's head, then foot, against the ball
//! 4. ball against both goal posts
//! 5. goal roof segments: ball first, then each player
//!
//! Resolvers are positional (push out of overlap, then adjust velocity);
//! there is no impulse accumulation or iteration. A body can therefore be
//! moved back into an earlier-resolved contact within the same frame, which
//! the next frame cleans up. That is the intended arcade feel.

use bevy::prelude::*;

use crate::ball::{Ball, BallSpin};
use crate::body::{Body, Grounded, Velocity};
use crate::constants::*;
use crate::helpers::reflect_about_normal;
use crate::player::{Foot, KickLeg, Player, Team};
use crate::world::{GoalPost, Pitch, RoofSegment};

/// Copied-out state of any round body taking part in a contact
#[derive(Debug, Clone, Copy)]
pub struct CircleBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
}

/// Copied-out ball state. `omega` is spin in radians per frame.
#[derive(Debug, Clone, Copy)]
pub struct BallBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub restitution: f32,
    pub omega: f32,
}

/// The head hitbox is fully described by the body circle plus the fixed
/// look direction everything is mirrored by.
#[derive(Debug, Clone, Copy)]
pub struct HeadProfile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub look: f32,
}

/// Copied-out foot state for the kick resolver. `ankle` is the world-frame
/// ankle position derived by the leg state machine this frame.
#[derive(Debug, Clone, Copy)]
pub struct FootProfile {
    pub ankle: Vec2,
    pub vel: Vec2,
    pub look: f32,
    pub swinging: bool,
}

/// Which part of the composite head hitbox resolved the contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadRegion {
    BackBox,
    FlatTop,
    Nose,
    Base,
}

/// Mass-weighted circle vs circle resolution.
///
/// Push-out is split by inverse mass ratio. When masses match, a symmetric
/// impulse fires only while the bodies are closing; when they differ, the
/// lighter body reflects off the heavier one and inherits a fraction of its
/// velocity. The transfer drops to a residual when the heavier body is
/// falling onto the lighter one, so a player landing on the ball does not
/// slam it through the floor.
pub fn collide_circles(c1: &mut CircleBody, c2: &mut CircleBody, bounciness: f32) {
    let delta = c2.pos - c1.pos;
    let dist = delta.length();
    let min_dist = c1.radius + c2.radius;
    if dist >= min_dist || dist == 0.0 {
        return;
    }

    let normal = delta / dist;
    let overlap = min_dist - dist;
    let total_mass = c1.mass + c2.mass;
    c1.pos -= normal * overlap * (c2.mass / total_mass);
    c2.pos += normal * overlap * (c1.mass / total_mass);

    if c2.mass < c1.mass {
        // Lighter body reflects off the heavier one
        let dot = c2.vel.dot(normal);
        c2.vel -= (1.0 + bounciness) * dot * normal;

        let mut transfer = 0.5;
        if normal.y > 0.5 && c1.vel.y > 0.0 {
            // Heavier body falling onto the lighter one
            transfer = 0.1;
        }
        c2.vel += c1.vel * transfer;
    } else {
        let relative = c2.vel - c1.vel;
        let dot = relative.dot(normal);
        if dot < 0.0 {
            let impulse = (1.0 + bounciness) * dot * 0.5;
            c1.vel += impulse * normal;
            c2.vel -= impulse * normal;
        }
    }
}

/// Resolve the ball against the composite head hitbox. First region hit
/// wins; the regions are checked back box, flat top, nose, base circle.
pub fn resolve_head(head: &HeadProfile, ball: &mut BallBody) -> Option<HeadRegion> {
    let r = head.radius;
    let look = head.look;

    // Back box: the neck area behind the face traps tunneling balls, so
    // eject them horizontally away from the face instead of reflecting
    let box_top = head.pos.y - r * HEAD_BACK_BOX_TOP;
    let box_bottom = head.pos.y + r * HEAD_BACK_BOX_BOTTOM;
    let back_depth = r * HEAD_BACK_EXCLUSION;
    let behind = if look > 0.0 {
        ball.pos.x < head.pos.x && ball.pos.x > head.pos.x - back_depth
    } else {
        ball.pos.x > head.pos.x && ball.pos.x < head.pos.x + back_depth
    };
    if behind && ball.pos.y > box_top && ball.pos.y < box_bottom {
        let eject = -look;
        ball.pos.x = head.pos.x + (back_depth + ball.radius) * eject;
        ball.vel.x = head.vel.x + HEAD_BACK_EJECT_PUSH * eject;
        return Some(HeadRegion::BackBox);
    }

    // Flat top: a narrow band for balancing the ball. Only catches a
    // descending ball; damped vertically and blended toward the carrier's
    // horizontal velocity. A rising carrier launches the ball with it.
    let flat_y = head.pos.y - r * HEAD_FLAT_TOP_Y;
    let half_width = r * HEAD_FLAT_HALF_WIDTH;
    if ball.pos.y + ball.radius > flat_y
        && ball.pos.y < flat_y + ball.radius + HEAD_FLAT_SLACK
        && (ball.pos.x - head.pos.x).abs() < half_width
        && ball.vel.y > 0.0
    {
        ball.pos.y = flat_y - ball.radius;
        ball.vel.y *= -HEAD_FLAT_DAMPING * ball.restitution;
        ball.vel.x = ball.vel.x * (1.0 - HEAD_FLAT_BLEND) + head.vel.x * HEAD_FLAT_BLEND;
        if head.vel.y < 0.0 {
            ball.vel.y += head.vel.y;
        }
        return Some(HeadRegion::FlatTop);
    }

    // Nose: a smaller circle ahead of the face with amplified response,
    // centered at head height
    let nose_center = Vec2::new(head.pos.x + HEAD_NOSE_OFFSET * r * look, head.pos.y);
    let delta = ball.pos - nose_center;
    let dist = delta.length();
    let min_dist = r * HEAD_NOSE_RADIUS + ball.radius;
    if dist < min_dist && dist > 0.0 {
        let normal = delta / dist;
        ball.pos += normal * (min_dist - dist);
        let relative = ball.vel - head.vel;
        let dot = relative.dot(normal);
        if dot < 0.0 {
            ball.vel -= (1.0 + HEAD_BOUNCINESS) * dot * normal * HEAD_NOSE_POWER;
        }
        return Some(HeadRegion::Nose);
    }

    // Base circle: the shoulders left exposed by the narrow flat top give
    // the corner deflections for free
    let delta = ball.pos - head.pos;
    let dist = delta.length();
    let min_dist = r + ball.radius;
    if dist < min_dist && dist > 0.0 {
        let normal = delta / dist;
        ball.pos += normal * (min_dist - dist);
        let relative = ball.vel - head.vel;
        let dot = relative.dot(normal);
        if dot < 0.0 {
            ball.vel -= (1.0 + HEAD_BOUNCINESS) * dot * normal;
        }
        return Some(HeadRegion::Base);
    }

    None
}

/// Resolve the ball against the foot hitbox.
///
/// The hitbox is a circle enlarged past the visual foot and shifted toward
/// the toe. Upward-pointing contact normals get an extra upward bias so the
/// ramp-shaped sole lifts the ball. The foot is the driver in the impulse,
/// so the contact fires on closing velocity (positive dot in the
/// foot-minus-ball convention) and the ball takes the full impulse.
///
/// Returns the leg-angle correction to apply in the canonical frame when
/// the ball blocked the swing, positive when the kick was fighting through
/// the ball and negative when the return leg was.
pub fn resolve_foot(foot: &FootProfile, ball: &mut BallBody) -> Option<f32> {
    let r = FOOT_RADIUS * FOOT_HITBOX_SCALE;
    let center = Vec2::new(foot.ankle.x + r * FOOT_TOE_SHIFT * foot.look, foot.ankle.y);
    let delta = ball.pos - center;
    let dist = delta.length();
    let min_dist = r + ball.radius;
    if dist >= min_dist || dist == 0.0 {
        return None;
    }

    let overlap = min_dist - dist;
    let mut normal = delta / dist;
    ball.pos += normal * overlap;

    if normal.y < 0.0 {
        normal.y -= FOOT_RAMP_BIAS;
        normal = normal.normalize();
    }

    let relative = foot.vel * FOOT_DRIVE_FACTOR - ball.vel;
    let dot = relative.dot(normal);
    if dot > 0.0 {
        let impulse = (1.0 + FOOT_BOUNCINESS) * dot;
        ball.vel += impulse * normal;

        // Tangential slip spins the ball
        let tangent = Vec2::new(-normal.y, normal.x);
        ball.omega += relative.dot(tangent) * FOOT_SPIN_FACTOR;
    }

    // Overlap converts to an angle at the leg length
    let correction = overlap / FOOT_DIST * FOOT_BLOCK_FEEDBACK;
    Some(if foot.swinging { correction } else { -correction })
}

/// Reflect the ball off a goal post with uniform damping
pub fn resolve_post(ball: &mut BallBody, post: &GoalPost) {
    let delta = ball.pos - Vec2::new(post.x, post.y);
    let dist = delta.length();
    let min_dist = ball.radius + post.radius;
    if dist >= min_dist || dist == 0.0 {
        return;
    }

    let normal = delta / dist;
    ball.pos += normal * (min_dist - dist);
    let dot = ball.vel.dot(normal);
    ball.vel = (ball.vel - 2.0 * dot * normal) * POST_DAMPING;
}

/// Resolve any round body against a goal roof segment. A contact with a
/// steep upward normal counts as ground for players standing on the roof.
pub fn resolve_segment(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    segment: &RoofSegment,
    mut grounded: Option<&mut bool>,
) {
    // Broad horizontal reject before the projection
    let min_x = segment.a.x.min(segment.b.x) - radius;
    let max_x = segment.a.x.max(segment.b.x) + radius;
    if pos.x < min_x || pos.x > max_x {
        return;
    }

    let line = segment.b - segment.a;
    let t = ((*pos - segment.a).dot(line) / line.length_squared()).clamp(0.0, 1.0);
    let closest = segment.a + t * line;
    let delta = *pos - closest;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius {
        return;
    }
    let dist = dist_sq.sqrt();
    if dist == 0.0 {
        return;
    }

    let normal = delta / dist;
    *pos += normal * (radius - dist);

    if vel.dot(normal) < 0.0 {
        reflect_about_normal(vel, normal, SEGMENT_BOUNCE);
        if normal.y < SEGMENT_GROUND_NORMAL {
            if let Some(flag) = grounded.as_deref_mut() {
                *flag = true;
            }
        }
    }
}

struct PlayerScratch {
    team: Team,
    circle: CircleBody,
    foot: FootProfile,
    grounded: bool,
    leg_delta: f32,
}

/// Run the full contact pipeline for one frame
pub fn resolve_collisions(
    pitch: Res<Pitch>,
    mut ball_query: Query<
        (&mut Transform, &mut Velocity, &Body, &mut BallSpin),
        (With<Ball>, Without<Player>),
    >,
    mut players: Query<
        (
            &mut Transform,
            &mut Velocity,
            &Body,
            &Team,
            &Foot,
            &mut KickLeg,
            &mut Grounded,
        ),
        With<Player>,
    >,
) {
    let Ok((mut ball_transform, mut ball_velocity, ball_body, mut spin)) = ball_query.single_mut()
    else {
        return;
    };
    let mut ball = BallBody {
        pos: ball_transform.translation.truncate(),
        vel: ball_velocity.0,
        radius: ball_body.radius,
        restitution: ball_body.restitution,
        omega: spin.omega,
    };

    let mut scratch: Vec<PlayerScratch> = players
        .iter()
        .map(|(transform, velocity, body, team, foot, leg, _)| PlayerScratch {
            team: *team,
            circle: CircleBody {
                pos: transform.translation.truncate(),
                vel: velocity.0,
                radius: body.radius,
                mass: body.mass,
            },
            foot: FootProfile {
                ankle: foot.pos,
                vel: foot.vel,
                look: team.look(),
                swinging: leg.swinging,
            },
            grounded: false,
            leg_delta: 0.0,
        })
        .collect();
    scratch.sort_by_key(|entry| entry.team == Team::Right);

    if let [left, right] = scratch.as_mut_slice() {
        collide_circles(&mut left.circle, &mut right.circle, PLAYER_PLAYER_BOUNCE);
    }

    for entry in &mut scratch {
        let head = HeadProfile {
            pos: entry.circle.pos,
            vel: entry.circle.vel,
            radius: entry.circle.radius,
            look: entry.team.look(),
        };
        resolve_head(&head, &mut ball);
        if let Some(delta) = resolve_foot(&entry.foot, &mut ball) {
            entry.leg_delta = delta;
        }
    }

    resolve_post(&mut ball, &pitch.left_post());
    resolve_post(&mut ball, &pitch.right_post());

    for segment in pitch.roof_segments() {
        resolve_segment(&mut ball.pos, &mut ball.vel, ball.radius, &segment, None);
    }
    for entry in &mut scratch {
        for segment in pitch.roof_segments() {
            resolve_segment(
                &mut entry.circle.pos,
                &mut entry.circle.vel,
                entry.circle.radius,
                &segment,
                Some(&mut entry.grounded),
            );
        }
    }

    ball_transform.translation.x = ball.pos.x;
    ball_transform.translation.y = ball.pos.y;
    ball_velocity.0 = ball.vel;
    spin.omega = ball.omega;

    for (mut transform, mut velocity, _, team, _, mut leg, mut grounded) in &mut players {
        let Some(entry) = scratch.iter().find(|entry| entry.team == *team) else {
            continue;
        };
        transform.translation.x = entry.circle.pos.x;
        transform.translation.y = entry.circle.pos.y;
        velocity.0 = entry.circle.vel;
        leg.angle += entry.leg_delta;
        if entry.grounded {
            grounded.0 = true;
        }
    }
}
