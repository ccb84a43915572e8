//! Player physics systems

use bevy::prelude::*;

use crate::ai::InputState;
use crate::body::{Grounded, Velocity};
use crate::constants::*;
use crate::events::{EventBus, GameEvent, PlayerId};
use crate::helpers::{mirror_angle, move_toward};
use crate::player::components::*;
use crate::tuning::PhysicsTweaks;

/// Apply the per-frame command set to locomotion and the kick trigger.
/// All players read from their InputState, human and AI alike.
pub fn apply_input(
    tweaks: Res<PhysicsTweaks>,
    mut event_bus: ResMut<EventBus>,
    mut players: Query<
        (
            &mut Velocity,
            &mut Facing,
            &mut Grounded,
            &mut KickLeg,
            &InputState,
            &Team,
        ),
        With<Player>,
    >,
) {
    for (mut velocity, mut facing, mut grounded, mut leg, input, team) in &mut players {
        // Left wins a contradictory left+right pair
        if input.move_left {
            velocity.0.x = -tweaks.player_speed;
            facing.0 = -1.0;
        } else if input.move_right {
            velocity.0.x = tweaks.player_speed;
            facing.0 = 1.0;
        } else {
            velocity.0.x *= tweaks.idle_decay;
        }

        if input.jump && grounded.0 {
            velocity.0.y = tweaks.jump_force;
            grounded.0 = false;
            event_bus.emit(GameEvent::Jump {
                player: PlayerId::from(*team),
            });
        }

        // Kick is refractory: the cooldown starts on acceptance, whether or
        // not the swing completes
        if input.kick && leg.cooldown <= 0.0 {
            leg.swinging = true;
            leg.cooldown = tweaks.kick_cooldown;
            event_bus.emit(GameEvent::Kick {
                player: PlayerId::from(*team),
            });
        }
    }
}

/// Advance the kick-leg state machine and derive the world-frame foot.
///
/// The leg angle lives in the canonical facing-right frame; the mirrored
/// angle (pi - angle for a left-facing body) is computed once here and is
/// the only form the resolver and renderer ever see.
pub fn update_kick_leg(
    tweaks: Res<PhysicsTweaks>,
    mut players: Query<(&Transform, &Velocity, &Team, &mut KickLeg, &mut Foot), With<Player>>,
) {
    for (transform, velocity, team, mut leg, mut foot) in &mut players {
        if leg.cooldown > 0.0 {
            leg.cooldown -= SIM_DT;
        }

        let mut target = LEG_REST_ANGLE;
        let mut speed = tweaks.leg_return_speed;
        if leg.swinging {
            target = LEG_KICK_ANGLE;
            speed = tweaks.leg_swing_speed;
            // The swing completes on its own; there is no held-kick state
            if (leg.angle - target).abs() < LEG_SWING_TOLERANCE {
                leg.swinging = false;
            }
        }

        leg.angle = move_toward(leg.angle, target, speed * SIM_DT);

        let look = team.look();

        // Angular velocity of the world-frame angle. Swinging moves the
        // canonical angle down (negative), returning moves it up; mirroring
        // (pi - angle) negates the derivative for a left-looking body.
        let canonical_omega = if leg.swinging { -speed } else { speed };
        let mut omega = canonical_omega * look;
        if (leg.angle - target).abs() < LEG_SETTLE_TOLERANCE {
            omega = 0.0;
        }

        let world_angle = mirror_angle(leg.angle, look);
        foot.angle = world_angle;
        foot.pos = transform.translation.truncate()
            + FOOT_DIST * Vec2::new(world_angle.cos(), world_angle.sin());

        let tangential =
            Vec2::new(-world_angle.sin(), world_angle.cos()) * omega * FOOT_DIST * SIM_DT;
        foot.vel = velocity.0 + tangential;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PlayerInput;
    use crate::simulation::HeadlessAppBuilder;
    use crate::teams::MatchConfig;

    fn app_with_human_left() -> (App, Entity) {
        let config = MatchConfig {
            human_side: Some(Team::Left),
            ..Default::default()
        };
        let mut app = HeadlessAppBuilder::new(config).build();
        app.update();
        let mut query = app.world_mut().query_filtered::<(Entity, &Team), With<Player>>();
        let player = query
            .iter(app.world())
            .find(|(_, team)| **team == Team::Left)
            .map(|(entity, _)| entity)
            .unwrap();
        (app, player)
    }

    fn settle_on_ground(app: &mut App) {
        for _ in 0..60 {
            app.update();
        }
    }

    #[test]
    fn test_move_commands_set_velocity_and_facing() {
        let (mut app, player) = app_with_human_left();
        settle_on_ground(&mut app);

        // Ground drag applies after the command, so the settled speed is
        // the commanded speed times the ground drag
        let ground_speed = PLAYER_SPEED * PLAYER_DRAG;

        app.world_mut().resource_mut::<PlayerInput>().move_left = true;
        app.update();
        assert!((app.world().get::<Velocity>(player).unwrap().0.x - (-ground_speed)).abs() < 1e-4);
        assert_eq!(app.world().get::<Facing>(player).unwrap().0, -1.0);

        let mut input = app.world_mut().resource_mut::<PlayerInput>();
        input.move_left = false;
        input.move_right = true;
        app.update();
        assert!((app.world().get::<Velocity>(player).unwrap().0.x - ground_speed).abs() < 1e-4);
        assert_eq!(app.world().get::<Facing>(player).unwrap().0, 1.0);
    }

    #[test]
    fn test_idle_decays_horizontal_velocity() {
        let (mut app, player) = app_with_human_left();
        settle_on_ground(&mut app);

        app.world_mut().resource_mut::<PlayerInput>().move_right = true;
        app.update();
        app.world_mut().resource_mut::<PlayerInput>().move_right = false;
        app.update();

        let vx = app.world().get::<Velocity>(player).unwrap().0.x;
        // One idle frame: speed * 0.8, then ground drag 0.85 on contact
        assert!(vx < PLAYER_SPEED * IDLE_DECAY + 1e-3);
        assert!(vx > 0.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let (mut app, player) = app_with_human_left();
        settle_on_ground(&mut app);
        assert!(app.world().get::<Grounded>(player).unwrap().0);

        app.world_mut().resource_mut::<PlayerInput>().jump = true;
        app.update();
        let vy = app.world().get::<Velocity>(player).unwrap().0.y;
        assert!(vy < 0.0, "grounded jump must launch upward");

        // Still holding jump mid-air must not re-launch
        app.update();
        let vy2 = app.world().get::<Velocity>(player).unwrap().0.y;
        assert!(vy2 > vy, "gravity must win while airborne, no double jump");
    }

    #[test]
    fn test_kick_cooldown_is_refractory() {
        let (mut app, player) = app_with_human_left();
        settle_on_ground(&mut app);

        app.world_mut().resource_mut::<PlayerInput>().kick = true;
        app.update();
        let leg = app.world().get::<KickLeg>(player).unwrap();
        assert!(leg.swinging);
        let cooldown_after_first = leg.cooldown;
        assert!(cooldown_after_first > 0.0);

        // A held kick command must not restart the cooldown
        app.update();
        let leg = app.world().get::<KickLeg>(player).unwrap();
        assert!(leg.cooldown < cooldown_after_first);
    }

    #[test]
    fn test_swing_completes_and_returns_to_rest() {
        let (mut app, player) = app_with_human_left();
        settle_on_ground(&mut app);

        app.world_mut().resource_mut::<PlayerInput>().kick = true;
        app.update();
        app.world_mut().resource_mut::<PlayerInput>().kick = false;

        // Swing: |rest - kick| ~ 2.04 rad at 12 rad/s -> ~11 frames
        let mut reached_kick = false;
        for _ in 0..30 {
            app.update();
            let leg = app.world().get::<KickLeg>(player).unwrap();
            if !leg.swinging && (leg.angle - LEG_KICK_ANGLE).abs() < LEG_SWING_TOLERANCE {
                reached_kick = true;
                break;
            }
        }
        assert!(reached_kick, "swing must complete on its own");

        // Return: slower, but well within 2 seconds
        for _ in 0..120 {
            app.update();
        }
        let leg = app.world().get::<KickLeg>(player).unwrap();
        assert!((leg.angle - LEG_REST_ANGLE).abs() < 1e-3);
    }

    #[test]
    fn test_return_leg_foot_velocity_is_mirrored() {
        let mut app = HeadlessAppBuilder::new(MatchConfig::default()).build();
        app.update();
        settle_on_ground(&mut app);

        // Both legs mid-return at the same canonical angle, bodies at rest:
        // the tangential foot velocities must be mirror images, vertical
        // component equal and horizontal component opposite
        {
            let mut query = app
                .world_mut()
                .query_filtered::<(&mut KickLeg, &mut Velocity), With<Player>>();
            for (mut leg, mut velocity) in query.iter_mut(app.world_mut()) {
                leg.angle = 0.3;
                leg.swinging = false;
                leg.cooldown = 0.0;
                velocity.0 = Vec2::ZERO;
            }
        }
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<(&Team, &Foot, &Velocity), With<Player>>();
        let mut left = None;
        let mut right = None;
        for (team, foot, velocity) in query.iter(app.world()) {
            let tangential = foot.vel - velocity.0;
            match team {
                Team::Left => left = Some(tangential),
                Team::Right => right = Some(tangential),
            }
        }
        let (left, right) = (left.unwrap(), right.unwrap());
        assert!(left.length() > 1e-3, "a returning leg must move the foot");
        assert!((left.y - right.y).abs() < 1e-4, "vertical components must match");
        assert!((left.x + right.x).abs() < 1e-4, "horizontal components must oppose");
    }

    #[test]
    fn test_foot_is_mirrored_for_the_right_side_player() {
        let config = MatchConfig::default();
        let mut app = HeadlessAppBuilder::new(config).build();
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<(&Transform, &Team, &Foot), With<Player>>();
        for (transform, team, foot) in query.iter(app.world()) {
            let dx = foot.pos.x - transform.translation.x;
            match team {
                // At rest the leg hangs down-back: ahead of the body along look
                Team::Left => assert!(dx > 0.0, "left-side foot must extend right"),
                Team::Right => assert!(dx < 0.0, "right-side foot must extend left"),
            }
            // Both feet hang below the body at rest
            assert!(foot.pos.y > transform.translation.y);
        }
    }
}
