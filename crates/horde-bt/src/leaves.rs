//! The behavior catalog: leaf semantics for every NPC tree.
//!
//! Leaves never recurse. They read the [`DecisionContext`], may rewrite the
//! agent's velocity or attack-request flag, and report a status; the tree
//! turns `Running` into "resume here" and terminal results into "bubble up".

use horde_core::steering::{away_from, toward};
use horde_core::Vec2;

use crate::bt::{BtStatus, LeafKind};
use crate::context::DecisionContext;

pub fn run(kind: LeafKind, ctx: &mut DecisionContext<'_>) -> BtStatus {
    match kind {
        LeafKind::Patrol => patrol(ctx),
        LeafKind::ChasePlayer => chase_player(ctx),
        LeafKind::AttackPlayer => attack_player(ctx),
        LeafKind::StalkPlayer => stalk_player(ctx),
    }
}

fn in_band(value: i32, band: (i32, i32)) -> bool {
    value >= band.0 && value <= band.1
}

/// Idle until the player shows up; occasionally stop or drift.
pub fn patrol(ctx: &mut DecisionContext<'_>) -> BtStatus {
    if ctx.perception.player_nearby {
        return BtStatus::Failure;
    }

    let tuning = ctx.tuning.patrol;
    let rand = ctx.perception.rand;
    if in_band(rand, tuning.stop_band) {
        ctx.agent.velocity = Vec2::ZERO;
    }
    if in_band(rand, tuning.wander_band) {
        // Slower than base speed so spotting the player reads as a sprint.
        let scale = ctx.agent.speed / tuning.wander_speed_divisor;
        let x = ((rand % 10) as f32 - 4.5) * scale;
        let y = ((ctx.perception.rand2 % 10) as f32 - 4.5) * scale;
        ctx.agent.velocity = Vec2::new(x, y);
    }
    BtStatus::Running
}

pub fn chase_player(ctx: &mut DecisionContext<'_>) -> BtStatus {
    let p = ctx.perception;
    if p.player_attackable && p.should_attack {
        return BtStatus::Success;
    }
    if p.player_nearby && p.should_attack {
        ctx.agent.velocity = toward(ctx.agent.position, ctx.player.position, ctx.agent.speed);
        return BtStatus::Running;
    }
    // Lost the player: visibly slow down on the way back to patrol.
    ctx.agent.velocity = ctx.agent.velocity / 2.0;
    BtStatus::Failure
}

pub fn attack_player(ctx: &mut DecisionContext<'_>) -> BtStatus {
    let p = ctx.perception;
    if p.player_attackable && p.should_attack {
        *ctx.attack_requested = true;
        BtStatus::Running
    } else {
        *ctx.attack_requested = false;
        BtStatus::Failure
    }
}

/// Keep a ranged stalker in a ring around the player until the pack engages.
pub fn stalk_player(ctx: &mut DecisionContext<'_>) -> BtStatus {
    if ctx.perception.should_attack {
        return BtStatus::Success;
    }
    if !ctx.perception.player_nearby {
        return BtStatus::Failure;
    }

    let stalk = ctx.tuning.stalk;
    let distance = ctx.player_distance();
    let approach = ctx.detection_radius * stalk.approach_ratio;
    let retreat = ctx.detection_radius * stalk.retreat_ratio;
    let here = ctx.agent.position;
    let player = ctx.player.position;

    if distance > approach {
        ctx.agent.velocity = toward(here, player, ctx.agent.speed);
    } else if distance > retreat && distance <= approach {
        ctx.agent.velocity = toward(here, player, stalk.hold_nudge);
    } else if distance <= retreat {
        ctx.agent.velocity = away_from(here, player, ctx.agent.speed);
    } else {
        ctx.invariant_violations += 1;
        tracing::error!(
            distance,
            detection_radius = ctx.detection_radius,
            "stalk_player matched no distance band"
        );
        return BtStatus::Failure;
    }
    BtStatus::Running
}
