use horde_bt::leaves::{patrol, stalk_player};
use horde_bt::{BtStatus, DecisionContext, LeafTuning, Perception};
use horde_core::{Motion, Vec2};

const DETECTION: f32 = 200.0;

fn idle(rand: i32, rand2: i32) -> Perception {
    Perception {
        player_nearby: false,
        player_attackable: false,
        should_attack: true,
        rand,
        rand2,
    }
}

fn stalking() -> Perception {
    Perception {
        player_nearby: true,
        player_attackable: false,
        should_attack: false,
        rand: 1,
        rand2: 1,
    }
}

fn run_stalk(agent: &mut Motion, player_at: Vec2) -> (BtStatus, u32) {
    let player = Motion::new(player_at, 3.0);
    let tuning = LeafTuning::default();
    let mut requested = false;
    let mut ctx = DecisionContext::new(
        stalking(),
        DETECTION,
        agent,
        &player,
        &mut requested,
        &tuning,
    );
    let status = stalk_player(&mut ctx);
    (status, ctx.invariant_violations)
}

#[test]
fn patrol_wander_stays_below_base_speed() {
    let player = Motion::new(Vec2::new(900.0, 900.0), 3.0);
    let tuning = LeafTuning::default();
    let mut requested = false;
    for rand in 1..=1000 {
        for rand2 in [1, 5, 9, 10, 99, 1000] {
            let mut agent = Motion::new(Vec2::ZERO, 2.0).with_velocity(Vec2::new(0.5, 0.5));
            let mut ctx = DecisionContext::new(
                idle(rand, rand2),
                DETECTION,
                &mut agent,
                &player,
                &mut requested,
                &tuning,
            );
            assert_eq!(patrol(&mut ctx), BtStatus::Running);
            assert!(agent.velocity.length() < agent.speed, "rand={rand} rand2={rand2}");
        }
    }
}

#[test]
fn patrol_bands_stop_or_wander() {
    let player = Motion::new(Vec2::new(900.0, 900.0), 3.0);
    let tuning = LeafTuning::default();
    let mut requested = false;
    let start = Vec2::new(0.5, 0.5);

    let mut agent = Motion::new(Vec2::ZERO, 9.0).with_velocity(start);
    patrol(&mut DecisionContext::new(
        idle(97, 1),
        DETECTION,
        &mut agent,
        &player,
        &mut requested,
        &tuning,
    ));
    assert_eq!(agent.velocity, Vec2::ZERO);

    let mut agent = Motion::new(Vec2::ZERO, 9.0).with_velocity(start);
    patrol(&mut DecisionContext::new(
        idle(99, 13),
        DETECTION,
        &mut agent,
        &player,
        &mut requested,
        &tuning,
    ));
    // (9 - 4.5) * 9 / 9 and (3 - 4.5) * 9 / 9
    assert_eq!(agent.velocity, Vec2::new(4.5, -1.5));

    let mut agent = Motion::new(Vec2::ZERO, 9.0).with_velocity(start);
    patrol(&mut DecisionContext::new(
        idle(500, 13),
        DETECTION,
        &mut agent,
        &player,
        &mut requested,
        &tuning,
    ));
    assert_eq!(agent.velocity, start);
}

#[test]
fn patrol_fails_when_player_is_near() {
    let player = Motion::new(Vec2::new(10.0, 0.0), 3.0);
    let tuning = LeafTuning::default();
    let mut requested = false;
    let mut agent = Motion::new(Vec2::ZERO, 2.0);
    let perception = Perception {
        player_nearby: true,
        ..idle(99, 1)
    };
    let mut ctx = DecisionContext::new(
        perception,
        DETECTION,
        &mut agent,
        &player,
        &mut requested,
        &tuning,
    );
    assert_eq!(patrol(&mut ctx), BtStatus::Failure);
    assert_eq!(agent.velocity, Vec2::ZERO);
}

#[test]
fn stalk_bands_approach_hold_retreat() {
    let mut agent = Motion::new(Vec2::ZERO, 2.0);

    // 0.6 * 200 = 120 and 0.55 * 200 = 110.
    assert_eq!(run_stalk(&mut agent, Vec2::new(150.0, 0.0)), (BtStatus::Running, 0));
    assert_eq!(agent.velocity, Vec2::new(2.0, 0.0));

    assert_eq!(run_stalk(&mut agent, Vec2::new(115.0, 0.0)), (BtStatus::Running, 0));
    assert!((agent.velocity.x - 0.0001).abs() < 1e-7);
    assert_eq!(agent.velocity.y, 0.0);

    assert_eq!(run_stalk(&mut agent, Vec2::new(105.0, 0.0)), (BtStatus::Running, 0));
    assert_eq!(agent.velocity, Vec2::new(-2.0, 0.0));

    assert_eq!(run_stalk(&mut agent, Vec2::new(0.0, 100.0)), (BtStatus::Running, 0));
    assert_eq!(agent.velocity, Vec2::new(0.0, -2.0));
}

#[test]
fn stalk_counts_unmatched_distance_as_violation() {
    let mut agent = Motion::new(Vec2::ZERO, 2.0).with_velocity(Vec2::new(1.0, 1.0));
    let (status, violations) = run_stalk(&mut agent, Vec2::new(f32::NAN, 0.0));
    assert_eq!(status, BtStatus::Failure);
    assert_eq!(violations, 1);
    assert_eq!(agent.velocity, Vec2::new(1.0, 1.0));
}

#[test]
fn stalk_yields_to_engagement() {
    let player = Motion::new(Vec2::new(500.0, 0.0), 3.0);
    let tuning = LeafTuning::default();
    let mut requested = false;
    let mut agent = Motion::new(Vec2::ZERO, 2.0);

    let engaged = Perception {
        should_attack: true,
        player_nearby: false,
        ..stalking()
    };
    let mut ctx = DecisionContext::new(
        engaged,
        DETECTION,
        &mut agent,
        &player,
        &mut requested,
        &tuning,
    );
    assert_eq!(stalk_player(&mut ctx), BtStatus::Success);

    let lost = Perception {
        player_nearby: false,
        ..stalking()
    };
    let mut ctx = DecisionContext::new(
        lost,
        DETECTION,
        &mut agent,
        &player,
        &mut requested,
        &tuning,
    );
    assert_eq!(stalk_player(&mut ctx), BtStatus::Failure);
}
