use lib_game::*;
use macroquad::math::ivec2;

const ARENA: IRect = IRect::new(0, 0, 468, 468);
const MAX_VELOCITY: f32 = 5.0;
const REDIRECT_PERIOD: u32 = 5;

fn shark(seed: u64) -> Target {
    let motion = Motion::new(
        MotionCfg::Swim {
            accel: 5.0,
            max_velocity: MAX_VELOCITY,
            sample_interval: 0.1,
            redirect_period: REDIRECT_PERIOD,
        },
        seed,
    );
    Target::new(ivec2(60, 30), ivec2(10, 10), ARENA, 12, motion)
}

fn swim(target: &Target) -> &Swim {
    match target.motion() {
        Motion::Swim(swim) => swim,
        Motion::Walk(_) => panic!("not a swimmer"),
    }
}

#[test]
fn velocity_stays_clamped() {
    for seed in 0..8 {
        let mut target = shark(seed);
        for tick in 0..3000 {
            target.update();
            let v = swim(&target).velocity();
            assert!(
                v.x.abs() <= MAX_VELOCITY && v.y.abs() <= MAX_VELOCITY,
                "seed {seed}, tick {tick}: {v}"
            );
        }
    }
}

#[test]
fn direction_changes_are_spaced() {
    for seed in 0..8 {
        let mut target = shark(seed);
        let mut direction = swim(&target).direction();
        let mut last_change = 0;

        for tick in 1..=3000 {
            target.update();
            let new_direction = swim(&target).direction();
            if new_direction != direction {
                assert!(
                    tick - last_change >= REDIRECT_PERIOD,
                    "seed {seed}: changed at {last_change} and {tick}"
                );
                direction = new_direction;
                last_change = tick;
            }
        }
    }
}

#[test]
fn first_ticks_accelerate_along_x() {
    let mut target = shark(0);

    target.update();
    assert_eq!(swim(&target).velocity().x, 0.5);
    // Truncated to the pixel grid
    assert_eq!(target.position(), ivec2(10, 10));

    target.update();
    assert_eq!(swim(&target).velocity().x, 1.0);
    assert_eq!(target.position(), ivec2(11, 10));
}

#[test]
fn same_seed_same_path() {
    let mut a = shark(7);
    let mut b = shark(7);
    for _ in 0..1000 {
        a.update();
        b.update();
        assert_eq!(a.rect(), b.rect());
        assert_eq!(swim(&a).direction(), swim(&b).direction());
    }
}

#[test]
fn stays_around_the_arena() {
    for seed in 0..4 {
        let mut target = shark(seed);
        for _ in 0..3000 {
            target.update();
            let rect = target.rect();
            // A bounce can leave it a few pixels past the edge at most
            assert!(rect.left() > -10 && rect.right() < ARENA.right() + 10, "{rect:?}");
            assert!(rect.top() > -10 && rect.bottom() < ARENA.bottom() + 10, "{rect:?}");
        }
    }
}

#[test]
fn spin_pauses_swimming() {
    let mut target = shark(3);
    for _ in 0..20 {
        target.update();
    }

    let velocity = swim(&target).velocity();
    let phase = swim(&target).phase();
    target.hit();
    while target.is_stunned() {
        target.update();
        assert_eq!(swim(&target).velocity(), velocity);
        assert_eq!(swim(&target).phase(), phase);
    }
}
