use lib_game::*;
use macroquad::math::ivec2;

const CHIMP_ARENA: IRect = IRect::new(0, 0, 468, 60);

fn fist() -> Pursuer {
    Pursuer::new(ivec2(20, 20), ivec2(5, 10), HitRegion::Inflate { dx: -5, dy: 5 })
}

fn spear() -> Pursuer {
    Pursuer::new(ivec2(20, 60), ivec2(5, 10), HitRegion::Tip { w: 10, h: 10 })
}

fn still_target(x: i32, y: i32) -> Target {
    Target::new(ivec2(40, 30), ivec2(x, y), CHIMP_ARENA, 12, Motion::walk(0))
}

#[test]
fn follows_pointer_by_midtop() {
    let mut pursuer = fist();
    pursuer.update(ivec2(100, 5));
    assert_eq!(pursuer.rect(), IRect::new(90, 5, 20, 20));
    assert_eq!(pursuer.position(), ivec2(90, 5));
}

#[test]
fn extended_pursuer_thrusts_forward() {
    let mut pursuer = fist();
    let target = still_target(300, 0);
    pursuer.update(ivec2(100, 5));

    assert!(!pursuer.activate(&target));
    pursuer.update(ivec2(100, 5));
    assert_eq!(pursuer.rect(), IRect::new(95, 15, 20, 20));

    pursuer.release();
    pursuer.update(ivec2(100, 5));
    assert_eq!(pursuer.rect(), IRect::new(90, 5, 20, 20));
}

#[test]
fn activate_hits_overlapping_target() {
    let mut pursuer = fist();
    let target = still_target(80, 0);
    pursuer.update(ivec2(100, 5));

    assert!(!pursuer.is_extended());
    assert!(pursuer.activate(&target));
    assert!(pursuer.is_extended());
}

#[test]
fn one_test_per_press() {
    let mut pursuer = fist();
    let target = still_target(80, 0);
    pursuer.update(ivec2(100, 5));

    assert!(pursuer.activate(&target));
    assert!(!pursuer.activate(&target));
    assert!(pursuer.is_extended());

    pursuer.release();
    pursuer.release();
    assert!(!pursuer.is_extended());
    assert!(pursuer.activate(&target));
}

#[test]
fn hit_regions() {
    run_tests([
        HitRegionTest {
            name: "fist overlap",
            pursuer: fist(),
            target: ivec2(80, 0),
            expected: true,
        },
        HitRegionTest {
            name: "fist shrunk sides miss",
            // Full box spans 90..110, the hit region 92..107
            pursuer: fist(),
            target: ivec2(107, 0),
            expected: false,
        },
        HitRegionTest {
            name: "fist grown bottom hits",
            // Full box ends at 25, the hit region at 28
            pursuer: fist(),
            target: ivec2(100, 26),
            expected: true,
        },
        HitRegionTest {
            name: "spear tip overlap",
            pursuer: spear(),
            target: ivec2(104, 14),
            expected: true,
        },
        HitRegionTest {
            name: "spear tip touching",
            pursuer: spear(),
            target: ivec2(105, 14),
            expected: false,
        },
        HitRegionTest {
            name: "spear shaft doesn't count",
            pursuer: spear(),
            target: ivec2(95, 30),
            expected: false,
        },
    ]);
}

struct HitRegionTest {
    name: &'static str,
    pursuer: Pursuer,
    target: macroquad::math::IVec2,
    expected: bool,
}

fn run_tests(cases: impl IntoIterator<Item = HitRegionTest>) {
    for mut case in cases {
        let target = Target::new(
            ivec2(40, 30),
            case.target,
            IRect::new(0, 0, 468, 468),
            12,
            Motion::walk(0),
        );
        case.pursuer.update(ivec2(100, 5));
        assert_eq!(
            case.pursuer.activate(&target),
            case.expected,
            "{}: region {:?} vs target {:?}",
            case.name,
            case.pursuer.hit_region(),
            target.rect(),
        );
    }
}
