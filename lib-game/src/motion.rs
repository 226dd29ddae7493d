use macroquad::math::{IVec2, Vec2, ivec2, vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{IRect, Pose};

/// Which velocity axes the swimmer currently accelerates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    X,
    Y,
    Both,
}

impl Direction {
    const ALL: [Direction; 3] = [Direction::X, Direction::Y, Direction::Both];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionCfg {
    /// Constant horizontal walk, turning around at the arena edges.
    Walk { speed: i32 },
    /// Accelerated 2D movement with a periodically re-rolled
    /// direction, bouncing off all arena edges.
    Swim {
        accel: f32,
        max_velocity: f32,
        sample_interval: f32,
        redirect_period: u32,
    },
}

/// Autonomous movement of a target while it's not stunned.
#[derive(Debug, Clone)]
pub enum Motion {
    Walk(Walk),
    Swim(Swim),
}

impl Motion {
    pub fn new(cfg: MotionCfg, seed: u64) -> Self {
        match cfg {
            MotionCfg::Walk { speed } => Motion::Walk(Walk { speed }),
            MotionCfg::Swim {
                accel,
                max_velocity,
                sample_interval,
                redirect_period,
            } => Motion::Swim(Swim {
                velocity: Vec2::ZERO,
                accel: Vec2::splat(accel),
                direction: Direction::X,
                phase: 0,
                max_velocity,
                sample_interval,
                redirect_period,
                rng: Pcg32::seed_from_u64(seed),
            }),
        }
    }

    pub fn walk(speed: i32) -> Self {
        Motion::Walk(Walk { speed })
    }

    /// Moves `rect` one tick forward. Bounces mirror `pose`.
    pub fn advance(&mut self, rect: IRect, arena: IRect, pose: &mut Pose) -> IRect {
        match self {
            Motion::Walk(walk) => walk.advance(rect, arena, pose),
            Motion::Swim(swim) => swim.advance(rect, arena, pose),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walk {
    speed: i32,
}

impl Walk {
    pub fn speed(&self) -> i32 {
        self.speed
    }

    fn advance(&mut self, rect: IRect, arena: IRect, pose: &mut Pose) -> IRect {
        let next = rect.moved(ivec2(self.speed, 0));
        if arena.left() <= next.left() && next.right() <= arena.right() {
            return next;
        }

        self.speed = -self.speed;
        *pose = pose.mirrored();
        rect.moved(ivec2(self.speed, 0))
    }
}

#[derive(Debug, Clone)]
pub struct Swim {
    velocity: Vec2,
    accel: Vec2,
    direction: Direction,
    phase: u32,
    max_velocity: f32,
    sample_interval: f32,
    redirect_period: u32,
    rng: Pcg32,
}

impl Swim {
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn accel(&self) -> Vec2 {
        self.accel
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    fn advance(&mut self, rect: IRect, arena: IRect, pose: &mut Pose) -> IRect {
        self.redirect();
        self.accelerate();

        let mut rect = rect.moved(Self::pixels(self.velocity));

        if rect.left() <= arena.left() || rect.right() >= arena.right() {
            self.accel.x = -self.accel.x;
            self.velocity.x = -self.velocity.x;
            rect = rect.moved(Self::pixels(vec2(self.velocity.x, 0.0)));
            self.velocity.x = 0.0;
            *pose = pose.mirrored();
            self.phase = 0;
        }

        if rect.top() <= arena.top() || rect.bottom() >= arena.bottom() {
            self.accel.y = -self.accel.y;
            self.velocity.y = -self.velocity.y;
            rect = rect.moved(Self::pixels(vec2(0.0, self.velocity.y)));
            self.velocity.y = 0.0;
            self.phase = 0;
        }

        rect
    }

    // The same mode may come up several times in a row.
    fn redirect(&mut self) {
        self.phase += 1;
        if self.phase < self.redirect_period {
            return;
        }

        self.phase = 0;
        self.direction = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
    }

    fn accelerate(&mut self) {
        let max = self.max_velocity;
        let dv = self.accel * self.sample_interval;
        let below_x = self.velocity.x.abs() < max;
        let below_y = self.velocity.y.abs() < max;

        match self.direction {
            Direction::X if below_x => self.velocity.x += dv.x,
            Direction::Y if below_y => self.velocity.y += dv.y,
            Direction::Both if below_x && below_y => self.velocity += dv,
            _ => (),
        }

        self.velocity = self.velocity.clamp(Vec2::splat(-max), Vec2::splat(max));
    }

    fn pixels(v: Vec2) -> IVec2 {
        ivec2(v.x as i32, v.y as i32)
    }
}
