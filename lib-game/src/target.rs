use log::debug;
use macroquad::math::IVec2;

use crate::{IRect, Motion, Pose};

const FULL_TURN: i32 = 360;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Walking,
    Stunned { angle: i32 },
}

/// The sprite the player is trying to hit (the chimp or the shark).
/// Every tick it either moves on its own or, after being hit,
/// spins around once in place.
#[derive(Debug, Clone)]
pub struct Target {
    rect: IRect,
    arena: IRect,
    pose: Pose,
    original: Pose,
    state: TargetState,
    spin_step: i32,
    motion: Motion,
}

impl Target {
    pub fn new(size: IVec2, spawn: IVec2, arena: IRect, spin_step: i32, motion: Motion) -> Self {
        let pose = Pose::new(size);

        Self {
            rect: IRect::from_size(size).with_topleft(spawn),
            arena,
            pose,
            original: pose,
            state: TargetState::Walking,
            spin_step,
            motion,
        }
    }

    pub fn rect(&self) -> IRect {
        self.rect
    }

    pub fn position(&self) -> IVec2 {
        self.rect.topleft()
    }

    pub fn arena(&self) -> IRect {
        self.arena
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn is_stunned(&self) -> bool {
        matches!(self.state, TargetState::Stunned { .. })
    }

    pub fn spin_angle(&self) -> i32 {
        match self.state {
            TargetState::Walking => 0,
            TargetState::Stunned { angle } => angle,
        }
    }

    /// `1` when the image is presented as loaded, `-1` when mirrored.
    pub fn facing(&self) -> i32 {
        if self.pose.flipped { -1 } else { 1 }
    }

    pub fn update(&mut self) {
        match self.state {
            TargetState::Walking => {
                self.rect = self.motion.advance(self.rect, self.arena, &mut self.pose)
            }
            TargetState::Stunned { angle } => self.spin(angle),
        }
    }

    /// Starts the spin. Hitting a spinning target does nothing.
    pub fn hit(&mut self) {
        if self.is_stunned() {
            return;
        }

        debug!("Target stunned at {:?}", self.rect);
        self.original = self.pose;
        self.state = TargetState::Stunned { angle: 0 };
    }

    fn spin(&mut self, angle: i32) {
        let center = self.rect.center();
        let angle = angle + self.spin_step;

        if angle >= FULL_TURN {
            self.state = TargetState::Walking;
            self.pose = self.original;
        } else {
            self.state = TargetState::Stunned { angle };
            self.pose = self.original.rotated(angle);
        }

        self.rect = IRect::from_size(self.pose.bounds()).with_center(center);
    }
}
