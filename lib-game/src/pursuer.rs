use macroquad::math::IVec2;
use serde::{Deserialize, Serialize};

use crate::{IRect, Target};

/// The part of the pursuer that actually lands the blow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitRegion {
    /// The whole sprite box inflated by the given deltas.
    Inflate { dx: i32, dy: i32 },
    /// A small box centered under the sprite's top edge.
    Tip { w: i32, h: i32 },
}

impl HitRegion {
    pub fn resolve(self, rect: IRect) -> IRect {
        match self {
            HitRegion::Inflate { dx, dy } => rect.inflate(dx, dy),
            HitRegion::Tip { w, h } => IRect::new(rect.x + (rect.w - w) / 2, rect.y, w, h),
        }
    }
}

/// The pointer-following sprite (the fist or the spear).
#[derive(Debug, Clone)]
pub struct Pursuer {
    rect: IRect,
    extended: bool,
    thrust: IVec2,
    hit_region: HitRegion,
}

impl Pursuer {
    pub fn new(size: IVec2, thrust: IVec2, hit_region: HitRegion) -> Self {
        Self {
            rect: IRect::from_size(size),
            extended: false,
            thrust,
            hit_region,
        }
    }

    pub fn rect(&self) -> IRect {
        self.rect
    }

    pub fn position(&self) -> IVec2 {
        self.rect.topleft()
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn hit_region(&self) -> IRect {
        self.hit_region.resolve(self.rect)
    }

    pub fn update(&mut self, pointer: IVec2) {
        self.rect = self.rect.with_midtop(pointer);
        if self.extended {
            self.rect = self.rect.moved(self.thrust);
        }
    }

    /// Extends the pursuer and tests it against the target.
    /// Only the first call of a press-release cycle performs
    /// the test, the rest report a miss.
    pub fn activate(&mut self, target: &Target) -> bool {
        if self.extended {
            return false;
        }

        self.extended = true;
        self.hit_region().intersects(target.rect())
    }

    pub fn release(&mut self) {
        self.extended = false;
    }
}
