use macroquad::math::{IVec2, Rect, ivec2};

/// An integer, top-left anchored rectangle. Sprite positions
/// and hit regions live on the pixel grid, so all the
/// arithmetic here truncates the same way the blitter does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_size(size: IVec2) -> Self {
        Self::new(0, 0, size.x, size.y)
    }

    pub fn left(self) -> i32 {
        self.x
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn top(self) -> i32 {
        self.y
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }

    pub fn size(self) -> IVec2 {
        ivec2(self.w, self.h)
    }

    pub fn topleft(self) -> IVec2 {
        ivec2(self.x, self.y)
    }

    pub fn center(self) -> IVec2 {
        ivec2(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn with_topleft(self, pos: IVec2) -> Self {
        Self { x: pos.x, y: pos.y, ..self }
    }

    pub fn with_center(self, center: IVec2) -> Self {
        Self {
            x: center.x - self.w / 2,
            y: center.y - self.h / 2,
            ..self
        }
    }

    pub fn with_midtop(self, midtop: IVec2) -> Self {
        Self {
            x: midtop.x - self.w / 2,
            y: midtop.y,
            ..self
        }
    }

    pub fn moved(self, delta: IVec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// Grows (or shrinks, for negative deltas) the rect while
    /// keeping it centered. Odd deltas lose the half pixel.
    pub fn inflate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x - dx / 2,
            y: self.y - dy / 2,
            w: self.w + dx,
            h: self.h + dy,
        }
    }

    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap test. Rects sharing only an edge don't
    /// collide and empty rects never collide with anything.
    pub fn intersects(self, other: Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains(self, other: Self) -> bool {
        self.left() <= other.left()
            && other.right() <= self.right()
            && self.top() <= other.top()
            && other.bottom() <= self.bottom()
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflate_truncates_halves() {
        let rect = IRect::new(10, 10, 40, 20);
        assert_eq!(rect.inflate(-5, 5), IRect::new(12, 8, 35, 25));
        assert_eq!(rect.inflate(4, -4), IRect::new(8, 12, 44, 16));
    }

    #[test]
    fn anchors() {
        let rect = IRect::new(0, 0, 21, 11);
        assert_eq!(rect.with_midtop(ivec2(100, 5)), IRect::new(90, 5, 21, 11));
        assert_eq!(rect.with_center(ivec2(50, 50)), IRect::new(40, 45, 21, 11));
        assert_eq!(rect.with_center(ivec2(50, 50)).center(), ivec2(50, 50));
    }
}
