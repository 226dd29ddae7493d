use macroquad::math::{IVec2, ivec2};

/// How a sprite image is currently presented: its unrotated
/// size, whether it's mirrored horizontally and how much it's
/// rotated (counter-clockwise, in degrees).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub size: IVec2,
    pub flipped: bool,
    pub angle: i32,
}

impl Pose {
    pub fn new(size: IVec2) -> Self {
        Self {
            size,
            flipped: false,
            angle: 0,
        }
    }

    pub fn mirrored(self) -> Self {
        Self {
            flipped: !self.flipped,
            ..self
        }
    }

    pub fn rotated(self, angle: i32) -> Self {
        Self { angle, ..self }
    }

    /// Size of the box enclosing the rotated image. Rotation
    /// grows the box, so a spinning sprite must be re-centered
    /// after every step.
    pub fn bounds(self) -> IVec2 {
        let (sin, cos) = (self.angle as f32).to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let (w, h) = (self.size.x as f32, self.size.y as f32);

        ivec2(
            Self::snap(w * cos + h * sin),
            Self::snap(w * sin + h * cos),
        )
    }

    // NOTE: sin/cos of right angles aren't exact in floats
    fn snap(x: f32) -> i32 {
        (x - 1e-3).ceil() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angles_keep_exact_bounds() {
        let pose = Pose::new(ivec2(40, 20));
        assert_eq!(pose.bounds(), ivec2(40, 20));
        assert_eq!(pose.rotated(90).bounds(), ivec2(20, 40));
        assert_eq!(pose.rotated(180).bounds(), ivec2(40, 20));
        assert_eq!(pose.rotated(270).bounds(), ivec2(20, 40));
    }

    #[test]
    fn diagonal_rotation_grows() {
        let pose = Pose::new(ivec2(10, 10)).rotated(45);
        // 10 * sqrt(2) = 14.14..
        assert_eq!(pose.bounds(), ivec2(15, 15));
    }

    #[test]
    fn mirroring_is_an_involution() {
        let pose = Pose::new(ivec2(10, 10));
        assert!(pose.mirrored().flipped);
        assert_eq!(pose.mirrored().mirrored(), pose);
    }
}
