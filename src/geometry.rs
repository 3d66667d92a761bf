use cgmath::{point2, InnerSpace, Point2, Vector2, Zero};

/// Length helpers on top of `cgmath` that never produce NaN.
pub trait VectorExt: Sized {
    fn length(self) -> f32;
    /// Unit vector in the same direction, or zero for the zero vector.
    fn normalize_or_zero(self) -> Self;
    /// Shrinks the vector to `max_len` if it is longer, keeping its direction.
    fn limit_length(self, max_len: f32) -> Self;
}

impl VectorExt for Vector2<f32> {
    fn length(self) -> f32 {
        self.magnitude()
    }

    fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len == 0. {
            Vector2::zero()
        } else {
            self / len
        }
    }

    fn limit_length(self, max_len: f32) -> Self {
        let len = self.length();
        if len > max_len {
            self / len * max_len
        } else {
            self
        }
    }
}

/// Integer screen rectangle, top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment test on the truncated point.
    pub fn contains(&self, point: Point2<f32>) -> bool {
        let (px, py) = (point.x as i32 as i64, point.y as i32 as i64);
        let (x, y) = (self.x as i64, self.y as i64);
        px >= x && px < x + self.w as i64 && py >= y && py < y + self.h as i64
    }

    pub fn center(&self) -> Point2<f32> {
        point2(
            self.x as f32 + self.w as f32 / 2.,
            self.y as f32 + self.h as f32 / 2.,
        )
    }

    pub fn min_side(&self) -> i32 {
        self.w.min(self.h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Maps a position in `[0, 1]` per axis to window pixels.
    pub fn to_pixels(self, normalized: Point2<f32>) -> Point2<f32> {
        point2(
            normalized.x * self.width as f32,
            normalized.y * self.height as f32,
        )
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use cgmath::vec2;

    use super::*;

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(Vector2::<f32>::zero().normalize_or_zero(), Vector2::<f32>::zero());
        assert_abs_diff_eq!(vec2(3f32, 4.).normalize_or_zero(), vec2(0.6, 0.8));
    }

    #[test]
    fn limit_length() {
        let v = vec2(0f32, 85.);
        assert_abs_diff_eq!(v.limit_length(75.), vec2(0., 75.));
        assert_eq!(vec2(3f32, 4.).limit_length(75.), vec2(3., 4.));
        let long = vec2(-300f32, 400.).limit_length(10.);
        assert_abs_diff_eq!(long.length(), 10., epsilon = 1e-4);
        assert_abs_diff_eq!(long, vec2(-6., 8.), epsilon = 1e-4);
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(0, 0, 300, 300);
        assert!(r.contains(point2(0., 0.)));
        assert!(r.contains(point2(299.9, 150.)));
        assert!(!r.contains(point2(300., 150.)));
        // Truncation toward zero, like a C cast.
        assert!(r.contains(point2(-0.5, 10.)));
        assert!(!r.contains(point2(-1., 10.)));
        assert!(!Rect::new(10, 10, 0, 0).contains(point2(10., 10.)));
        assert_eq!(r.center(), point2(150., 150.));
        assert_eq!(Rect::new(0, 0, 267, 600).center(), point2(133.5, 300.));
    }

    #[test]
    fn huge_rect_does_not_overflow() {
        let r = Rect::new(400, 0, i32::MAX, i32::MAX);
        assert!(r.contains(point2(500., 10.)));
        assert!(!r.contains(point2(399., 10.)));
        let r = Rect::new(i32::MAX - 1, i32::MAX - 1, i32::MAX, i32::MAX);
        assert!(!r.contains(point2(0., 0.)));
    }

    #[test]
    fn window_to_pixels() {
        let w = WindowSize::new(800, 600);
        assert_eq!(w.to_pixels(point2(0.5, 0.5)), point2(400., 300.));
        assert_eq!(w.to_pixels(point2(0., 1.)), point2(0., 600.));
    }
}
