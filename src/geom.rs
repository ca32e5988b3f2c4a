use macroquad::prelude::*;

/// Half-extent accessor used throughout the projection math.
///
/// Computed on demand so it can never drift from the value it halves.
pub trait Halve {
    /// Returns `self / 2` in pixel space.
    fn half(self) -> Vec2;
}

impl Halve for Vec2 {
    #[inline]
    fn half(self) -> Vec2 {
        self * 0.5
    }
}

impl Halve for IVec2 {
    #[inline]
    fn half(self) -> Vec2 {
        self.as_vec2() * 0.5
    }
}

/// Floor division and Euclidean remainder of `p` by `size`, per axis.
///
/// Matches the rectangular-cell split used by the inverse projection:
/// negative pixels fall into negative cells and the remainder stays in
/// `[0, size)`.
#[inline]
pub fn split_cell(p: Vec2, size: Vec2) -> (Vec2, Vec2) {
    (
        vec2(p.x.div_euclid(size.x), p.y.div_euclid(size.y)),
        vec2(p.x.rem_euclid(size.x), p.y.rem_euclid(size.y)),
    )
}
