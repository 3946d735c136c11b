//! The host-owned surface the model deforms.

use crate::float::Float;
use crate::vec::Vec2;

/// Axis-aligned rectangle in surface coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect<F: Float> {
    pub x: F,
    pub y: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> Rect<F> {
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Rect { x, y, width, height }
    }

    pub fn origin(&self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// True when width and height are positive and every field is finite.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > F::zero()
            && self.height > F::zero()
    }
}

/// State shared between the wobbly controller and the renderer.
///
/// The renderer owns this value; the controller reads the rectangle and
/// writes back the position and `synced` flag as the animation settles.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface<F: Float> {
    pub rect: Rect<F>,
    /// Output mesh subdivisions along x, independent of the spring grid.
    pub x_cells: usize,
    /// Output mesh subdivisions along y.
    pub y_cells: usize,
    /// True when the surface is a flat rectangle and needs no deformation pass.
    pub synced: bool,
}

impl<F: Float> Surface<F> {
    pub fn new(rect: Rect<F>, x_cells: usize, y_cells: usize) -> Self {
        Surface { rect, x_cells, y_cells, synced: true }
    }

    pub fn set_position(&mut self, position: Vec2<F>) {
        self.rect.x = position.x;
        self.rect.y = position.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_rects_are_invalid() {
        assert!(Rect::new(0.0f32, 0.0, 10.0, 10.0).is_valid());
        assert!(!Rect::new(0.0f32, 0.0, 0.0, 10.0).is_valid());
        assert!(!Rect::new(0.0f32, 0.0, 10.0, -1.0).is_valid());
        assert!(!Rect::new(f32::NAN, 0.0, 10.0, 10.0).is_valid());
    }

    #[test]
    fn new_surface_starts_synced() {
        let s = Surface::new(Rect::new(1.0f64, 2.0, 3.0, 4.0), 8, 8);
        assert!(s.synced);
    }
}
