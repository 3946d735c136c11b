//! The 4x4 mass-spring grid behind a wobbly surface.

use crate::error::{reserve, WobblyError};
use crate::float::Float;
use crate::mass::PointMass;
use crate::spring::{Spring, SpringAxis};
use crate::surface::Rect;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Masses per row.
pub const GRID_WIDTH: usize = 4;
/// Masses per column.
pub const GRID_HEIGHT: usize = 4;
/// Total number of point masses.
pub const MASS_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;
/// Structural springs: every horizontal and vertical neighbour pair.
pub const SPRING_COUNT: usize = (GRID_WIDTH - 1) * GRID_HEIGHT + GRID_WIDTH * (GRID_HEIGHT - 1);

/// Index of the mass pinned when a model is built or reset.
pub const MIDDLE_ANCHOR: usize = GRID_WIDTH * ((GRID_HEIGHT - 1) / 2) + (GRID_WIDTH - 1) / 2;

/// Mass-spring grid spanning a surface rectangle.
///
/// Mass at (col, row) has index `row * GRID_WIDTH + col`. Springs refer to
/// masses by index, and at most one mass (the anchor) is immobile.
pub struct Model<F: Float> {
    masses: AllocVec<PointMass<F>>,
    springs: AllocVec<Spring<F>>,
    anchor: Option<usize>,
    /// Fractional sub-steps carried between calls to `step`.
    pub(crate) accumulator: F,
    top_left: Vec2<F>,
    bottom_right: Vec2<F>,
}

impl<F: Float> Model<F> {
    /// Build a resting grid over `rect` with the middle mass pinned.
    ///
    /// Both arenas are reserved before anything is initialised, so a failed
    /// allocation leaves nothing behind.
    pub fn build(rect: &Rect<F>) -> Result<Self, WobblyError> {
        if !rect.is_valid() {
            return Err(WobblyError::InvalidDimensions);
        }

        let mut masses = AllocVec::new();
        reserve(&mut masses, MASS_COUNT)?;
        let mut springs = AllocVec::new();
        reserve(&mut springs, SPRING_COUNT)?;

        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                masses.push(PointMass::new(lattice_point(rect, col, row)));
            }
        }

        let mut model = Model {
            masses,
            springs,
            anchor: None,
            accumulator: F::zero(),
            top_left: rect.origin(),
            bottom_right: rect.origin(),
        };
        model.pin_middle_anchor();
        model.init_springs(rect);
        model.recompute_bounds();
        Ok(model)
    }

    /// Adopt the rest offsets of a resized rectangle.
    ///
    /// When the surface is idle the masses also jump to the new lattice,
    /// discarding any deformation; mid-animation they are left alone so the
    /// wobble continues toward the new rest shape. Degenerate rectangles
    /// are ignored.
    pub fn rebuild_springs(&mut self, rect: &Rect<F>, animating: bool) {
        if !rect.is_valid() {
            return;
        }
        if !animating {
            self.reset_lattice(rect);
        }
        self.init_springs(rect);
    }

    /// Put every mass back on the undeformed lattice of `rect`, at rest,
    /// with the middle mass pinned.
    pub fn reset_lattice(&mut self, rect: &Rect<F>) {
        for (i, mass) in self.masses.iter_mut().enumerate() {
            mass.reset(lattice_point(rect, i % GRID_WIDTH, i / GRID_WIDTH));
        }
        self.anchor = None;
        self.pin_middle_anchor();
        self.recompute_bounds();
    }

    fn pin_middle_anchor(&mut self) {
        self.set_anchor(MIDDLE_ANCHOR);
    }

    // Capacity for SPRING_COUNT was reserved in `build`, so this never reallocates.
    fn init_springs(&mut self, rect: &Rect<F>) {
        let hpad = rect.width / F::from_usize(GRID_WIDTH - 1);
        let vpad = rect.height / F::from_usize(GRID_HEIGHT - 1);

        self.springs.clear();
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                let i = row * GRID_WIDTH + col;
                if col > 0 {
                    self.springs.push(Spring::new(
                        i - 1,
                        i,
                        Vec2::new(hpad, F::zero()),
                        SpringAxis::Horizontal,
                    ));
                }
                if row > 0 {
                    self.springs.push(Spring::new(
                        i - GRID_WIDTH,
                        i,
                        Vec2::new(F::zero(), vpad),
                        SpringAxis::Vertical,
                    ));
                }
            }
        }
    }

    /// Recompute the axis-aligned bounds of all mass positions.
    pub fn recompute_bounds(&mut self) {
        let first = self.masses[0].position;
        let (top_left, bottom_right) = self.masses[1..]
            .iter()
            .fold((first, first), |(lo, hi), m| (lo.min(m.position), hi.max(m.position)));
        self.top_left = top_left;
        self.bottom_right = bottom_right;
    }

    /// Index of the mass closest to `point`. Ties go to the lowest index.
    pub fn find_nearest(&self, point: Vec2<F>) -> usize {
        let mut nearest = 0;
        let mut nearest_dist = self.masses[0].position.distance(point);
        for (i, m) in self.masses.iter().enumerate().skip(1) {
            let d = m.position.distance(point);
            if d < nearest_dist {
                nearest_dist = d;
                nearest = i;
            }
        }
        nearest
    }

    /// Make `index` the sole immobile mass.
    pub fn set_anchor(&mut self, index: usize) {
        self.release_anchor();
        self.masses[index].pin();
        self.anchor = Some(index);
    }

    /// Let the current anchor move freely again.
    pub fn release_anchor(&mut self) {
        if let Some(old) = self.anchor.take() {
            self.masses[old].release();
        }
    }

    /// Anchor the mass nearest to `point` and kick its spring neighbours.
    ///
    /// Each neighbour receives `impulse * offset` of velocity pointing away
    /// from the anchor along the connecting spring. Returns the new anchor.
    pub fn grab(&mut self, point: Vec2<F>, impulse: F) -> usize {
        let anchor = self.find_nearest(point);
        self.set_anchor(anchor);

        for spring in self.springs.iter() {
            if let Some(neighbour) = spring.other(anchor) {
                let kick = spring.offset.scale(impulse);
                let away = if spring.a == anchor { kick } else { -kick };
                self.masses[neighbour].velocity += away;
            }
        }
        anchor
    }

    /// Move the anchor directly. Returns false when there is no anchor.
    pub fn translate_anchor(&mut self, delta: Vec2<F>) -> bool {
        match self.anchor {
            Some(index) => {
                self.masses[index].translate(delta);
                self.recompute_bounds();
                true
            }
            None => false,
        }
    }

    /// Accumulate every spring's force onto its endpoints.
    pub(crate) fn exert_springs(&mut self, k: F) {
        for spring in self.springs.iter() {
            spring.exert(&mut self.masses, k);
        }
    }

    pub(crate) fn masses_mut(&mut self) -> &mut [PointMass<F>] {
        &mut self.masses
    }

    pub fn masses(&self) -> &[PointMass<F>] { &self.masses }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn anchor(&self) -> Option<usize> { self.anchor }
    pub fn top_left(&self) -> Vec2<F> { self.top_left }
    pub fn bottom_right(&self) -> Vec2<F> { self.bottom_right }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.masses[row * GRID_WIDTH + col].position
    }
}

/// Undeformed position of lattice point (col, row) in `rect`.
///
/// The last column and row land exactly on the far edges.
pub fn lattice_point<F: Float>(rect: &Rect<F>, col: usize, row: usize) -> Vec2<F> {
    let dx = if col == GRID_WIDTH - 1 {
        rect.width
    } else {
        F::from_usize(col) * rect.width / F::from_usize(GRID_WIDTH - 1)
    };
    let dy = if row == GRID_HEIGHT - 1 {
        rect.height
    } else {
        F::from_usize(row) * rect.height / F::from_usize(GRID_HEIGHT - 1)
    };
    Vec2::new(rect.x + dx, rect.y + dy)
}
