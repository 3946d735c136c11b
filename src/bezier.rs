//! Bicubic Bezier evaluation of the control grid into a dense mesh.

use crate::error::{reserve, WobblyError};
use crate::float::Float;
use crate::model::{Model, GRID_WIDTH};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Cubic Bernstein weights for parameter `t`.
pub fn bernstein<F: Float>(t: F) -> [F; 4] {
    let three = F::from_f32(3.0);
    let s = F::one() - t;
    [s.cube(), three * t * s * s, three * t * t * s, t.cube()]
}

/// Evaluate the Bezier patch spanned by the model's masses at (u, v).
///
/// The four corners of the unit square reproduce the four corner masses.
pub fn evaluate<F: Float>(model: &Model<F>, u: F, v: F) -> Vec2<F> {
    let bu = bernstein(u);
    let bv = bernstein(v);
    let masses = model.masses();

    let mut point = Vec2::zero();
    for (j, wv) in bv.iter().enumerate() {
        for (i, wu) in bu.iter().enumerate() {
            point += masses[j * GRID_WIDTH + i].position.scale(*wu * *wv);
        }
    }
    point
}

/// Vertex positions and texture coordinates for a `cols` x `rows` mesh.
///
/// Both buffers hold `(cols + 1) * (rows + 1)` entries in row-major order.
/// Texture v is flipped so row 0 maps to v = 1.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeformationField<F: Float> {
    pub positions: AllocVec<Vec2<F>>,
    pub uvs: AllocVec<Vec2<F>>,
    cols: usize,
    rows: usize,
}

impl<F: Float> DeformationField<F> {
    pub fn new() -> Self {
        DeformationField {
            positions: AllocVec::new(),
            uvs: AllocVec::new(),
            cols: 0,
            rows: 0,
        }
    }

    /// Evaluate a fresh field from `model`.
    pub fn sample(model: &Model<F>, cols: usize, rows: usize) -> Result<Self, WobblyError> {
        let mut field = DeformationField::new();
        field.resample(model, cols, rows)?;
        Ok(field)
    }

    /// Re-evaluate in place, reusing the existing buffers.
    ///
    /// Cell counts below one are raised to one. On allocation failure the
    /// previous contents are left untouched.
    pub fn resample(&mut self, model: &Model<F>, cols: usize, rows: usize) -> Result<(), WobblyError> {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let count = cols
            .checked_add(1)
            .zip(rows.checked_add(1))
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(WobblyError::Allocation { requested: usize::MAX })?;

        let extra = count.saturating_sub(self.positions.len());
        reserve(&mut self.positions, extra)?;
        reserve(&mut self.uvs, extra)?;

        self.positions.clear();
        self.uvs.clear();

        let fcols = F::from_usize(cols);
        let frows = F::from_usize(rows);
        for y in 0..=rows {
            let v = F::from_usize(y) / frows;
            for x in 0..=cols {
                let u = F::from_usize(x) / fcols;
                self.positions.push(evaluate(model, u, v));
                self.uvs.push(Vec2::new(u, F::one() - v));
            }
        }

        self.cols = cols;
        self.rows = rows;
        Ok(())
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn vertex_count(&self) -> usize { self.positions.len() }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.positions[row * (self.cols + 1) + col]
    }
}
