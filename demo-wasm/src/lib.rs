use wasm_bindgen::prelude::*;
use wobbly::{DeformationField, NoOpStepObserver, Rect, Surface, Wobbly, WobblyConfig};

// ---- Wobbly Window Demo ----

#[wasm_bindgen]
pub struct WobblyDemo {
    surface: Surface<f32>,
    wobbly: Option<Wobbly<f32>>,
    field: DeformationField<f32>,
}

#[wasm_bindgen]
impl WobblyDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32, width: f32, height: f32, cells: usize) -> Self {
        let mut surface = Surface::new(Rect::new(x, y, width, height), cells, cells);
        let wobbly = Wobbly::initialize(&mut surface, WobblyConfig::new()).ok();
        WobblyDemo {
            surface,
            wobbly,
            field: DeformationField::new(),
        }
    }

    pub fn grab(&mut self, x: f32, y: f32) {
        if let Some(w) = self.wobbly.as_mut() {
            w.grab(&mut self.surface, x, y);
        }
    }

    pub fn drag(&mut self, dx: f32, dy: f32) {
        if let Some(w) = self.wobbly.as_mut() {
            w.move_by(&mut self.surface, dx, dy);
        }
    }

    pub fn release(&mut self) {
        if let Some(w) = self.wobbly.as_mut() {
            w.ungrab();
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface.rect.width = width;
        self.surface.rect.height = height;
        if let Some(w) = self.wobbly.as_mut() {
            w.resize(&self.surface);
        }
    }

    /// Advance one frame. Returns true while the surface is still wobbling.
    pub fn update(&mut self, elapsed_ms: f32) -> bool {
        let Some(w) = self.wobbly.as_mut() else {
            return false;
        };
        let animating = w.tick(&mut self.surface, elapsed_ms, &mut NoOpStepObserver);
        if w.add_geometry(&mut self.surface, &mut self.field).is_err() {
            self.wobbly = None;
            return false;
        }
        w.finish_frame(&mut self.surface);
        animating
    }

    pub fn synced(&self) -> bool {
        self.surface.synced
    }

    /// Returns [x, y, width, height] of the surface rectangle.
    pub fn rect(&self) -> Vec<f32> {
        let r = self.surface.rect;
        vec![r.x, r.y, r.width, r.height]
    }

    /// Returns flat [x0, y0, x1, y1, ...] mesh vertices in row-major order.
    /// Empty while synced: draw `rect()` as a plain quad instead.
    pub fn vertices(&self) -> Vec<f32> {
        if self.surface.synced {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.field.vertex_count() * 2);
        for p in &self.field.positions {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns flat [u0, v0, u1, v1, ...] texture coordinates matching `vertices()`.
    pub fn uvs(&self) -> Vec<f32> {
        if self.surface.synced {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.field.uvs.len() * 2);
        for uv in &self.field.uvs {
            out.push(uv.x);
            out.push(uv.y);
        }
        out
    }

    pub fn cells(&self) -> usize {
        self.surface.x_cells
    }
}
