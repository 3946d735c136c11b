//! Event-driven lifecycle of a wobbly surface.
//!
//! The host calls [`Wobbly::grab`], [`Wobbly::move_by`], [`Wobbly::resize`]
//! and [`Wobbly::ungrab`] as input arrives, then once per frame
//! [`Wobbly::tick`] followed by [`Wobbly::add_geometry`] (or
//! [`Wobbly::evaluate_field`]) and [`Wobbly::finish_frame`]. Input must be
//! applied between ticks, never concurrently with one.

use crate::animation::{Animation, AnimationCause};
use crate::bezier::DeformationField;
use crate::config::WobblyConfig;
use crate::error::WobblyError;
use crate::float::Float;
use crate::model::Model;
use crate::observer::StepObserver;
use crate::step::StepOutcome;
use crate::surface::Surface;
use crate::vec::Vec2;

/// Per-surface wobble state.
pub struct Wobbly<F: Float> {
    model: Option<Model<F>>,
    animation: Animation,
    grabbed: bool,
    config: WobblyConfig<F>,
}

impl<F: Float> Wobbly<F> {
    /// Create the controller and its model for `surface`.
    ///
    /// On failure the surface is marked synced so the host can keep
    /// rendering it flat.
    pub fn initialize(surface: &mut Surface<F>, config: WobblyConfig<F>) -> Result<Self, WobblyError> {
        match Model::build(&surface.rect) {
            Ok(model) => Ok(Wobbly {
                model: Some(model),
                animation: Animation::IDLE,
                grabbed: false,
                config,
            }),
            Err(err) => {
                log::warn!("wobbly disabled: {}", err);
                surface.synced = true;
                Err(err)
            }
        }
    }

    /// Tear down the model and any state tied to the surface.
    pub fn finalize(self) {
        log::debug!("wobbly finalized (animating: {})", self.animation.is_animating());
    }

    /// Build the model if it is missing. On failure, degrade to flat rendering.
    fn ensure_model(&mut self, surface: &mut Surface<F>) -> bool {
        if self.model.is_some() {
            return true;
        }
        match Model::build(&surface.rect) {
            Ok(model) => {
                self.model = Some(model);
                true
            }
            Err(err) => {
                log::warn!("wobbly disabled: {}", err);
                self.disable(surface);
                false
            }
        }
    }

    fn disable(&mut self, surface: &mut Surface<F>) {
        self.model = None;
        self.animation = Animation::IDLE;
        self.grabbed = false;
        surface.synced = true;
    }

    /// Pointer grabbed the surface at (x, y).
    ///
    /// The nearest mass becomes the anchor and its neighbours get a small
    /// kick so the grab is visible before the pointer moves.
    pub fn grab(&mut self, surface: &mut Surface<F>, x: F, y: F) {
        if !self.ensure_model(surface) {
            return;
        }
        let Some(model) = self.model.as_mut() else {
            return;
        };

        let anchor = model.grab(Vec2::new(x, y), self.config.grab_impulse);
        self.grabbed = true;
        self.animation.insert(AnimationCause::SeededByGrab);
        surface.synced = false;
        log::debug!("wobbly grab at ({:?}, {:?}) anchored mass {}", x, y, anchor);
    }

    /// Pointer dragged by (dx, dy). Ignored unless grabbed.
    pub fn move_by(&mut self, surface: &mut Surface<F>, dx: F, dy: F) {
        if !self.grabbed {
            return;
        }
        let Some(model) = self.model.as_mut() else {
            return;
        };
        if model.translate_anchor(Vec2::new(dx, dy)) {
            self.animation.insert(AnimationCause::SeededByGrab);
            surface.synced = false;
        }
    }

    /// The surface rectangle changed size.
    ///
    /// Degenerate sizes are ignored until a valid one arrives.
    pub fn resize(&mut self, surface: &Surface<F>) {
        if !surface.rect.is_valid() {
            log::debug!("wobbly resize ignored: degenerate rect {:?}", surface.rect);
            return;
        }
        let animating = self.animation.is_animating();
        if let Some(model) = self.model.as_mut() {
            model.rebuild_springs(&surface.rect, animating);
            log::debug!("wobbly resize to {:?}x{:?} (animating: {})", surface.rect.width, surface.rect.height, animating);
        }
    }

    /// Pointer released. The grid springs back toward rest.
    pub fn ungrab(&mut self) {
        if !self.grabbed {
            return;
        }
        if let Some(model) = self.model.as_mut() {
            model.release_anchor();
            self.animation.insert(AnimationCause::SeededByGrab);
        }
        self.grabbed = false;
        log::debug!("wobbly ungrab");
    }

    /// Advance the animation by `elapsed_ms` since the previous frame.
    ///
    /// Returns whether the surface is still animating. On settling the
    /// surface is moved to the model's top-left corner and marked synced.
    pub fn tick<O: StepObserver<F>>(
        &mut self,
        surface: &mut Surface<F>,
        elapsed_ms: F,
        observer: &mut O,
    ) -> bool {
        if !self.animation.is_animating() {
            return false;
        }
        let Some(model) = self.model.as_mut() else {
            self.animation = Animation::IDLE;
            return false;
        };

        // A fresh seed with no motion yet must not replay a long idle gap.
        let elapsed_ms = if self.animation.contains(AnimationCause::ResidualVelocity) {
            elapsed_ms
        } else {
            elapsed_ms.min(self.config.nominal_frame_ms)
        };

        match model.step(elapsed_ms, &self.config, observer) {
            StepOutcome::Pending => {}
            StepOutcome::Stepped { animation, .. } => {
                self.animation = animation;
                if !animation.is_animating() {
                    surface.set_position(model.top_left());
                    surface.synced = true;
                    log::debug!("wobbly settled");
                }
            }
        }
        self.animation.is_animating()
    }

    /// Keep the surface position on the deformed bounds while animating.
    pub fn finish_frame(&self, surface: &mut Surface<F>) {
        if !self.animation.is_animating() {
            return;
        }
        if let Some(model) = self.model.as_ref() {
            surface.set_position(model.top_left());
        }
    }

    /// Sample the deformation field at the given resolution.
    ///
    /// Returns `Ok(None)` while the surface is synced: a flat quad suffices.
    pub fn evaluate_field(
        &self,
        surface: &Surface<F>,
        cols: usize,
        rows: usize,
    ) -> Result<Option<DeformationField<F>>, WobblyError> {
        match self.model.as_ref() {
            Some(model) if !surface.synced => DeformationField::sample(model, cols, rows).map(Some),
            _ => Ok(None),
        }
    }

    /// Resample into `field` at the surface's own cell counts.
    ///
    /// Returns whether `field` was written. An allocation failure disables
    /// the wobble and leaves the surface synced.
    pub fn add_geometry(
        &mut self,
        surface: &mut Surface<F>,
        field: &mut DeformationField<F>,
    ) -> Result<bool, WobblyError> {
        if surface.synced {
            return Ok(false);
        }
        let Some(model) = self.model.as_ref() else {
            return Ok(false);
        };
        match field.resample(model, surface.x_cells, surface.y_cells) {
            Ok(()) => Ok(true),
            Err(err) => {
                log::warn!("wobbly disabled: {}", err);
                self.disable(surface);
                Err(err)
            }
        }
    }

    pub fn animation(&self) -> Animation { self.animation }
    pub fn is_animating(&self) -> bool { self.animation.is_animating() }
    pub fn is_grabbed(&self) -> bool { self.grabbed }
    pub fn model(&self) -> Option<&Model<F>> { self.model.as_ref() }
    pub fn config(&self) -> &WobblyConfig<F> { &self.config }
}
