//! Mass-spring "wobbly window" deformation.
//!
//! `wobbly` animates a rectangular surface as a 4x4 grid of point masses
//! joined by Hookean springs. Input (grab, drag, resize, release) pins and
//! moves one mass; each frame the grid is integrated at a fixed sub-step
//! rate and resampled through a bicubic Bezier patch into a dense mesh the
//! renderer can draw.
//!
//! # Features
//!
//! - **Spring grid**: 16 masses, 24 structural springs, index-addressed
//! - **Fixed-rate integration**: semi-implicit Euler in 15 ms sub-steps,
//!   fractional time carried between frames
//! - **Settle detection**: summed force/velocity thresholds; settled
//!   surfaces are flagged for flat rendering
//! - **Bezier resampling**: arbitrary output resolution with texture coordinates
//! - **Observable**: monitor steps via the `StepObserver` trait or `log`
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod mass;
pub mod spring;
pub mod model;
pub mod step;
pub mod bezier;
pub mod animation;
pub mod surface;
pub mod wobbly;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use mass::PointMass;
pub use spring::{Spring, SpringAxis};
pub use model::{Model, GRID_WIDTH, GRID_HEIGHT, MASS_COUNT, SPRING_COUNT};
pub use step::StepOutcome;
pub use bezier::{bernstein, evaluate, DeformationField};
pub use animation::{Animation, AnimationCause};
pub use surface::{Rect, Surface};
pub use wobbly::Wobbly;
pub use config::WobblyConfig;
pub use observer::{StepObserver, NoOpStepObserver, LogObserver};
pub use error::WobblyError;
