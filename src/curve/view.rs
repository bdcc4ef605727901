//! Projective view state: rotation, zoom and the animation clock.
//!
//! The extractor works on a plain bivariate function; this module supplies
//! it. A plot point (px, py) is lifted to the homogeneous coordinate vector
//! (px, py, 1, 1), rotated by the current view matrix and fed to the stored
//! polynomial together with the animated parameters s = cos(τ), t = sin(τ).
//! Rotating the view therefore shows different affine charts of the same
//! projective curve, including its points at infinity.

use crate::curve::marching_squares::Domain;
use crate::symbolic::symbolic_engine::Expr;
use nalgebra::{Matrix4, Vector4};

const MAX_Y_SCALE: f64 = 40.0;
const MIN_Y_SCALE: f64 = 0.0001;

/// View transform and animation state shared by all curve slots.
#[derive(Clone, Debug)]
pub struct ViewState {
    rotation: Matrix4<f64>,
    vertical_scale: f64,
    horizontal_scale: f64,
    aspect_ratio: f64,
    virtual_time: f64,
    virtual_time_factor: f64,
    s: f64,
    t: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            rotation: Matrix4::identity(),
            vertical_scale: 2.001,
            horizontal_scale: 2.001,
            aspect_ratio: 1.0,
            virtual_time: 0.0,
            virtual_time_factor: 1.0,
            s: 1.0,
            t: 0.0,
        }
    }

    /// View down the z axis: the standard affine chart z = 1.
    pub fn snap_to_xy_plane(&mut self) {
        self.rotation = Matrix4::identity();
    }

    /// View down the y axis.
    pub fn snap_to_xz_plane(&mut self) {
        self.rotation = Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
    }

    /// View down the x axis.
    pub fn snap_to_yz_plane(&mut self) {
        self.rotation = Matrix4::new(
            0.0, 0.0, -1.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
    }

    pub fn rotation(&self) -> &Matrix4<f64> {
        &self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Matrix4<f64>) {
        self.rotation = rotation;
    }

    /// Sets the vertical half-height of the visible region, clamped to
    /// [0.0001, 40]; the horizontal scale follows the aspect ratio.
    pub fn set_y_scale(&mut self, new_scale: f64) {
        self.vertical_scale = new_scale.clamp(MIN_Y_SCALE, MAX_Y_SCALE);
        self.horizontal_scale = self.vertical_scale * self.aspect_ratio;
    }

    /// Updates the width/height ratio of the host viewport.
    pub fn set_aspect_ratio(&mut self, width: f64, height: f64) {
        self.aspect_ratio = width / height;
        self.horizontal_scale = self.vertical_scale * self.aspect_ratio;
    }

    pub fn scales(&self) -> (f64, f64) {
        (self.horizontal_scale, self.vertical_scale)
    }

    /// The currently visible plot rectangle.
    pub fn domain(&self) -> Domain {
        Domain::from_scales(self.horizontal_scale, self.vertical_scale)
    }

    /// Speed multiplier of the animation clock; 0 freezes s and t.
    pub fn set_virtual_time_factor(&mut self, factor: f64) {
        self.virtual_time_factor = factor;
    }

    /// Advances the animation clock by a frame interval in seconds and moves
    /// [s : t] along the unit circle.
    pub fn advance(&mut self, elapsed_seconds: f64) {
        self.virtual_time += elapsed_seconds * self.virtual_time_factor;
        self.s = self.virtual_time.cos();
        self.t = self.virtual_time.sin();
    }

    pub fn st(&self) -> (f64, f64) {
        (self.s, self.t)
    }

    /// Bivariate evaluator over the stored expression for the current view:
    /// projects plot coordinates through the rotation and binds s and t. The
    /// extractor only ever calls through this closure.
    pub fn evaluator<'a>(&'a self, expr: &'a Expr) -> impl Fn(f64, f64) -> f64 + Sync + 'a {
        move |px, py| {
            let v = self.rotation * Vector4::new(px, py, 1.0, 1.0);
            expr.eval_projective(&v, self.s, self.t)
        }
    }
}

/// Maps a 0..=100 animation-speed slider position to a time factor: a dead
/// zone around the middle, exponential response towards the ends, negative
/// values running the animation backwards.
pub fn time_factor_from_slider(value: i32) -> f64 {
    let c = (-20.0_f64 / 10.0).exp();
    if value < 55 && value > 45 {
        0.0
    } else if value >= 55 {
        (((value - 75) as f64 / 10.0).exp() - c) / (1.0 - c)
    } else {
        (-(-((value - 25) as f64) / 10.0).exp() + c) / (1.0 - c)
    }
}
