//! Adaptive marching squares over a bivariate evaluator.
//!
//! The curve is built up by sampling the function on a square grid. Where a
//! cell edge changes sign we either recurse into the cell with a finer
//! sub-grid, or, at the maximum recursion depth, add vertices between the
//! sample points where the sign changed. Adjacent vertices in the collected
//! list are paired into line segments.
//!
//! Conventions relied on by tests:
//! - the recursion trigger uses strict sign changes (`product < 0`), the
//!   leaf-level crossing test uses `product <= 0` so an exact-zero endpoint
//!   counts as a crossing;
//! - vertices are emitted only at the maximum recursion depth, so a function
//!   that is zero on a whole region (no strict sign change anywhere) yields
//!   no vertices unless `max_recursion_depth` is 0;
//! - a cell that collects an odd number of crossing points (a degenerate or
//!   saddle configuration) drops its last point to restore an even count -
//!   an approximation compromise, not a correctness guarantee;
//! - any comparison involving NaN is false, so NaN samples deterministically
//!   suppress both recursion and vertex emission for the touched edges;
//! - collection stops silently once `max_vertices` points were gathered.

use itertools::Itertools;
use nalgebra::Point2;

/// Sub-grid resolution used when recursing into a cell with a sign change.
const RECURSION_RES: usize = 2;

/// Default cap on collected vertices per extraction call.
pub const MAX_NUM_VERTICES: usize = 100_000;

/// Default top-level grid resolution.
pub const DEFAULT_RESOLUTION: usize = 200;

/// Axis-aligned sampling rectangle in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Domain {
    /// Rectangle spanning [-h, h] x [-v, v].
    pub fn from_scales(horizontal: f64, vertical: f64) -> Self {
        Domain {
            x_min: -horizontal,
            x_max: horizontal,
            y_min: -vertical,
            y_max: vertical,
        }
    }

    pub fn square(half_width: f64) -> Self {
        Self::from_scales(half_width, half_width)
    }
}

/// Knobs of one extraction call.
#[derive(Clone, Copy, Debug)]
pub struct ExtractionSettings {
    pub resolution: usize,
    pub max_recursion_depth: usize,
    pub max_vertices: usize,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        ExtractionSettings {
            resolution: DEFAULT_RESOLUTION,
            max_recursion_depth: 1,
            max_vertices: MAX_NUM_VERTICES,
        }
    }
}

/// One line segment of the approximated zero set, in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

/// Zero position along an edge, linearly interpolated from the endpoint
/// values. Falls back to the edge midpoint when the endpoints are equal (both
/// zero after a `<= 0` product test) or not finite.
#[inline]
fn edge_zero(origin: f64, step: f64, a: f64, b: f64) -> f64 {
    let offset = (-a * step) / (b - a);
    if offset.is_finite() {
        origin + offset
    } else {
        origin + 0.5 * step
    }
}

fn sample_patch<F>(
    f: &F,
    res: usize,
    domain: Domain,
    depth: usize,
    settings: &ExtractionSettings,
    active_vertices: &mut Vec<Point2<f64>>,
) where
    F: Fn(f64, f64) -> f64,
{
    let xstep = (domain.x_max - domain.x_min) / res as f64;
    let ystep = (domain.y_max - domain.y_min) / res as f64;

    // Function values at the (res+1)^2 grid points.
    let mut vals = vec![0.0; (res + 1) * (res + 1)];
    for i in 0..=res {
        for j in 0..=res {
            let x = domain.x_min + xstep * i as f64;
            let y = domain.y_min + ystep * j as f64;
            vals[(res + 1) * i + j] = f(x, y);
        }
    }

    for i in 0..res {
        for j in 0..res {
            if active_vertices.len() >= settings.max_vertices {
                return;
            }

            let x = domain.x_min + xstep * i as f64;
            let y = domain.y_min + ystep * j as f64;

            let val_ll = vals[(res + 1) * i + j];
            let val_lr = vals[(res + 1) * (i + 1) + j];
            let val_ul = vals[(res + 1) * i + j + 1];
            let val_ur = vals[(res + 1) * (i + 1) + j + 1];

            if depth < settings.max_recursion_depth {
                // Strict sign change on any edge: refine this cell with a
                // finer sub-grid instead of emitting vertices.
                if val_ll * val_lr < 0.0
                    || val_ul * val_ur < 0.0
                    || val_ll * val_ul < 0.0
                    || val_lr * val_ur < 0.0
                {
                    let cell = Domain {
                        x_min: x,
                        x_max: x + xstep,
                        y_min: y,
                        y_max: y + ystep,
                    };
                    sample_patch(f, RECURSION_RES, cell, depth + 1, settings, active_vertices);
                }
            } else {
                let mut crossings = 0;

                if val_ll * val_lr <= 0.0 {
                    active_vertices.push(Point2::new(edge_zero(x, xstep, val_ll, val_lr), y));
                    crossings += 1;
                }
                if val_ul * val_ur <= 0.0 {
                    active_vertices
                        .push(Point2::new(edge_zero(x, xstep, val_ul, val_ur), y + ystep));
                    crossings += 1;
                }
                if val_ll * val_ul <= 0.0 {
                    active_vertices.push(Point2::new(x, edge_zero(y, ystep, val_ll, val_ul)));
                    crossings += 1;
                }
                if val_lr * val_ur <= 0.0 {
                    active_vertices
                        .push(Point2::new(x + xstep, edge_zero(y, ystep, val_lr, val_ur)));
                    crossings += 1;
                }

                // Leave an even number of vertices for this cell; adjacent
                // vertices in the list are paired into lines.
                if crossings == 1 || crossings == 3 {
                    active_vertices.pop();
                }
            }
        }
    }
}

/// Extracts the zero set of a bivariate function as line segments.
///
/// The evaluator is typically a closure over a stored expression, the view
/// transform and the current s, t values (see `curve::view`); extraction does
/// not own or interpret the transform, it only calls through it. Output is
/// deterministic for identical inputs and never contains more than
/// `settings.max_vertices` points.
pub fn extract_curve<F>(f: &F, domain: Domain, settings: &ExtractionSettings) -> Vec<Segment>
where
    F: Fn(f64, f64) -> f64,
{
    let mut active_vertices = Vec::new();
    sample_patch(
        f,
        settings.resolution,
        domain,
        0,
        settings,
        &mut active_vertices,
    );
    active_vertices.truncate(settings.max_vertices);
    active_vertices
        .into_iter()
        .tuples()
        .map(|(start, end)| Segment { start, end })
        .collect()
}
