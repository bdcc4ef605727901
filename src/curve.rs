/// a module implementing adaptive marching squares: samples a bivariate
/// function on a grid, recurses into cells whose edges change sign and pairs
/// the interpolated zero crossings into line segments
pub mod marching_squares;
/// view transform and animation clock: rotation of the projective coordinate
/// frame, vertical/horizontal zoom, and the s = cos, t = sin parameter pair
pub mod view;
/// per-curve slots: formula text in, homogenized expression and color out,
/// plus the parallel extraction of all curves for one frame
pub mod slots;
