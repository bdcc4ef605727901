//! Numerical evaluation of symbolic expressions.
//!
//! `eval` walks the tree directly; `lambdify` compiles the tree once into a
//! nested closure so the per-tick sampling loop of the curve extractor does
//! not re-match the enum at every grid point. Both are total over the
//! grammar's closed operator set: there is no division, so no
//! division-by-zero, and powers are non-negative integers. Overflow to
//! infinity or NaN is possible for large exponents or coordinates and is
//! deliberately not guarded here; the extractor treats such values as having
//! no determinable sign.

use crate::symbolic::symbolic_engine::{Expr, Var};
use nalgebra::Vector4;

/// Signature of a compiled evaluator over the five parameters.
pub type Evaluator = Box<dyn Fn(f64, f64, f64, f64, f64) -> f64 + Send + Sync>;

/// Integer power by repeated multiplication. Exponent 0 yields exactly 1.0
/// for every base, including 0.0 and NaN.
#[inline(always)]
fn pow_repeated(base: f64, exp: u32) -> f64 {
    let mut acc = 1.0;
    for _ in 0..exp {
        acc *= base;
    }
    acc
}

impl Expr {
    /// Evaluates the expression at a point by structural recursion.
    pub fn eval(&self, x: f64, y: f64, z: f64, s: f64, t: f64) -> f64 {
        match self {
            Expr::Const(v) => *v as f64,
            Expr::Var(Var::X) => x,
            Expr::Var(Var::Y) => y,
            Expr::Var(Var::Z) => z,
            Expr::Var(Var::S) => s,
            Expr::Var(Var::T) => t,
            Expr::Sum(terms) => terms.iter().map(|e| e.eval(x, y, z, s, t)).sum(),
            Expr::Prod(factors) => factors.iter().map(|e| e.eval(x, y, z, s, t)).product(),
            Expr::Pow(base, exp) => pow_repeated(base.eval(x, y, z, s, t), *exp),
        }
    }

    /// Evaluates at a homogeneous coordinate vector; the w component is
    /// ignored. This is the form the view transform feeds the extractor.
    pub fn eval_projective(&self, v: &Vector4<f64>, s: f64, t: f64) -> f64 {
        self.eval(v.x, v.y, v.z, s, t)
    }

    /// Compiles the expression into an executable closure tree mirroring the
    /// expression structure. The result is `Send + Sync`, so extraction over
    /// different curve slots can run in parallel.
    pub fn lambdify(&self) -> Evaluator {
        match self {
            Expr::Const(v) => {
                let v = *v as f64;
                Box::new(move |_, _, _, _, _| v)
            }
            Expr::Var(Var::X) => Box::new(|x, _, _, _, _| x),
            Expr::Var(Var::Y) => Box::new(|_, y, _, _, _| y),
            Expr::Var(Var::Z) => Box::new(|_, _, z, _, _| z),
            Expr::Var(Var::S) => Box::new(|_, _, _, s, _| s),
            Expr::Var(Var::T) => Box::new(|_, _, _, _, t| t),
            Expr::Sum(terms) => {
                let compiled: Vec<Evaluator> = terms.iter().map(|e| e.lambdify()).collect();
                Box::new(move |x, y, z, s, t| {
                    compiled.iter().map(|f| f(x, y, z, s, t)).sum()
                })
            }
            Expr::Prod(factors) => {
                let compiled: Vec<Evaluator> = factors.iter().map(|e| e.lambdify()).collect();
                Box::new(move |x, y, z, s, t| {
                    compiled.iter().map(|f| f(x, y, z, s, t)).product()
                })
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify();
                let exp = *exp;
                Box::new(move |x, y, z, s, t| pow_repeated(base_fn(x, y, z, s, t), exp))
            }
        }
    }
}
