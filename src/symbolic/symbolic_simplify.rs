//! # Symbolic Expression Simplification Module
//!
//! Canonical algebraic reduction of parsed polynomials. One structural pass
//! already reaches a fixed point for every shape the grammar can produce, so
//! `simplify()` is idempotent: simplifying twice yields a structurally
//! identical tree.
//!
//! Rules applied, bottom up:
//!
//! 1. **Constant folding**: subtrees made only of constants collapse to one
//!    `Const` (saturating integer arithmetic keeps the pass total).
//! 2. **Flattening**: `Sum` inside `Sum` and `Prod` inside `Prod` merge into
//!    a single child list.
//! 3. **Identity elimination**: zero terms leave sums, one-factors leave
//!    products, `x^0` becomes 1 and `x^1` becomes its base.
//! 4. **Absorption**: a product containing a zero factor collapses to 0.
//! 5. **Canonical ordering**: children of `Sum`/`Prod` are sorted by a
//!    structural total order (kind rank, then numeric/lexical key), so equal
//!    polynomials produce structurally equal trees.
//!
//! Degenerate empty lists fold to `Const(0)` / `Const(1)` and single-child
//! lists unwrap, so the output never contains a `Sum` or `Prod` with fewer
//! than two children.

use crate::symbolic::symbolic_engine::Expr;
use std::cmp::Ordering;

/// Rank of a node kind in the canonical child order. Constants sort first so
/// a folded coefficient stays at the front of its list across repeated
/// simplification passes.
fn kind_rank(e: &Expr) -> u8 {
    match e {
        Expr::Const(_) => 0,
        Expr::Var(_) => 1,
        Expr::Pow(_, _) => 2,
        Expr::Prod(_) => 3,
        Expr::Sum(_) => 4,
    }
}

/// Deterministic total order on expressions: kind rank first, then the
/// variant's own key, recursing into children for composite nodes.
pub fn structural_order(a: &Expr, b: &Expr) -> Ordering {
    match (a, b) {
        (Expr::Const(u), Expr::Const(v)) => u.cmp(v),
        (Expr::Var(u), Expr::Var(v)) => u.cmp(v),
        (Expr::Pow(base_a, exp_a), Expr::Pow(base_b, exp_b)) => {
            structural_order(base_a, base_b).then(exp_a.cmp(exp_b))
        }
        (Expr::Prod(xs), Expr::Prod(ys)) | (Expr::Sum(xs), Expr::Sum(ys)) => {
            for (x, y) in xs.iter().zip(ys.iter()) {
                let ord = structural_order(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            xs.len().cmp(&ys.len())
        }
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Integer power with saturation so constant folding stays total.
fn pow_saturating(base: i64, exp: u32) -> i64 {
    base.checked_pow(exp).unwrap_or_else(|| {
        if base < 0 && exp % 2 == 1 {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

impl Expr {
    /// Returns the canonically reduced form of the expression. Total, pure
    /// and semantics-preserving: the result evaluates identically to the
    /// input for all parameter values.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Const(_) | Expr::Var(_) => self.clone(),
            Expr::Pow(base, exp) => {
                // x^0 = 1 for every base, matching the evaluator's convention
                // that 0^0 evaluates to 1.
                if *exp == 0 {
                    return Expr::Const(1);
                }
                let base = base.simplify();
                if let Expr::Const(v) = base {
                    return Expr::Const(pow_saturating(v, *exp));
                }
                if *exp == 1 {
                    return base;
                }
                Expr::Pow(base.boxed(), *exp)
            }
            Expr::Prod(factors) => {
                let mut coefficient: i64 = 1;
                let mut rest = Vec::new();
                for factor in factors {
                    match factor.simplify() {
                        // flatten nested products; their constants are
                        // already folded into one leading Const
                        Expr::Prod(inner) => {
                            for f in inner {
                                match f {
                                    Expr::Const(v) => {
                                        coefficient = coefficient.saturating_mul(v)
                                    }
                                    other => rest.push(other),
                                }
                            }
                        }
                        Expr::Const(v) => coefficient = coefficient.saturating_mul(v),
                        other => rest.push(other),
                    }
                }
                if coefficient == 0 {
                    return Expr::Const(0);
                }
                rest.sort_by(structural_order);
                if coefficient != 1 {
                    rest.insert(0, Expr::Const(coefficient));
                }
                match rest.len() {
                    0 => Expr::Const(1),
                    1 => rest.pop().expect("nonempty"),
                    _ => Expr::Prod(rest),
                }
            }
            Expr::Sum(terms) => {
                let mut constant: i64 = 0;
                let mut rest = Vec::new();
                for term in terms {
                    match term.simplify() {
                        Expr::Sum(inner) => {
                            for t in inner {
                                match t {
                                    Expr::Const(v) => constant = constant.saturating_add(v),
                                    other => rest.push(other),
                                }
                            }
                        }
                        Expr::Const(v) => constant = constant.saturating_add(v),
                        other => rest.push(other),
                    }
                }
                rest.sort_by(structural_order);
                if constant != 0 {
                    rest.insert(0, Expr::Const(constant));
                }
                match rest.len() {
                    0 => Expr::Const(0),
                    1 => rest.pop().expect("nonempty"),
                    _ => Expr::Sum(rest),
                }
            }
        }
    }
}
