//! Homogenization of simplified polynomials.
//!
//! A projective plane curve is the zero locus of a polynomial homogeneous in
//! x, y, z. User input rarely is: `x + y^3` mixes a degree-1 and a degree-3
//! term. `homogenize` pads every additive term up to the maximum term degree
//! D by multiplying with the missing power of z, here producing
//! `x*z^2 + y^3`, so that the stored expression satisfies
//! `E(λx, λy, λz, s, t) = λ^D · E(x, y, z, s, t)`.
//!
//! The animation parameters s and t are free scalars and never count towards
//! the degree: `s*x^2 - t*y^2` is already homogeneous of degree 2.

use crate::symbolic::symbolic_engine::{Expr, Var};

impl Expr {
    /// Total degree of the expression in x, y, z only. For an additive term
    /// this is the sum of the exponents of its projective factors; for a sum
    /// it is the maximum over its terms.
    pub fn projective_degree(&self) -> u32 {
        match self {
            Expr::Const(_) => 0,
            Expr::Var(v) => {
                if v.is_projective() {
                    1
                } else {
                    0
                }
            }
            Expr::Sum(terms) => terms.iter().map(|t| t.projective_degree()).max().unwrap_or(0),
            Expr::Prod(factors) => factors.iter().map(|f| f.projective_degree()).sum(),
            Expr::Pow(base, exp) => base.projective_degree() * exp,
        }
    }

    /// Splits the expression into sum-free additive terms, distributing
    /// products and powers over any sums they contain. Padding needs every
    /// term to carry a single well-defined degree, and a factor like
    /// `(x + 1)^2` hides a degree-0 part inside a degree-2 term until it is
    /// multiplied out.
    fn expanded_terms(&self) -> Vec<Expr> {
        fn cross(acc: Vec<Expr>, factor_terms: &[Expr]) -> Vec<Expr> {
            let mut next = Vec::with_capacity(acc.len() * factor_terms.len());
            for a in &acc {
                for b in factor_terms {
                    next.push(a.clone() * b.clone());
                }
            }
            next
        }
        match self {
            Expr::Const(_) | Expr::Var(_) => vec![self.clone()],
            Expr::Sum(terms) => terms.iter().flat_map(|t| t.expanded_terms()).collect(),
            Expr::Prod(factors) => {
                let mut acc = vec![Expr::Const(1)];
                for factor in factors {
                    acc = cross(acc, &factor.expanded_terms());
                }
                acc
            }
            Expr::Pow(base, exp) => {
                let base_terms = base.expanded_terms();
                if base_terms.len() == 1 {
                    vec![Expr::Pow(
                        base_terms.into_iter().next().expect("nonempty").boxed(),
                        *exp,
                    )]
                } else {
                    let mut acc = vec![Expr::Const(1)];
                    for _ in 0..*exp {
                        acc = cross(acc, &base_terms);
                    }
                    acc
                }
            }
        }
    }

    /// Pads the polynomial to a uniform total degree in x, y, z and returns
    /// the homogeneous expression together with that degree.
    ///
    /// The input is simplified and then multiplied out into sum-free additive
    /// terms, so every term carries one degree. Every term of degree d below
    /// the maximum D gains a `z^(D-d)` factor, and the reassembled sum is
    /// simplified again to restore canonical form. The zero expression
    /// homogenizes to itself with degree 0.
    pub fn homogenize(&self) -> (Expr, u32) {
        let terms = self.simplify().expanded_terms();
        let degree = terms
            .iter()
            .map(|t| t.projective_degree())
            .max()
            .unwrap_or(0);
        let padded: Vec<Expr> = terms
            .into_iter()
            .map(|term| {
                let d = term.projective_degree();
                if d < degree {
                    term * Expr::Var(Var::Z).pow(degree - d)
                } else {
                    term
                }
            })
            .collect();
        let assembled = if padded.len() == 1 {
            padded.into_iter().next().expect("nonempty")
        } else {
            Expr::Sum(padded)
        };
        (assembled.simplify(), degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::parse_expr::parse_expression;

    fn homogenized(input: &str) -> (Expr, u32) {
        parse_expression(input).unwrap().homogenize()
    }

    #[test]
    fn test_mixed_degrees_padded_with_z() {
        let (expr, degree) = homogenized("x + y^3");
        assert_eq!(degree, 3);
        assert_eq!(expr, parse_expression("y^3 + x*z^2").unwrap().simplify());
    }

    #[test]
    fn test_constant_term_gains_full_power() {
        let (expr, degree) = homogenized("x^2 + y^2 - 1");
        assert_eq!(degree, 2);
        assert_eq!(
            expr,
            parse_expression("x^2 + y^2 - z^2").unwrap().simplify()
        );
    }

    #[test]
    fn test_already_homogeneous_unchanged() {
        let (expr, degree) = homogenized("y^2*z - x^3");
        assert_eq!(degree, 3);
        assert_eq!(expr, parse_expression("y^2*z - x^3").unwrap().simplify());
    }

    #[test]
    fn test_single_term_trivially_homogeneous() {
        let (expr, degree) = homogenized("x^2*y");
        assert_eq!(degree, 3);
        assert_eq!(expr, parse_expression("x^2*y").unwrap().simplify());
    }

    #[test]
    fn test_zero_homogenizes_to_itself() {
        let (expr, degree) = homogenized("0");
        assert_eq!(degree, 0);
        assert_eq!(expr, Expr::Const(0));
    }

    #[test]
    fn test_animation_parameters_excluded_from_degree() {
        // s and t are free scalars: s*x^2 - t*y^2 is homogeneous of degree 2
        let (expr, degree) = homogenized("s*x^2 - t*y^2");
        assert_eq!(degree, 2);
        assert_eq!(expr, parse_expression("s*x^2 - t*y^2").unwrap().simplify());
        // a bare s-term has projective degree 0 and gets the full z padding
        let (_, degree) = homogenized("s + x^2");
        assert_eq!(degree, 2);
    }

    #[test]
    fn test_power_of_sum_expanded_before_padding() {
        // (x + 1)^2 hides a constant inside a degree-2 term; it must be
        // multiplied out so the inner parts get their own z padding
        let (expr, degree) = homogenized("(x + 1)^2 + y^3");
        assert_eq!(degree, 3);
        for (x, y, z) in [(0.7, -0.3, 1.1), (1.0, 1.0, 1.0), (-2.0, 0.5, 0.25)] {
            let lambda = 2.0;
            let scaled = expr.eval(lambda * x, lambda * y, lambda * z, 0.0, 0.0);
            let reference = lambda.powi(3) * expr.eval(x, y, z, 0.0, 0.0);
            approx::assert_relative_eq!(scaled, reference, max_relative = 1e-12);
        }
        // in the affine chart z = 1 the curve is unchanged
        approx::assert_relative_eq!(
            expr.eval(0.7, -0.3, 1.0, 0.0, 0.0),
            (0.7_f64 + 1.0).powi(2) + (-0.3_f64).powi(3),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_product_of_sums_expanded_before_padding() {
        // (x + 1)*(x - 1) = x^2 - 1, homogenized to x^2 - z^2
        let (expr, degree) = homogenized("(x + 1)*(x - 1)");
        assert_eq!(degree, 2);
        let reference = parse_expression("x^2 - z^2").unwrap();
        for (x, z) in [(0.5, 1.5), (-1.0, 2.0), (3.0, 0.1)] {
            approx::assert_relative_eq!(
                expr.eval(x, 0.0, z, 0.0, 0.0),
                reference.eval(x, 0.0, z, 0.0, 0.0),
                max_relative = 1e-12,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_homogeneity_law_sampled() {
        use rand::Rng;
        let mut rng = rand::rng();
        for input in [
            "x + y^3",
            "x^2 + y^2 - 1",
            "x*y - z + 5",
            "s*x^3 - t*y + 2",
            "(x + 1)^2 + y^3",
            "(x + y)*(y - 2) + z^2",
        ] {
            let (homog, degree) = homogenized(input);
            for _ in 0..30 {
                let lambda: f64 = rng.random_range(0.2..2.0);
                let (x, y, z, s, t) = (
                    rng.random_range(-2.0..2.0),
                    rng.random_range(-2.0..2.0),
                    rng.random_range(-2.0..2.0),
                    rng.random_range(-2.0..2.0),
                    rng.random_range(-2.0..2.0),
                );
                let scaled = homog.eval(lambda * x, lambda * y, lambda * z, s, t);
                let reference = lambda.powi(degree as i32) * homog.eval(x, y, z, s, t);
                approx::assert_relative_eq!(
                    scaled,
                    reference,
                    max_relative = 1e-9,
                    epsilon = 1e-12
                );
            }
        }
    }
}
