/// a module that turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedProjCurve::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^2 + y^2 - 1").unwrap();
/// println!("parsed_expression {}", parsed_expression);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module that defines the expression tree of plane-curve polynomials:
/// 1) integer constants, the variables x, y, z and the animation parameters s, t
/// 2) sums, products and non-negative integer powers
/// 3) operator overloading and pretty-printing with minimal parentheses
///# Example
/// ```
/// use RustedProjCurve::symbolic::symbolic_engine::{Expr, Var};
/// let f = Expr::Var(Var::X).pow(2) + Expr::Var(Var::Y).pow(2) - Expr::Const(1);
/// assert_eq!(f.to_string(), "x^2 + y^2 - 1");
/// ```
pub mod symbolic_engine;
/// a module that rewrites expressions into a canonical flattened form: n-ary
/// sums and products, folded integer coefficients, deterministic term order.
/// Simplification is idempotent and value-preserving.
///# Example
/// ```
/// use RustedProjCurve::symbolic::symbolic_engine::Expr;
/// let e = Expr::parse_expression("x*1 + 0 + 2*3").unwrap().simplify();
/// assert_eq!(e.to_string(), "6 + x");
/// ```
pub mod symbolic_simplify;
/// a module that pads a polynomial with powers of z so that every additive
/// term has the same total degree in x, y, z - the form a projective plane
/// curve requires. The animation parameters s, t never count towards the
/// degree.
///# Example
/// ```
/// use RustedProjCurve::symbolic::symbolic_engine::Expr;
/// let (h, degree) = Expr::parse_expression("x^2 + y^2 - 1").unwrap().homogenize();
/// assert_eq!(degree, 2);
/// assert_eq!(h.to_string(), "x^2 + y^2 - z^2");
/// ```
pub mod symbolic_homogenize;
/// a module that evaluates a symbolic expression numerically, either by a
/// direct tree walk (`eval`) or by compiling it once into a closure tree
/// (`lambdify`) for tight sampling loops.
pub mod symbolic_lambdify;
#[cfg(test)]
mod symbolic_engine_tests;
