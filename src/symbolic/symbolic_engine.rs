//! # Symbolic Engine Module
//!
//! Core expression model for the projective curve viewer. A formula typed by the
//! user is parsed into an [`Expr`] tree, algebraically reduced by `simplify()`,
//! padded to a uniform total degree in x, y, z by `homogenize()` and finally
//! evaluated numerically on every render tick.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The closed set of node kinds a polynomial over {x, y, z, s, t} can contain:
//! - **Constants**: `Const(i64)` - integer literals
//! - **Variables**: `Var(Var)` - one of the five recognized parameters
//! - **Sums**: `Sum(Vec<Expr>)` - n-ary additive combination
//! - **Products**: `Prod(Vec<Expr>)` - n-ary multiplicative combination
//! - **Powers**: `Pow(Box<Expr>, u32)` - non-negative integer exponents only
//!
//! The grammar never produces division, fractional powers or transcendental
//! functions, so none of those exist as variants and every operation on the
//! tree is total.
//!
//! ### Key Methods
//! - `parse_expression(input)` - text to tree (see `parse_expr` module)
//! - `simplify()` - canonical algebraic reduction
//! - `homogenize()` - degree padding with powers of z
//! - `eval(x, y, z, s, t)` / `lambdify()` - numerical evaluation
//!
//! Trees are immutable once built: every transformation returns a new tree and
//! the caller keeps one tree per curve slot until the next edit replaces it.
//!
//! Operator overloading (`+`, `-`, `*`, unary `-`) is provided for building
//! expressions in tests and host code with natural syntax.

use std::fmt;
use strum_macros::{Display as StrumDisplay, EnumIter};

/// The five parameters a formula may reference. x, y, z are the projective
/// coordinates of the plane curve; s and t are free scalar animation
/// parameters excluded from degree counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, StrumDisplay, EnumIter)]
pub enum Var {
    #[strum(serialize = "x")]
    X,
    #[strum(serialize = "y")]
    Y,
    #[strum(serialize = "z")]
    Z,
    #[strum(serialize = "s")]
    S,
    #[strum(serialize = "t")]
    T,
}

impl Var {
    /// Maps a source letter to a variable, `None` for any other letter.
    pub fn from_letter(c: char) -> Option<Var> {
        match c {
            'x' => Some(Var::X),
            'y' => Some(Var::Y),
            'z' => Some(Var::Z),
            's' => Some(Var::S),
            't' => Some(Var::T),
            _ => None,
        }
    }

    /// True for x, y, z - the coordinates that count towards the projective
    /// degree. s and t are animation parameters and do not.
    pub fn is_projective(&self) -> bool {
        matches!(self, Var::X | Var::Y | Var::Z)
    }
}

/// Symbolic polynomial expression as an immutable tree.
///
/// `Sum` and `Prod` hold ordered child lists; the simplifier flattens nested
/// lists and puts children into a deterministic total order so that equal
/// polynomials compare structurally equal. Degenerate empty lists never leave
/// the simplifier: they fold to `Const(0)` / `Const(1)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Integer literal
    Const(i64),
    /// Parameter reference
    Var(Var),
    /// Additive combination of two or more terms
    Sum(Vec<Expr>),
    /// Multiplicative combination of two or more factors
    Prod(Vec<Expr>),
    /// Base raised to a non-negative integer exponent
    Pow(Box<Expr>, u32),
}

/// Precedence class of an expression node, derived from the variant and used
/// by the `Display` impl for minimal parenthesization. Low to high:
/// sum-level, product-level, power-level, atoms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Sum,
    Prod,
    Pow,
    Atom,
}

impl Expr {
    /// Precedence class for print formatting. Negative constants format with a
    /// leading minus and therefore bind like a product, not an atom.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Const(v) if *v < 0 => Precedence::Prod,
            Expr::Const(_) | Expr::Var(_) => Precedence::Atom,
            Expr::Sum(_) => Precedence::Sum,
            Expr::Prod(_) => Precedence::Prod,
            Expr::Pow(_, _) => Precedence::Pow,
        }
    }

    /// Convenience wrapper for building recursive nodes.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates the power expression self^exp.
    pub fn pow(self, exp: u32) -> Expr {
        Expr::Pow(self.boxed(), exp)
    }

    /// True if the expression is exactly the constant 0.
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(0))
    }

    /// True if the expression is exactly the constant 1.
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Const(1))
    }

    /// True if the expression reduces to a known constant without evaluating
    /// any variable.
    pub fn is_numerical(&self) -> bool {
        match self {
            Expr::Const(_) => true,
            Expr::Var(_) => false,
            Expr::Sum(terms) => terms.iter().all(|t| t.is_numerical()),
            Expr::Prod(factors) => factors.iter().all(|f| f.is_numerical()),
            Expr::Pow(base, _) => base.is_numerical(),
        }
    }

    /// True if the expression references the given variable anywhere.
    pub fn contains_variable(&self, var: Var) -> bool {
        match self {
            Expr::Const(_) => false,
            Expr::Var(v) => *v == var,
            Expr::Sum(children) | Expr::Prod(children) => {
                children.iter().any(|c| c.contains_variable(var))
            }
            Expr::Pow(base, _) => base.contains_variable(var),
        }
    }

    /// Splits off a leading minus sign for printing: returns the expression
    /// with the sign removed when self is a negative constant or a product
    /// whose first factor is a negative constant.
    fn as_negated(&self) -> Option<Expr> {
        match self {
            Expr::Const(v) if *v < 0 => Some(Expr::Const(-v)),
            Expr::Prod(factors) => match factors.first() {
                Some(Expr::Const(-1)) if factors.len() == 2 => Some(factors[1].clone()),
                Some(Expr::Const(-1)) => Some(Expr::Prod(factors[1..].to_vec())),
                Some(Expr::Const(v)) if *v < 0 => {
                    let mut rest = factors.clone();
                    rest[0] = Expr::Const(-v);
                    Some(Expr::Prod(rest))
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Writes a child of a node with the given precedence, parenthesizing only
    /// when the child binds looser.
    fn fmt_child(child: &Expr, parent: Precedence, f: &mut fmt::Formatter) -> fmt::Result {
        if child.precedence() < parent {
            write!(f, "({})", child)
        } else {
            write!(f, "{}", child)
        }
    }
}

/// Pretty printing with minimal parenthesization, driven by the precedence
/// class of each variant. Sums print subtraction for negated terms, products
/// print a leading minus for a -1 coefficient.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(v) => write!(f, "{}", v),
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i == 0 {
                        Expr::fmt_child(term, Precedence::Sum, f)?;
                    } else if let Some(positive) = term.as_negated() {
                        write!(f, " - ")?;
                        Expr::fmt_child(&positive, Precedence::Prod, f)?;
                    } else {
                        write!(f, " + ")?;
                        Expr::fmt_child(term, Precedence::Sum, f)?;
                    }
                }
                Ok(())
            }
            Expr::Prod(factors) => {
                if let Some(positive) = self.as_negated() {
                    write!(f, "-")?;
                    return Expr::fmt_child(&positive, Precedence::Prod, f);
                }
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "*")?;
                    }
                    Expr::fmt_child(factor, Precedence::Prod, f)?;
                }
                Ok(())
            }
            Expr::Pow(base, exp) => {
                // The base of a power is parenthesized unless it is an atom,
                // so that (x^2)^3 and (-2)^3 stay unambiguous.
                if base.precedence() < Precedence::Atom {
                    write!(f, "({})^{}", base, exp)
                } else {
                    write!(f, "{}^{}", base, exp)
                }
            }
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Sum(vec![self, rhs])
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sum(vec![self, -rhs])
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Prod(vec![self, rhs])
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Prod(vec![Expr::Const(-1), self])
    }
}

impl From<Var> for Expr {
    fn from(v: Var) -> Self {
        Expr::Var(v)
    }
}

impl From<i64> for Expr {
    fn from(v: i64) -> Self {
        Expr::Const(v)
    }
}
