use crate::symbolic::symbolic_engine::{Expr, Var};
use std::f64;
//___________________________________TESTS____________________________________

mod tests {
    use super::*;
    use crate::symbolic::parse_expr::parse_expression;
    use crate::symbolic::symbolic_simplify::structural_order;
    use std::cmp::Ordering;
    use strum::IntoEnumIterator;

    #[test]
    fn test_add_operator() {
        let expr = Expr::Var(Var::X) + Expr::Const(2);
        let expected = Expr::Sum(vec![Expr::Var(Var::X), Expr::Const(2)]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_sub_operator() {
        let expr = Expr::Var(Var::X) - Expr::Const(2);
        let expected = Expr::Sum(vec![
            Expr::Var(Var::X),
            Expr::Prod(vec![Expr::Const(-1), Expr::Const(2)]),
        ]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_mul_operator() {
        let expr = Expr::Var(Var::X) * Expr::Var(Var::Y);
        let expected = Expr::Prod(vec![Expr::Var(Var::X), Expr::Var(Var::Y)]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_neg_operator() {
        let expr = -Expr::Var(Var::X);
        let expected = Expr::Prod(vec![Expr::Const(-1), Expr::Var(Var::X)]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Expr::from(Var::Y), Expr::Var(Var::Y));
        assert_eq!(Expr::from(7i64), Expr::Const(7));
    }

    #[test]
    fn test_var_display_and_iteration() {
        assert_eq!(Var::X.to_string(), "x");
        assert_eq!(Var::T.to_string(), "t");
        let letters: Vec<String> = Var::iter().map(|v| v.to_string()).collect();
        assert_eq!(letters, ["x", "y", "z", "s", "t"]);
    }

    #[test]
    fn test_var_from_letter() {
        assert_eq!(Var::from_letter('z'), Some(Var::Z));
        assert_eq!(Var::from_letter('s'), Some(Var::S));
        assert_eq!(Var::from_letter('w'), None);
        assert_eq!(Var::from_letter('X'), None);
    }

    #[test]
    fn test_projective_variables() {
        assert!(Var::X.is_projective());
        assert!(Var::Z.is_projective());
        assert!(!Var::S.is_projective());
        assert!(!Var::T.is_projective());
    }

    #[test]
    fn test_display_simple() {
        let expr = Expr::Var(Var::X).pow(2) + Expr::Var(Var::Y).pow(2) - Expr::Const(1);
        assert_eq!(expr.to_string(), "x^2 + y^2 - 1");
    }

    #[test]
    fn test_display_product_of_sum_parenthesized() {
        let expr = (Expr::Var(Var::X) + Expr::Var(Var::Y)) * Expr::Var(Var::Z);
        assert_eq!(expr.to_string(), "(x + y)*z");
    }

    #[test]
    fn test_display_power_of_sum_parenthesized() {
        let expr = (Expr::Var(Var::X) + Expr::Var(Var::Y)).pow(2);
        assert_eq!(expr.to_string(), "(x + y)^2");
    }

    #[test]
    fn test_display_power_of_negative_constant_parenthesized() {
        let expr = Expr::Const(-2).pow(3);
        assert_eq!(expr.to_string(), "(-2)^3");
    }

    #[test]
    fn test_display_negated_product() {
        let expr = Expr::Prod(vec![Expr::Const(-1), Expr::Var(Var::X)]);
        assert_eq!(expr.to_string(), "-x");
        let expr = Expr::Prod(vec![Expr::Const(-5), Expr::Var(Var::X), Expr::Var(Var::Y)]);
        assert_eq!(expr.to_string(), "-5*x*y");
    }

    #[test]
    fn test_display_subtraction_in_sum() {
        let expr = Expr::Sum(vec![
            Expr::Var(Var::Y),
            Expr::Prod(vec![Expr::Const(-1), Expr::Var(Var::X).pow(2)]),
        ]);
        assert_eq!(expr.to_string(), "y - x^2");
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        // printing a simplified tree and reparsing it gives the tree back
        for input in [
            "x^2 + y^2 - 1",
            "y^2*z - x^3 - 4*x*z^2",
            "s*x^2 - t*y^2",
            "-x*y + 7",
        ] {
            let reduced = parse_expression(input).unwrap().simplify();
            let printed = reduced.to_string();
            let reparsed = parse_expression(&printed).unwrap().simplify();
            assert_eq!(reduced, reparsed, "round trip failed for {}", input);
        }
    }

    #[test]
    fn test_is_zero_and_is_one() {
        assert!(Expr::Const(0).is_zero());
        assert!(!Expr::Const(1).is_zero());
        assert!(Expr::Const(1).is_one());
        assert!(!Expr::Var(Var::X).is_one());
    }

    #[test]
    fn test_is_numerical() {
        assert!(parse_expression("2 + 3*4^2").unwrap().is_numerical());
        assert!(!parse_expression("2 + x").unwrap().is_numerical());
    }

    #[test]
    fn test_contains_variable() {
        let expr = parse_expression("x^2 + y^2 - z^2").unwrap();
        assert!(expr.contains_variable(Var::X));
        assert!(expr.contains_variable(Var::Z));
        assert!(!expr.contains_variable(Var::S));
    }

    #[test]
    fn test_structural_order_ranks_kinds() {
        let c = Expr::Const(3);
        let v = Expr::Var(Var::X);
        let p = Expr::Var(Var::X).pow(2);
        let prod = Expr::Prod(vec![Expr::Var(Var::X), Expr::Var(Var::Y)]);
        let sum = Expr::Sum(vec![Expr::Var(Var::X), Expr::Var(Var::Y)]);
        assert_eq!(structural_order(&c, &v), Ordering::Less);
        assert_eq!(structural_order(&v, &p), Ordering::Less);
        assert_eq!(structural_order(&p, &prod), Ordering::Less);
        assert_eq!(structural_order(&prod, &sum), Ordering::Less);
    }

    #[test]
    fn test_structural_order_within_kind() {
        assert_eq!(
            structural_order(&Expr::Const(-2), &Expr::Const(5)),
            Ordering::Less
        );
        assert_eq!(
            structural_order(&Expr::Var(Var::X), &Expr::Var(Var::Y)),
            Ordering::Less
        );
        // same base, exponent breaks the tie
        assert_eq!(
            structural_order(&Expr::Var(Var::X).pow(2), &Expr::Var(Var::X).pow(3)),
            Ordering::Less
        );
    }

    #[test]
    fn test_full_pipeline_unit_circle() {
        // parse -> simplify -> homogenize -> evaluate
        let (expr, degree) = parse_expression("x^2 + y^2 - 1").unwrap().homogenize();
        assert_eq!(degree, 2);
        assert_eq!(expr.to_string(), "x^2 + y^2 - z^2");
        // on the circle in the affine chart z = 1
        approx::assert_abs_diff_eq!(
            expr.eval(f64::consts::FRAC_1_SQRT_2, f64::consts::FRAC_1_SQRT_2, 1.0, 0.0, 0.0),
            0.0,
            epsilon = 1e-12
        );
        // the circle has no real points at infinity (z = 0)
        assert!(expr.eval(1.0, 0.0, 0.0, 0.0, 0.0) > 0.0);
    }

    #[test]
    fn test_full_pipeline_nodal_cubic() {
        let (expr, degree) = parse_expression("y^2 - x^3 - x^2").unwrap().homogenize();
        assert_eq!(degree, 3);
        // y^2*z - x^3 - x^2*z vanishes at the node [0 : 0 : 1]
        assert_eq!(expr.eval(0.0, 0.0, 1.0, 0.0, 0.0), 0.0);
        // and at the point at infinity [0 : 1 : 0]
        assert_eq!(expr.eval(0.0, 1.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_full_pipeline_animated_family() {
        // s*x^2 - t*y*z sweeps a family of conics as (s, t) moves
        let (expr, degree) = parse_expression("s*x^2 - t*y*z").unwrap().homogenize();
        assert_eq!(degree, 2);
        assert_eq!(expr.eval(1.0, 1.0, 1.0, 1.0, 1.0), 0.0);
        assert_eq!(expr.eval(1.0, 1.0, 1.0, 1.0, 0.0), 1.0);
        assert_eq!(expr.eval(1.0, 1.0, 1.0, 0.0, 1.0), -1.0);
    }

    #[test]
    fn test_simplified_trees_compare_equal_across_spellings() {
        let a = parse_expression("z*y^2 - x^3").unwrap().simplify();
        let b = parse_expression("-x^3 + y^2*z").unwrap().simplify();
        assert_eq!(a, b);
    }
}
