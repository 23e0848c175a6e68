//! Structural assertions about what the simplifying constructors produce
//! when driven through the public operator surface.

use crate::{Environment, Expr, Var};

#[test]
fn test_constant_folding_is_structural() {
    // constant(2) + constant(3) must be a single Constant(5) node, not a
    // Sum wrapping two constants
    let e = Expr::constant(2.0) + Expr::constant(3.0);
    assert_eq!(e, Expr::Constant(5.0));
    assert_eq!(e.node_count(), 1);
}

#[test]
fn test_multiplicative_one_returns_the_operand_itself() {
    let x = Var::named("x");

    let e = x.clone() * 1.0;
    // The same node, not merely an equal value: still the Variable leaf
    // with the original identity
    assert!(matches!(&e, Expr::Variable(v) if v.id() == x.id()));

    let e = 1.0 * x.clone();
    assert!(matches!(&e, Expr::Variable(v) if v.id() == x.id()));
}

#[test]
fn test_multiplicative_zero_annihilates() {
    let x = Var::named("x");
    assert_eq!(x.clone() * 0.0, Expr::Constant(0.0));
    assert_eq!(0.0 * x.clone(), Expr::Constant(0.0));
}

#[test]
fn test_additive_zero_is_stripped() {
    let x = Var::named("x");
    assert!(matches!(x.clone() + 0.0, Expr::Variable(v) if v.id() == x.id()));
    assert!(matches!(0.0 + x.clone(), Expr::Variable(v) if v.id() == x.id()));
    assert!(matches!(x.clone() - 0.0, Expr::Variable(v) if v.id() == x.id()));
}

#[test]
fn test_unit_denominator_is_stripped() {
    let x = Var::named("x");
    assert!(matches!(x.clone() / 1.0, Expr::Variable(v) if v.id() == x.id()));
}

#[test]
fn test_nested_identities_collapse_completely() {
    let x = Var::named("x");
    let e = (x.clone() * 1.0 + 0.0) / 1.0;
    assert!(matches!(&e, Expr::Variable(v) if v.id() == x.id()));
    assert_eq!(e.node_count(), 1);
}

#[test]
fn test_simplification_applies_inside_derivatives() {
    // d/dx (x*c + x) = c + 1 must fold rather than leave 1*c + x*0 + 1
    let x = Var::named("x");
    let f = x.clone() * 3.0 + x.clone();
    assert_eq!(f.differentiate(&x), Expr::Constant(4.0));
}

#[test]
fn test_fold_uses_ieee_arithmetic() {
    let e = Expr::constant(1.0) / Expr::constant(3.0);
    assert_eq!(e, Expr::Constant(1.0 / 3.0));

    // Folding and evaluating agree on the same operands
    let env = Environment::new();
    assert_eq!(e.eval(&env), 1.0 / 3.0);
}

#[test]
fn test_mixed_operands_do_not_overfold() {
    // 2 * x * 3 stays a two-product tree; folding never reassociates
    // across a variable
    let x = Var::named("x");
    let e = 2.0 * x.clone() * 3.0;
    assert_eq!(e.node_count(), 5);

    let env = Environment::new().with(&x, 1.0);
    assert_eq!(e.eval(&env), 6.0);
}
