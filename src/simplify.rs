//! Constructor-time rewrite rules
//!
//! Every binary combinator applies its rewrite rules *before* allocating a
//! node, so simplification is an invariant maintained continuously as trees
//! are built (including every tree the differentiator produces), never a
//! separate pass. Rules match literal `Constant` payloads exactly; a zero
//! or one that only arises at evaluation time is not a simplifier concern.

use std::sync::Arc;

use crate::Expr;

impl Expr {
    /// `l + r`, folding two constants and eliminating a zero operand.
    pub fn sum(l: impl Into<Expr>, r: impl Into<Expr>) -> Expr {
        let (l, r) = (l.into(), r.into());
        match (l.as_constant(), r.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a + b),
            (Some(a), _) if a == 0.0 => r,
            (_, Some(b)) if b == 0.0 => l,
            _ => Expr::Sum(Arc::new(l), Arc::new(r)),
        }
    }

    /// `l - r`, folding two constants and eliminating a zero subtrahend.
    pub fn difference(l: impl Into<Expr>, r: impl Into<Expr>) -> Expr {
        let (l, r) = (l.into(), r.into());
        match (l.as_constant(), r.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a - b),
            (_, Some(b)) if b == 0.0 => l,
            _ => Expr::Difference(Arc::new(l), Arc::new(r)),
        }
    }

    /// `l * r`: a literal zero annihilates, a literal one is stripped,
    /// two constants fold.
    pub fn product(l: impl Into<Expr>, r: impl Into<Expr>) -> Expr {
        let (l, r) = (l.into(), r.into());
        if l.is_zero() || r.is_zero() {
            return Expr::Constant(0.0);
        }
        if l.is_one() {
            return r;
        }
        if r.is_one() {
            return l;
        }
        match (l.as_constant(), r.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a * b),
            _ => Expr::Product(Arc::new(l), Arc::new(r)),
        }
    }

    /// `l / r`: a literal zero numerator or denominator collapses to zero,
    /// a literal one denominator is stripped, two constants fold.
    ///
    /// A denominator that evaluates to zero without being the literal
    /// constant follows IEEE-754 division at evaluation time instead.
    // TODO: folding `x / 0` to 0 swallows the infinity the evaluation-time
    // path would produce; fold to Constant(f64::INFINITY) instead once
    // callers are audited for the change.
    pub fn quotient(l: impl Into<Expr>, r: impl Into<Expr>) -> Expr {
        let (l, r) = (l.into(), r.into());
        if r.is_zero() {
            return Expr::Constant(0.0);
        }
        if l.is_zero() {
            return Expr::Constant(0.0);
        }
        if r.is_one() {
            return l;
        }
        match (l.as_constant(), r.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a / b),
            _ => Expr::Quotient(Arc::new(l), Arc::new(r)),
        }
    }
}
