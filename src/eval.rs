//! Numeric evaluation against an environment

use crate::{Environment, Expr};

impl Expr {
    /// Evaluate the tree to a single number under `env`.
    ///
    /// Variables with no binding read as `0.0`. A denominator that
    /// evaluates to zero follows ordinary IEEE-754 division and yields
    /// `±Infinity` or `NaN`; it is not an error.
    ///
    /// Evaluation is pure: the same tree may be evaluated repeatedly, with
    /// different environments, and from several threads at once.
    pub fn eval(&self, env: &Environment) -> f64 {
        match self {
            Expr::Constant(n) => *n,
            Expr::Variable(v) => env.get(v.id()).unwrap_or(0.0),
            Expr::Sum(l, r) => l.eval(env) + r.eval(env),
            Expr::Difference(l, r) => l.eval(env) - r.eval(env),
            Expr::Product(l, r) => l.eval(env) * r.eval(env),
            Expr::Quotient(l, r) => l.eval(env) / r.eval(env),
        }
    }
}
