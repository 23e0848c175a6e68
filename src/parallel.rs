//! Parallel batch evaluation using Rayon
//!
//! Expression trees are immutable and evaluation is pure, so one tree can
//! be shared across worker threads without locking.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! partials = { version = "0.1", features = ["parallel"] }
//! ```

use rayon::prelude::*;

use crate::{Environment, Expr};

/// Evaluate one expression at every binding point in parallel.
///
/// Returns one value per environment, in input order.
///
/// # Example
/// ```ignore
/// let points: Vec<Environment> = (0..1000)
///     .map(|i| Environment::new().with(&x, i as f64))
///     .collect();
/// let values = parallel::eval_points(&f, &points);
/// ```
pub fn eval_points(expr: &Expr, points: &[Environment]) -> Vec<f64> {
    points.par_iter().map(|env| expr.eval(env)).collect()
}

/// Evaluate several expressions under a single environment in parallel.
///
/// Useful for evaluating a family of partial derivatives at one point.
pub fn eval_exprs(exprs: &[Expr], env: &Environment) -> Vec<f64> {
    exprs.par_iter().map(|e| e.eval(env)).collect()
}
