//! Evaluation-time variable bindings

use rustc_hash::FxHashMap;

use crate::variable::VarId;

/// A mapping from variable identity to numeric value, supplied by the
/// caller for the duration of one evaluation.
///
/// The environment is not part of any expression tree; build one fresh per
/// call, or reuse it, since lookups never mutate it. Variables with no
/// entry read as `0.0` during evaluation rather than failing.
///
/// # Example
/// ```ignore
/// let at = Environment::new().with(&x, 10.0).with(&y, 200.0);
/// let value = expr.eval(&at);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: FxHashMap<VarId, f64>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable to a value, builder-style
    pub fn with(mut self, var: impl Into<VarId>, value: f64) -> Self {
        self.bind(var, value);
        self
    }

    /// Bind a variable to a value in place.
    ///
    /// Binding the same variable again replaces the earlier value.
    pub fn bind(&mut self, var: impl Into<VarId>, value: f64) {
        self.bindings.insert(var.into(), value);
    }

    /// Look up the value bound to a variable, if any
    pub fn get(&self, var: impl Into<VarId>) -> Option<f64> {
        self.bindings.get(&var.into()).copied()
    }
}

impl<V: Into<VarId>> FromIterator<(V, f64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (V, f64)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (var, value) in iter {
            env.bind(var, value);
        }
        env
    }
}
