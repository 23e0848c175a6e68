//! Identity-tracked variables and operator overloading for expression building
//!
//! # Example
//! ```ignore
//! use partials::Var;
//!
//! let x = Var::named("x");
//! let y = Var::named("y");
//! let expr = x.clone() * x.clone() + 4.0 * y.clone();
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::Expr;

/// Global counter for variable identities
static VAR_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_id() -> VarId {
    VarId(VAR_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Opaque identity token for a variable.
///
/// Minted once when a variable is created and never reused; equality of two
/// `VarId`s is the sole criterion for "same variable" throughout evaluation
/// and differentiation. Names play no part in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u64);

/// A variable: a leaf standing for an unbound numeric quantity.
///
/// Cloning a `Var` preserves its [`VarId`], so every copy denotes the same
/// logical variable in derivative and environment lookups. Two
/// independently created variables are always distinct, even when they
/// share a display name.
#[derive(Debug, Clone)]
pub struct Var {
    id: VarId,
    name: Option<Arc<str>>,
}

impl Var {
    /// Create a new anonymous variable with a fresh identity
    pub fn new() -> Self {
        Var {
            id: next_id(),
            name: None,
        }
    }

    /// Create a new variable with a fresh identity and a display name.
    ///
    /// The name is cosmetic; it appears in [`Display`](fmt::Display) output
    /// but never participates in identity comparisons.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Var {
            id: next_id(),
            name: Some(name.into()),
        }
    }

    /// The identity token of this variable
    pub fn id(&self) -> VarId {
        self.id
    }

    /// The display name, if one was given at creation
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Convert to an expression leaf
    pub fn to_expr(&self) -> Expr {
        Expr::Variable(self.clone())
    }
}

impl Default for Var {
    fn default() -> Self {
        Self::new()
    }
}

// Identity, not name, decides equality.
impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Var {}

impl std::hash::Hash for Var {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "_{}", self.id.0),
        }
    }
}

// ===== Conversions =====

impl From<&Var> for VarId {
    fn from(v: &Var) -> Self {
        v.id
    }
}

impl From<Var> for VarId {
    fn from(v: Var) -> Self {
        v.id
    }
}

impl From<Var> for Expr {
    fn from(v: Var) -> Self {
        Expr::Variable(v)
    }
}

impl From<&Var> for Expr {
    fn from(v: &Var) -> Self {
        v.to_expr()
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Constant(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::Constant(n as f64)
    }
}

// ===== Macro for generating operator implementations =====
// Generates the four arithmetic operator impls for a pair of operand types,
// routing every combination through the simplifying constructors.

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty, $to_lhs:expr, $to_rhs:expr) => {
        impl Add<$rhs> for $lhs {
            type Output = Expr;
            fn add(self, rhs: $rhs) -> Expr {
                Expr::sum($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Expr;
            fn sub(self, rhs: $rhs) -> Expr {
                Expr::difference($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Expr;
            fn mul(self, rhs: $rhs) -> Expr {
                Expr::product($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Div<$rhs> for $lhs {
            type Output = Expr;
            fn div(self, rhs: $rhs) -> Expr {
                Expr::quotient($to_lhs(self), $to_rhs(rhs))
            }
        }
    };
}

// Var operations
impl_binary_ops!(Var, Var, Expr::Variable, Expr::Variable);
impl_binary_ops!(Var, Expr, Expr::Variable, |r: Expr| r);
impl_binary_ops!(Var, f64, Expr::Variable, Expr::Constant);

// Expr operations
impl_binary_ops!(Expr, Expr, |e: Expr| e, |r: Expr| r);
impl_binary_ops!(Expr, Var, |e: Expr| e, Expr::Variable);
impl_binary_ops!(Expr, f64, |e: Expr| e, Expr::Constant);

// f64 on the left side
impl_binary_ops!(f64, Expr, Expr::Constant, |r: Expr| r);
impl_binary_ops!(f64, Var, Expr::Constant, Expr::Variable);

// Negation
impl Neg for Var {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::product(Expr::Constant(-1.0), Expr::Variable(self))
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::product(Expr::Constant(-1.0), self)
    }
}
