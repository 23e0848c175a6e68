// Differentiation engine - applies the calculus rules
//
// Every node the rules produce goes through the simplifying constructors,
// so a derivative tree arrives already folded: differentiating a constant
// subtree collapses to zero on the spot instead of accumulating `0 * v`
// scaffolding, and repeated differentiation stays bounded.

use crate::Expr;
use crate::variable::VarId;

impl Expr {
    /// Partial derivative of this expression with respect to the variable
    /// identified by `wrt`.
    ///
    /// Accepts a [`VarId`](crate::VarId) or a `&Var`. Total over any tree
    /// and any identity: a variable that never occurs in the tree yields an
    /// all-zero derivative.
    ///
    /// # Example
    /// ```ignore
    /// let x = Var::named("x");
    /// let f = x.clone() * x.clone();
    /// let df = f.differentiate(&x); // x + x
    /// ```
    pub fn differentiate(&self, wrt: impl Into<VarId>) -> Expr {
        self.derive(wrt.into())
    }

    fn derive(&self, wrt: VarId) -> Expr {
        match self {
            // Base cases
            Expr::Constant(_) => Expr::Constant(0.0),

            Expr::Variable(v) => {
                if v.id() == wrt {
                    Expr::Constant(1.0)
                } else {
                    Expr::Constant(0.0)
                }
            }

            // Sum rule: (u + v)' = u' + v'
            Expr::Sum(u, v) => Expr::sum(u.derive(wrt), v.derive(wrt)),

            // Subtraction rule: (u - v)' = u' - v'
            Expr::Difference(u, v) => Expr::difference(u.derive(wrt), v.derive(wrt)),

            // Product rule: (u * v)' = u' * v + u * v'
            Expr::Product(u, v) => Expr::sum(
                Expr::product(u.derive(wrt), v.as_ref().clone()),
                Expr::product(u.as_ref().clone(), v.derive(wrt)),
            ),

            // Quotient rule: (u / v)' = (u' * v - u * v') / (v * v)
            Expr::Quotient(u, v) => Expr::quotient(
                Expr::difference(
                    Expr::product(u.derive(wrt), v.as_ref().clone()),
                    Expr::product(u.as_ref().clone(), v.derive(wrt)),
                ),
                Expr::product(v.as_ref().clone(), v.as_ref().clone()),
            ),
        }
    }
}
