// Display formatting for expression trees
use crate::Expr;
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e10 {
                    // Display as integer if no fractional part
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }

            Expr::Variable(v) => write!(f, "{}", v),

            Expr::Sum(u, v) => write!(f, "{} + {}", u, v),

            Expr::Difference(u, v) => {
                // Parenthesize the RHS when it's an addition or subtraction
                // to preserve the intended grouping: `a - (b + c)`, not
                // `a - b + c`.
                let right = match &**v {
                    Expr::Sum(_, _) | Expr::Difference(_, _) => format!("({})", v),
                    _ => format!("{}", v),
                };
                write!(f, "{} - {}", u, right)
            }

            Expr::Product(u, v) => {
                if u.as_constant() == Some(-1.0) {
                    write!(f, "-{}", factor_operand(v))
                } else {
                    write!(f, "{} * {}", factor_operand(u), factor_operand(v))
                }
            }

            Expr::Quotient(u, v) => {
                // Parenthesize an additive numerator, and any denominator
                // that is not a plain leaf.
                let num = match &**u {
                    Expr::Sum(_, _) | Expr::Difference(_, _) => format!("({})", u),
                    _ => format!("{}", u),
                };
                let denom = match &**v {
                    Expr::Constant(_) | Expr::Variable(_) => format!("{}", v),
                    _ => format!("({})", v),
                };
                write!(f, "{} / {}", num, denom)
            }
        }
    }
}

/// Format an operand of a multiplication, parenthesizing additive terms
fn factor_operand(expr: &Expr) -> String {
    match expr {
        Expr::Sum(_, _) | Expr::Difference(_, _) => format!("({})", expr),
        _ => format!("{}", expr),
    }
}
