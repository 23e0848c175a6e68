//! Builds one expression in three variables (two of them aliases of the
//! same logical variable) and prints two partial derivative evaluations.
//!
//! Run with: `cargo run --example partial_derivatives`

use partials::{Environment, Var};

fn main() {
    let x = Var::named("x");
    let y = Var::named("y"); // different from x
    let z = x.clone(); // same as x

    let expression = x.clone() * z.clone() + 4.0 * y.clone() * y.clone() / (x.clone() + 5.0);

    // take partial derivatives
    let d_dx = expression.differentiate(&x);
    let d_dy = expression.differentiate(&y);

    // evaluate at concrete values
    let at = Environment::new().with(&x, 10.0).with(&y, 200.0);

    println!("f        = {}", expression);
    println!("df/dx    = {}", d_dx);
    println!("df/dy    = {}", d_dy);
    println!("df/dx(x=10, y=200): {}", d_dx.eval(&at));
    println!("df/dy(x=10, y=200): {}", d_dy.eval(&at));
}
