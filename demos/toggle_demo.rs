//! The classic State pattern client.
//!
//! Attaches state A, issues both requests, and prints the reference trace:
//! the first request flips the context to B, the second flips it back to A.
//!
//! Run with: cargo run --example toggle_demo

use demeanor::builder::ContextBuilder;
use demeanor::toggle::Toggle;

fn main() {
    let mut context = ContextBuilder::new()
        .initial(Toggle::ConcreteStateA)
        .build()
        .expect("initial state is set");

    context.request_1();
    context.request_2();
}
