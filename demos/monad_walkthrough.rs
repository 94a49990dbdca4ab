//! Monad Walkthrough
//!
//! This example chains steps through both containers, first by nesting
//! `chain` calls by hand and then by folding over a list of steps.
//!
//! Key concepts:
//! - `lift` wraps a plain value
//! - `chain` runs one step and threads the container's extra structure
//! - Folding over a step list is the same as nesting `chain` calls
//! - Absence short-circuits every later step
//!
//! Run with: cargo run --example monad_walkthrough

use monad_patterns::logged::{double, square, Logged, LoggedStep};
use monad_patterns::optional::{add_forty_two, divide, Optional, OptionalStep};
use monad_patterns::{logging, AbsentValue};

fn main() -> Result<(), AbsentValue> {
    if let Err(err) = logging::init() {
        eprintln!("Diagnostics disabled: {err}");
    }

    println!("=== Logged Values ===\n");

    let manual = Logged::lift(5).chain(square).chain(double);
    println!("Manual:  {manual}");

    let steps: Vec<LoggedStep<i64>> = vec![Box::new(square), Box::new(double)];
    let folded = Logged::lift(5).chain_all(steps);
    println!("Folded:  {folded}");

    println!("\n=== Optional Values ===\n");

    let quotient = Optional::lift(10.0).chain(divide(5.0)).chain(add_forty_two);
    println!("10 / 5 + 42:  {quotient}");

    let undefined = Optional::lift(10.0).chain(divide(0.0)).chain(add_forty_two);
    println!("10 / 0 + 42:  {undefined}");

    for divisor in [5.0, 0.0] {
        let steps: Vec<OptionalStep<f64>> =
            vec![Box::new(divide(divisor)), Box::new(add_forty_two)];
        let folded = Optional::lift(10.0).chain_all(steps);
        println!("Folded with divisor {divisor}:  {folded}");
    }

    let value = quotient.into_result()?;
    println!("\nPresent result as a plain value: {value}");

    println!("\n=== Example Complete ===");
    Ok(())
}
