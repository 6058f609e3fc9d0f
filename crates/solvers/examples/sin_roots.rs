//! Finds the roots of sin(x) on [-10, 10] and prints the search tree.
//!
//! Run with `cargo run -p prune-solvers --example sin_roots`.

use std::convert::Infallible;
use std::error::Error;

use prune_core::{Function, Interval, IntervalBox, Scalar};
use prune_solvers::{
    branch_and_prune::{BreadthFirst, Config, search},
    contractor::{Bisection, Newton},
    refine,
};

struct Sine;

impl Function<1> for Sine {
    type Error = Infallible;

    fn eval<T: Scalar>(&self, x: &[T; 1]) -> Result<[T; 1], Self::Error> {
        Ok([x[0].sin()])
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let region = IntervalBox::from(Interval::new(-10.0, 10.0)?);
    let config = Config::new(1e-10)?;

    // Keep the last snapshot; each one is a complete tree on its own.
    let mut tree = None;
    for snapshot in search(Newton::new(Sine), BreadthFirst::new(), [region], &config)? {
        tree = Some(snapshot?);
    }
    let Some(tree) = tree else {
        return Ok(());
    };

    println!("search tree ({} nodes):", tree.len());
    print!("{tree:.4}");

    println!("roots:");
    for root in tree.roots() {
        println!("  {root}");
    }

    // A coarse bisection pass, then refinement down to 1e-9.
    let coarse = Config::new(1e-2)?;
    let candidates = search(Bisection::new(Sine), BreadthFirst::new(), [region], &coarse)?
        .last()
        .transpose()?
        .map(|tree| tree.roots())
        .unwrap_or_default();

    let refined = refine(Newton::new(Sine), BreadthFirst::new, candidates, &coarse, 1e-9)?;
    println!("refined roots:");
    for root in refined {
        println!("  {root:.12}");
    }

    Ok(())
}
