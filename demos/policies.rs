//! Serial against parallel execution, at both levels the harness offers:
//! inside the measured callable (a rayon reduction versus a serial one) and
//! in the harness itself (`parallel(true)` distributes the trials).

use colored::Colorize;
use minibench::{bench, Bench, Error};
use rayon::prelude::*;

const TRIALS: usize = 10;
const VEC_SIZE: usize = 50_000_000;

fn main() -> Result<(), Error> {
    // Nonzero contents so the summation cannot be folded away.
    let vec = vec![123i64; VEC_SIZE];

    println!("{}", "serial reduction:".bold());
    let stats = bench(TRIALS, || vec.iter().sum::<i64>());
    println!("{}", stats.report()?);

    println!("{}", "rayon reduction:".bold());
    let stats = bench(TRIALS, || vec.par_iter().sum::<i64>());
    println!("{}", stats.report()?);

    println!("{}", "serial reduction, trials in parallel:".bold());
    let stats = Bench::new()
        .parallel(true)
        .run(TRIALS, || vec.iter().sum::<i64>());
    println!("{}", stats.report()?);

    Ok(())
}
