//! Addition across operand widths.
//!
//! Addition is fast enough that the default milliseconds would print rows of
//! near-zeros, so this driver measures in nanoseconds.

use colored::Colorize;
use minibench::{bench_in, black_box, Error, TimeScale};

const TRIALS: usize = 1_000_000;

fn main() -> Result<(), Error> {
    println!("{}", "i32 (4 bytes):".bold());
    let stats = bench_in(TimeScale::Nano, TRIALS, || black_box(1i32) + black_box(2i32));
    println!("{}", stats.report()?);

    println!("{}", "i64 (8 bytes):".bold());
    let stats = bench_in(TimeScale::Nano, TRIALS, || black_box(1i64) + black_box(2i64));
    println!("{}", stats.report()?);

    println!("{}", "f32 (4 bytes):".bold());
    let stats = bench_in(TimeScale::Nano, TRIALS, || {
        black_box(1.0f32) + black_box(2.0f32)
    });
    println!("{}", stats.report()?);

    println!("{}", "f64 (8 bytes):".bold());
    let stats = bench_in(TimeScale::Nano, TRIALS, || {
        black_box(1.0f64) + black_box(2.0f64)
    });
    println!("{}", stats.report()?);

    Ok(())
}
