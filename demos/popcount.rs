//! The `count_ones` intrinsic against a shift-and-mask loop.

use colored::Colorize;
use minibench::{bench_in, black_box, Error, TimeScale};

const TRIALS: usize = 1_000_000;

fn manual_popcount(mut x: u64) -> u32 {
    let mut count = 0;
    while x != 0 {
        count += (x & 1) as u32;
        x >>= 1;
    }
    count
}

fn main() -> Result<(), Error> {
    let r = u64::MAX;

    println!("{}", "u64::count_ones:".bold());
    let stats = bench_in(TimeScale::Micro, TRIALS, || black_box(r).count_ones());
    println!("{}", stats.report()?);

    println!("{}", "manual_popcount:".bold());
    let stats = bench_in(TimeScale::Micro, TRIALS, || manual_popcount(black_box(r)));
    println!("{}", stats.report()?);

    Ok(())
}
