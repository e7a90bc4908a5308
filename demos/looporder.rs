//! Loop-order sensitivity of a naive matrix multiply.
//!
//! `ijk` walks the output row-major; `jik` walks it column-major. Same
//! arithmetic, different cache behavior. The output buffer is handed to each
//! trial as a fresh clone via `run_with`.

use colored::Colorize;
use minibench::{Bench, Error};
use rand::Rng;

const TRIALS: usize = 20;
const N: usize = 128;

fn matmul_ijk(n: usize, a: &[f32], b: &[f32], c: &mut [f32]) {
    for i in 0..n {
        for j in 0..n {
            let mut x = 0.0f32;
            for k in 0..n {
                x += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = x;
        }
    }
}

fn matmul_jik(n: usize, a: &[f32], b: &[f32], c: &mut [f32]) {
    for j in 0..n {
        for i in 0..n {
            let mut x = 0.0f32;
            for k in 0..n {
                x += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = x;
        }
    }
}

fn random_matrix(len: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random::<f32>()).collect()
}

fn main() -> Result<(), Error> {
    let a = random_matrix(N * N);
    let b = random_matrix(N * N);

    println!("Generated random data.");
    println!("----------------------");
    println!();

    println!("{}", "ijk:".bold());
    let stats = Bench::new().run_with(TRIALS, vec![0.0f32; N * N], |mut c| {
        matmul_ijk(N, &a, &b, &mut c)
    });
    println!("{}", stats.report()?);

    println!("{}", "jik:".bold());
    let stats = Bench::new().run_with(TRIALS, vec![0.0f32; N * N], |mut c| {
        matmul_jik(N, &a, &b, &mut c)
    });
    println!("{}", stats.report()?);

    Ok(())
}
