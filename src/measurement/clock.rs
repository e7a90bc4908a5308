//! Monotonic clock sources for trial timing.
//!
//! Two interchangeable sources back timestamp capture:
//! - [`ClockSource::Steady`]: `std::time::Instant`, the standard monotonic
//!   clock. The default.
//! - [`ClockSource::Cycle`]: the serialized CPU cycle counter
//!   (`lfence; rdtsc` on x86_64, `isb; mrs cntvct_el0` on aarch64),
//!   calibrated against `Instant` once at clock construction. Falls back to
//!   `Instant`-derived nanoseconds on other architectures.
//!
//! Both are monotonic and unaffected by wall-clock adjustment, which is all
//! the harness requires of them.

use std::time::Instant;

/// Wrapper around `std::hint::black_box`.
///
/// Applied to every measured invocation so the compiler can neither remove
/// the computation nor hoist it across the timestamp reads.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std::hint::black_box(x)
}

/// Read the CPU cycle counter with serialization against prior instructions.
#[inline]
fn cycle_count() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
        let cycles: u64;
        unsafe {
            // lfence drains the pipeline before rdtsc samples the TSC
            std::arch::asm!(
                "lfence",
                "rdtsc",
                "shl rdx, 32",
                "or rax, rdx",
                out("rax") cycles,
                out("rdx") _,
                options(nostack, nomem),
            );
        }
        std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
        cycles
    }

    #[cfg(target_arch = "aarch64")]
    {
        std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
        let cycles: u64;
        unsafe {
            // isb retires prior instructions before the virtual counter read
            std::arch::asm!(
                "isb",
                "mrs {}, cntvct_el0",
                out(reg) cycles,
                options(nostack, nomem),
            );
        }
        std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
        cycles
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        use std::sync::OnceLock;
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}

/// Estimate the cycle counter's rate as cycles per nanosecond.
///
/// Median over short sleep intervals; a 3 GHz TSC yields roughly 3.0, an ARM
/// virtual timer roughly 0.024.
fn calibrate_cycles_per_ns() -> f64 {
    const ROUNDS: usize = 20;

    let mut ratios = Vec::with_capacity(ROUNDS);
    for _ in 0..ROUNDS {
        let c0 = cycle_count();
        let t0 = Instant::now();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let c1 = cycle_count();
        let elapsed_ns = t0.elapsed().as_nanos() as u64;
        if elapsed_ns == 0 {
            continue;
        }
        ratios.push(c1.saturating_sub(c0) as f64 / elapsed_ns as f64);
    }

    if ratios.is_empty() {
        return 1.0;
    }
    ratios.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    ratios[ratios.len() / 2]
}

/// Selects which monotonic clock backs timestamp capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockSource {
    /// `std::time::Instant`.
    #[default]
    Steady,
    /// Serialized CPU cycle counter, calibrated to nanoseconds.
    Cycle,
}

/// A calibrated monotonic clock that times single invocations.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    source: ClockSource,
    /// Calibrated rate; only meaningful for `ClockSource::Cycle`.
    cycles_per_ns: f64,
}

impl Clock {
    /// Construct a clock, calibrating the cycle counter if selected.
    pub fn new(source: ClockSource) -> Self {
        let cycles_per_ns = match source {
            ClockSource::Steady => 0.0,
            ClockSource::Cycle => calibrate_cycles_per_ns(),
        };
        Self {
            source,
            cycles_per_ns,
        }
    }

    /// Which source this clock reads.
    pub fn source(&self) -> ClockSource {
        self.source
    }

    /// Time one invocation of `f`, returning elapsed seconds.
    ///
    /// The invocation runs through [`black_box`] and its return value is
    /// discarded.
    #[inline]
    pub fn time<F, T>(&self, f: F) -> f64
    where
        F: FnOnce() -> T,
    {
        match self.source {
            ClockSource::Steady => {
                let start = Instant::now();
                black_box(f());
                start.elapsed().as_secs_f64()
            }
            ClockSource::Cycle => {
                let start = cycle_count();
                black_box(f());
                let end = cycle_count();
                end.saturating_sub(start) as f64 / self.cycles_per_ns / 1e9
            }
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(ClockSource::default())
    }
}
