//! Timestamp capture for trial measurement.

mod clock;

pub use clock::{black_box, Clock, ClockSource};
