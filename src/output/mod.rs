//! Rendering of completed runs: a fixed four-line terminal report and a
//! serializable JSON summary.

pub mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty, Report};
pub use terminal::render;
