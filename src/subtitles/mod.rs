mod format;
mod types;

pub use format::{DeferReason, LoadOutcome, LoadReport, SubtitleFormat};
pub use types::{Cue, Subtitle, TimeCode};

#[cfg(test)]
pub mod unit_test;
