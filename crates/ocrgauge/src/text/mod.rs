//! Text cleanup utilities.

pub mod clean;

pub use clean::{clean_ground_truth, collapse_whitespace, fix_lithuanian_letters};
