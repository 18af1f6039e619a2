//! CSV reading operations.

mod read;

pub use read::*;
