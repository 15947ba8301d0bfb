// Common utilities shared across the watcher

pub mod utils;

pub use utils::*;
