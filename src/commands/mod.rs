//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the configured drawing folders.

pub mod completions;
pub mod config;
pub mod dashboard;
pub mod level;
pub mod progress;
pub mod scan;
pub mod stats;
pub mod tags;
pub mod thumbnails;

// Re-export execute functions for convenience
pub use completions::execute as completions;
pub use config::execute as config;
pub use dashboard::execute as dashboard;
pub use level::execute as level;
pub use progress::SpinnerProgress;
pub use scan::{ScanMode, execute as scan};
pub use stats::{StatsParams, execute as stats};
pub use tags::execute as tags;
pub use thumbnails::execute as thumbnails;
