//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod tune;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{run_simple, run_simple_with};
pub use tune::{TuneReport, run_tune};
