// Library surface for headless/integration tests and reuse.
// The terminal UI lives in the binary.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod time_series;
pub mod vocabulary;
pub mod word_generator;

/// How often the event loop wakes up without input
pub const TICK_RATE_MS: u64 = 100;

/// Cadence of live wpm samples
pub const SAMPLE_PERIOD_MS: u64 = 1000;
