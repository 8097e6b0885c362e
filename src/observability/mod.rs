//! Structured logging setup.
//!
//! Every layer logs through `tracing` macros and spans; this module installs
//! the subscriber that turns them into output:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup

mod init;

pub use init::init_tracing;
