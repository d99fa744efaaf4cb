//! Academia Observability
//!
//! Console logging for the Academia binaries, built on `tracing-subscriber`.
//!
//! # Examples
//!
//! ```no_run
//! use academia_observability::init_logging;
//!
//! init_logging();
//! tracing::info!("ready");
//! ```

pub mod logging;

pub use logging::{LogFormat, LoggingConfig, init_logging, init_logging_with};
