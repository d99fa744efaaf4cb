//! # Academia CLI
//!
//! Sample data generation for Academia development and testing.
//!
//! This library crate provides the generators used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use academia_cli::sample::{generate, SampleConfig};
//!
//! let set = generate(&SampleConfig::new(10))?; // 10 students with defaults
//! ```

pub mod sample;
