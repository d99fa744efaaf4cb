//! # Academia Core
//!
//! Foundational types shared by every Academia crate:
//!
//! - [`errors`]: Construction-time validation errors
//! - [`time`]: ISO-8601 formatting and parsing for dates and times
//! - [`clock`]: The current date, as seen by invariant checks
//!
//! # Example
//!
//! ```ignore
//! use academia_core::{ValidationError, time};
//!
//! let date = time::parse_date("2005-05-20")?;
//! assert_eq!(time::format_date(&date), "2005-05-20");
//! ```

pub mod clock;
pub mod errors;
pub mod time;

// Re-export commonly used types at crate root
pub use errors::ValidationError;
