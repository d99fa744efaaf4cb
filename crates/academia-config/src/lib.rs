//! # Academia Config
//!
//! Configuration types for Academia, loaded from environment variables:
//!
//! - [`codec`]: Tagged JSON codec behavior (enum matching, depth guard, output format)
//! - [`store`]: Record store key layout
//!
//! # Example
//!
//! ```ignore
//! use academia_config::{CodecConfig, StoreConfig};
//!
//! let codec_config = CodecConfig::from_env();
//! let store_config = StoreConfig::from_env();
//! ```

pub mod codec;
pub mod store;

// Re-export commonly used types at crate root
pub use codec::{CodecConfig, EnumMatching};
pub use store::StoreConfig;
