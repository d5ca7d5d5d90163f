//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! checker settings (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CheckerConfig
//!
//! entry file (TOML/JSON)
//!     → loader.rs (parse, normalize, validate)
//!     → ConfigEntry
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs re-checks the entry
//!     → accepted entries sent on a channel, rejections logged
//! ```
//!
//! # Design Decisions
//! - All settings have defaults to allow an empty or missing file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::CheckerConfig;
pub use schema::LogFormat;
pub use schema::ReportMode;
