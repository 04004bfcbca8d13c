//! # aotopts
//!
//! AOT build options and build-time property classification for
//! native-image build pipelines.
//!
//! The build driver populates an [`AotOptions`] record once, before the
//! ahead-of-time processor runs. While the processor walks discovered
//! configuration property keys, it asks the [`PropertyChecks`] classifier
//! per key whether the value should be resolved at build time (baked into
//! the produced image) or left to runtime.
//!
//! ## Example
//!
//! ```rust
//! use aotopts::{AotOptions, Mode};
//!
//! let options = AotOptions::default()
//!     .with_mode(Mode::Native)
//!     .with_build_time_properties_checks(["default-exclude-all", "spring.", "!spring.cloud."]);
//!
//! assert!(options.build_time_checkable_property("spring.application.name"));
//! assert!(!options.build_time_checkable_property("spring.cloud.refresh.enabled"));
//! assert!(!options.build_time_checkable_property("management.endpoints.enabled"));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod observability;
pub mod properties;

// Re-exports for convenience
pub use config::{AotOptions, ConfigFile, Mode};
pub use properties::{DEFAULT_EXCLUDE_ALL, DEFAULT_INCLUDE_ALL, PropertyChecks};

/// Error type for aotopts operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait
/// implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidConfiguration` | Mode token matches none of the accepted modes |
/// | `OperationFailed` | Options file cannot be read or parsed, logging init fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A configuration value was rejected.
    ///
    /// Raised when:
    /// - The mode token is present but matches none of the accepted modes
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The options file cannot be read or parsed
    /// - Logging initialization fails or runs twice
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for aotopts operations.
pub type Result<T> = std::result::Result<T, Error>;
