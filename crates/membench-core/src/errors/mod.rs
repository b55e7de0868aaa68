//! Error types for the membench engine.
//! One enum per subsystem, all implementing `MembenchErrorCode`.

pub mod config_error;
pub mod discovery_error;
pub mod error_code;
pub mod view_error;

pub use config_error::ConfigError;
pub use discovery_error::DiscoveryError;
pub use view_error::ViewError;
