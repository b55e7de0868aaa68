//! Stable, machine-readable error codes surfaced at the view boundary.

pub const NO_DATA: &str = "NO_DATA";
pub const DISCOVERY_IO: &str = "DISCOVERY_IO";
pub const INVALID_PREFIX: &str = "INVALID_PREFIX";
pub const SERIALIZATION: &str = "SERIALIZATION";
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

/// Every membench error maps to one of the codes above.
pub trait MembenchErrorCode {
    fn error_code(&self) -> &'static str;
}
