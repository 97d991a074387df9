//! # Iconlet
//!
//! Leaflet-compatible map marker icon descriptors.
//!
//! This library provides the icon descriptor value types consumed by a
//! web mapping library's marker-creation call, together with a small
//! registry of ready-to-use icons: a sports car, a gold star, and a
//! green "favorite" pin. Vector icons embed their SVG markup as base64
//! data URIs; bitmap icons reference remote PNG assets. Fetching and
//! rendering remain the responsibility of the host mapping library.

pub mod core;
pub mod icon;
pub mod registry;

// Re-export public API
pub use crate::core::pixel::{PixelPoint, PixelSize};

pub use icon::{descriptor::Icon, source::IconSource};

pub use registry::{FAVORITE, STAR, SUPER_SPORTS_CAR};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, IconError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Not an SVG data URI: {0}")]
    NotDataUri(String),
}
