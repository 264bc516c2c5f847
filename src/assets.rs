//! Bundled CSS asset

/// Portal stylesheet, bundled at compile time and served at
/// `/static/portal.css`.
pub const PORTAL_CSS: &str = include_str!("../assets/portal.css");
