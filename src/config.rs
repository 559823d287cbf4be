//! Application configuration.
//!
//! Compile-time constants for mounting and browser integration. Upload
//! limits and display strings are runtime options, see
//! [`filedrop_core::UploadConfig`], read from the mount element.

// =============================================================================
// Mounting
// =============================================================================

/// Id of the element the widget mounts into.
pub const APP_ROOT_ID: &str = "app";

/// Attribute on the mount element holding the JSON upload configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-config";

// =============================================================================
// Credentials
// =============================================================================

/// localStorage key of the bearer token attached to uploads.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

// =============================================================================
// Outward Events
// =============================================================================

/// DOM events dispatched on the mount element for the host page.
pub mod events {
    /// Fired once per successfully uploaded file.
    pub const COMPLETE: &str = "filedrop:complete";
    /// Fired once per rejected or failed file.
    pub const ERROR: &str = "filedrop:error";
}

// =============================================================================
// Logging
// =============================================================================

/// Prefix of every console message.
pub const LOG_PREFIX: &str = "[filedrop]";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// How often relative upload times ("5 min ago") are refreshed.
pub const CLOCK_REFRESH_MS: u32 = 30_000;

/// Current icon theme used throughout the widget.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
