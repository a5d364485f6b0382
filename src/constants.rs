// Constants module - centralized default values for media delivery
//
// This module defines all default values used throughout the codebase.
// Using constants instead of magic numbers improves maintainability
// and makes it easier to understand and modify defaults.

// =============================================================================
// Delivery defaults
// =============================================================================

/// Hostname of the image delivery CDN
pub const CDN_HOST: &str = "res.cloudinary.com";

/// Fixed path segment between the account name and the directive chain
pub const UPLOAD_PATH: &str = "image/upload";

// =============================================================================
// Overlay defaults
// =============================================================================

/// Default background overlay color
pub const DEFAULT_BACKGROUND_COLOR: &str = "black";

/// Default font family for text overlays
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Default font size in points for text overlays
pub const DEFAULT_FONT_SIZE: u32 = 48;

// =============================================================================
// Directive bounds
// =============================================================================

/// Minimum accepted fixed quality value
pub const MIN_QUALITY: u8 = 1;

/// Maximum accepted fixed quality value
pub const MAX_QUALITY: u8 = 100;

/// Maximum accepted overlay opacity (percent)
pub const MAX_OPACITY: u8 = 100;
