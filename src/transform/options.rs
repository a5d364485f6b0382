//! Text overlay configuration types.
//!
//! Overlay presets can be declared inline in code or loaded from
//! JSON/YAML config, so the options type carries serde defaults for
//! every field the wire grammar defaults.

use serde::{Deserialize, Serialize};

use super::directive::Gravity;
use crate::constants::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};

// Default values
fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

/// Font weight for text overlays.
///
/// Only `Bold` alters the wire form: the font spec gains a `_bold` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Text overlay options.
///
/// Optional fields omit their directive fragment entirely when absent;
/// only the font spec and the text itself are always emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOverlayOptions {
    /// Font family name (default: "Arial")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points (default: 48)
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Font weight (default: normal)
    #[serde(default)]
    pub font_weight: FontWeight,

    /// Text color as a hex triplet (e.g. "FFFFFF"); not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Anchor point for the text layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<Gravity>,

    /// Vertical offset from the anchor in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_offset: Option<i32>,

    /// Horizontal offset from the anchor in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_offset: Option<i32>,

    /// Maximum rendering width in pixels; also fit-crops the text layer
    /// so long quotes wrap instead of overflowing the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

impl Default for TextOverlayOptions {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: FontWeight::default(),
            color: None,
            gravity: None,
            y_offset: None,
            x_offset: None,
            max_width: None,
        }
    }
}
