//! Transformation directives and their wire serialization
//!
//! Each directive is one CDN transformation step, serialized as a
//! comma-delimited token at URL-assembly time. Directive order is
//! significant: the CDN composites earlier directives before later ones,
//! so a background tint must precede the text drawn on top of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TransformError;
use super::options::{FontWeight, TextOverlayOptions};
use crate::constants::{MAX_OPACITY, MAX_QUALITY, MIN_QUALITY};

/// How the image is fitted into the target dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropMode {
    /// Crop to fill target dimensions (default)
    #[default]
    Fill,
    /// Stretch to exactly the target dimensions (may distort)
    Scale,
    /// Scale to fit within dimensions, preserving aspect ratio
    Fit,
    /// Extract a region of exactly the target dimensions
    Crop,
    /// Thumbnailing crop focused on the subject
    Thumb,
}

impl CropMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Scale => "scale",
            Self::Fit => "fit",
            Self::Crop => "crop",
            Self::Thumb => "thumb",
        }
    }
}

impl FromStr for CropMode {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fill" => Ok(CropMode::Fill),
            "scale" => Ok(CropMode::Scale),
            "fit" => Ok(CropMode::Fit),
            "crop" => Ok(CropMode::Crop),
            "thumb" | "thumbnail" => Ok(CropMode::Thumb),
            _ => Err(TransformError::unknown_token("crop mode", s)),
        }
    }
}

/// Gravity/anchor point for overlay positioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    #[default]
    Center,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Gravity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::NorthEast => "north_east",
            Self::NorthWest => "north_west",
            Self::SouthEast => "south_east",
            Self::SouthWest => "south_west",
        }
    }
}

impl FromStr for Gravity {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "center" | "c" => Ok(Gravity::Center),
            "north" | "n" => Ok(Gravity::North),
            "south" | "s" => Ok(Gravity::South),
            "east" | "e" => Ok(Gravity::East),
            "west" | "w" => Ok(Gravity::West),
            "northeast" | "north_east" | "ne" => Ok(Gravity::NorthEast),
            "northwest" | "north_west" | "nw" => Ok(Gravity::NorthWest),
            "southeast" | "south_east" | "se" => Ok(Gravity::SouthEast),
            "southwest" | "south_west" | "sw" => Ok(Gravity::SouthWest),
            _ => Err(TransformError::unknown_token("gravity", s)),
        }
    }
}

/// Output quality directive value
///
/// The literal `auto` token bypasses range checking; fixed values are
/// constrained to 1-100 when the directive is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    /// Let the CDN pick (the `auto` token)
    #[default]
    Auto,
    /// Fixed quality value
    Value(u8),
}

impl Quality {
    fn validate(self) -> Result<Self, TransformError> {
        match self {
            Self::Value(quality) if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) => {
                Err(TransformError::InvalidQuality { quality })
            }
            other => Ok(other),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Value(quality) => write!(f, "{}", quality),
        }
    }
}

impl FromStr for Quality {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Quality::Auto);
        }
        let quality: u8 = s
            .parse()
            .map_err(|_| TransformError::unknown_token("quality", s))?;
        Quality::Value(quality).validate()
    }
}

/// One CDN transformation step
///
/// Modeled as a closed set of variants; the wire token is produced only
/// at URL-assembly time via [`Transformation::to_directive`]. The
/// fallible constructors validate their preconditions and never produce
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    /// Resize the base image
    Resize {
        width: u32,
        height: u32,
        mode: CropMode,
    },
    /// Output format and quality selection
    Optimize { format: String, quality: Quality },
    /// Full-bleed color layer colorized at the given opacity, flattened
    /// into the base image so later directives draw on the tinted backdrop
    BackgroundOverlay { opacity: u8, color: String },
    /// Text layer drawn over the current composite
    TextOverlay {
        text: String,
        options: TextOverlayOptions,
    },
}

impl Transformation {
    /// Resize directive: `w_<w>,h_<h>,c_<mode>`
    ///
    /// Both dimensions must be positive pixel counts.
    pub fn resize(width: u32, height: u32, mode: CropMode) -> Result<Self, TransformError> {
        if width == 0 {
            return Err(TransformError::invalid_dimension("width", width));
        }
        if height == 0 {
            return Err(TransformError::invalid_dimension("height", height));
        }
        Ok(Self::Resize {
            width,
            height,
            mode,
        })
    }

    /// Optimize directive: `f_<format>,q_<quality|auto>`
    ///
    /// The format token is passed through unvalidated; the CDN accepts
    /// unknown formats gracefully.
    pub fn optimize(format: impl Into<String>, quality: Quality) -> Result<Self, TransformError> {
        Ok(Self::Optimize {
            format: format.into(),
            quality: quality.validate()?,
        })
    }

    /// Background overlay directive: `l_<color>,e_colorize:<opacity>,fl_layer_apply`
    ///
    /// Color accepts a named color or a prefixed literal color-space value
    /// (e.g. `rgb:3e2222`) and is passed through unvalidated.
    pub fn background_overlay(
        opacity: u8,
        color: impl Into<String>,
    ) -> Result<Self, TransformError> {
        if opacity > MAX_OPACITY {
            return Err(TransformError::InvalidOpacity { opacity });
        }
        Ok(Self::BackgroundOverlay {
            opacity,
            color: color.into(),
        })
    }

    /// Text overlay directive:
    /// `l_text:<family>_<size>[_bold]:<encoded>[,co_rgb:<color>][,g_<gravity>][,y_<dy>][,x_<dx>][,w_<max>,c_fit]`
    ///
    /// Infallible: absent options simply omit their fragment, and an
    /// empty text string produces a valid empty-text directive.
    pub fn text_overlay(text: impl Into<String>, options: TextOverlayOptions) -> Self {
        Self::TextOverlay {
            text: text.into(),
            options,
        }
    }

    /// Serialize to the comma-delimited wire token
    ///
    /// No token ever contains a path separator; overlay text is trimmed
    /// and percent-encoded so a literal comma or slash in a quote cannot
    /// be misread as a fragment or directive separator.
    pub fn to_directive(&self) -> String {
        match self {
            Self::Resize {
                width,
                height,
                mode,
            } => {
                format!("w_{},h_{},c_{}", width, height, mode.as_str())
            }
            Self::Optimize { format, quality } => {
                format!("f_{},q_{}", format, quality)
            }
            Self::BackgroundOverlay { opacity, color } => {
                format!("l_{},e_colorize:{},fl_layer_apply", color, opacity)
            }
            Self::TextOverlay { text, options } => text_overlay_directive(text, options),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_directive())
    }
}

fn text_overlay_directive(text: &str, options: &TextOverlayOptions) -> String {
    let encoded = urlencoding::encode(text.trim());

    let mut font = format!("{}_{}", options.font_family, options.font_size);
    if options.font_weight == FontWeight::Bold {
        font.push_str("_bold");
    }

    // Fragment order is fixed: font+text, color, gravity, y, x, width+fit
    let mut fragments = vec![format!("l_text:{}:{}", font, encoded)];

    if let Some(ref color) = options.color {
        fragments.push(format!("co_rgb:{}", color));
    }
    if let Some(gravity) = options.gravity {
        fragments.push(format!("g_{}", gravity.as_str()));
    }
    if let Some(y_offset) = options.y_offset {
        fragments.push(format!("y_{}", y_offset));
    }
    if let Some(x_offset) = options.x_offset {
        fragments.push(format!("x_{}", x_offset));
    }
    if let Some(max_width) = options.max_width {
        // Fit-cropping the text layer makes long quotes wrap at max_width
        fragments.push(format!("w_{},c_fit", max_width));
    }

    fragments.join(",")
}
