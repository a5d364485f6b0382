//! Image transformation directives and delivery URL assembly
//!
//! Builds CDN delivery URLs whose path segments encode an ordered chain
//! of transformation directives:
//!
//! ```text
//! https://res.cloudinary.com/<account>/image/upload/<directive>/.../<asset_id>
//! ```
//!
//! Each directive is a comma-delimited token, e.g. a quote image composed
//! of a resize, a darkening backdrop, and the quote text:
//!
//! ```text
//! w_800,h_600,c_fill/l_black,e_colorize:60,fl_layer_apply/l_text:Arial_48:Hello%20World
//! ```
//!
//! Directive order is significant and preserved verbatim. Everything in
//! this module is a pure, synchronous computation: no network I/O happens
//! here, the CDN renders the image when the URL is fetched.

// Core modules
pub mod directive;
pub mod error;
pub mod options;
pub mod url;

// Re-export commonly used types
pub use directive::{CropMode, Gravity, Quality, Transformation};
pub use error::TransformError;
pub use options::{FontWeight, TextOverlayOptions};
pub use url::build_image_url;
