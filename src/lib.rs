// So Quoteable media library
// URL-side transformation directives and call debouncing for the quote-image pipeline

pub mod constants;
pub mod debounce;
pub mod logging;
pub mod transform;
