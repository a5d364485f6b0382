//! Delivery URL assembly.

use tracing::debug;

use super::directive::Transformation;
use super::error::TransformError;
use crate::constants::{CDN_HOST, UPLOAD_PATH};

/// Assemble the delivery URL for an asset with an ordered directive chain.
///
/// Produces
/// `https://res.cloudinary.com/<account>/image/upload[/<directive>]*/<asset_id>`
/// with directives interposed between the fixed upload path and the
/// trimmed asset id, in the exact order given. The directive list is
/// never reordered or deduplicated. No network call is made; correctness
/// of the rendered image is the CDN's responsibility.
///
/// # Errors
///
/// Returns `MissingAssetId` / `MissingAccountName` when the respective
/// argument is empty after trimming.
pub fn build_image_url(
    asset_id: &str,
    transformations: &[Transformation],
    account: &str,
) -> Result<String, TransformError> {
    let asset_id = asset_id.trim();
    if asset_id.is_empty() {
        return Err(TransformError::MissingAssetId);
    }

    let account = account.trim();
    if account.is_empty() {
        return Err(TransformError::MissingAccountName);
    }

    let mut url = format!("https://{}/{}/{}", CDN_HOST, account, UPLOAD_PATH);
    for transformation in transformations {
        url.push('/');
        url.push_str(&transformation.to_directive());
    }
    url.push('/');
    url.push_str(asset_id);

    debug!(
        account = %account,
        directives = transformations.len(),
        "assembled delivery URL"
    );

    Ok(url)
}
