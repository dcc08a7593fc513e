use crate::content::filter;
use crate::error::{ChirpyError, Result};

/// Upper bound on a chirp body, in UTF-8 bytes of the raw submission.
pub const MAX_CHIRP_LEN: usize = 140;

/// Check the raw body length, then return the filtered body.
///
/// The limit applies to the text as submitted; masking never brings an
/// oversized chirp back under it.
pub fn validate_chirp(raw: &str) -> Result<String> {
    if raw.len() > MAX_CHIRP_LEN {
        return Err(ChirpyError::ContentTooLong);
    }
    Ok(filter::clean(raw))
}
