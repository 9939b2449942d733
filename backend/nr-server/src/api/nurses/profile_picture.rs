//! Profile pictures cross the wire as standard base64.

use crate::{ApiError, ApiResult};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode an optional base64 picture; `None` stays `None`
#[track_caller]
pub fn decode(encoded: Option<String>) -> ApiResult<Option<Vec<u8>>> {
    encoded
        .map(|value| {
            STANDARD.decode(value.as_bytes()).map_err(|e| {
                ApiError::validation(
                    format!("Invalid parameters. profile_picture must be base64: {}", e),
                    "profile_picture",
                )
            })
        })
        .transpose()
}
