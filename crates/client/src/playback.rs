//! Playback token endpoints.
//!
//! Tokens are short-lived credentials issued per content item; a valid
//! token is exchanged for the HLS manifest location. The backend owns
//! issuance, validation, and expiry; nothing is checked client-side.

use streamgate_core::ContentId;

use crate::dto::{ManifestDto, PlaybackTokenDto, TokenValidityDto};
use crate::error::ApiResult;
use crate::http::Backend;

/// Issue a playback token for a content item.
pub async fn issue_token(backend: &Backend, content: ContentId) -> ApiResult<PlaybackTokenDto> {
    backend
        .post(
            "/playback/tokens",
            &serde_json::json!({ "content_id": content }),
        )
        .await
}

/// Check whether a previously issued token is still valid.
pub async fn validate_token(backend: &Backend, token: &str) -> ApiResult<TokenValidityDto> {
    backend
        .post("/playback/tokens/validate", &serde_json::json!({ "token": token }))
        .await
}

/// Exchange a valid token for the HLS manifest location.
pub async fn manifest(backend: &Backend, token: &str) -> ApiResult<ManifestDto> {
    backend.get(&format!("/playback/manifest/{token}")).await
}
