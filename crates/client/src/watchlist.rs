//! Watchlist and favorites endpoints (scoped to the active profile).

use streamgate_core::{ContentId, ProfileId};

use crate::dto::WatchlistItemDto;
use crate::error::ApiResult;
use crate::http::Backend;

pub async fn watchlist(backend: &Backend, profile: ProfileId) -> ApiResult<Vec<WatchlistItemDto>> {
    backend.get(&format!("/profiles/{profile}/watchlist")).await
}

pub async fn add_to_watchlist(
    backend: &Backend,
    profile: ProfileId,
    content: ContentId,
) -> ApiResult<()> {
    backend
        .post_unit(
            &format!("/profiles/{profile}/watchlist"),
            &serde_json::json!({ "content_id": content }),
        )
        .await
}

pub async fn remove_from_watchlist(
    backend: &Backend,
    profile: ProfileId,
    content: ContentId,
) -> ApiResult<()> {
    backend
        .delete(&format!("/profiles/{profile}/watchlist/{content}"))
        .await
}

pub async fn favorites(backend: &Backend, profile: ProfileId) -> ApiResult<Vec<WatchlistItemDto>> {
    backend.get(&format!("/profiles/{profile}/favorites")).await
}

pub async fn add_to_favorites(
    backend: &Backend,
    profile: ProfileId,
    content: ContentId,
) -> ApiResult<()> {
    backend
        .post_unit(
            &format!("/profiles/{profile}/favorites"),
            &serde_json::json!({ "content_id": content }),
        )
        .await
}

pub async fn remove_from_favorites(
    backend: &Backend,
    profile: ProfileId,
    content: ContentId,
) -> ApiResult<()> {
    backend
        .delete(&format!("/profiles/{profile}/favorites/{content}"))
        .await
}
