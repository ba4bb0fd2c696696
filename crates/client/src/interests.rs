//! Interests and onboarding-completion endpoints.

use streamgate_access::UserSnapshot;

use crate::dto::{InterestDto, UserDto};
use crate::error::ApiResult;
use crate::http::Backend;

/// List the interests a new user can pick from.
pub async fn available(backend: &Backend) -> ApiResult<Vec<InterestDto>> {
    backend.get("/interests").await
}

/// Replace the user's interest selection.
pub async fn save_selection(backend: &Backend, interest_ids: &[i64]) -> ApiResult<()> {
    backend
        .post_unit("/interests", &serde_json::json!({ "interest_ids": interest_ids }))
        .await
}

/// Mark onboarding as completed. Returns the refreshed user snapshot.
pub async fn complete_onboarding(backend: &Backend) -> ApiResult<UserSnapshot> {
    let dto: UserDto = backend
        .post("/onboarding/complete", &serde_json::json!({}))
        .await?;
    dto.into_snapshot()
}
