//! Viewing-profile endpoints (per-member identities under one account).

use streamgate_core::ProfileId;

use crate::dto::{CreateProfileRequest, ProfileDto, UpdateProfileRequest};
use crate::error::ApiResult;
use crate::http::Backend;

/// List the account's viewing profiles.
pub async fn list(backend: &Backend) -> ApiResult<Vec<ProfileDto>> {
    backend.get("/profiles").await
}

/// Create a viewing profile.
pub async fn create(backend: &Backend, req: &CreateProfileRequest) -> ApiResult<ProfileDto> {
    backend.post("/profiles", req).await
}

/// Update a viewing profile.
pub async fn update(
    backend: &Backend,
    id: ProfileId,
    req: &UpdateProfileRequest,
) -> ApiResult<ProfileDto> {
    backend.put(&format!("/profiles/{id}"), req).await
}

/// Delete a viewing profile.
pub async fn delete(backend: &Backend, id: ProfileId) -> ApiResult<()> {
    backend.delete(&format!("/profiles/{id}")).await
}
