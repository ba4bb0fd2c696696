//! Subscription and billing endpoints.

use streamgate_access::AccountSnapshot;
use streamgate_core::PackageId;

use crate::dto::{AccountDto, PackageDto};
use crate::error::ApiResult;
use crate::http::Backend;

/// List the available subscription packages.
pub async fn packages(backend: &Backend) -> ApiResult<Vec<PackageDto>> {
    backend.get("/billing/packages").await
}

/// Subscribe the account to a package. Returns the updated account.
pub async fn subscribe(backend: &Backend, package: PackageId) -> ApiResult<AccountSnapshot> {
    let dto: AccountDto = backend
        .post(
            "/billing/subscribe",
            &serde_json::json!({ "package_id": package }),
        )
        .await?;
    dto.into_snapshot()
}

/// Cancel the current subscription. Returns the updated account.
pub async fn cancel(backend: &Backend) -> ApiResult<AccountSnapshot> {
    let dto: AccountDto = backend
        .post("/billing/cancel", &serde_json::json!({}))
        .await?;
    dto.into_snapshot()
}

/// Fetch the current subscription account.
pub async fn account(backend: &Backend) -> ApiResult<AccountSnapshot> {
    let dto: AccountDto = backend.get("/billing/account").await?;
    dto.into_snapshot()
}
