//! Authentication endpoints.

use streamgate_core::Email;

use crate::dto::{AuthResponse, LoginRequest, MeResponse, RegisterRequest};
use crate::error::ApiResult;
use crate::http::Backend;

/// Create a new user account.
pub async fn register(backend: &Backend, req: &RegisterRequest) -> ApiResult<AuthResponse> {
    backend.post("/auth/register", req).await
}

/// Exchange credentials for a bearer token plus user/account snapshots.
pub async fn login(backend: &Backend, email: &Email, password: &str) -> ApiResult<AuthResponse> {
    let req = LoginRequest {
        email: email.as_str().to_string(),
        password: password.to_string(),
    };
    backend.post("/auth/login", &req).await
}

/// Invalidate the current bearer token server-side.
pub async fn logout(backend: &Backend) -> ApiResult<()> {
    backend.post_unit("/auth/logout", &serde_json::json!({})).await
}

/// Fetch fresh user/account snapshots for the current token.
pub async fn current_user(backend: &Backend) -> ApiResult<MeResponse> {
    backend.get("/auth/me").await
}

/// Ask the backend to re-send the email verification mail.
pub async fn resend_verification(backend: &Backend) -> ApiResult<()> {
    backend
        .post_unit("/auth/verification/resend", &serde_json::json!({}))
        .await
}
