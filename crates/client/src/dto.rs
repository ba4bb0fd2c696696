//! Wire shapes for the backend REST API.
//!
//! DTOs mirror what the backend actually sends; conversion into the access
//! snapshots happens here, and a response missing a required field becomes
//! [`ApiError::MissingField`] instead of a guessed default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use streamgate_access::{AccountSnapshot, AccountStatus, UserSnapshot};
use streamgate_core::{AccountId, ContentId, PackageId, ProfileId, UserId};

use crate::error::ApiError;

// -------------------------
// Auth
// -------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub onboarding_completed: Option<bool>,
    pub email_verified_at: Option<DateTime<Utc>>,
}

impl UserDto {
    pub fn into_snapshot(self) -> Result<UserSnapshot, ApiError> {
        Ok(UserSnapshot {
            id: self.id.ok_or(ApiError::MissingField("user.id"))?,
            email: self.email.ok_or(ApiError::MissingField("user.email"))?,
            onboarding_completed: self
                .onboarding_completed
                .ok_or(ApiError::MissingField("user.onboarding_completed"))?,
            email_verified_at: self.email_verified_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    pub id: Option<AccountId>,
    pub package_id: Option<PackageId>,
    pub status: Option<AccountStatus>,
}

impl AccountDto {
    pub fn into_snapshot(self) -> Result<AccountSnapshot, ApiError> {
        Ok(AccountSnapshot {
            id: self.id.ok_or(ApiError::MissingField("account.id"))?,
            // `package_id` is nullable by contract: no plan selected yet.
            package_id: self.package_id,
            status: self.status.ok_or(ApiError::MissingField("account.status"))?,
        })
    }
}

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
    /// Absent until a subscription relationship exists.
    pub account: Option<AccountDto>,
}

/// Response of `GET /auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: UserDto,
    pub account: Option<AccountDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// -------------------------
// Profiles
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileDto {
    pub id: ProfileId,
    pub name: String,
    /// Relative avatar path; the caller resolves it against its CDN base.
    pub avatar: Option<String>,
    #[serde(default)]
    pub kids: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub avatar: Option<String>,
    pub kids: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub kids: Option<bool>,
}

// -------------------------
// Watchlist / favorites
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchlistItemDto {
    pub content_id: ContentId,
    pub added_at: DateTime<Utc>,
}

// -------------------------
// Playback
// -------------------------

/// Short-lived credential exchanged for a streaming manifest URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaybackTokenDto {
    pub token: String,
    pub content_id: ContentId,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenValidityDto {
    pub valid: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Location of the HLS manifest for a validated playback token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestDto {
    pub url: String,
}

// -------------------------
// Billing
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageDto {
    pub id: PackageId,
    pub name: String,
    pub price_cents: i64,
    pub max_screens: u32,
}

// -------------------------
// Interests / onboarding
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterestDto {
    pub id: i64,
    pub name: String,
}
