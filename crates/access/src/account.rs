//! Read-only snapshots of the authenticated user and their subscription
//! account.
//!
//! Both records are created and mutated exclusively by the backend; this
//! layer only reads the snapshot delivered with the authentication response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use streamgate_core::{AccountId, PackageId, UserId};

/// Snapshot of the authenticated user's identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: UserId,
    pub email: String,
    pub onboarding_completed: bool,
    pub email_verified_at: Option<DateTime<Utc>>,
}

impl UserSnapshot {
    pub fn email_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }
}

/// Snapshot of the subscription account, when one exists.
///
/// Absence of the whole record (`Option<AccountSnapshot>` at call sites)
/// means no subscription relationship exists yet; `package_id == None`
/// means the account exists but no plan was ever selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: AccountId,
    pub package_id: Option<PackageId>,
    pub status: AccountStatus,
}

impl AccountSnapshot {
    /// Whether this account currently entitles playback: a plan is selected
    /// and the subscription has not lapsed.
    pub fn entitles_playback(&self) -> bool {
        self.package_id.is_some() && !self.status.is_lapsed()
    }
}

/// Subscription account status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
    Expired,
    Cancelled,
}

impl AccountStatus {
    /// Membership in the lapsed set.
    ///
    /// Kept as an exhaustive match so adding a status forces a deliberate
    /// gating decision here.
    pub fn is_lapsed(&self) -> bool {
        match self {
            AccountStatus::Active => false,
            AccountStatus::Inactive
            | AccountStatus::Suspended
            | AccountStatus::Expired
            | AccountStatus::Cancelled => true,
        }
    }
}

impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Suspended => "suspended",
            AccountStatus::Expired => "expired",
            AccountStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}
