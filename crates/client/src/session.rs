//! Authenticated session facade.
//!
//! Holds the backend handle plus the user/account snapshots delivered at
//! authentication, and answers navigation questions by delegating to
//! `streamgate-access`. It only ever *decides*; performing the redirect is
//! the navigation runtime's job.

use streamgate_access::{
    AccessGate, AccountSnapshot, Landing, RouteAccess, TracingSink, UserSnapshot,
};
use streamgate_core::Email;

use crate::auth;
use crate::config::ClientConfig;
use crate::dto::{AuthResponse, RegisterRequest};
use crate::error::ApiResult;
use crate::http::Backend;

pub struct Session {
    backend: Backend,
    gate: AccessGate<TracingSink>,
    user: Option<UserSnapshot>,
    account: Option<AccountSnapshot>,
}

impl Session {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            backend: Backend::new(config),
            gate: AccessGate::with_sink(TracingSink),
            user: None,
            account: None,
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn user(&self) -> Option<&UserSnapshot> {
        self.user.as_ref()
    }

    pub fn account(&self) -> Option<&AccountSnapshot> {
        self.account.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Log in and return where to land the user.
    pub async fn login(&mut self, email: &Email, password: &str) -> ApiResult<Landing> {
        let resp = auth::login(&self.backend, email, password).await?;
        self.apply_auth(resp)
    }

    /// Register and return where to land the user (onboarding, in practice).
    pub async fn register(&mut self, req: &RegisterRequest) -> ApiResult<Landing> {
        let resp = auth::register(&self.backend, req).await?;
        self.apply_auth(resp)
    }

    /// Re-fetch the user/account snapshots for the current token.
    pub async fn refresh(&mut self) -> ApiResult<()> {
        let me = auth::current_user(&self.backend).await?;
        let user = me.user.into_snapshot()?;
        let account = match me.account {
            Some(dto) => Some(dto.into_snapshot()?),
            None => None,
        };

        self.user = Some(user);
        self.account = account;
        Ok(())
    }

    /// Log out server-side and drop all local session state.
    ///
    /// Local state is cleared even if the server call fails; the token may
    /// already be dead and the caller is leaving regardless.
    pub async fn logout(&mut self) -> ApiResult<()> {
        let result = auth::logout(&self.backend).await;
        self.backend.clear_bearer();
        self.user = None;
        self.account = None;
        result
    }

    /// Post-auth landing decision. `None` when not authenticated.
    pub fn landing(&self) -> Option<Landing> {
        self.user
            .as_ref()
            .map(|user| self.gate.post_auth_landing(user, self.account.as_ref()))
    }

    /// Whether the given route is currently visitable.
    pub fn can_visit(&self, route: &str) -> RouteAccess {
        self.gate
            .route_access(self.user.as_ref(), self.account.as_ref(), route)
    }

    fn apply_auth(&mut self, resp: AuthResponse) -> ApiResult<Landing> {
        let user = resp.user.into_snapshot()?;
        let account = match resp.account {
            Some(dto) => Some(dto.into_snapshot()?),
            None => None,
        };

        let landing = self.gate.post_auth_landing(&user, account.as_ref());

        // Snapshots and token are swapped in together; a malformed response
        // leaves the previous session state untouched.
        self.backend.set_bearer(resp.token);
        self.user = Some(user);
        self.account = account;
        Ok(landing)
    }
}
