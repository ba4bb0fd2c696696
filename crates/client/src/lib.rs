//! `streamgate-client` — typed wrappers over the backend REST API.
//!
//! Every function here is a thin pass-through: one request, one typed
//! decode, no added policy. Transport behavior (retries, timeouts) is left
//! to `reqwest` defaults; navigation decisions live in `streamgate-access`.

pub mod auth;
pub mod billing;
pub mod config;
pub mod dto;
pub mod error;
pub mod http;
pub mod interests;
pub mod playback;
pub mod profiles;
pub mod session;
pub mod watchlist;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::Backend;
pub use session::Session;
