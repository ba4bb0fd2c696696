//! `streamgate-access` — pure access-control decisions (post-auth landing,
//! route gating).
//!
//! This crate is intentionally decoupled from HTTP and rendering. It maps
//! read-only snapshots of the authenticated user and their subscription
//! account to redirect decisions; performing the actual navigation is the
//! caller's job.

pub mod account;
pub mod gate;
pub mod route;

pub use account::{AccountSnapshot, AccountStatus, UserSnapshot};
pub use gate::{
    post_auth_landing, route_access, AccessGate, DecisionSink, Landing, NoopSink, Redirect,
    RouteAccess, TracingSink,
};
pub use route::RouteClass;
