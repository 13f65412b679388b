//! Core infrastructure for the Carenav platform.
//!
//! This crate contains shared infrastructure that is used by the server
//! crate and the feature crates: the application state, the actor-context
//! extractors, and the trusted-gateway middleware.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod extract;
pub mod prelude;

pub use app::{App, AppBuilderOpts, AppState};
pub use extract::{Actor, OptionalRequestId, RequestId};

// vim: ts=4
