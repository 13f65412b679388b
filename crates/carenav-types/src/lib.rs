//! Shared types, adapter traits, and core utilities for the Carenav platform.
//!
//! This crate contains the foundational types that are shared between the
//! server crate and the storage adapter implementations. Extracting these
//! into a separate crate allows adapter crates to compile in parallel with
//! the server's feature modules.

pub mod actor;
pub mod error;
pub mod prelude;
pub mod tab_adapter;
pub mod types;

// vim: ts=4
