//! Wonderland Core - Shared types library.
//!
//! This crate provides common types used across all Wonderland Stores
//! components:
//! - `storefront` - Public-facing storefront for stream overlay designs
//! - `cli` - Command-line tools for seeding and health checks
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. All
//! persistence and business logic live in the remote Wonderland API; this
//! crate models the vocabulary that API speaks.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
