//! Showroom Core - Shared types library.
//!
//! This crate provides the records every other Showroom component works with:
//! - `content` - Persistence, change notification and theme styling
//! - `storefront` - Public-facing single page and its display projections
//! - `admin` - Password-gated content editor
//! - `cli` - Command-line export, import and reset
//!
//! # Architecture
//!
//! The core crate contains only types, defaults and preset catalogs - no I/O,
//! no storage access, no HTTP. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product and theme records, preset catalogs, page ids

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
