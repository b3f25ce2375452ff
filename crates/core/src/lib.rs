//! Parivar Core - Shared types library.
//!
//! This crate provides common types used across all Parivar Portal components:
//! - `portal` - The member-facing web application
//!
//! # Architecture
//!
//! The core crate contains only types and pure data - no I/O, no HTTP, no
//! session handling. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, phone numbers, roles,
//!   languages, and record statuses
//! - [`i18n`] - The English/Gujarati translation table

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod i18n;
pub mod types;

pub use types::*;
