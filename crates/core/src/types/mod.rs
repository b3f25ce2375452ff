//! Core types for the Parivar Portal.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod language;
pub mod phone;
pub mod role;
pub mod status;

pub use id::*;
pub use language::Language;
pub use phone::{Phone, PhoneError};
pub use role::{Role, RoleError};
pub use status::{MemberStatus, NoticeCategory};
