//! In-memory stores for the portal.
//!
//! The portal keeps all state in process memory for its lifetime; there is
//! no database. Stores hand out clones of their records, so callers can
//! never mutate stored state through a lookup result.
//!
//! # Stores
//!
//! - [`users::UserStore`] - login-capable accounts, keyed by a sequential id

pub mod users;

pub use users::{NewUser, UserStore};
