//! Application state shared across handlers.

use std::sync::Arc;

use parivar_core::{Phone, Role};

use crate::config::PortalConfig;
use crate::directory::Directory;
use crate::store::{NewUser, UserStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: the account store, the seeded directory, and the
/// configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    users: UserStore,
    directory: Directory,
}

impl AppState {
    /// Create a new application state with a seeded account roster and
    /// directory.
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        let users = UserStore::new();
        seed_accounts(&users);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                users,
                directory: Directory::seed(),
            }),
        }
    }

    /// Get a reference to the portal configuration.
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Get a reference to the account store.
    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    /// Get a reference to the seeded directory.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.inner.directory
    }
}

/// Seed the demo accounts the portal ships with.
///
/// One account per role; all share the demo password shown on the login
/// page.
fn seed_accounts(users: &UserStore) {
    let accounts = [
        ("+91 98765 43210", Role::SuperAdmin, "Asha", "Bhikadiya"),
        ("+91 98765 43230", Role::Admin, "Mahesh", "Bhikadiya"),
        ("+1 408 555 0164", Role::Member, "Priya", "Bhikadiya"),
    ];

    for (phone, role, first, last) in accounts {
        match Phone::parse(phone) {
            Ok(phone) => {
                users.create(NewUser {
                    phone,
                    password: "123456".to_owned(),
                    role: Some(role),
                    first_name: Some(first.to_owned()),
                    last_name: Some(last.to_owned()),
                });
            }
            Err(err) => tracing::warn!(phone, %err, "skipping unparseable seed account"),
        }
    }
}
