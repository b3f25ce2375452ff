//! Account store for login-capable identities.
//!
//! This is the one stateful component of the portal. It hands out
//! sequential ids, never updates or deletes a record, and never fails:
//! the only observable "miss" is `None` from a lookup.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use parivar_core::{Phone, Role, UserId};

use crate::models::user::User;

/// A draft account as supplied by a caller.
///
/// Lacks everything the store assigns on insert: the id, the active flag,
/// and the creation timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Phone number used as the login lookup key.
    pub phone: Phone,
    /// Login credential, stored as supplied.
    pub password: String,
    /// Role tag; `None` defaults to [`Role::Member`].
    pub role: Option<Role>,
    /// Optional given name.
    pub first_name: Option<String>,
    /// Optional surname.
    pub last_name: Option<String>,
}

/// In-memory account store.
///
/// Ids start at 1 and increase by 1 per `create` call; an id is never
/// reused within the process lifetime. Records are immutable once stored:
/// there is no update and no delete operation, and lookups return clones.
///
/// Phone numbers are intended to be unique but the store does not enforce
/// it. When duplicates exist, [`UserStore::get_by_phone`] returns the
/// account created first.
///
/// The map and the id counter share one mutex so that ids stay unique and
/// strictly increasing under concurrent `create` calls from axum handlers.
#[derive(Debug, Default)]
pub struct UserStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Keyed by id; ids are assigned in increasing order, so iterating the
    /// map in key order is insertion order.
    users: BTreeMap<UserId, User>,
    next_id: i32,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl UserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an account by id.
    ///
    /// Returns `None` for any id the store never assigned.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    /// Get the first account, in insertion order, whose phone number
    /// equals `phone` exactly.
    ///
    /// A linear scan: the store holds a small roster, and scanning keeps
    /// the first-created-wins behavior on duplicate phone numbers.
    #[must_use]
    pub fn get_by_phone(&self, phone: &str) -> Option<User> {
        self.lock()
            .users
            .values()
            .find(|user| user.phone.as_str() == phone)
            .cloned()
    }

    /// Insert a new account and return the stored record.
    ///
    /// Assigns the next sequential id, defaults the role to
    /// [`Role::Member`] when the draft omits it, sets the active flag, and
    /// stamps the creation time. The phone number is not checked for
    /// uniqueness.
    pub fn create(&self, new_user: NewUser) -> User {
        let mut inner = self.lock();

        let id = UserId::new(inner.next_id);
        inner.next_id += 1;

        let user = User {
            id,
            phone: new_user.phone,
            password: new_user.password,
            role: new_user.role.unwrap_or_default(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            is_active: true,
            created_at: Utc::now(),
        };

        inner.users.insert(id, user.clone());
        user
    }

    /// Number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().users.is_empty()
    }

    /// A poisoned lock means another thread panicked mid-insert; the data
    /// itself is still a consistent map + counter, so keep serving it
    /// rather than propagating a failure the store's contract doesn't have.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(phone: &str) -> NewUser {
        NewUser {
            phone: Phone::parse(phone).unwrap(),
            password: "123456".to_owned(),
            role: None,
            first_name: None,
            last_name: None,
        }
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let store = UserStore::new();
        for expected in 1..=5 {
            let user = store.create(draft(&format!("+91 90000 0000{expected}")));
            assert_eq!(user.id, UserId::new(expected));
        }
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_get_returns_the_created_record_unchanged() {
        let store = UserStore::new();
        let created = store.create(NewUser {
            phone: Phone::parse("+91 98765 43210").unwrap(),
            password: "123456".to_owned(),
            role: Some(Role::SuperAdmin),
            first_name: Some("Asha".to_owned()),
            last_name: Some("Bhikadiya".to_owned()),
        });

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.phone, created.phone);
        assert_eq!(fetched.password, created.password);
        assert_eq!(fetched.role, Role::SuperAdmin);
        assert_eq!(fetched.first_name.as_deref(), Some("Asha"));
        assert_eq!(fetched.last_name.as_deref(), Some("Bhikadiya"));
        assert!(fetched.is_active);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = UserStore::new();
        store.create(draft("+91 98765 43210"));
        assert!(store.get(UserId::new(99)).is_none());
        assert!(store.get(UserId::new(0)).is_none());
    }

    #[test]
    fn test_get_by_phone_finds_exact_match() {
        let store = UserStore::new();
        let created = store.create(draft("+91 98765 43210"));
        store.create(draft("+91 98765 43211"));

        let found = store.get_by_phone("+91 98765 43210").unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.get_by_phone("+91 00000 00000").is_none());
        // Formatting matters: the key is the string as entered.
        assert!(store.get_by_phone("+919876543210").is_none());
    }

    #[test]
    fn test_duplicate_phones_resolve_to_first_created() {
        let store = UserStore::new();
        let first = store.create(draft("+91 98765 43210"));
        let second = store.create(draft("+91 98765 43210"));
        assert_ne!(first.id, second.id);

        let found = store.get_by_phone("+91 98765 43210").unwrap();
        assert_eq!(found.id, first.id);
        // Both records still exist and are reachable by id.
        assert_eq!(store.get(second.id).unwrap().id, second.id);
    }

    #[test]
    fn test_role_defaults_to_member() {
        let store = UserStore::new();
        let defaulted = store.create(draft("+91 98765 43211"));
        assert_eq!(defaulted.role, Role::Member);

        let explicit = store.create(NewUser {
            role: Some(Role::Admin),
            ..draft("+91 98765 43212")
        });
        assert_eq!(explicit.role, Role::Admin);
    }

    #[test]
    fn test_created_records_are_active_and_stamped() {
        let store = UserStore::new();
        let before = Utc::now();
        let user = store.create(draft("+91 98765 43210"));
        let after = Utc::now();

        assert!(user.is_active);
        assert!(user.created_at >= before && user.created_at <= after);
    }

    #[test]
    fn test_concurrent_creates_keep_ids_unique() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let store = Arc::new(UserStore::new());
        let mut handles = Vec::new();
        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                (0..50)
                    .map(|i| store.create(draft(&format!("+91 9{t} {i}"))).id)
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {id} was assigned twice");
            }
        }
        assert_eq!(seen.len(), 400);
        assert_eq!(store.len(), 400);
        // Every id in 1..=400 was handed out exactly once.
        assert!((1..=400).all(|i| seen.contains(&UserId::new(i))));
    }
}
