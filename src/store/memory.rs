//! In-memory [`UserStore`] backed by a `HashMap`.
//!
//! This is both the test double for the service layer and a usable store for
//! demos. Ids come from an atomic counter, so the first saved user gets id 1,
//! the second id 2, and so on — mirroring an auto-incrementing primary key.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::model::User;
use crate::store::{StoreError, UserStore};

/// A `HashMap`-backed user table with auto-incrementing ids.
///
/// The mutex guards only the map itself; it is held for the duration of a
/// single lookup or insert, never across an await point. Read-modify-write
/// sequences spanning two calls are *not* atomic; any stronger guarantee
/// belongs to a real storage adapter.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    rows: Mutex<HashMap<u64, User>>,
    next_id: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Number of rows currently stored. Handy in tests.
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, StoreError> {
        let row = self.rows.lock().unwrap().get(&id).cloned();
        debug!(%id, found = row.is_some(), "find_by_id");
        Ok(row)
    }

    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        let id = match user.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                user.id = Some(id);
                id
            }
        };
        let mut rows = self.rows.lock().unwrap();
        rows.insert(id, user.clone());
        debug!(%id, size = rows.len(), "save");
        Ok(user)
    }
}
