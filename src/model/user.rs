//! The [`User`] entity and its create payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a user account.
///
/// Serialized as the upper-case strings the backing table stores
/// (`"ACTIVE"` / `"INACTIVE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A user account record.
///
/// # Identity
/// `id` is `None` until the store assigns one on first save; once assigned it
/// never changes. Two `User` values are equal iff their ids are equal — the
/// other fields do not participate (see the manual [`PartialEq`] impl).
///
/// # Optional money fields
/// `balance` and `debt` are `Option<Decimal>` because a stored row may carry
/// no value; every operation that reads the balance treats `None` as zero.
/// `debt` is part of the schema but no operation currently mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<u64>,
    pub name: String,
    pub surname: String,
    pub age: u32,
    pub balance: Option<Decimal>,
    pub debt: Option<Decimal>,
    pub status: Option<UserStatus>,
}

impl User {
    /// Creates a fresh, unsaved user record.
    ///
    /// Balance and debt start at zero, `status` starts unset, and `id` stays
    /// `None` until [`UserStore::save`](crate::store::UserStore::save)
    /// assigns one.
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            surname: surname.into(),
            age,
            balance: Some(Decimal::ZERO),
            debt: Some(Decimal::ZERO),
            status: None,
        }
    }
}

/// Equality by identity key only.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

/// Payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveUserRequest {
    pub name: String,
    pub surname: String,
    pub age: u32,
}
