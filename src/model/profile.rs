//! The outward-facing read view of a user.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::User;

/// What a caller is allowed to see about an active user.
///
/// Deliberately omits `id` and `status` — those are internal to the service.
/// The transport layer (out of scope here) serializes this however it likes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub surname: String,
    pub age: u32,
    pub balance: Option<Decimal>,
    pub debt: Option<Decimal>,
}

/// Pure entity-to-view mapping. No failure modes.
impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            surname: user.surname.clone(),
            age: user.age,
            balance: user.balance,
            debt: user.debt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserStatus;

    #[test]
    fn profile_copies_visible_fields() {
        let mut user = User::new("Alice", "Smith", 30);
        user.id = Some(7);
        user.status = Some(UserStatus::Active);
        user.balance = Some(Decimal::new(1250, 2)); // 12.50

        let profile = UserProfile::from(&user);
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.surname, "Smith");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.balance, Some(Decimal::new(1250, 2)));
        assert_eq!(profile.debt, Some(Decimal::ZERO));
    }

    #[test]
    fn profile_exposes_neither_id_nor_status() {
        let mut user = User::new("Alice", "Smith", 30);
        user.id = Some(7);
        user.status = Some(UserStatus::Inactive);

        let json = serde_json::to_value(UserProfile::from(&user)).unwrap();
        let fields = json.as_object().unwrap();
        assert_eq!(fields.len(), 5);
        assert!(!fields.contains_key("id"));
        assert!(!fields.contains_key("status"));
    }
}
