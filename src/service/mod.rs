//! The user account service — the only logic-bearing layer in the crate.
//!
//! [`UserService`] validates inputs, enforces the status and balance gates,
//! and orchestrates reads and writes against an injected [`UserStore`]. Each
//! operation does all of its validation up front and then performs at most
//! one write, so a failed call never leaves a partial mutation behind.

pub mod error;

pub use error::UserError;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::model::{SaveUserRequest, User, UserProfile, UserStatus};
use crate::store::UserStore;

/// The user account service.
///
/// Generic over its [`UserStore`] so the persistence collaborator is an
/// injected capability rather than ambient state. Construct one per store:
///
/// ```
/// use user_accounts::service::UserService;
/// use user_accounts::store::InMemoryUserStore;
///
/// let service = UserService::new(InMemoryUserStore::new());
/// ```
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a new user with zero balance, zero debt, and an unset status.
    ///
    /// The request is taken at face value — no range check on `age`, no
    /// uniqueness check on the name. The store assigns the id.
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: SaveUserRequest) -> Result<(), UserError> {
        let user = User::new(request.name, request.surname, request.age);
        self.store.save(user).await?;
        Ok(())
    }

    /// Returns the profile view of an **active** user.
    ///
    /// # Errors
    /// - [`UserError::NotFound`] if no record exists for `id`.
    /// - [`UserError::InvalidState`] unless `status` is explicitly
    ///   [`UserStatus::Active`] — a never-set status is rejected too.
    #[instrument(skip(self))]
    pub async fn get_active_profile(&self, id: u64) -> Result<UserProfile, UserError> {
        let user = self.load(id, "get_active_profile").await?;

        if user.status != Some(UserStatus::Active) {
            return Err(UserError::InvalidState("user is not active".into()));
        }

        Ok(UserProfile::from(&user))
    }

    /// Marks a user inactive.
    ///
    /// # Errors
    /// - [`UserError::NotFound`] if no record exists for `id`.
    /// - [`UserError::InvalidState`] if the user is **already** inactive.
    ///   A user whose status was never set can be deactivated.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: u64) -> Result<(), UserError> {
        let mut user = self.load(id, "deactivate").await?;

        if user.status == Some(UserStatus::Inactive) {
            return Err(UserError::InvalidState("user is already inactive".into()));
        }

        user.status = Some(UserStatus::Inactive);
        self.store.save(user).await?;

        info!(%id, "user deactivated");
        Ok(())
    }

    /// Adds `amount` to a user's balance.
    ///
    /// A missing stored balance counts as zero. Note the gate: only an
    /// explicit [`UserStatus::Inactive`] blocks a deposit — an unset status
    /// does not. This is looser than [`pay`](Self::pay) on purpose.
    ///
    /// # Errors
    /// - [`UserError::InvalidArgument`] if `amount <= 0`.
    /// - [`UserError::NotFound`] if no record exists for `id`.
    /// - [`UserError::InvalidState`] if the user is inactive.
    #[instrument(skip(self))]
    pub async fn deposit(&self, id: u64, amount: Decimal) -> Result<(), UserError> {
        if amount <= Decimal::ZERO {
            return Err(UserError::InvalidArgument(
                "deposit amount must be greater than zero".into(),
            ));
        }

        let mut user = self.load(id, "deposit").await?;

        if user.status == Some(UserStatus::Inactive) {
            return Err(UserError::InvalidState(
                "cannot deposit to an inactive user".into(),
            ));
        }

        let new_balance = user.balance.unwrap_or(Decimal::ZERO) + amount;
        user.balance = Some(new_balance);
        self.store.save(user).await?;

        info!(%amount, %id, %new_balance, "deposit completed");
        Ok(())
    }

    /// Subtracts `amount` from a user's balance.
    ///
    /// A missing stored balance counts as zero, which makes any payment an
    /// overdraw. Requires an explicit [`UserStatus::Active`] status — unset
    /// is rejected, unlike [`deposit`](Self::deposit).
    ///
    /// # Errors
    /// - [`UserError::InvalidArgument`] if `amount <= 0`, or if the balance
    ///   cannot cover the payment (checked before any write).
    /// - [`UserError::NotFound`] if no record exists for `id`.
    /// - [`UserError::InvalidState`] unless the user is active.
    #[instrument(skip(self))]
    pub async fn pay(&self, id: u64, amount: Decimal) -> Result<(), UserError> {
        if amount <= Decimal::ZERO {
            return Err(UserError::InvalidArgument(
                "payment amount must be greater than zero".into(),
            ));
        }

        let mut user = self.load(id, "pay").await?;

        if user.status != Some(UserStatus::Active) {
            return Err(UserError::InvalidState(
                "cannot process payment for an inactive user".into(),
            ));
        }

        let balance = user.balance.unwrap_or(Decimal::ZERO);
        if balance < amount {
            return Err(UserError::InvalidArgument(
                "insufficient balance for payment".into(),
            ));
        }

        let new_balance = balance - amount;
        user.balance = Some(new_balance);
        self.store.save(user).await?;

        info!(%amount, %id, %new_balance, "payment completed");
        Ok(())
    }

    /// Point lookup, mapping absence to [`UserError::NotFound`] tagged with
    /// the calling operation.
    async fn load(&self, id: u64, operation: &'static str) -> Result<User, UserError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound { id, operation })
    }
}
