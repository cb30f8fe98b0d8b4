//! # User Accounts
//!
//! > **A thin user-account service: balances, status gates, nothing clever.**
//!
//! This crate manages user account records with a monetary balance and a
//! status flag. It exposes exactly five operations: create a user, read an
//! active user's profile, deactivate a user, deposit into a balance, and pay
//! out of a balance.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Capability Injection
//! Persistence is a *capability*, not ambient state. The [`service::UserService`]
//! is generic over a [`store::UserStore`] trait, so tests (and anything else)
//! can substitute the bundled [`store::InMemoryUserStore`] for a real database
//! adapter without touching the service logic.
//!
//! ### Validate First, Write Once
//! Every operation performs all of its validation before its single write.
//! A failed operation therefore never leaves a partial mutation behind.
//!
//! ### Status Gates Are Asymmetric On Purpose
//! The gating rules differ between operations and the differences are part of
//! the contract, not bugs to fix:
//! - **Deposit** rejects only an explicit `Inactive` status — a user whose
//!   status was never set can still receive money.
//! - **Pay** and **profile reads** require an explicit `Active` status — an
//!   unset status is rejected.
//! - **Deactivate** rejects only an already-`Inactive` user — an unset status
//!   may be deactivated.
//!
//! See [`service::UserService`] for the full per-operation rules.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: Pure data structures — the [`User`](model::User) entity, the
//!   [`SaveUserRequest`](model::SaveUserRequest) create payload, and the
//!   outward-facing [`UserProfile`](model::UserProfile) view.
//! - [`store`]: The persistence seam. The [`UserStore`](store::UserStore)
//!   trait plus an in-memory implementation with auto-incrementing ids.
//! - [`service`]: The logic-bearing layer. [`UserService`](service::UserService)
//!   and its [`UserError`](service::UserError) classification.
//! - [`lifecycle`]: Process-level wiring — tracing/logging setup.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use user_accounts::model::SaveUserRequest;
//! use user_accounts::service::UserService;
//! use user_accounts::store::InMemoryUserStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), user_accounts::service::UserError> {
//! let service = UserService::new(InMemoryUserStore::new());
//!
//! service.create_user(SaveUserRequest {
//!     name: "Alice".into(),
//!     surname: "Smith".into(),
//!     age: 30,
//! }).await?;
//!
//! service.deposit(1, 100.into()).await?;
//! assert!(service.pay(1, 40.into()).await.is_err()); // status never set: not Active
//! # Ok(())
//! # }
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod service;
pub mod store;
