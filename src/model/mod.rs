//! Pure data structures for the user-accounts domain.

pub mod profile;
pub mod user;

pub use profile::*;
pub use user::*;
