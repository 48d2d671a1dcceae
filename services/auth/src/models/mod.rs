//! Authentication service models

pub mod role;
pub mod user;

// Re-export for convenience
pub use role::Role;
pub use user::{Account, Identity, LoginCredentials, seeded_account, seeded_accounts};
