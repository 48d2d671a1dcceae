//! Authentication for the HotelQuick application
//!
//! Identities, the two seeded demo accounts, login form validation and the
//! [`Session`] object that tracks who is signed in.

pub mod error;
pub mod models;
pub mod session;
pub mod validation;

pub use error::{AuthError, AuthResult};
pub use models::{Identity, LoginCredentials, Role};
pub use session::{SESSION_KEY, Session};
