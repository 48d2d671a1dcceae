//! Session management
//!
//! A [`Session`] holds at most one signed-in identity and mirrors it to the
//! store under [`SESSION_KEY`] so it survives restarts. It is created with
//! [`Session::restore`] and torn down with [`Session::logout`]; components
//! that need the current identity are handed the session explicitly.

use common::{JsonStore, LatencyConfig, Operation, StoreError};
use tracing::{info, warn};

use crate::error::{AuthError, AuthResult};
use crate::models::{Identity, LoginCredentials, Role, seeded_account};

/// Store key of the persisted identity
pub const SESSION_KEY: &str = "hotelquick_user";

/// The active user session
pub struct Session {
    store: JsonStore,
    latency: LatencyConfig,
    current: Option<Identity>,
}

impl Session {
    /// Restore the session persisted in `store`, if any
    ///
    /// A persisted value that is not a valid identity is discarded and the
    /// session starts anonymous.
    pub async fn restore(store: JsonStore, latency: LatencyConfig) -> AuthResult<Self> {
        let current = match store.read_document::<Identity>(SESSION_KEY).await {
            Ok(identity) => identity,
            Err(StoreError::Serialization(e)) => {
                warn!("Discarding unreadable persisted session: {}", e);
                store.remove(SESSION_KEY).await?;
                None
            }
            Err(e) => return Err(e.into()),
        };

        match &current {
            Some(identity) => info!("Restored session for {} ({})", identity.email, identity.role),
            None => info!("No persisted session, starting anonymous"),
        }

        Ok(Self {
            store,
            latency,
            current,
        })
    }

    /// Sign in with one of the seeded accounts
    ///
    /// On failure the current session, signed in or not, is left as it was.
    pub async fn login(&mut self, email: &str, password: &str, role: Role) -> AuthResult<Identity> {
        info!("Login attempt for {} as {}", email, role);
        self.latency.simulate(Operation::Login).await;

        let account = seeded_account(role);
        if !account.matches(email, password) {
            warn!("Login failed for {} as {}", email, role);
            return Err(AuthError::InvalidCredentials);
        }

        let identity = account.identity;
        self.store.write_document(SESSION_KEY, &identity).await?;
        self.current = Some(identity.clone());

        info!("Welcome back, {}!", identity.name);
        Ok(identity)
    }

    /// Sign in with a credentials payload
    pub async fn login_with(&mut self, credentials: &LoginCredentials) -> AuthResult<Identity> {
        self.login(&credentials.email, &credentials.password, credentials.role)
            .await
    }

    /// Sign out and clear the persisted identity
    pub async fn logout(&mut self) -> AuthResult<()> {
        self.store.remove(SESSION_KEY).await?;
        if let Some(identity) = self.current.take() {
            info!("Logged out {}", identity.email);
        }
        Ok(())
    }

    /// The signed-in identity, if any
    pub fn current_identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_consumer(&self) -> bool {
        self.has_role(Role::Consumer)
    }

    pub fn is_provider(&self) -> bool {
        self.has_role(Role::Provider)
    }

    fn has_role(&self, role: Role) -> bool {
        self.current.as_ref().is_some_and(|identity| identity.role == role)
    }
}
