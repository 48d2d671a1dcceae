//! Identity and account models

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Identity of a signed-in user, as persisted in the session
///
/// Carries no password: this is what remains of an [`Account`] once the
/// credentials have been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A seeded account with its plain-text demo password
#[derive(Debug, Clone)]
pub struct Account {
    pub identity: Identity,
    pub password: String,
}

impl Account {
    /// Whether `email` and `password` exactly match this account
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.identity.email == email && self.password == password
    }
}

/// User login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The two demo accounts, one per role
pub fn seeded_accounts() -> [Account; 2] {
    [
        Account {
            identity: Identity {
                id: "consumer-1".to_string(),
                name: "John Doe".to_string(),
                email: "consumer@example.com".to_string(),
                role: Role::Consumer,
            },
            password: "password123".to_string(),
        },
        Account {
            identity: Identity {
                id: "provider-1".to_string(),
                name: "Hotel Manager".to_string(),
                email: "provider@example.com".to_string(),
                role: Role::Provider,
            },
            password: "password123".to_string(),
        },
    ]
}

/// The seeded account for `role`
pub fn seeded_account(role: Role) -> Account {
    let [consumer, provider] = seeded_accounts();
    match role {
        Role::Consumer => consumer,
        Role::Provider => provider,
    }
}
