use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

use super::{AuthError, AuthUser, Role};

/// Stored credential: the public user plus an Argon2 PHC hash
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: AuthUser,
    pub password_hash: String,
}

/// Fixed set of login accounts, read-only after construction
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: Vec<UserRecord>,
}

const DEMO_USERS: &[(&str, &str, &str, Role)] = &[
    ("1", "admin", "admin123", Role::Admin),
    ("2", "employee", "employee123", Role::Employee),
];

static DEMO: OnceCell<Arc<CredentialStore>> = OnceCell::new();

// Verified against when the username is unknown, so a miss costs one Argon2 run
static DECOY_HASH: OnceCell<String> = OnceCell::new();

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

impl CredentialStore {
    /// Build from plaintext passwords, hashing each one
    pub fn from_plaintext(entries: &[(&str, &str, &str, Role)]) -> Result<Self, AuthError> {
        let users = entries
            .iter()
            .map(|(id, username, password, role)| {
                Ok(UserRecord {
                    user: AuthUser { id: id.to_string(), username: username.to_string(), role: *role },
                    password_hash: hash_password(password)?,
                })
            })
            .collect::<Result<Vec<_>, AuthError>>()?;
        Ok(Self { users })
    }

    /// Demo accounts, hashed once per process
    pub fn demo() -> Result<Arc<Self>, AuthError> {
        DEMO.get_or_try_init(|| Self::from_plaintext(DEMO_USERS).map(Arc::new))
            .cloned()
    }

    /// Exact username match, then password check against the stored hash
    pub fn verify(&self, username: &str, password: &str) -> Result<AuthUser, AuthError> {
        let Some(record) = self.users.iter().find(|r| r.user.username == username) else {
            let decoy = DECOY_HASH.get_or_try_init(|| hash_password("decoy-password"))?;
            verify_password(password, decoy);
            return Err(AuthError::InvalidCredentials);
        };

        if verify_password(password, &record.password_hash) {
            Ok(record.user.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
