use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::domain::{Credentials, Registration, User};
use crate::error::{DomainError, EntityKind};
use crate::ports::{PasswordService, TokenService, UserRepository};

const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Emails are stored and looked up trimmed and lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A freshly signed bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Sign-up, login and the caller's own account.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    fn issue(&self, user_id: Uuid) -> Result<IssuedToken, DomainError> {
        Ok(IssuedToken {
            token: self.tokens.generate_token(user_id)?,
            expires_in: self.tokens.expiration_seconds(),
        })
    }

    pub async fn register(&self, form: Registration) -> Result<IssuedToken, DomainError> {
        form.validate()?;
        let email = normalize_email(&form.email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(DomainError::Rejected("User already exists".to_string()));
        }

        let password_hash = self.passwords.hash(&form.password)?;
        let user = self
            .users
            .create(User::new(form.name, email, password_hash, form.avatar))
            .await?;

        self.issue(user.id)
    }

    pub async fn login(&self, form: Credentials) -> Result<IssuedToken, DomainError> {
        form.validate()?;

        let user = self
            .users
            .find_by_email(&normalize_email(&form.email))
            .await?
            .ok_or_else(|| DomainError::Rejected(INVALID_CREDENTIALS.to_string()))?;

        if !self.passwords.verify(&form.password, &user.password_hash)? {
            return Err(DomainError::Rejected(INVALID_CREDENTIALS.to_string()));
        }

        self.issue(user.id)
    }

    pub async fn current_user(&self, caller: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(caller)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::User, caller))
    }
}
