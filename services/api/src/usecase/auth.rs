use anyhow::Context as _;
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use orbx_auth_types::token::{JwtKeys, TokenIdentity, issue_token};
use orbx_core::error::AppError;
use orbx_domain::entity::EntityKind;
use orbx_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::gateway::translate::{Operation, translate};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Hash with argon2id and a random salt, returning the PHC string.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))
}

/// `false` for a wrong password and for a stored hash that does not parse.
pub fn verify_password(password: &str, phc: &str) -> bool {
    PasswordHash::new(phc)
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
        })
        .unwrap_or(false)
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::validation(format!("{field} required")))
}

// ── Register ──────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct RegisterUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> RegisterUseCase<U> {
    pub async fn execute(&self, input: RegisterInput) -> Result<User, AppError> {
        let name = required(input.name, "name")?.trim().to_owned();
        let email = normalize_email(&required(input.email, "email")?);
        let password = required(input.password, "password")?;
        if !email.contains('@') {
            return Err(AppError::validation("invalid email"));
        }

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .context("join password hashing task")??;

        let user = self
            .users
            .create(NewUser {
                name,
                email,
                password_hash,
                role: UserRole::User,
            })
            .await
            .map_err(|e| translate(EntityKind::User, Operation::Create, e))?;

        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }
}

// ── Login ─────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub user: User,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub keys: JwtKeys,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AppError> {
        let email = normalize_email(&required(input.email, "email")?);
        let password = required(input.password, "password")?;

        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| translate(EntityKind::User, Operation::Read, e))?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_owned()))?;

        let phc = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &phc))
            .await
            .context("join password verification task")?;
        if !matches {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_owned()));
        }

        let identity = TokenIdentity {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        };
        let issued = issue_token(&identity, &self.keys).context("sign access token")?;

        Ok(LoginOutput {
            token: issued.token,
            user,
        })
    }
}
