//! Account service: signup and login
//!
//! Password hashing and verification run on the blocking thread pool.
//! Neither the plaintext password nor its hash is ever returned or logged.

use crate::auth::PasswordService;
use crate::db;
use crate::error::ApiError;
use crate::repositories::AccountRepository;
use fitforge_shared::errors::AuthError;
use fitforge_shared::types::AccountResponse;
use fitforge_shared::validation::{validate_password, validate_username};
use sqlx::PgPool;
use tracing::{info, warn};

/// Account service for signup/login operations
pub struct AccountService;

impl AccountService {
    /// Create an account
    ///
    /// The existence check is only a fast path: two concurrent signups can
    /// both pass it, so the UNIQUE constraint on `accounts.username` is what
    /// actually guarantees uniqueness. Its violation maps to the same
    /// conflict error.
    pub async fn signup(
        pool: &PgPool,
        passwords: &PasswordService,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AccountResponse, ApiError> {
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
            _ => {
                return Err(ApiError::Validation(
                    AuthError::MissingCredentials.to_string(),
                ))
            }
        };

        validate_username(username).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;

        if AccountRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(AuthError::UsernameTaken.to_string()));
        }

        let password_hash = passwords
            .hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let account = match AccountRepository::create(pool, username, &password_hash).await {
            Ok(account) => account,
            Err(e) if db::is_unique_violation(&e) => {
                warn!(username = %username, "Signup lost a race on username");
                return Err(ApiError::Conflict(AuthError::UsernameTaken.to_string()));
            }
            Err(e) => return Err(ApiError::Internal(e)),
        };

        info!(account_id = %account.id, username = %account.username, "Account created");

        Ok(AccountResponse {
            username: account.username,
            id: account.id,
        })
    }

    /// Authenticate with username and password
    ///
    /// Unknown usernames, wrong passwords and missing fields all produce the
    /// same "Invalid credentials" error. An unknown username still pays for
    /// one hash verification so response times match.
    pub async fn login(
        pool: &PgPool,
        passwords: &PasswordService,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AccountResponse, ApiError> {
        let invalid = || ApiError::Unauthorized(AuthError::InvalidCredentials.to_string());

        let (username, password) = match (username, password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
            _ => return Err(invalid()),
        };

        let account = match AccountRepository::find_by_username(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            Some(account) => account,
            None => {
                passwords
                    .verify_unknown_account(password.to_string())
                    .await
                    .map_err(ApiError::Internal)?;
                info!(username = %username, "Login rejected");
                return Err(invalid());
            }
        };

        let valid = PasswordService::verify_async(password.to_string(), account.password_hash)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            info!(username = %username, "Login rejected");
            return Err(invalid());
        }

        Ok(AccountResponse {
            username: account.username,
            id: account.id,
        })
    }
}
