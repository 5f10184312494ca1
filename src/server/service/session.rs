//! Registration and login.
//!
//! Registration looks the userName up and inserts only when it is free. The lookup and
//! insert are separate store calls with no unique index behind them, so two concurrent
//! registrations of the same userName can both succeed.
//!
//! Hashing and verification are CPU-bound and run on the blocking thread pool.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParams, LoginParams, RegisterUserParams, User},
    service::credential::CredentialHandler,
};

/// Service for user registration and credential checks.
pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
    credentials: &'a CredentialHandler,
}

impl<'a> SessionService<'a> {
    /// Creates a new SessionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `credentials` - Credential handler carrying the configured work factor
    ///
    /// # Returns
    /// - `SessionService` - New service instance
    pub fn new(db: &'a DatabaseConnection, credentials: &'a CredentialHandler) -> Self {
        Self { db, credentials }
    }

    /// Registers a new user under a free userName.
    ///
    /// # Arguments
    /// - `params` - userName, plaintext password and email address
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user; `password` holds the digest
    /// - `Err(AppError::AuthErr(UsernameInUse))` - A user with that userName exists
    /// - `Err(AppError::InternalErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_by_user_name(&params.user_name)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameInUse.into());
        }

        let credentials = self.credentials.clone();
        let password = params.password;
        let password_digest = tokio::task::spawn_blocking(move || credentials.hash(&password))
            .await
            .map_err(InternalError::from)??;

        let user = user_repo
            .create(CreateUserParams {
                user_name: params.user_name,
                password_digest,
                email_address: params.email_address,
            })
            .await?;

        tracing::info!("Registered user {}", user.user_name);

        Ok(user)
    }

    /// Checks a userName and password pair.
    ///
    /// An unknown userName and a wrong password produce the same error, and both
    /// spend one Argon2 derivation before answering.
    ///
    /// # Returns
    /// - `Ok(())` - Password matches the stored digest
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown userName or wrong password
    /// - `Err(AppError::InternalErr)` - Verification task failed
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, params: LoginParams) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo.find_by_user_name(&params.user_name).await?;

        let credentials = self.credentials.clone();
        let password = params.password;
        let verified = tokio::task::spawn_blocking(move || match user {
            Some(user) => credentials.verify(&password, &user.password),
            None => credentials.verify_missing(&password),
        })
        .await
        .map_err(InternalError::from)?;

        if !verified {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(())
    }
}
