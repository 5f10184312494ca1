use thiserror::Error;

/// Internal issues raised while serving a request, unrelated to the store.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to produce a digest for a password.
    ///
    /// Results in a 500 Internal Server Error.
    #[error("Failed to hash password: {0}")]
    PasswordHash(argon2::password_hash::Error),

    /// The blocking task running a password hash or verification did not complete.
    #[error("Password task failed: {0}")]
    PasswordTask(#[from] tokio::task::JoinError),
}
