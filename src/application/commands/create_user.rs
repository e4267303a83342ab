//! Create User Command
//!
//! Validates raw input into domain values and upserts the resulting user.

use std::sync::Arc;

use crate::application::error::UserError;
use crate::domain::{Email, User, UserId, UserRepository};

/// Raw payload for creating (or replacing) a user.
///
/// The id is supplied by the caller, normally freshly generated upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Handles [`CreateUser`].
pub struct CreateUserHandler<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for CreateUserHandler<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> CreateUserHandler<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate the payload, build the user, and save it.
    ///
    /// Validation runs email, then id, then name; the first failure is
    /// returned and nothing is written.
    #[tracing::instrument(name = "create_user", skip_all, fields(user_id = %command.id))]
    pub async fn handle(&self, command: CreateUser) -> Result<(), UserError> {
        let email = Email::from_string(&command.email)?;
        let id = UserId::from_string(&command.id)?;
        let user = User::create(id, &command.name, email)?;

        self.repository.save(&user).await?;

        tracing::debug!("User saved");
        Ok(())
    }
}
