//! Get User By Id Query

use std::sync::Arc;

use crate::application::error::UserError;
use crate::domain::{DomainError, User, UserId, UserRepository};

/// Raw payload for fetching a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserById {
    pub id: String,
}

/// Handles [`GetUserById`].
pub struct GetUserByIdHandler<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for GetUserByIdHandler<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> GetUserByIdHandler<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Look the user up by id.
    ///
    /// A malformed id fails with `InvalidFormat` before the repository is
    /// consulted; a well-formed id with no record fails with `UserNotFound`.
    #[tracing::instrument(name = "get_user_by_id", skip_all, fields(user_id = %query.id))]
    pub async fn handle(&self, query: GetUserById) -> Result<User, UserError> {
        let id = UserId::from_string(&query.id)?;

        self.repository
            .find_by_id(&id)
            .await?
            .ok_or(UserError::Domain(DomainError::UserNotFound(id)))
    }
}
