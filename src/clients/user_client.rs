use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserCreate};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

crate::impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        if user.username.trim().is_empty() {
            return Err(UserError::ValidationError("username is required".to_string()));
        }
        Ok(self.inner.create(user).await?)
    }

    /// Linear scan over all users.
    #[instrument(skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let users = self.inner.list().await?;
        Ok(users.into_iter().find(|user| user.username == username))
    }
}
