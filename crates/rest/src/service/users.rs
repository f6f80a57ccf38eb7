//! User operations.

use newsboard_persistence::core::NewsStorage;
use newsboard_persistence::types::User;

use crate::error::RestResult;

use super::NewsService;

impl<S: NewsStorage> NewsService<S> {
    /// Lists every user.
    pub async fn list_users(&self) -> RestResult<Vec<User>> {
        Ok(self.storage().list_users().await?)
    }

    /// Fetches a user by username.
    pub async fn get_user(&self, username: &str) -> RestResult<User> {
        self.assert_user_exists(username).await
    }
}
