//! Topic operations.

use newsboard_persistence::core::NewsStorage;
use newsboard_persistence::types::Topic;

use crate::error::RestResult;

use super::NewsService;

impl<S: NewsStorage> NewsService<S> {
    /// Lists every topic.
    pub async fn list_topics(&self) -> RestResult<Vec<Topic>> {
        Ok(self.storage().list_topics().await?)
    }
}
