//! Post store collaborators
//!
//! The composer talks to persistence only through [`PostStore`]. Two
//! implementations ship with the crate: an in-process [`MemoryStore`]
//! used by the web server, and an [`HttpStore`] client for a remote
//! store speaking the JSON API that server exposes.

mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::content::Post;
use crate::error::StoreError;

/// Request body for creating a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
}

/// Remote persistence for posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Create a post; the store assigns the timestamp
    async fn create_post(&self, title: &str, body: &str, author: &str)
        -> Result<Post, StoreError>;

    /// All stored posts, in store order
    async fn get_posts(&self) -> Result<Vec<Post>, StoreError>;
}

/// Shared trait object for handing a store to request handlers
pub type DynPostStore = Arc<dyn PostStore>;

#[async_trait]
impl<S: PostStore + ?Sized> PostStore for Arc<S> {
    async fn create_post(
        &self,
        title: &str,
        body: &str,
        author: &str,
    ) -> Result<Post, StoreError> {
        (**self).create_post(title, body, author).await
    }

    async fn get_posts(&self) -> Result<Vec<Post>, StoreError> {
        (**self).get_posts().await
    }
}
