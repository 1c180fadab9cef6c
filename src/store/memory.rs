//! In-process post store

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::PostStore;
use crate::content::Post;
use crate::error::StoreError;

/// Posts kept in memory in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with posts
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Number of stored posts
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Current time in nanoseconds since the epoch
fn now_nanos() -> u64 {
    Utc::now()
        .timestamp_nanos_opt()
        .and_then(|nanos| u64::try_from(nanos).ok())
        .unwrap_or_default()
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create_post(
        &self,
        title: &str,
        body: &str,
        author: &str,
    ) -> Result<Post, StoreError> {
        if title.is_empty() || body.is_empty() || author.is_empty() {
            return Err(StoreError::Rejected(
                "title, body and author must not be empty".to_string(),
            ));
        }

        let mut posts = self.posts.write().await;

        // Strictly increasing below u64::MAX, even within one nanosecond
        let timestamp = match posts.last() {
            Some(last) => now_nanos().max(last.timestamp.saturating_add(1)),
            None => now_nanos(),
        };

        let post = Post::new(
            title.to_string(),
            body.to_string(),
            author.to_string(),
            timestamp,
        );
        posts.push(post.clone());

        tracing::debug!("Stored post {:?} ({} total)", post.title, posts.len());
        Ok(post)
    }

    async fn get_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }
}
