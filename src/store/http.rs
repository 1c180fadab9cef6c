//! HTTP client for a remote post store

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{NewPost, PostStore};
use crate::content::Post;
use crate::error::StoreError;

/// Post store reached over HTTP
///
/// Speaks the JSON API served by `postboard serve`:
/// `POST {base}/posts` and `GET {base}/posts`.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Create a client for the store at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }
}

/// Turn a non-2xx response into a store error
async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(StoreError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl PostStore for HttpStore {
    async fn create_post(
        &self,
        title: &str,
        body: &str,
        author: &str,
    ) -> Result<Post, StoreError> {
        let url = self.posts_url();
        tracing::debug!("POST {} (body {} bytes)", url, body.len());

        let request = NewPost {
            title: title.to_string(),
            body: body.to_string(),
            author: author.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let post = check_status(response).await?.json::<Post>().await?;
        Ok(post)
    }

    async fn get_posts(&self) -> Result<Vec<Post>, StoreError> {
        let url = self.posts_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let posts = check_status(response).await?.json::<Vec<Post>>().await?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let store = HttpStore::new("http://localhost:4000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(store.base_url(), "http://localhost:4000/api");
        assert_eq!(store.posts_url(), "http://localhost:4000/api/posts");
    }

    #[tokio::test]
    async fn test_unreachable_store_fails_with_transport_error() {
        // Port 9 (discard) is not expected to serve HTTP
        let store = HttpStore::new("http://127.0.0.1:9/api", Duration::from_secs(2)).unwrap();
        let err = store.get_posts().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }
}
