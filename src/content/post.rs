//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nanoseconds per millisecond
const NANOS_PER_MILLI: u64 = 1_000_000;

/// A stored blog post
///
/// Posts are created by the post store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// HTML body produced by the editor
    pub body: String,

    /// Author name
    pub author: String,

    /// Creation time in nanoseconds since the Unix epoch
    pub timestamp: u64,
}

impl Post {
    /// Create a post record
    pub fn new(title: String, body: String, author: String, timestamp: u64) -> Self {
        Self {
            title,
            body,
            author,
            timestamp,
        }
    }

    /// Creation time truncated to whole milliseconds
    pub fn timestamp_millis(&self) -> u64 {
        self.timestamp / NANOS_PER_MILLI
    }

    /// Creation time as a UTC datetime, if it is within chrono's range
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp_millis()).ok()?;
        DateTime::from_timestamp_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_timestamp_millis_truncates() {
        let post = Post::new(
            "t".to_string(),
            "<p>b</p>".to_string(),
            "a".to_string(),
            1_700_000_000_123_999_999,
        );
        assert_eq!(post.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_created_at() {
        let post = Post::new(
            "t".to_string(),
            String::new(),
            "a".to_string(),
            1_700_000_000_000_000_000,
        );
        let date = post.created_at().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2023, 11, 14));
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"title":"Hello","body":"<p>World</p>","author":"Alice","timestamp":1700000000000000000}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author, "Alice");
        assert_eq!(post.timestamp, 1_700_000_000_000_000_000);
        assert_eq!(serde_json::to_string(&post).unwrap(), json);
    }
}
