//! Defaults used when the caller does not supply its own values.

use crate::types::{NewPost, Post};

/// Public demo endpoint the client targets unless told otherwise.
pub const DEFAULT_COLLECTION_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Collection size requested by default.
pub const DEFAULT_LIMIT: u32 = 5;

/// Resource replaced or deleted by default.
pub const DEFAULT_RESOURCE_ID: u64 = 1;

pub fn sample_new_post() -> NewPost {
    NewPost {
        title: "New post".to_string(),
        body: "Simple content".to_string(),
        user_id: 1,
    }
}

/// Replacement for `id`. The id is repeated in the body; the server still
/// decides which resource is written.
pub fn sample_replacement(id: u64) -> Post {
    Post {
        id,
        title: "Updated post".to_string(),
        body: "Updated content".to_string(),
        user_id: None,
    }
}
