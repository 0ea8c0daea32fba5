//! DTOs for the posts collection.
//!
//! # Design
//! These mirror the remote service's schema but are defined independently
//! from the mock-server crate. `RequestExecutor` accepts any `Serialize`
//! payload and returns raw JSON, so these are conveniences rather than a
//! contract; integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// Payload for creating a post. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// A stored post, also used as the full-replacement payload for PUT.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}
