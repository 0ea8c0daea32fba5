use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// Number of posts a fresh server holds.
pub const SEED_POSTS: u64 = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

/// Posts are stored as raw JSON objects so PUT and POST keep whatever
/// fields the client sent, the way the public demo API echoes them.
pub type Db = Arc<RwLock<BTreeMap<u64, Map<String, Value>>>>;

/// Ten users with ten posts each, ids 1 through 100.
pub fn seed_posts() -> Vec<Post> {
    (1..=SEED_POSTS)
        .map(|id| Post {
            user_id: (id - 1) / 10 + 1,
            id,
            title: format!("post {id}"),
            body: format!("body of post {id}"),
        })
        .collect()
}

pub fn app() -> Router {
    let mut posts = BTreeMap::new();
    for post in seed_posts() {
        if let Ok(Value::Object(object)) = serde_json::to_value(&post) {
            posts.insert(post.id, object);
        }
    }
    let db: Db = Arc::new(RwLock::new(posts));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(replace_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Value>> {
    let posts = db.read().await;
    let limit = params.limit.unwrap_or(usize::MAX);
    debug!(limit = ?params.limit, "list posts");
    Json(posts.values().take(limit).cloned().map(Value::Object).collect())
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let posts = db.read().await;
    posts
        .get(&id)
        .cloned()
        .map(|post| Json(Value::Object(post)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_post(
    State(db): State<Db>,
    Json(mut input): Json<Map<String, Value>>,
) -> (StatusCode, Json<Value>) {
    let mut posts = db.write().await;
    let id = posts.keys().next_back().copied().unwrap_or(0) + 1;
    input.insert("id".to_string(), Value::from(id));
    posts.insert(id, input.clone());
    debug!(id, "created post");
    (StatusCode::CREATED, Json(Value::Object(input)))
}

async fn replace_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(mut input): Json<Map<String, Value>>,
) -> Result<Json<Value>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    input.insert("id".to_string(), Value::from(id));
    *post = input.clone();
    debug!(id, "replaced post");
    Ok(Json(Value::Object(input)))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    let mut posts = db.write().await;
    posts
        .remove(&id)
        .map(|_| Json(Value::Object(Map::new())))
        .ok_or(StatusCode::NOT_FOUND)
}
