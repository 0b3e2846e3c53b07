use super::{error::PostStoreError, types::Post};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

pub type SharedPostStore = Arc<PostStore>;

/// In-memory post table. All access goes through one `RwLock`; each
/// operation acquires it once and completes without suspending under it.
pub struct PostStore {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    posts: HashMap<i64, Post>,
    // HashMap iteration order is arbitrary; list output follows this index.
    order: Vec<i64>,
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// A store prepopulated with the two records present at process start.
    pub fn with_seed_posts() -> Self {
        let seeds = [
            Post {
                id: 1,
                content: "Hello FastAPI!".to_string(),
            },
            Post {
                id: 2,
                content: "Writing my second post!".to_string(),
            },
        ];

        let mut inner = StoreInner::default();
        for post in seeds {
            inner.order.push(post.id);
            inner.posts.insert(post.id, post);
        }

        Self {
            inner: RwLock::new(inner),
        }
    }

    /// All stored posts in insertion order.
    pub async fn list(&self) -> Vec<Post> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.posts.get(id).cloned())
            .collect()
    }

    pub async fn get(&self, id: i64) -> Result<Post, PostStoreError> {
        let inner = self.inner.read().await;
        inner
            .posts
            .get(&id)
            .cloned()
            .ok_or(PostStoreError::NotFound(id))
    }

    /// Inserts a new post. Rejected if the id is already taken; the existing
    /// record is left untouched.
    pub async fn create(&self, post: Post) -> Result<Post, PostStoreError> {
        let mut inner = self.inner.write().await;
        if inner.posts.contains_key(&post.id) {
            return Err(PostStoreError::AlreadyExists(post.id));
        }

        inner.order.push(post.id);
        inner.posts.insert(post.id, post.clone());
        debug!("Created post {}", post.id);

        Ok(post)
    }

    /// Replaces the record stored under `id` wholesale. The body's own id is
    /// not cross-checked against the key and may legally disagree with it;
    /// the stored key stays `id`.
    pub async fn update(&self, id: i64, post: Post) -> Result<Post, PostStoreError> {
        let mut inner = self.inner.write().await;
        if !inner.posts.contains_key(&id) {
            return Err(PostStoreError::NotFound(id));
        }

        inner.posts.insert(id, post.clone());
        debug!("Updated post {}", id);

        Ok(post)
    }

    pub async fn delete(&self, id: i64) -> Result<(), PostStoreError> {
        let mut inner = self.inner.write().await;
        if inner.posts.remove(&id).is_none() {
            return Err(PostStoreError::NotFound(id));
        }

        inner.order.retain(|&existing| existing != id);
        debug!("Deleted post {}", id);

        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.posts.len()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
