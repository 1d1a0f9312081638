use crate::database::post_store::PostStore;
use crate::post::post_model::{Post, PostStatus, StoredPost};
use crate::utils::error::CustomError;
use crate::utils::helpers::{generate_post_id, now_millis};
use crate::utils::post_validation::validate_post;
use log::{error, info, warn};
use serde_json::Value;
use tokio::sync::Mutex;

pub struct PostService {
    // Every read-modify-write of the posts file goes through this lock.
    store: Mutex<PostStore>,
}

impl PostService {
    pub fn new(store: PostStore) -> Self {
        PostService {
            store: Mutex::new(store),
        }
    }

    /// Validate, build and prepend a new post, then persist the collection.
    ///
    /// A collection that cannot be read is never overwritten. A failed write
    /// is logged by the store; the post is returned anyway.
    pub async fn create_post(
        &self,
        content: Option<&Value>,
        author: Option<&Value>,
        tags: Option<&Value>,
    ) -> Result<Post, CustomError> {
        let valid = validate_post(content, author, tags).inspect_err(|e| {
            warn!("Rejected post: {}", e);
        })?;

        let new_post = Post {
            post_id: generate_post_id(),
            content: valid.content,
            author: valid.author,
            tags: valid.tags,
            created_at: now_millis(),
            likes: 0,
            status: PostStatus::Published,
        };

        let store = self.store.lock().await;
        let mut posts = store.load().await.map_err(|e| {
            error!("Refusing to overwrite unreadable posts file: {}", e);
            CustomError::InternalServerError("Failed to read stored posts".into())
        })?;
        posts.insert(0, new_post.clone().into());
        store.write(&posts).await;

        info!("Created post {}", new_post.post_id);
        Ok(new_post)
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Vec<StoredPost> {
        let mut posts = self.store.lock().await.read().await;
        posts.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        posts
    }
}
