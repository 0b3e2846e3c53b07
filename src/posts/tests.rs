#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_seed_posts_present() {
        let store = PostStore::with_seed_posts();

        let posts = store.list().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].content, "Hello FastAPI!");
        assert_eq!(posts[1].id, 2);
        assert_eq!(posts[1].content, "Writing my second post!");
    }

    #[tokio::test]
    async fn test_create_then_get_returns_post_unchanged() {
        let store = PostStore::with_seed_posts();
        let post = Post {
            id: 3,
            content: "new".to_string(),
        };

        let created = store.create(post.clone()).await.unwrap();
        assert_eq!(created, post);

        let fetched = store.get(3).await.unwrap();
        assert_eq!(fetched, post);
    }

    #[tokio::test]
    async fn test_get_missing_post_is_not_found() {
        let store = PostStore::with_seed_posts();

        let result = store.get(99).await;
        assert_eq!(result, Err(PostStoreError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_rejected() {
        let store = PostStore::with_seed_posts();
        let duplicate = Post {
            id: 1,
            content: "dup".to_string(),
        };

        let result = store.create(duplicate).await;
        assert_eq!(result, Err(PostStoreError::AlreadyExists(1)));

        // The first record must still be intact
        let existing = store.get(1).await.unwrap();
        assert_eq!(existing.content, "Hello FastAPI!");
    }

    #[tokio::test]
    async fn test_update_replaces_record_wholesale() {
        let store = PostStore::with_seed_posts();
        let replacement = Post {
            id: 1,
            content: "rewritten".to_string(),
        };

        let updated = store.update(1, replacement.clone()).await.unwrap();
        assert_eq!(updated, replacement);
        assert_eq!(store.get(1).await.unwrap(), replacement);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let store = PostStore::with_seed_posts();
        let post = Post {
            id: 42,
            content: "nope".to_string(),
        };

        let result = store.update(42, post).await;
        assert_eq!(result, Err(PostStoreError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_update_keeps_path_key_on_id_mismatch() {
        let store = PostStore::with_seed_posts();
        let body = Post {
            id: 999,
            content: "replaced".to_string(),
        };

        let updated = store.update(2, body.clone()).await.unwrap();
        assert_eq!(updated, body);

        // Stored under the path key, not the body's id
        assert_eq!(store.get(2).await.unwrap(), body);
        assert_eq!(store.get(999).await, Err(PostStoreError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = PostStore::with_seed_posts();

        store.delete(2).await.unwrap();
        assert_eq!(store.get(2).await, Err(PostStoreError::NotFound(2)));

        let result = store.delete(2).await;
        assert_eq!(result, Err(PostStoreError::NotFound(2)));
    }

    #[tokio::test]
    async fn test_list_follows_insertion_order() {
        let store = PostStore::with_seed_posts();
        for id in [5, 3, 4] {
            store
                .create(Post {
                    id,
                    content: format!("post {}", id),
                })
                .await
                .unwrap();
        }

        let ids: Vec<i64> = store.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 5, 3, 4]);

        store.delete(2).await.unwrap();
        store
            .create(Post {
                id: 7,
                content: "post 7".to_string(),
            })
            .await
            .unwrap();

        let ids: Vec<i64> = store.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5, 3, 4, 7]);
    }

    #[tokio::test]
    async fn test_list_cardinality_tracks_creates_and_deletes() {
        let store = PostStore::with_seed_posts();
        assert_eq!(store.len().await, 2);

        for id in 10..15 {
            store
                .create(Post {
                    id,
                    content: "x".to_string(),
                })
                .await
                .unwrap();
        }
        assert_eq!(store.len().await, 7);

        store.delete(10).await.unwrap();
        store.delete(1).await.unwrap();
        assert_eq!(store.len().await, 5);
        assert_eq!(store.list().await.len(), 5);

        // Failed operations must not change the count
        let _ = store
            .create(Post {
                id: 11,
                content: "dup".to_string(),
            })
            .await;
        let _ = store.delete(10).await;
        assert_eq!(store.len().await, 5);
    }

    #[test]
    fn test_decode_valid_body() {
        let body = json!({"id": 3, "content": "new"});
        let post = handlers::decode_post_body(&body).unwrap();
        assert_eq!(
            post,
            Post {
                id: 3,
                content: "new".to_string()
            }
        );
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = json!({"id": 3, "content": "new", "author": "nobody"});
        assert!(handlers::decode_post_body(&body).is_ok());
    }

    #[test]
    fn test_decode_missing_field() {
        let body = json!({"id": 3});
        let rejection = handlers::decode_post_body(&body).unwrap_err();
        assert_eq!(rejection.errors.len(), 1);
        assert_eq!(rejection.errors[0].field, "content");
        assert_eq!(rejection.errors[0].error, "field required");
    }

    #[test]
    fn test_decode_mistyped_fields() {
        let body = json!({"id": "3", "content": 7});
        let rejection = handlers::decode_post_body(&body).unwrap_err();
        let fields: Vec<&str> = rejection.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["id", "content"]);
    }

    #[test]
    fn test_decode_fractional_id_is_mistyped() {
        let body = json!({"id": 1.5, "content": "x"});
        let rejection = handlers::decode_post_body(&body).unwrap_err();
        assert_eq!(rejection.errors[0].field, "id");
        assert_eq!(rejection.errors[0].error, "value is not a valid integer");
    }

    #[test]
    fn test_decode_non_object_body() {
        let rejection = handlers::decode_post_body(&json!([1, 2])).unwrap_err();
        assert_eq!(rejection.errors[0].field, "body");
    }

    #[test]
    fn test_decode_empty_content_is_accepted() {
        // Non-emptiness is deliberately not validated
        let body = json!({"id": 3, "content": ""});
        assert!(handlers::decode_post_body(&body).is_ok());
    }
}
