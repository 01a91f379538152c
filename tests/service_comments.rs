mod common;

use cms_admin::prelude::*;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_comment_reflects_user_and_article(pool: PgPool) {
    let user = common::create_test_user(&pool, "Ada", "Lovelace").await;
    let article = common::create_test_article(&pool, "Engines").await;
    let id = common::create_test_comment(&pool, user, article, "Great read").await;

    let state = common::create_test_state(pool);
    let comment = state.records::<Comment>().get(id).await.unwrap();

    assert_eq!(comment.user, user);
    assert_eq!(comment.user_first_name.as_deref(), Some("Ada"));
    assert_eq!(comment.user_last_name.as_deref(), Some("Lovelace"));
    assert_eq!(comment.article_title.as_deref(), Some("Engines"));
    assert_eq!(comment.rating, None);
}

#[sqlx::test]
async fn test_comment_follows_renamed_user(pool: PgPool) {
    let user = common::create_test_user(&pool, "Ada", "Byron").await;
    let article = common::create_test_article(&pool, "Engines").await;
    let id = common::create_test_comment(&pool, user, article, "Great read").await;

    common::rename_user(&pool, user, "Ada", "Lovelace").await;

    let state = common::create_test_state(pool);
    let comment = state.records::<Comment>().get(id).await.unwrap();

    assert_eq!(comment.user_last_name.as_deref(), Some("Lovelace"));
}

#[sqlx::test]
async fn test_create_comment(pool: PgPool) {
    let user = common::create_test_user(&pool, "Grace", "Hopper").await;
    let article = common::create_test_article(&pool, "Compilers").await;

    let state = common::create_test_state(pool);
    let created = state
        .records::<Comment>()
        .create(&json!({
            "comment": "Clear explanation",
            "user": user,
            "article": article,
            "rating": 5
        }))
        .await
        .unwrap();

    assert_eq!(created.comment, "Clear explanation");
    assert_eq!(created.rating, Some(5));
    assert_eq!(created.user_first_name.as_deref(), Some("Grace"));
    assert_eq!(created.article_title.as_deref(), Some("Compilers"));
}

#[sqlx::test]
async fn test_create_comment_with_missing_user(pool: PgPool) {
    let article = common::create_test_article(&pool, "Compilers").await;

    let state = common::create_test_state(pool.clone());
    let result = state
        .records::<Comment>()
        .create(&json!({ "comment": "Hi", "user": 999_999, "article": article }))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), "validation_error");
    assert_eq!(
        err.details()["user"][0],
        "Invalid pk \"999999\" - object does not exist."
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_create_comment_rejects_derived_field(pool: PgPool) {
    let user = common::create_test_user(&pool, "Grace", "Hopper").await;
    let article = common::create_test_article(&pool, "Compilers").await;

    let state = common::create_test_state(pool);
    let result = state
        .records::<Comment>()
        .create(&json!({
            "comment": "Hi",
            "user": user,
            "article": article,
            "user_first_name": "Someone"
        }))
        .await;

    let err = result.unwrap_err();
    assert!(err.details().get("user_first_name").is_some());
}

#[sqlx::test]
async fn test_delete_comment(pool: PgPool) {
    let user = common::create_test_user(&pool, "Ada", "Lovelace").await;
    let article = common::create_test_article(&pool, "Engines").await;
    let id = common::create_test_comment(&pool, user, article, "Bye").await;

    let state = common::create_test_state(pool);
    let service = state.records::<Comment>();

    service.delete(id).await.unwrap();

    let err = service.get(id).await.unwrap_err();
    assert_eq!(err.code(), "not_found");
    assert_eq!(service.delete(id).await.unwrap_err().code(), "not_found");
}
