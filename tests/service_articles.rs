mod common;

use cms_admin::prelude::*;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_article_category_display_name(pool: PgPool) {
    let publication = common::create_test_publication(&pool, "daily", "The Daily").await;
    let category = common::create_test_category(&pool, "news", "News", Some(publication)).await;

    let state = common::create_test_state(pool);
    let article = state
        .records::<Article>()
        .create(&json!({
            "title": "Election night",
            "category": category,
            "publication": publication
        }))
        .await
        .unwrap();

    assert_eq!(article.category, Some(category));
    assert_eq!(article.category_name.as_deref(), Some("news"));
    assert_eq!(article.category_display_name.as_deref(), Some("News"));
    assert_eq!(article.publication_display_name.as_deref(), Some("The Daily"));
    assert_eq!(article.magazine_title, None);
    assert_eq!(article.author_name, None);
    assert_eq!(article.visits, 0);
    assert!(!article.issue_new);
}

#[sqlx::test]
async fn test_article_without_category(pool: PgPool) {
    let id = common::create_test_article(&pool, "Standalone").await;

    let state = common::create_test_state(pool);
    let article = state.records::<Article>().get(id).await.unwrap();

    assert_eq!(article.category, None);
    assert_eq!(article.category_display_name, None);
}

#[sqlx::test]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    let category = common::create_test_category(&pool, "news", "News", None).await;

    let state = common::create_test_state(pool);
    let service = state.records::<Article>();
    let created = service
        .create(&json!({ "title": "Draft", "category": category, "status": "draft" }))
        .await
        .unwrap();

    let updated = service
        .update(created.id, &json!({ "status": "published" }), true)
        .await
        .unwrap();

    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.category, Some(category));
    assert_eq!(updated.status.as_deref(), Some("published"));
}

#[sqlx::test]
async fn test_partial_update_clears_nullable_reference(pool: PgPool) {
    let category = common::create_test_category(&pool, "news", "News", None).await;

    let state = common::create_test_state(pool);
    let service = state.records::<Article>();
    let created = service
        .create(&json!({ "title": "Draft", "category": category }))
        .await
        .unwrap();

    let updated = service
        .update(created.id, &json!({ "category": null }), true)
        .await
        .unwrap();

    assert_eq!(updated.category, None);
    assert_eq!(updated.category_display_name, None);
}

#[sqlx::test]
async fn test_update_missing_article(pool: PgPool) {
    let state = common::create_test_state(pool);

    let err = state
        .records::<Article>()
        .update(424_242, &json!({ "title": "Ghost" }), false)
        .await
        .unwrap_err();

    assert_eq!(err.code(), "not_found");
}

#[sqlx::test]
async fn test_list_articles_in_id_order(pool: PgPool) {
    let first = common::create_test_article(&pool, "First").await;
    let second = common::create_test_article(&pool, "Second").await;

    let state = common::create_test_state(pool);
    let articles = state.records::<Article>().list().await.unwrap();

    let ids: Vec<i64> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first, second]);
}
