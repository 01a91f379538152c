#![allow(dead_code)]

use cms_admin::api::mapper::ReadOnlyPolicy;
use cms_admin::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_user(pool: &PgPool, fname: &str, lname: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (fname, lname) VALUES ($1, $2) RETURNING id")
        .bind(fname)
        .bind(lname)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn rename_user(pool: &PgPool, id: i64, fname: &str, lname: &str) {
    sqlx::query("UPDATE users SET fname = $2, lname = $3 WHERE id = $1")
        .bind(id)
        .bind(fname)
        .bind(lname)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_publication(pool: &PgPool, name: &str, display_name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO publications (name, display_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(display_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_category(
    pool: &PgPool,
    name: &str,
    display_name: &str,
    publication_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO categories (name, display_name, publication_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(display_name)
    .bind(publication_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_article(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO articles (title) VALUES ($1) RETURNING id")
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_comment(pool: &PgPool, user_id: i64, article_id: i64, text: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO comments (comment, user_id, article_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(text)
    .bind(user_id)
    .bind(article_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), ReadOnlyPolicy::Reject)
}
