mod common;

use axum::http::{Method, StatusCode};
use common::{assert_envelope, make_request, reject_writes, router};
use serde_json::json;
use sqlx::PgPool;

async fn product_count(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products").fetch_one(pool).await.unwrap();
    row.0
}

#[sqlx::test(fixtures("users"))]
async fn create_for_existing_owner(pool: PgPool) {
    let (status, body) = make_request(
        router(pool.clone()),
        Method::POST,
        "/product/create",
        Some("user_id=3&name=Mug&price=7"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body);
    assert_eq!(body["message"], "product created successfully");
    assert_eq!(body["data"]["user_id"], 3);
    assert_eq!(body["data"]["price"], 7);
    assert!(body["data"]["id"].as_i64().is_some());
    assert_eq!(product_count(&pool).await, 1);
}

#[sqlx::test(fixtures("users"))]
async fn create_for_missing_owner_is_404_and_inserts_nothing(pool: PgPool) {
    let (status, body) = make_request(
        router(pool.clone()),
        Method::POST,
        "/product/create",
        Some("user_id=404&name=Ghost&price=1"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body);
    assert_eq!(body["error"], "user not found");
    assert_eq!(product_count(&pool).await, 0);
}

#[sqlx::test(fixtures("users"))]
async fn create_validates_numbers(pool: PgPool) {
    let (status, body) = make_request(
        router(pool.clone()),
        Method::POST,
        "/product/create",
        Some("user_id=one&name=Mug&price=7"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid user ID format");

    let (status, body) = make_request(
        router(pool.clone()),
        Method::POST,
        "/product/create",
        Some("user_id=1&name=Mug&price=cheap"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid price format");
    assert_eq!(product_count(&pool).await, 0);
}

#[sqlx::test(fixtures("users", "products"))]
async fn get_and_list(pool: PgPool) {
    let (status, body) = make_request(router(pool.clone()), Method::GET, "/product/get/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "product found");
    assert_eq!(body["data"]["name"], "Desk lamp");

    let (status, body) = make_request(router(pool.clone()), Method::GET, "/product/get/50", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "product not found");

    let (status, body) = make_request(router(pool), Method::GET, "/product/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "products found");
    assert_eq!(body["totalCount"], 3);
}

#[sqlx::test(fixtures("users", "products"))]
async fn update_moves_owner_after_lookup(pool: PgPool) {
    let (status, body) = make_request(
        router(pool.clone()),
        Method::PATCH,
        "/product/update/5",
        Some("user_id=3&price=30"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "product updated successfully");
    assert_eq!(body["data"]["user_id"], 3);
    assert_eq!(body["data"]["price"], 30);
    assert_eq!(body["data"]["name"], "Desk lamp");

    let (status, body) = make_request(
        router(pool.clone()),
        Method::PATCH,
        "/product/update/5",
        Some("user_id=999"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "user not found");

    let owner: (i64,) = sqlx::query_as("SELECT user_id FROM products WHERE id = 5")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(owner.0, 3);
}

#[sqlx::test(fixtures("users", "products"))]
async fn update_rejects_bad_numbers(pool: PgPool) {
    let (status, body) = make_request(router(pool.clone()), Method::PATCH, "/product/update/4", Some("price=x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid price format");

    let (status, body) = make_request(router(pool), Method::PATCH, "/product/update/4", Some("user_id=x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid user ID format");
}

#[sqlx::test(fixtures("users", "products"))]
async fn delete_product(pool: PgPool) {
    let (status, body) = make_request(router(pool.clone()), Method::DELETE, "/product/delete/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());
    assert_eq!(body["message"], "product deleted successfully");
    assert_eq!(product_count(&pool).await, 2);

    let (status, body) = make_request(router(pool), Method::DELETE, "/product/delete/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "product not found");
}

#[sqlx::test]
async fn list_empty_table_reports_no_record(pool: PgPool) {
    let (status, body) = make_request(router(pool), Method::GET, "/product/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body);
    assert_eq!(body["message"], "no record found");
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["totalCount"], 0);
}

#[sqlx::test(fixtures("users"))]
async fn rejected_insert_is_404(pool: PgPool) {
    reject_writes(&pool, "products", "INSERT").await;
    let (status, body) = make_request(
        router(pool.clone()),
        Method::POST,
        "/product/create",
        Some("user_id=1&name=Mug&price=7"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body);
    assert_eq!(body["error"], "product couldn't be created");
    assert_eq!(product_count(&pool).await, 0);
}
