mod common;

use axum::http::StatusCode;
use common::{get, post, test_app};
use serde_json::{json, Value};

async fn seed(app: &axum::Router) -> (Value, Value) {
    let (status, user) = post(
        app,
        "/users",
        json!({"name": "Ada", "email": "ada@example.com", "password": "secret"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, product) = post(app, "/products", json!({"name": "Pen", "price": 1.5, "stock": 100})).await;
    assert_eq!(status, StatusCode::OK);
    (user, product)
}

#[tokio::test]
async fn created_order_reads_back_with_user_and_product() {
    let (app, _) = test_app().await;
    let (user, product) = seed(&app).await;

    let (status, order) = post(
        &app,
        "/orders",
        json!({"user_id": user["id"], "product_id": product["id"], "quantity": 2, "status": "pending"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(order["id"].as_i64().unwrap() > 0);

    let (status, fetched) = get(&app, &format!("/orders/{}", order["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["quantity"], 2);
    assert_eq!(fetched["status"], "pending");
    assert_eq!(fetched["user"]["id"], user["id"]);
    assert_eq!(fetched["user"]["email"], "ada@example.com");
    assert!(fetched["user"].get("password_hash").is_none());
    assert_eq!(fetched["product"], product);
}

#[tokio::test]
async fn placing_an_order_leaves_stock_alone() {
    let (app, _) = test_app().await;
    let (user, product) = seed(&app).await;
    post(&app, "/orders", json!({"user_id": user["id"], "product_id": product["id"], "quantity": 5})).await;

    let (_, after) = get(&app, &format!("/products/{}", product["id"])).await;
    assert_eq!(after["stock"], 100);
}

#[tokio::test]
async fn list_orders_eager_loads_relations() {
    let (app, _) = test_app().await;
    let (user, product) = seed(&app).await;
    for qty in [1, 3] {
        let (status, _) = post(
            &app,
            "/orders",
            json!({"user_id": user["id"], "product_id": product["id"], "quantity": qty, "status": "new"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, list) = get(&app, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    for order in list {
        assert_eq!(order["user"]["name"], "Ada");
        assert_eq!(order["product"]["name"], "Pen");
    }
    assert_eq!(list[0]["quantity"], 1);
    assert_eq!(list[1]["quantity"], 3);
}

#[tokio::test]
async fn missing_order_is_not_found() {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, "/orders/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "order not found");

    let (status, _) = get(&app, "/orders/nope").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_references_are_rejected() {
    let (app, _) = test_app().await;
    let (user, product) = seed(&app).await;

    let (status, body) = post(&app, "/orders", json!({"user_id": 999, "product_id": product["id"], "quantity": 1})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, _) = post(&app, "/orders", json!({"user_id": user["id"], "product_id": 999, "quantity": 1})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = get(&app, "/orders").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn wrongly_typed_order_is_bad_request() {
    let (app, _) = test_app().await;
    let (status, _) = post(&app, "/orders", json!({"user_id": "one", "product_id": 1, "quantity": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
