mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use users_api::api::handlers::list_users_handler;

#[tokio::test]
async fn test_users_without_parameters() {
    let server = common::create_test_server(12);

    let response = server.get("/api/users/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 12);
    assert_eq!(json["items"].as_array().unwrap().len(), 12);
    assert_eq!(json["page"], 1);
    assert_eq!(json["size"], 50);
    assert_eq!(json["pages"], 1);
}

#[tokio::test]
async fn test_users_item_shape() {
    let server = common::create_test_server(3);

    let response = server.get("/api/users/").await;

    let json = response.json::<serde_json::Value>();
    let first = &json["items"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["email"], "user1@reqres.in");
    assert_eq!(first["first_name"], "First1");
    assert_eq!(first["last_name"], "Last1");
    assert_eq!(first["avatar"], "https://reqres.in/img/faces/1-image.jpg");
}

#[tokio::test]
async fn test_users_with_parameters() {
    let server = common::create_test_server(12);

    for (page, size) in [(1, 2), (2, 5), (3, 4)] {
        let response = server
            .get("/api/users/")
            .add_query_param("page", page)
            .add_query_param("size", size)
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["items"].as_array().unwrap().len(), size as usize);
        assert_eq!(json["page"], page);
        assert_eq!(json["size"], size);
    }
}

#[tokio::test]
async fn test_seven_users_in_pages_of_three() {
    let server = common::create_test_server(7);

    let response = server
        .get("/api/users/")
        .add_query_param("page", 1)
        .add_query_param("size", 3)
        .await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(common::item_ids(&json), vec![1, 2, 3]);
    assert_eq!(json["total"], 7);
    assert_eq!(json["pages"], 3);

    let response = server
        .get("/api/users/")
        .add_query_param("page", 3)
        .add_query_param("size", 3)
        .await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(common::item_ids(&json), vec![7]);
    assert_eq!(json["total"], 7);
    assert_eq!(json["pages"], 3);

    let response = server
        .get("/api/users/")
        .add_query_param("page", 4)
        .add_query_param("size", 3)
        .await;
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["total"], 7);
    assert_eq!(json["page"], 4);
    assert_eq!(json["pages"], 3);
}

#[tokio::test]
async fn test_next_page_starts_after_previous() {
    let server = common::create_test_server(12);

    let page_1 = server
        .get("/api/users/")
        .add_query_param("page", 1)
        .add_query_param("size", 3)
        .await
        .json::<serde_json::Value>();
    let page_2 = server
        .get("/api/users/")
        .add_query_param("page", 2)
        .add_query_param("size", 3)
        .await
        .json::<serde_json::Value>();

    let last_on_first = *common::item_ids(&page_1).last().unwrap();
    let first_on_second = common::item_ids(&page_2)[0];
    assert!(first_on_second > last_on_first);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let server = common::create_test_server(12);

    let first = server
        .get("/api/users/")
        .add_query_param("page", 2)
        .add_query_param("size", 5)
        .await
        .json::<serde_json::Value>();
    let second = server
        .get("/api/users/")
        .add_query_param("page", 2)
        .add_query_param("size", 5)
        .await
        .json::<serde_json::Value>();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_invalid_page() {
    let server = common::create_test_server(12);

    for page in ["-1", "0", "rty"] {
        let response = server.get("/api/users/").add_query_param("page", page).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["details"]["parameter"], "page");
    }
}

#[tokio::test]
async fn test_invalid_size() {
    let server = common::create_test_server(12);

    for size in ["-1", "0", "rty", "101"] {
        let response = server.get("/api/users/").add_query_param("size", size).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["details"]["parameter"], "size");
    }
}

#[tokio::test]
async fn test_invalid_parameters_on_empty_collection() {
    let server = common::create_test_server(0);

    let response = server.get("/api/users/").add_query_param("size", 0).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_page_past_end_has_no_items() {
    let server = common::create_test_server(12);

    let response = server.get("/api/users/").add_query_param("page", 10).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["total"], 12);
    assert_eq!(json["page"], 10);
    assert_eq!(json["size"], 50);
}

#[tokio::test]
async fn test_empty_collection_reports_one_page() {
    let server = common::create_test_server(0);

    let response = server.get("/api/users/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["total"], 0);
    assert_eq!(json["pages"], 1);
}

#[tokio::test]
async fn test_path_without_trailing_slash() {
    let server = common::create_test_server(12);

    let with_slash = server
        .get("/api/users/")
        .add_query_param("size", 4)
        .await
        .json::<serde_json::Value>();
    let without_slash = server.get("/api/users").add_query_param("size", 4).await;

    without_slash.assert_status_ok();
    assert_eq!(without_slash.json::<serde_json::Value>(), with_slash);
}

#[tokio::test]
async fn test_handler_on_standalone_router() {
    let app = Router::new()
        .route("/api/users/", get(list_users_handler))
        .with_state(common::create_test_state(5));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/users/").add_query_param("size", 2).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(common::item_ids(&json), vec![1, 2]);
    assert_eq!(json["pages"], 3);
}
