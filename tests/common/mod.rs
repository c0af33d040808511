#![allow(dead_code)]

use axum_test::TestServer;
use url::Url;
use users_api::domain::collection::Collection;
use users_api::domain::entities::User;
use users_api::routes::app_router;
use users_api::state::AppState;

pub fn create_test_user(id: i64) -> User {
    User::new(
        id,
        format!("user{id}@reqres.in"),
        format!("First{id}"),
        format!("Last{id}"),
        Url::parse(&format!("https://reqres.in/img/faces/{id}-image.jpg")).unwrap(),
    )
}

/// Users with ids `1..=n`.
pub fn create_test_users(n: i64) -> Collection<User> {
    Collection::new((1..=n).map(create_test_user).collect()).unwrap()
}

pub fn create_test_state(n: i64) -> AppState {
    AppState::new(create_test_users(n))
}

/// Full application router over `n` users.
pub fn create_test_server(n: i64) -> TestServer {
    TestServer::new(app_router(create_test_state(n))).unwrap()
}

pub fn item_ids(json: &serde_json::Value) -> Vec<i64> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
