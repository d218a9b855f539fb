mod common;

use axum::http::{Method, StatusCode};

use common::spawn_app_with_argon2;

#[tokio::test]
async fn register_login_profile_follow_flow() {
    let app = spawn_app_with_argon2();

    let (status, _) = app.register("alice", "password1").await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, bob) = app.register("bob", "password2").await;
    assert_eq!(status, StatusCode::CREATED);
    let bob_id = bob["id"].as_str().unwrap().to_string();
    assert!(app.store.stored_hash("alice").unwrap().starts_with("$argon2"));

    let (status, login) = app.login("alice", "password1").await;
    assert_eq!(status, StatusCode::OK);
    let token = login["access_token"].as_str().unwrap().to_string();

    let (status, profile) = app
        .request(Method::GET, "/api/profile", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["username"], "alice");
    assert_eq!(profile["following_count"], 0);
    assert_eq!(profile["followers_count"], 0);

    let (status, _) = app
        .request(
            Method::POST,
            &format!("/api/users/{bob_id}/follow"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, bob_profile) = app
        .request(Method::GET, &format!("/api/users/{bob_id}"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bob_profile["followers_count"], 1);
    assert_eq!(bob_profile["following_count"], 0);
}

#[tokio::test]
async fn argon2_login_failures_are_indistinguishable() {
    let app = spawn_app_with_argon2();
    app.register("alice", "password1").await;
    let unknown = app.login("mallory", "password1").await;
    let wrong = app.login("alice", "wrong-password").await;
    assert_eq!(unknown.0, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown, wrong);
}
