//! API Client Tests
//!
//! Exercise the HTTP bindings against a wiremock server.

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::*;
use crate::reconcile::ListView;
use crate::storage::MemoryStorage;

fn task_json(id: &str, is_completed: bool, is_deleted: bool) -> Value {
    json!({
        "id": id,
        "title": format!("Task {}", id),
        "description": "desc",
        "isCompleted": is_completed,
        "isDeleted": is_deleted,
        "dateCreated": "2024-03-01T09:30:00.000Z",
        "dateUpdated": "2024-03-01T09:30:00.000Z",
        "userId": "u-1"
    })
}

fn user_json() -> Value {
    json!({
        "id": "u-1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "username": "ada",
        "email": "ada@example.com",
        "avatar": "/uploads/ada.png",
        "dateJoined": "2023-11-05T12:00:00Z",
        "lastProfileUpdate": "2023-11-05T12:00:00Z"
    })
}

fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
    let storage = match token {
        Some(token) => MemoryStorage::with_entries([(TOKEN_KEY, token)]),
        None => MemoryStorage::new(),
    };
    ApiClient::new(format!("{}/api/", server.uri()), Arc::new(storage))
}

fn has_no_authorization(request: &Request) -> bool {
    !request.headers.contains_key("authorization")
}

#[tokio::test]
async fn test_list_attaches_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ok",
            "tasks": [task_json("a", false, false), task_json("b", false, false)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("secret-token"));
    let tasks = list_tasks(&api, ListView::Active).await.unwrap();
    let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[tokio::test]
async fn test_each_view_uses_its_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [task_json("c", true, false)]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/trash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [task_json("x", false, true)]
        })))
        .mount(&server)
        .await;

    let api = client(&server, Some("t"));
    let completed = list_tasks(&api, ListView::Completed).await.unwrap();
    assert!(completed[0].is_completed);
    let trashed = list_tasks(&api, ListView::Trash).await.unwrap();
    assert!(trashed[0].is_deleted);
}

#[tokio::test]
async fn test_login_is_sent_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "loginIdentifier": "ada", "password": "hunter22" })))
        .and(has_no_authorization)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Logged in",
            "user": user_json(),
            "token": "fresh-token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // A stale token left in storage must not leak into the login request
    let api = client(&server, Some("stale"));
    let response = login(
        &api,
        &LoginData {
            login_identifier: "ada".to_string(),
            password: "hunter22".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(response.token, "fresh-token");
    assert_eq!(response.user.username, "ada");
}

#[tokio::test]
async fn test_requests_without_token_omit_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(has_no_authorization)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json() })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    let user = get_profile(&api).await.unwrap();
    assert_eq!(user.avatar.as_deref(), Some("/uploads/ada.png"));
}

#[tokio::test]
async fn test_lifecycle_transitions_hit_action_paths() {
    let server = MockServer::start().await;
    for (action, is_completed, is_deleted) in [
        ("complete", true, false),
        ("incomplete", false, false),
        ("restore", false, false),
    ] {
        Mock::given(method("PATCH"))
            .and(path(format!("/api/tasks/{}/t1", action)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "task": task_json("t1", is_completed, is_deleted)
            })))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task": task_json("t1", false, true)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("t"));
    assert!(complete_task(&api, "t1").await.unwrap().is_completed);
    assert!(!incomplete_task(&api, "t1").await.unwrap().is_completed);
    assert!(delete_task(&api, "t1").await.unwrap().is_deleted);
    assert!(!restore_task(&api, "t1").await.unwrap().is_deleted);
}

#[tokio::test]
async fn test_update_sends_only_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/tasks/t1"))
        .and(body_json(json!({ "title": "New title" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task": task_json("t1", false, false)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("t"));
    let data = UpdateTaskData {
        title: Some("New title".to_string()),
        description: None,
    };
    update_task(&api, "t1", &data).await.unwrap();
}

#[tokio::test]
async fn test_ids_are_escaped_in_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task": task_json("a/b", false, false)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("t"));
    assert_eq!(get_task(&api, "a/b").await.unwrap().id, "a/b");
}

#[tokio::test]
async fn test_server_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Username already taken" })),
        )
        .mount(&server)
        .await;

    let api = client(&server, None);
    let err = register(
        &api,
        &RegisterData {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 409, .. }));
    assert_eq!(
        err.user_message("Registration failed. Please try again."),
        "Username already taken"
    );
}

#[tokio::test]
async fn test_fallback_when_server_sends_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let api = client(&server, Some("t"));
    let err = create_task(
        &api,
        &CreateTaskData {
            title: "t".to_string(),
            description: "d".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.user_message("Failed to create task."), "Failed to create task.");
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let api = client(&server, Some("t"));
    let err = list_tasks(&api, ListView::Active).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_avatar_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/avatar"))
        .and(|request: &Request| {
            let content_type = request
                .headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let body = String::from_utf8_lossy(&request.body);
            content_type.starts_with("multipart/form-data")
                && body.contains("name=\"avatar\"")
                && body.contains("filename=\"me.png\"")
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json() })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("t"));
    let user = upload_avatar(
        &api,
        AvatarUpload {
            file_name: "me.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        },
    )
    .await
    .unwrap();
    assert_eq!(user.id, "u-1");
}

#[tokio::test]
async fn test_logout_carries_token_read_at_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let storage = Arc::new(MemoryStorage::with_entries([(TOKEN_KEY, "secret-token")]));
    let api = ApiClient::new(format!("{}/api", server.uri()), storage.clone());

    let request = logout(&api);
    // The session is gone locally before the server answers
    storage.remove(TOKEN_KEY).unwrap();
    assert_eq!(storage.get(TOKEN_KEY), None);

    request.await.unwrap();
}
