//! ApiClient over the reqwest transport against a local mock server.

use bytes::Bytes;
use chrono::NaiveDate;
use gobarber::adapters::ReqwestHttpClient;
use gobarber::api::{ApiClient, NewUser};
use gobarber::error::NetworkError;
use gobarber::traits::MultipartFile;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), Arc::new(ReqwestHttpClient::new()))
}

#[tokio::test]
async fn test_authenticate_decodes_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(serde_json::json!({
            "email": "ana@example.com",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {
                "id": "user-1",
                "name": "Ana Lima",
                "email": "ana@example.com",
                "avatarURL": "http://localhost:3333/files/ana.jpg"
            },
            "token": "jwt-token"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = client(&mock_server)
        .authenticate("ana@example.com", "secret")
        .await
        .unwrap();

    assert_eq!(session.token, "jwt-token");
    assert_eq!(session.user.name, "Ana Lima");
    assert_eq!(
        session.user.avatar_url.as_deref(),
        Some("http://localhost:3333/files/ana.jpg")
    );
}

#[tokio::test]
async fn test_error_body_message_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Incorrect email/password combination."
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .authenticate("ana@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        NetworkError::HttpStatus {
            status: 401,
            message: "Incorrect email/password combination.".to_string()
        }
    );
    assert!(err.is_client_status());
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let user = NewUser {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        password: "secret".to_string(),
    };
    let err = client(&mock_server).register_user(&user).await.unwrap_err();

    assert_eq!(
        err,
        NetworkError::HttpStatus {
            status: 500,
            message: "Internal Server Error".to_string()
        }
    );
    assert!(!err.is_client_status());
}

#[tokio::test]
async fn test_day_availability_query_and_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/providers/provider-1/day-availability"))
        .and(query_param("year", "2025"))
        .and(query_param("month", "3"))
        .and(query_param("day", "7"))
        .and(header("Authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"hour": 8, "available": true},
            {"hour": 9, "available": false}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    api.set_auth_token(Some("jwt-token".to_string()));
    let slots = api
        .day_availability("provider-1", NaiveDate::from_ymd_opt(2025, 3, 7).unwrap())
        .await
        .unwrap();

    assert_eq!(slots.len(), 2);
    assert!(slots[0].available);
    assert!(!slots[1].available);
}

#[tokio::test]
async fn test_unexpected_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "providers": []
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).list_providers().await.unwrap_err();
    assert!(matches!(err, NetworkError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_avatar_upload_is_multipart_patch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/users/avatar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "user-1",
            "name": "Ana Lima",
            "email": "ana@example.com",
            "avatarURL": "http://localhost:3333/files/user-1.jpg"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client(&mock_server)
        .update_avatar(MultipartFile {
            field: "avatar".to_string(),
            file_name: "user-1.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: Bytes::from_static(b"\xff\xd8\xff\xe0jpeg"),
        })
        .await
        .unwrap();
    assert_eq!(
        user.avatar_url.as_deref(),
        Some("http://localhost:3333/files/user-1.jpg")
    );

    let requests = mock_server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"avatar\""));
    assert!(body.contains("filename=\"user-1.jpg\""));
}

#[tokio::test]
async fn test_connection_refused_maps_to_network_error() {
    let api = ApiClient::new("http://127.0.0.1:59998", Arc::new(ReqwestHttpClient::new()));

    let err = api.list_providers().await.unwrap_err();
    assert!(matches!(
        err,
        NetworkError::ConnectionFailed { .. } | NetworkError::Other { .. }
    ));
}
