//! Token acquisition through the public connection API.

use super::common::{
    awx_server, basic_connection, bearer_connection, mount_authtoken, mount_personal_tokens,
    PASSWORD, USERNAME,
};
use awx_api::ActiveToken;
use base64::Engine;
use wiremock::ResponseTemplate;

fn basic_header() -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", USERNAME, PASSWORD));
    format!("Basic {}", encoded)
}

fn authorization_headers(requests: &[wiremock::Request], url_path: &str) -> Vec<String> {
    requests
        .iter()
        .filter(|r| r.url.path() == url_path)
        .filter_map(|r| r.headers.get("authorization"))
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_pre_oauth2_server_uses_legacy_token() {
    let server = awx_server().await;
    mount_authtoken(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "0123456789abcdef",
            "expires": "2026-10-19T12:30:00Z"
        })),
    )
    .await;
    mount_personal_tokens(&server, ResponseTemplate::new(404)).await;

    let connection = basic_connection(&server);
    assert_eq!(connection.active_token().await, None);

    let organizations = connection.organizations().get().send().await.unwrap();
    assert_eq!(organizations.count(), 2);
    assert_eq!(connection.active_token().await, Some(ActiveToken::Legacy));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        authorization_headers(&requests, "/api/v2/authtoken/"),
        vec![basic_header()]
    );
    assert!(authorization_headers(&requests, "/api/v2/users/admin/personal_tokens/").is_empty());
    assert_eq!(
        authorization_headers(&requests, "/api/v2/organizations/"),
        vec!["Token 0123456789abcdef".to_string()]
    );
}

#[tokio::test]
async fn test_oauth2_server_falls_back_to_personal_token() {
    let server = awx_server().await;
    mount_authtoken(&server, ResponseTemplate::new(404)).await;
    mount_personal_tokens(
        &server,
        ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 11,
            "token": "pat-0123456789",
            "scope": "write"
        })),
    )
    .await;

    let connection = basic_connection(&server);
    connection.organizations().get().send().await.unwrap();

    assert_eq!(connection.active_token().await, Some(ActiveToken::Bearer));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        authorization_headers(&requests, "/api/v2/organizations/"),
        vec!["Bearer pat-0123456789".to_string()]
    );
}

#[tokio::test]
async fn test_rejected_credentials_surface_authentication_error() {
    let server = awx_server().await;
    mount_authtoken(&server, ResponseTemplate::new(401)).await;
    mount_personal_tokens(&server, ResponseTemplate::new(401)).await;

    let connection = basic_connection(&server);
    let err = connection.organizations().get().send().await.unwrap_err();

    assert!(err.is_auth_error());

    let requests = server.received_requests().await.unwrap();
    assert!(authorization_headers(&requests, "/api/v2/organizations/").is_empty());
}

#[tokio::test]
async fn test_bearer_token_skips_acquisition() {
    let server = awx_server().await;

    let connection = bearer_connection(&server, "configured-pat");
    connection.projects().id(6).get().send().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        authorization_headers(&requests, "/api/v2/projects/6/"),
        vec!["Bearer configured-pat".to_string()]
    );
}

#[tokio::test]
async fn test_close_keeps_bearer_token() {
    let server = awx_server().await;

    let connection = bearer_connection(&server, "configured-pat");
    connection.close().await;

    assert_eq!(connection.active_token().await, Some(ActiveToken::Bearer));
    connection.jobs().id(42).get().send().await.unwrap();
}
