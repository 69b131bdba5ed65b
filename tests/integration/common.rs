//! A mock AWX server with realistic fixtures.

use awx_api::{Connection, ConnectionConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "password";

/// Start a server that serves the fixture collections to any authorization.
pub async fn awx_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {
                    "id": 1,
                    "type": "organization",
                    "name": "Default",
                    "summary_fields": {
                        "object_roles": {
                            "admin_role": {"id": 2},
                            "execute_role": {"id": 3}
                        }
                    }
                },
                {"id": 2, "type": "organization", "name": "Engineering"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users/"))
        .and(query_param("username", USERNAME))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": 1, "username": "admin", "is_superuser": true}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/projects/6/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 6,
            "name": "Demo Project",
            "scm_type": "git",
            "scm_url": "https://github.com/ansible/ansible-tower-samples",
            "scm_branch": "",
            "status": "successful"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/job_templates/"))
        .and(query_param("project__name", "Demo Project"))
        .and(query_param("name", "Demo Job Template"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "id": 7,
                "name": "Demo Job Template",
                "ask_limit_on_launch": true,
                "ask_variables_on_launch": false
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/jobs/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "status": "successful",
            "failed": false
        })))
        .mount(&server)
        .await;

    server
}

/// Answer `authtoken` with `response`.
pub async fn mount_authtoken(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/v2/authtoken/"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Answer the personal token endpoint for [`USERNAME`] with `response`.
pub async fn mount_personal_tokens(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/api/v2/users/{}/personal_tokens/", USERNAME)))
        .respond_with(response)
        .mount(server)
        .await;
}

/// A connection using basic credentials against `server`.
pub fn basic_connection(server: &MockServer) -> Connection {
    Connection::new(
        ConnectionConfig::builder()
            .with_url(format!("{}/api", server.uri()))
            .with_username(USERNAME)
            .with_password(PASSWORD)
            .build(),
    )
    .expect("valid configuration")
}

/// A connection using a personal access token against `server`.
pub fn bearer_connection(server: &MockServer, token: &str) -> Connection {
    Connection::new(
        ConnectionConfig::builder()
            .with_url(format!("{}/api", server.uri()))
            .with_bearer_token(token)
            .build(),
    )
    .expect("valid configuration")
}
