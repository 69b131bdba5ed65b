//! Launching a job template and following the job.

use super::common::{awx_server, bearer_connection};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_launch_template_found_by_name() {
    let server = awx_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/job_templates/7/launch/"))
        .and(body_json(serde_json::json!({
            "limit": "node0.example.com",
            "extra_vars": {"alertname": "bla"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "job": 42,
            "ignored_fields": {},
            "id": 42,
            "type": "job",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connection = bearer_connection(&server, "pat");

    let templates = connection
        .job_templates()
        .get()
        .filter("project__name", "Demo Project")
        .filter("name", "Demo Job Template")
        .send()
        .await
        .unwrap();

    for template in templates.results() {
        let launched = connection
            .job_templates()
            .id(template.id())
            .launch()
            .post()
            .limit("node0.example.com")
            .extra_var("alertname", "bla")
            .send()
            .await
            .unwrap();

        let job = connection.jobs().id(launched.job()).get().send().await.unwrap();
        assert!(job.result().is_successful());
    }
}
