//! Listing and fetching resources end to end.

use super::common::{awx_server, bearer_connection};
use awx_api::rest::ListResponse;
use awx_api::{JobStatus, JobTemplate};

#[tokio::test]
async fn test_list_organizations() {
    let server = awx_server().await;
    let connection = bearer_connection(&server, "pat");

    let response = connection.organizations().get().send().await.unwrap();

    assert_eq!(response.count(), 2);
    assert_eq!(response.next(), None);
    assert_eq!(response.previous(), None);

    let organizations = response.into_results();
    assert_eq!(organizations[0].name(), "Default");
    assert_eq!(organizations[0].execute_role_id(), 3);
    assert_eq!(organizations[1].name(), "Engineering");
    assert_eq!(organizations[1].execute_role_id(), 0);
}

#[tokio::test]
async fn test_find_user_by_name() {
    let server = awx_server().await;
    let connection = bearer_connection(&server, "pat");

    let response = connection
        .users()
        .get()
        .filter("username", "admin")
        .send()
        .await
        .unwrap();

    let user = &response.results()[0];
    assert_eq!(user.id(), 1);
    assert_eq!(user.username(), "admin");
    assert!(user.is_superuser());
}

#[tokio::test]
async fn test_get_project() {
    let server = awx_server().await;
    let connection = bearer_connection(&server, "pat");

    let response = connection.projects().id(6).get().send().await.unwrap();
    let project = response.result();

    assert_eq!(project.name(), "Demo Project");
    assert_eq!(project.scm_type(), "git");
    assert_eq!(project.scm_branch(), "");
}

#[tokio::test]
async fn test_filter_job_templates() {
    let server = awx_server().await;
    let connection = bearer_connection(&server, "pat");

    let response: ListResponse<JobTemplate> = connection
        .job_templates()
        .get()
        .filter("project__name", "Demo Project")
        .filter("name", "Demo Job Template")
        .send()
        .await
        .unwrap();

    assert_eq!(response.count(), 1);
    let template = &response.results()[0];
    assert_eq!(template.id(), 7);
    assert!(template.ask_limit_on_launch());
    assert!(!template.ask_vars_on_launch());
}

#[tokio::test]
async fn test_get_job() {
    let server = awx_server().await;
    let connection = bearer_connection(&server, "pat");

    let job = connection.jobs().id(42).get().send().await.unwrap().into_result();

    assert_eq!(job.status(), JobStatus::Successful);
    assert!(job.is_finished());
    assert!(job.is_successful());
}

#[tokio::test]
async fn test_unknown_job_is_server_error() {
    let server = awx_server().await;
    let connection = bearer_connection(&server, "pat");

    let err = connection.jobs().id(404).get().send().await.unwrap_err();

    assert!(err.is_server_error());
    assert_eq!(err.status(), Some(404));
}
