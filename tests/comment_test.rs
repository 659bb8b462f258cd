use anyhow::Result;
use breed_viewer::{CommentSubmission, CommentSubmitter, Endpoints, FetchError, JsonClient};
use httpmock::prelude::*;

fn submitter(server: &MockServer) -> CommentSubmitter {
    let endpoints = Endpoints::new(&server.url("/api"), &server.url("/comments"));
    CommentSubmitter::new(JsonClient::new(), endpoints)
}

#[tokio::test]
async fn test_submit_comment_returns_echo() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/comments")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({"name": "Rex", "comment": "Such a good dog"}));
        then.status(201)
            .json_body(serde_json::json!({"name": "Rex", "comment": "Such a good dog", "id": 501}));
    });

    let echo = submitter(&server)
        .submit(&CommentSubmission::new("Rex", "Such a good dog"))
        .await?;

    api_mock.assert();
    assert_eq!(echo["id"], 501);
    assert_eq!(echo["name"], "Rex");
    Ok(())
}

#[tokio::test]
async fn test_empty_fields_are_posted_as_is() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/comments")
            .body(r#"{"name":"","comment":""}"#);
        then.status(201)
            .json_body(serde_json::json!({"name": "", "comment": "", "id": 501}));
    });

    let echo = submitter(&server)
        .submit(&CommentSubmission::new("", ""))
        .await?;

    api_mock.assert();
    assert_eq!(echo["id"], 501);
    Ok(())
}

#[tokio::test]
async fn test_rejected_comment_is_status_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/comments");
        then.status(503);
    });

    let err = submitter(&server)
        .submit(&CommentSubmission::new("Rex", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FetchError::Status { status: 503, ref status_text } if status_text == "Service Unavailable"
    ));
}
