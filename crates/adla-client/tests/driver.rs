//! Integration tests: submit/poll/fetch lifecycle through a mock transport.

use adla_client::{
    AdlaConfig, AdlaDriver, FetchError, JobState, MockTransport, StatusError, SubmitError,
    Transport,
};
use std::sync::Arc;

const AUTH: &str = "Bearer test-token";

fn test_driver() -> (Arc<MockTransport>, AdlaDriver) {
    let transport = Arc::new(MockTransport::new());
    let config = AdlaConfig::new(
        "https://analytics.example.net/",
        "https://store.example.net/webhdfs/v1/clusters/output",
    );
    let driver = AdlaDriver::with_transport(Arc::clone(&transport) as Arc<dyn Transport>, config);
    (transport, driver)
}

#[tokio::test]
async fn submit_sends_one_put_with_auth_and_payload() {
    let (transport, driver) = test_driver();
    transport.push_response(200, r#"{"jobId": "job-1"}"#);

    let status = driver.submit_script("job-1", "SELECT 1;", AUTH).await.unwrap();
    assert_eq!(status.state, JobState::Submitted);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(
        requests[0].url,
        "https://analytics.example.net/jobs/job-1?api-version=2016-11-01"
    );
    assert_eq!(requests[0].auth, AUTH);
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains(r#""jobId":"job-1""#));
    assert!(body.contains(r#""name":"job-1""#));
    assert!(body.contains(r#""script":"SELECT 1;""#));
}

#[tokio::test]
async fn submit_rejection_carries_the_job_id() {
    let (transport, driver) = test_driver();
    transport.push_response(500, "internal error");

    let err = driver
        .submit_script("job-err", "SELECT 1;", AUTH)
        .await
        .unwrap_err();
    match err {
        SubmitError::Rejected {
            job_id,
            http_status,
        } => {
            assert_eq!(job_id, "job-err");
            assert_eq!(http_status, 500);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn status_maps_succeeded_with_timing_message() {
    let (transport, driver) = test_driver();
    transport.push_response(
        200,
        r#"{
            "result": " Succeeded ",
            "properties": {
                "totalQueuedTime": 5,
                "totalRunningTime": 10,
                "unknownField": 99
            }
        }"#,
    );

    let status = driver.status("job-1", AUTH).await.unwrap();
    assert_eq!(status.state, JobState::Completed);
    assert!(status.state.is_terminal());
    assert!(status.message.contains("Total Queued Time = 5"));
    assert!(status.message.contains("Total Running Time = 10"));
    assert!(!status.message.contains("unknownField"));

    let requests = transport.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].url,
        "https://analytics.example.net/jobs/job-1?api-version=2016-11-01"
    );
}

#[tokio::test]
async fn status_non_200_is_an_error() {
    let (transport, driver) = test_driver();
    transport.push_response(404, "no such job");

    let err = driver.status("gone", AUTH).await.unwrap_err();
    assert!(matches!(err, StatusError::Http { http_status: 404 }));
}

#[tokio::test]
async fn status_malformed_body_is_an_error() {
    let (transport, driver) = test_driver();
    transport.push_response(200, "<html>not json</html>");

    let err = driver.status("job-1", AUTH).await.unwrap_err();
    assert!(matches!(err, StatusError::Parse(_)));
}

#[tokio::test]
async fn repeated_polls_of_unchanged_job_agree() {
    let (transport, driver) = test_driver();
    let body = r#"{"result": "Executing", "properties": {"totalQueuedTime": 3}}"#;
    transport.push_response(200, body);
    transport.push_response(200, body);

    let first = driver.status("job-1", AUTH).await.unwrap();
    let second = driver.status("job-1", AUTH).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.state, JobState::Running);
}

#[tokio::test]
async fn fetch_returns_output_bytes() {
    let (transport, driver) = test_driver();
    transport.push_response(200, &b"a,b\n1,2\n"[..]);

    let bytes = driver.fetch_output("job-1", AUTH).await.unwrap();
    assert_eq!(bytes, b"a,b\n1,2\n");

    let requests = transport.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].url,
        "https://store.example.net/webhdfs/v1/clusters/output/job-1.csv?op=open"
    );
    assert_eq!(requests[0].auth, AUTH);
}

#[tokio::test]
async fn fetch_non_success_is_an_error_not_bytes() {
    let (transport, driver) = test_driver();
    transport.push_response(403, "forbidden");

    let err = driver.fetch_output("job-1", AUTH).await.unwrap_err();
    assert!(matches!(err, FetchError::Http { http_status: 403 }));
}

#[tokio::test]
async fn submit_poll_until_terminal_then_fetch() {
    let (transport, driver) = test_driver();
    transport.push_response(200, "{}");
    transport.push_response(200, r#"{"result": "Queued"}"#);
    transport.push_response(
        200,
        r#"{"result": "Succeeded", "properties": {"totalCompilationTime": "00:00:04"}}"#,
    );
    transport.push_response(200, &b"x,y\n"[..]);

    let submitted = driver
        .submit_script("job-lc", "SELECT * FROM @in;", AUTH)
        .await
        .unwrap();
    assert_eq!(submitted.state, JobState::Submitted);

    let mut last = submitted;
    for _ in 0..10 {
        last = driver.status("job-lc", AUTH).await.unwrap();
        if last.state.is_terminal() {
            break;
        }
    }
    assert_eq!(last.state, JobState::Completed);
    assert!(last.message.contains("Total Compilation Time = 00:00:04"));

    let bytes = driver.fetch_output("job-lc", AUTH).await.unwrap();
    assert_eq!(bytes, b"x,y\n");

    let methods: Vec<&str> = transport.requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["PUT", "GET", "GET", "GET"]);
}
