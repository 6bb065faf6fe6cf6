//! Integration tests for the ClarifaiClient using mockito for HTTP mocking.

use clarifai_feedback::{ApiResponse, ClarifaiClient, ClientError, ConceptFeedback, Config};
use mockito::Server;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Read one HTTP request off the stream, headers and body.
fn drain_request(stream: &TcpStream) {
    let mut reader = BufReader::new(stream);
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut body = vec![0; content_length];
    let _ = reader.read_exact(&mut body);
}

fn feedback_request(client: &ClarifaiClient) -> clarifai_feedback::AddModelFeedbackRequest {
    client
        .add_model_feedback()
        .with_id("model-1")
        .with_image_url("https://example.com/dog.jpg")
        .with_concepts([ConceptFeedback::for_id_and_value("dog", true)])
}

#[test]
fn test_unauthorized_is_a_failure_response() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/v2/models/model-1/feedback")
        .match_header("authorization", "Key wrong-key")
        .with_status(401)
        .with_body(r#"{"status": {"code": 11102, "description": "Invalid request", "details": "API key not found"}}"#)
        .create();

    let client = ClarifaiClient::with_base_url(server.url(), "wrong-key".to_string());
    let response = feedback_request(&client).execute().unwrap();

    mock.assert();
    match response {
        ApiResponse::Failure { status } => {
            assert_eq!(status.http_code, 401);
            assert_eq!(status.code, 11102);
            assert_eq!(status.details.as_deref(), Some("API key not found"));
        }
        other => panic!("Expected Failure, got: {:?}", other),
    }
}

#[test]
fn test_success_http_with_failure_code() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/v2/models/model-1/feedback")
        .with_status(200)
        .with_body(r#"{"status": {"code": 21200, "description": "Model does not exist"}}"#)
        .create();

    let client = ClarifaiClient::with_base_url(server.url(), "test-api-key".to_string());
    let response = feedback_request(&client).execute().unwrap();

    mock.assert();
    assert!(!response.is_successful());
    assert_eq!(response.status().description, "Model does not exist");
}

#[test]
fn test_success_http_with_malformed_status_block() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/v2/models/model-1/feedback")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status": {"code": 21200, "description": "Model does not exist", "details": {"field": "id"}}}"#,
        )
        .create();

    let client = ClarifaiClient::with_base_url(server.url(), "test-api-key".to_string());
    let response = feedback_request(&client).execute().unwrap();

    mock.assert();
    assert!(!response.is_successful());
    assert_eq!(response.status().http_code, 200);
    assert!(response.status().description.contains("Model does not exist"));
    assert_eq!(client.metrics().feedback_rejected_total(), 1);
    assert_eq!(client.metrics().feedback_accepted_total(), 0);
}

#[test]
fn test_server_error_with_plain_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/v2/models/model-1/feedback")
        .with_status(503)
        .with_body("Service Unavailable")
        .create();

    let client = ClarifaiClient::with_base_url(server.url(), "test-api-key".to_string());
    let response = feedback_request(&client).execute().unwrap();

    mock.assert();
    assert!(!response.is_successful());
    assert_eq!(response.status().http_code, 503);
    assert_eq!(response.status().description, "Service Unavailable");
}

#[test]
fn test_success_with_invalid_json_is_an_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/v2/models/model-1/feedback")
        .with_status(200)
        .with_body("not json")
        .create();

    let client = ClarifaiClient::with_base_url(server.url(), "test-api-key".to_string());
    let result = feedback_request(&client).execute();

    mock.assert();
    assert!(matches!(result, Err(ClientError::JsonError(_))));
}

#[test]
fn test_empty_success_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/v2/models/model-1/feedback")
        .with_status(204)
        .create();

    let client = ClarifaiClient::with_base_url(server.url(), "test-api-key".to_string());
    let response = feedback_request(&client).execute().unwrap();

    mock.assert();
    assert!(response.is_successful());
    assert_eq!(response.get().unwrap().body, serde_json::Value::Null);
}

#[test]
fn test_transport_failure_is_an_error() {
    // Nothing listens on port 1
    let client = ClarifaiClient::with_base_url(
        "http://127.0.0.1:1".to_string(),
        "test-api-key".to_string(),
    );
    let result = feedback_request(&client).execute();

    assert!(matches!(
        result,
        Err(ClientError::Http(_)) | Err(ClientError::Timeout)
    ));
    assert_eq!(client.metrics().http_errors_total(), 1);
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().feedback_rejected_total(), 0);
}

#[test]
fn test_metrics_track_each_call() {
    let mut server = Server::new();

    let _ok = server
        .mock("POST", "/v2/models/model-1/feedback")
        .with_status(200)
        .with_body(r#"{"status": {"code": 10000, "description": "Ok"}}"#)
        .expect(2)
        .create();

    let client = ClarifaiClient::with_base_url(server.url(), "test-api-key".to_string());
    feedback_request(&client).execute().unwrap();
    feedback_request(&client).execute().unwrap();

    let summary = client.metrics().summary();
    assert_eq!(summary.http_requests_total, 2);
    assert_eq!(summary.feedback_accepted_total, 2);
    assert_eq!(summary.http_errors_total, 0);
}

#[test]
fn test_unanswered_request_is_a_timeout() {
    // Connections queue in the backlog but are never accepted
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let config = Config {
        api_base_url: format!("http://{}", listener.local_addr().unwrap()),
        api_key: "test-api-key".to_string(),
        request_timeout: 1,
        log_level: "error".to_string(),
    };

    let client = ClarifaiClient::new(&config);
    let result = feedback_request(&client).execute();

    assert!(matches!(result, Err(ClientError::Timeout)), "got: {:?}", result);
    assert_eq!(client.metrics().http_errors_total(), 1);
    drop(listener);
}

#[test]
fn test_dropped_connection_is_not_a_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        drain_request(&stream);
    });

    let client = ClarifaiClient::with_base_url(base_url, "test-api-key".to_string());
    let result = feedback_request(&client).execute();
    server.join().unwrap();

    assert!(matches!(result, Err(ClientError::Http(_))), "got: {:?}", result);
}

#[test]
fn test_truncated_error_body_is_still_a_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        drain_request(&stream);
        // Promises more bytes than it sends
        stream
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nshort")
            .unwrap();
        stream.flush().unwrap();
    });

    let client = ClarifaiClient::with_base_url(base_url, "test-api-key".to_string());
    let response = feedback_request(&client).execute().unwrap();
    server.join().unwrap();

    assert!(!response.is_successful());
    assert_eq!(response.status().http_code, 500);
    assert_eq!(response.status().code, 0);
    assert!(
        ["HTTP 500", "short"].contains(&response.status().description.as_str()),
        "got: {}",
        response.status().description
    );
    assert_eq!(client.metrics().feedback_rejected_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}
