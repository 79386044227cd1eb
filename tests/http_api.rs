//! HTTP API tests.
//!
//! Covers the status codes and response bodies of every endpoint:
//! - ingestion (201, 400, 409, 422)
//! - exact lookup and delete (200, 204, 404)
//! - structured and natural-language filtering (200, 400, 422)

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use strindex::api::StrindexApi;
use strindex::config::ServerConfig;
use strindex::server::create_app;
use strindex::store::memory::InMemoryStore;

const CONTENT_TYPE: HeaderName = HeaderName::from_static("content-type");

fn create_test_server() -> TestServer {
    let app = create_app(
        StrindexApi::new(InMemoryStore::new()),
        ServerConfig::for_testing(),
    );
    TestServer::new(app).expect("Failed to create test server")
}

async fn seed(server: &TestServer, values: &[&str]) {
    for value in values {
        server
            .post("/strings")
            .json(&json!({ "value": value }))
            .await
            .assert_status(StatusCode::CREATED);
    }
}

fn assert_json_error(response: &axum_test::TestResponse, status: StatusCode) {
    response.assert_status(status);
    let body: Value = serde_json::from_str(&response.text()).expect("error body is JSON");
    assert!(body["error"].is_string(), "missing error field: {}", body);
}

fn values(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|r| r["value"].as_str().expect("value").to_string())
        .collect()
}

// =============================================================================
// Ingestion
// =============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_record_with_properties() {
        let server = create_test_server();

        let response = server
            .post("/strings")
            .json(&json!({ "value": "madam" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["value"], "madam");
        assert_eq!(body["id"], body["properties"]["sha256_hash"]);
        assert_eq!(body["properties"]["length"], 5);
        assert_eq!(body["properties"]["is_palindrome"], true);
        assert_eq!(body["properties"]["unique_characters"], 3);
        assert_eq!(body["properties"]["word_count"], 1);
        assert_eq!(
            body["properties"]["character_frequency_map"],
            json!({"m": 2, "a": 2, "d": 1})
        );
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_returns_409_and_keeps_one_record() {
        let server = create_test_server();
        seed(&server, &["hello"]).await;

        let response = server
            .post("/strings")
            .json(&json!({ "value": "hello" }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["error"], "String already exists");

        let list: Value = server.get("/strings").await.json();
        assert_eq!(list["count"], 1);
        assert_eq!(values(&list), vec!["hello"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicates_store_one_record() {
        const ATTEMPTS: usize = 32;
        let server = Arc::new(create_test_server());

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..ATTEMPTS {
            let server = Arc::clone(&server);
            tasks.spawn(async move {
                server
                    .post("/strings")
                    .json(&json!({ "value": "hello" }))
                    .await
                    .status_code()
            });
        }

        let mut created = 0;
        let mut conflicts = 0;
        while let Some(status) = tasks.join_next().await {
            match status.expect("request task panicked") {
                StatusCode::CREATED => created += 1,
                StatusCode::CONFLICT => conflicts += 1,
                other => panic!("unexpected status {}", other),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(conflicts, ATTEMPTS - 1);

        let list: Value = server.get("/strings").await.json();
        assert_eq!(list["count"], 1);
    }

    #[tokio::test]
    async fn test_outer_whitespace_collides() {
        let server = create_test_server();
        seed(&server, &["hello"]).await;

        server
            .post("/strings")
            .json(&json!({ "value": "  hello\t" }))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_non_string_value_returns_422() {
        let server = create_test_server();

        let response = server.post("/strings").json(&json!({ "value": 42 })).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "value must be a string");
    }

    #[tokio::test]
    async fn test_missing_value_returns_400() {
        let server = create_test_server();

        let response = server.post("/strings").json(&json!({ "text": "x" })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let server = create_test_server();

        server
            .post("/strings")
            .add_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .bytes(Bytes::from("{not json"))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

// =============================================================================
// Lookup and delete
// =============================================================================

mod lookup {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_record() {
        let server = create_test_server();
        seed(&server, &["madam"]).await;

        let response = server.get("/strings/madam").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["value"], "madam");
    }

    #[tokio::test]
    async fn test_get_decodes_path() {
        let server = create_test_server();
        seed(&server, &["hello world"]).await;

        let response = server.get("/strings/hello%20world").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["properties"]["word_count"], 2);
    }

    #[tokio::test]
    async fn test_invalid_utf8_path_returns_json_400() {
        let server = create_test_server();

        assert_json_error(&server.get("/strings/%FF").await, StatusCode::BAD_REQUEST);
        assert_json_error(
            &server.delete("/strings/%FF").await,
            StatusCode::BAD_REQUEST,
        );
    }

    #[tokio::test]
    async fn test_get_missing_returns_404() {
        let server = create_test_server();

        let response = server.get("/strings/absent").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"], "String not found.");
    }

    #[tokio::test]
    async fn test_delete_returns_204_then_404() {
        let server = create_test_server();
        seed(&server, &["madam"]).await;

        server
            .delete("/strings/madam")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get("/strings/madam")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .delete("/strings/madam")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// Structured filters
// =============================================================================

mod structured_filter {
    use super::*;

    #[tokio::test]
    async fn test_filters_and_echoes_applied_filters() {
        let server = create_test_server();
        seed(&server, &["madam", "racecar", "hello", "never odd"]).await;

        let response = server
            .get("/strings?is_palindrome=true&min_length=5&max_length=6&word_count=1")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(values(&body), vec!["madam"]);
        assert_eq!(body["count"], 1);
        assert_eq!(
            body["filters_applied"],
            json!({
                "is_palindrome": true,
                "min_length": 5,
                "max_length": 6,
                "word_count": 1
            })
        );
    }

    #[tokio::test]
    async fn test_contains_character_is_case_insensitive() {
        let server = create_test_server();
        seed(&server, &["Zebra", "lazy", "apple"]).await;

        let body: Value = server
            .get("/strings?contains_character=z")
            .await
            .json();
        assert_eq!(values(&body), vec!["Zebra", "lazy"]);
    }

    #[tokio::test]
    async fn test_no_filters_lists_everything_in_insertion_order() {
        let server = create_test_server();
        seed(&server, &["b", "a", "c"]).await;

        let body: Value = server.get("/strings").await.json();
        assert_eq!(values(&body), vec!["b", "a", "c"]);
        assert_eq!(body["filters_applied"], json!({}));
    }

    #[tokio::test]
    async fn test_malformed_parameter_returns_400() {
        let server = create_test_server();

        for query in [
            "min_length=abc",
            "is_palindrome=maybe",
            "contains_character=ab",
            "word_count=0",
        ] {
            server
                .get(&format!("/strings?{}", query))
                .await
                .assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_repeated_parameter_returns_json_400() {
        let server = create_test_server();

        let response = server.get("/strings?min_length=1&min_length=2").await;
        assert_json_error(&response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_whitespace_character_filter() {
        let server = create_test_server();
        seed(&server, &["hello world", "hello"]).await;

        let response = server.get("/strings?contains_character=%20").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(values(&body), vec!["hello world"]);
        assert_eq!(body["filters_applied"], json!({"contains_character": " "}));
    }

    #[tokio::test]
    async fn test_conflicting_lengths_return_422() {
        let server = create_test_server();
        seed(&server, &["madam"]).await;

        server
            .get("/strings?min_length=10&max_length=3")
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// =============================================================================
// Natural-language filters
// =============================================================================

mod natural_language {
    use super::*;

    const NL_PATH: &str = "/strings/filter-by-natural-language";

    #[tokio::test]
    async fn test_single_word_palindromes() {
        let server = create_test_server();
        seed(&server, &["madam", "civic", "hello", "was it a car"]).await;

        let response = server
            .get(&format!(
                "{}?query=all%20single%20word%20palindromic%20strings",
                NL_PATH
            ))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["count"], 2);
        assert_eq!(values(&body), vec!["madam", "civic"]);
        assert_eq!(
            body["interpreted_query"],
            json!({
                "original": "all single word palindromic strings",
                "parsed_filters": {"is_palindrome": true, "word_count": 1}
            })
        );
    }

    #[tokio::test]
    async fn test_length_and_letter() {
        let server = create_test_server();
        seed(&server, &["zebra", "pizza", "zoo", "banana"]).await;

        let body: Value = server
            .get(&format!(
                "{}?query=strings%20longer%20than%203%20containing%20the%20letter%20z",
                NL_PATH
            ))
            .await
            .json();
        assert_eq!(values(&body), vec!["zebra", "pizza"]);
        assert_eq!(
            body["interpreted_query"]["parsed_filters"],
            json!({"min_length": 4, "contains_character": "z"})
        );
    }

    #[tokio::test]
    async fn test_missing_query_returns_400() {
        let server = create_test_server();

        let response = server.get(NL_PATH).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Missing 'query' parameter");
    }

    #[tokio::test]
    async fn test_repeated_query_parameter_returns_json_400() {
        let server = create_test_server();

        let response = server
            .get(&format!("{}?query=palindrome&query=x", NL_PATH))
            .await;
        assert_json_error(&response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unparseable_query_returns_400() {
        let server = create_test_server();

        let response = server
            .get(&format!("{}?query=gibberish%20nonsense", NL_PATH))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["error"],
            "Unable to parse natural language query: unable to parse query"
        );
    }

    #[tokio::test]
    async fn test_conflicting_query_returns_422() {
        let server = create_test_server();
        seed(&server, &["madam"]).await;

        let response = server
            .get(&format!(
                "{}?query=longer%20than%2010%20and%20shorter%20than%203",
                NL_PATH
            ))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(
            body["error"],
            "Conflicting filters detected: conflicting length filters"
        );
    }
}

#[tokio::test]
async fn test_health_reports_record_count() {
    let server = create_test_server();
    seed(&server, &["one", "two"]).await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"], 2);
}
