//! Submit / poll / fallback orchestration against a mock service.

use crate::mock_server::{client_for, MockServerFixture};
use humanize_client::{
    humanize_text, FallbackReason, HumanizeOptions, Mode, OutputSource, Readability, Strength,
    Tone,
};
use mockito::Matcher;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const TEXT: &str = "Hello world. Goodbye now.";

fn academic() -> HumanizeOptions {
    HumanizeOptions::new().with_tone(Tone::Academic)
}

#[tokio::test]
async fn test_remote_output_is_returned() {
    let mut fixture = MockServerFixture::new().await;
    let submit = fixture
        .server
        .mock("POST", "/submit")
        .match_header("apikey", "test-key")
        .match_body(Matcher::Json(json!({
            "text": TEXT,
            "readability": "College",
            "purpose": "Essay",
            "strength": "More Human",
            "model": "v11"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","id":"doc-1"}"#)
        .create_async()
        .await;
    let document = fixture
        .mock_document(
            "doc-1",
            200,
            r#"{"id":"doc-1","output":"Hi there, world.","input":"Hello world. Goodbye now.","readability":"College","createdDate":"2024-05-01T10:00:00Z","purpose":"Essay"}"#,
            1,
        )
        .await;

    let client = fixture.client(15);
    let options = HumanizeOptions::new()
        .with_mode(Mode::Rewrite)
        .with_readability(Readability::Advanced)
        .with_strength(Strength::High)
        .with_tone(Tone::Casual);
    let outcome = client.humanize_detailed(TEXT, &options).await.unwrap();

    assert_eq!(outcome.text, "Hi there, world.");
    assert_eq!(
        outcome.source,
        OutputSource::Remote {
            job_id: "doc-1".to_string()
        }
    );
    submit.assert_async().await;
    document.assert_async().await;
}

#[tokio::test]
async fn test_polling_stops_at_first_output() {
    let mut fixture = MockServerFixture::new().await;
    let _submit = fixture
        .mock_submit(200, r#"{"status":"success","id":"doc-2"}"#, 1)
        .await;

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let document = fixture
        .server
        .mock("POST", "/document")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |_| {
            if seen.fetch_add(1, Ordering::SeqCst) < 2 {
                br#"{"id":"doc-2"}"#.to_vec()
            } else {
                br#"{"id":"doc-2","output":"ready now"}"#.to_vec()
            }
        })
        .expect(3)
        .create_async()
        .await;

    let client = fixture.client(15);
    let text = client.humanize(TEXT, &academic()).await.unwrap();

    assert_eq!(text, "ready now");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    document.assert_async().await;
}

#[tokio::test]
async fn test_failed_poll_attempts_do_not_abort_the_loop() {
    let mut fixture = MockServerFixture::new().await;
    let _submit = fixture
        .mock_submit(200, r#"{"status":"success","id":"doc-3"}"#, 1)
        .await;

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let document = fixture
        .server
        .mock("POST", "/document")
        .with_status(200)
        .with_body_from_request(move |_| {
            if seen.fetch_add(1, Ordering::SeqCst) < 4 {
                b"<html>502 Bad Gateway</html>".to_vec()
            } else {
                br#"{"output":"made it"}"#.to_vec()
            }
        })
        .expect(5)
        .create_async()
        .await;

    let client = fixture.client(15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.text, "made it");
    document.assert_async().await;
}

#[tokio::test]
async fn test_poll_exhaustion_falls_back_after_every_attempt() {
    let mut fixture = MockServerFixture::new().await;
    let _submit = fixture
        .mock_submit(200, r#"{"status":"success","id":"doc-4"}"#, 1)
        .await;
    let document = fixture
        .mock_document("doc-4", 200, r#"{"id":"doc-4","output":""}"#, 15)
        .await;

    let client = fixture.client(15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert_eq!(
        outcome.source,
        OutputSource::Fallback {
            reason: FallbackReason::PollExhausted
        }
    );
    assert_eq!(outcome.text, client.fallback(TEXT, &academic()));
    assert_eq!(
        outcome.text,
        "It has been observed that hello world. It has been observed that goodbye now."
    );
    document.assert_async().await;
}

#[tokio::test]
async fn test_error_statuses_while_polling_count_as_attempts() {
    let mut fixture = MockServerFixture::new().await;
    let _submit = fixture
        .mock_submit(200, r#"{"status":"success","id":"doc-5"}"#, 1)
        .await;
    let document = fixture
        .mock_document("doc-5", 503, r#"{"error":"busy"}"#, 4)
        .await;

    let client = fixture.client(4);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert!(outcome.is_fallback());
    document.assert_async().await;
}

#[tokio::test]
async fn test_output_wins_over_error_field_on_document() {
    let mut fixture = MockServerFixture::new().await;
    let _submit = fixture
        .mock_submit(200, r#"{"status":"success","id":"doc-6"}"#, 1)
        .await;
    let document = fixture
        .mock_document(
            "doc-6",
            200,
            r#"{"id":"doc-6","output":"remote text","error":"warning: low credits"}"#,
            1,
        )
        .await;

    let client = fixture.client(15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.text, "remote text");
    document.assert_async().await;
}

#[tokio::test]
async fn test_document_with_numeric_metadata_is_accepted() {
    let mut fixture = MockServerFixture::new().await;
    let _submit = fixture
        .mock_submit(200, r#"{"status":"success","id":"doc-7"}"#, 1)
        .await;
    let document = fixture
        .mock_document(
            "doc-7",
            200,
            r#"{"id":"doc-7","output":"remote text","createdDate":1714557600,"readability":3,"purpose":null}"#,
            1,
        )
        .await;

    let client = fixture.client(15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert_eq!(
        outcome.source,
        OutputSource::Remote {
            job_id: "doc-7".to_string()
        }
    );
    assert_eq!(outcome.text, "remote text");
    document.assert_async().await;
}

#[tokio::test]
async fn test_numeric_submit_status_is_accepted() {
    let mut fixture = MockServerFixture::new().await;
    let submit = fixture
        .mock_submit(200, r#"{"status":200,"id":"doc-8"}"#, 1)
        .await;
    let document = fixture
        .mock_document("doc-8", 200, r#"{"id":"doc-8","output":"remote text"}"#, 1)
        .await;

    let client = fixture.client(15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.text, "remote text");
    submit.assert_async().await;
    document.assert_async().await;
}

#[tokio::test]
async fn test_submission_error_field_falls_back_without_polling() {
    let mut fixture = MockServerFixture::new().await;
    let submit = fixture
        .mock_submit(200, r#"{"status":"error","error":"Insufficient credits"}"#, 1)
        .await;
    let document = fixture.mock_document("doc-x", 200, "{}", 0).await;

    let client = fixture.client(15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert_eq!(
        outcome.source,
        OutputSource::Fallback {
            reason: FallbackReason::SubmissionRejected
        }
    );
    assert_eq!(outcome.text, client.fallback(TEXT, &academic()));
    submit.assert_async().await;
    document.assert_async().await;
}

#[tokio::test]
async fn test_missing_job_id_falls_back() {
    let mut fixture = MockServerFixture::new().await;
    let submit = fixture.mock_submit(200, r#"{"status":"queued"}"#, 1).await;

    let client = fixture.client(15);
    let options = HumanizeOptions::new().with_tone(Tone::Creative);
    let text = client.humanize("A single sentence", &options).await.unwrap();

    assert_eq!(text, "Imagine this: A single sentence");
    submit.assert_async().await;
}

#[tokio::test]
async fn test_server_error_on_submit_falls_back() {
    let mut fixture = MockServerFixture::new().await;
    let submit = fixture
        .mock_submit(500, r#"{"message":"Internal server error"}"#, 1)
        .await;

    let client = fixture.client(15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert_eq!(
        outcome.source,
        OutputSource::Fallback {
            reason: FallbackReason::Failed
        }
    );
    submit.assert_async().await;
}

#[tokio::test]
async fn test_malformed_submit_body_falls_back() {
    let mut fixture = MockServerFixture::new().await;
    let _submit = fixture.mock_submit(200, "not json at all", 1).await;

    let client = fixture.client(15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert!(outcome.is_fallback());
    assert_eq!(outcome.text, client.fallback(TEXT, &academic()));
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    let client = client_for("http://127.0.0.1:1", 15);
    let outcome = client.humanize_detailed(TEXT, &academic()).await.unwrap();

    assert_eq!(
        outcome.source,
        OutputSource::Fallback {
            reason: FallbackReason::Failed
        }
    );
    assert!(!outcome.text.is_empty());
}

#[tokio::test]
async fn test_blank_input_is_rejected_before_any_request() {
    let mut fixture = MockServerFixture::new().await;
    let submit = fixture.mock_submit(200, r#"{"id":"never"}"#, 0).await;

    let client = fixture.client(15);
    for text in ["", "   ", "\n\t"] {
        let err = client.humanize(text, &HumanizeOptions::default()).await.unwrap_err();
        assert!(err.is_validation());
    }
    submit.assert_async().await;
}

#[tokio::test]
async fn test_default_tone_uses_injected_random_source() {
    // The fixture pins every draw to 0.5.
    let client = client_for("http://127.0.0.1:1", 1);
    let text = humanize_text(&client, "Rust Is Fun. So is Tokio!", &HumanizeOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "I believe that rust is fun. I believe that so is tokio!");
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mut fixture = MockServerFixture::new().await;
    let submit = fixture
        .mock_submit(200, r#"{"status":"success","id":"doc-9"}"#, 2)
        .await;
    let document = fixture
        .mock_document("doc-9", 200, r#"{"id":"doc-9","output":"shared output"}"#, 2)
        .await;

    let client = fixture.client(15);
    let academic_opts = academic();
    let default_opts = HumanizeOptions::default();
    let (a, b) = tokio::join!(
        client.humanize("First text.", &academic_opts),
        client.humanize("Second text.", &default_opts),
    );

    assert_eq!(a.unwrap(), "shared output");
    assert_eq!(b.unwrap(), "shared output");
    submit.assert_async().await;
    document.assert_async().await;
}
