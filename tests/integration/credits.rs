//! Credit balance query against a mock service.

use crate::mock_server::{client_for, MockServerFixture};
use humanize_client::credits_remaining;

#[tokio::test]
async fn test_numeric_credits_returned_verbatim() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_credits(200, r#"{"credits":1234,"status":"ok"}"#, 1)
        .await;

    let client = fixture.client(1);
    assert_eq!(client.credits_remaining().await, 1234);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_integral_float_credits_accepted() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_credits(200, r#"{"credits":42.0}"#, 1).await;

    let client = fixture.client(1);
    assert_eq!(credits_remaining(&client).await, 42);
}

#[tokio::test]
async fn test_non_numeric_responses_report_zero() {
    let bodies = [
        r#"{"error":"Invalid API key"}"#,
        r#"{"status":"ok"}"#,
        r#"{"credits":"500"}"#,
        r#"{"credits":null}"#,
        r#"{"credits":-5}"#,
        r#"{"credits":2.5}"#,
        "garbage",
    ];
    for body in bodies {
        let mut fixture = MockServerFixture::new().await;
        let mock = fixture.mock_credits(200, body, 1).await;

        let client = fixture.client(1);
        assert_eq!(client.credits_remaining().await, 0, "body: {}", body);
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_error_status_reports_zero() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_credits(401, r#"{"credits":99,"error":"Unauthorized"}"#, 1)
        .await;

    let client = fixture.client(1);
    assert_eq!(client.credits_remaining().await, 0);
}

#[tokio::test]
async fn test_unreachable_service_reports_zero() {
    let client = client_for("http://127.0.0.1:1", 1);
    assert_eq!(client.credits_remaining().await, 0);
}
