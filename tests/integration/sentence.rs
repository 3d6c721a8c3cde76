//! Sentence-meaning requests end to end.

use crate::mock_server::{MockServerFixture, API_VERSION};
use chrono::DateTime;
use mockito::Matcher;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wit_client::{ContextObject, Error, SentenceRequest, Severity, WitClient};

#[tokio::test]
async fn test_sentence_meaning_sends_defaults_and_decodes() {
    let fixture = MockServerFixture::new().await;
    let query = Matcher::AllOf(vec![
        Matcher::UrlEncoded("v".into(), API_VERSION.into()),
        Matcher::UrlEncoded("q".into(), "hello".into()),
        Matcher::UrlEncoded("n".into(), "3".into()),
        Matcher::UrlEncoded("verbose".into(), "false".into()),
        Matcher::Regex("context=[^&]*en_GB".into()),
        Matcher::Regex("context=[^&]*Europe%2FLondon".into()),
        Matcher::Regex(r"(^|&)msg_id=2\d{13}(&|$)".into()),
        Matcher::Regex(r"(^|&)thread_id=2\d{13}(&|$)".into()),
    ]);
    let mock = fixture
        .mock_message(query, 200, r#"{"intents":[]}"#, 1)
        .await;

    let client = fixture.client(Severity::Exceptions);
    let result = client
        .sentence_meaning(&SentenceRequest::new("hello").with_max_traits(3))
        .await
        .expect("sentence meaning should succeed");

    assert!(result.intents.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_sentence_meaning_sends_caller_values() {
    let fixture = MockServerFixture::new().await;
    let query = Matcher::AllOf(vec![
        Matcher::UrlEncoded("msg_id".into(), "msg-1".into()),
        Matcher::UrlEncoded("thread_id".into(), "thread-1".into()),
        Matcher::UrlEncoded("verbose".into(), "true".into()),
        Matcher::Regex("context=[^&]*fr_FR".into()),
    ]);
    let body = r#"{
        "text": "réserve une table",
        "intents": [{"id": "7", "name": "book_table", "confidence": 0.88}],
        "entities": {},
        "traits": {}
    }"#;
    let mock = fixture.mock_message(query, 200, body, 1).await;

    let time = DateTime::parse_from_rfc3339("2024-06-01T19:00:00+02:00").unwrap();
    let request = SentenceRequest::new("réserve une table")
        .with_context(ContextObject::new("fr_FR", time, "Europe/Paris"))
        .with_message_id("msg-1")
        .with_thread_id("thread-1")
        .with_verbose(true);

    let result = fixture
        .client(Severity::Exceptions)
        .sentence_meaning(&request)
        .await
        .unwrap();

    assert_eq!(result.top_intent().unwrap().name, "book_table");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_raises_with_status_and_reason() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_message(Matcher::Any, 500, "Internal Error", 1)
        .await;

    let err = fixture
        .client(Severity::Exceptions)
        .sentence_meaning(&SentenceRequest::new("hello").with_max_traits(3))
        .await
        .unwrap_err();

    let text = err.to_string();
    assert!(text.contains("500"), "unexpected error: {}", text);
    assert!(text.contains("Internal Error"), "unexpected error: {}", text);
    assert_eq!(err.status(), Some(500));
    mock.assert_async().await;
}

/// Serve one connection with a raw status line, so the reason phrase can differ
/// from the canonical one.
async fn serve_raw_once(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut read = 0;
        // Request head only; GET requests carry no body.
        while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf[read..]).await.unwrap();
            if n == 0 {
                return;
            }
            read += n;
        }
        let response = format!(
            "{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status_line
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_server_reason_phrase_is_kept_without_body() {
    let base_url = serve_raw_once("HTTP/1.1 500 Internal Error").await;
    let client = WitClient::builder()
        .access_token("abc")
        .log_severity(Severity::Exceptions)
        .base_url_override(base_url)
        .build()
        .unwrap();

    let err = client
        .sentence_meaning(&SentenceRequest::new("hello").with_max_traits(3))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "HTTP Error 500: Internal Error");
}

#[tokio::test]
async fn test_invalid_input_raises_before_sending() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_message(Matcher::Any, 200, r#"{"intents":[]}"#, 0)
        .await;
    let client = fixture.client(Severity::Exceptions);

    let invalid = [
        SentenceRequest::new("a".repeat(257)),
        SentenceRequest::new("   "),
        SentenceRequest::new("hello").with_max_traits(9),
        SentenceRequest::new("hello").with_max_traits(-1),
    ];
    for request in &invalid {
        let err = client.sentence_meaning(request).await.unwrap_err();
        assert!(err.is_validation(), "unexpected error: {}", err);
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_message(Matcher::Any, 200, "<html>gateway</html>", 1)
        .await;

    let err = fixture
        .client(Severity::Exceptions)
        .sentence_meaning(&SentenceRequest::new("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_message(Matcher::Any, 200, r#"{"intents":[]}"#, 2)
        .await;

    let client = fixture.client(Severity::Exceptions);
    let other = client.clone();
    let first = SentenceRequest::new("first");
    let second = SentenceRequest::new("second");
    let (a, b) = tokio::join!(
        client.sentence_meaning(&first),
        other.sentence_meaning(&second)
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = WitClient::builder()
        .access_token("abc")
        .log_severity(Severity::Silent)
        .base_url_override("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client
        .sentence_meaning(&SentenceRequest::new("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
#[ignore = "requires a real Wit token; run with WIT_ACCESS_TOKEN set and -- --ignored"]
async fn test_sentence_meaning_live() {
    let config = match wit_client::ClientConfig::from_env() {
        Ok(c) => c,
        Err(_) => {
            eprintln!("WIT_ACCESS_TOKEN not set, skipping live test");
            return;
        }
    };
    let client = WitClient::builder()
        .config(config)
        .log_severity(Severity::Exceptions)
        .api_version("20240304")
        .build()
        .unwrap();

    let result = client
        .sentence_meaning(&SentenceRequest::new("what is the weather tomorrow").with_max_traits(1))
        .await
        .expect("live request failed");
    println!("{:?}", result);
}
