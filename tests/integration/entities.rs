//! Entity listing, creation and lookup.

use crate::mock_server::{MockServerFixture, API_VERSION, TOKEN};
use mockito::Matcher;
use serde_json::json;
use wit_client::Severity;

#[tokio::test]
async fn test_list_entities() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/entities", 200, r#"["wit$datetime","favorite_city"]"#, 1)
        .await;

    let names = fixture.client(Severity::Exceptions).list_entities().await.unwrap();

    assert_eq!(names, vec!["wit$datetime", "favorite_city"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_entities_carries_version() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", "/entities")
            .match_query(Matcher::UrlEncoded("v".into(), API_VERSION.into()))
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await
    };

    fixture.client(Severity::Exceptions).list_entities().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_entity_posts_id_and_doc() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/entities")
            .match_query(Matcher::Any)
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .match_body(Matcher::Json(json!({
                "id": "favorite_city",
                "doc": "A city that I like"
            })))
            .with_status(200)
            .with_body(r#"{"id":"5418abc7","name":"favorite_city","roles":[{"id":"9","name":"favorite_city"}],"lookups":["keywords"]}"#)
            .expect(1)
            .create_async()
            .await
    };

    let entity = fixture
        .client(Severity::Exceptions)
        .create_entity("favorite_city", "A city that I like")
        .await
        .unwrap();

    assert_eq!(entity.id.as_deref(), Some("5418abc7"));
    assert_eq!(entity.lookups, vec!["keywords"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_entity_conflict_is_reported() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("POST", "/entities", 409, r#"{"error":"already exists"}"#, 1)
        .await;

    let err = fixture
        .client(Severity::Exceptions)
        .create_entity("favorite_city", "A city that I like")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_get_entity_returns_expressions() {
    let fixture = MockServerFixture::new().await;
    let body = r#"{
        "builtin": false,
        "doc": "A city that I like",
        "name": "favorite_city",
        "lookups": ["keywords"],
        "values": [
            {"value": "Paris", "expressions": ["Paris", "City of Light"]},
            {"value": "London", "expressions": ["London"]}
        ]
    }"#;
    let mock = fixture
        .mock_json("GET", "/entities/favorite_city", 200, body, 1)
        .await;

    let entity = fixture
        .client(Severity::Exceptions)
        .get_entity("favorite_city")
        .await
        .unwrap();

    assert_eq!(entity.doc.as_deref(), Some("A city that I like"));
    assert_eq!(
        entity.expressions().collect::<Vec<_>>(),
        vec!["Paris", "City of Light", "London"]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_missing_entity_is_not_found() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/entities/unknown", 404, r#"{"error":"not found"}"#, 1)
        .await;

    let err = fixture
        .client(Severity::Exceptions)
        .get_entity("unknown")
        .await
        .unwrap_err();

    assert!(err.is_remote());
    assert_eq!(err.status(), Some(404));
}
