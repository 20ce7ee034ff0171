use chrono::NaiveDate;
use httpmock::prelude::*;
use samjae_reading::core::samjae;
use samjae_reading::{Gender, GeminiClient, ReadingEngine, ReadingError, UserProfile, Zodiac};

fn profile(name: &str, birth_date: &str, concern: Option<&str>) -> UserProfile {
    UserProfile {
        name: name.to_string(),
        gender: Gender::Female,
        birth_date: NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").unwrap(),
        concern: concern.map(|s| s.to_string()),
    }
}

fn engine_for(server: &MockServer, api_key: &str) -> ReadingEngine<GeminiClient> {
    ReadingEngine::new(GeminiClient::new(
        server.base_url(),
        "gemini-flash-latest".to_string(),
        api_key.to_string(),
    ))
}

#[tokio::test]
async fn test_end_to_end_samjae_reading() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-flash-latest:generateContent")
            .query_param("key", "test-key")
            // The composed prompt must carry the profile name and both labels.
            .body_contains("홍길동")
            .body_contains("눌삼재 (Middle Samjae)")
            .body_contains("2025년 ~ 2027년");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "candidates": [
                    {"content": {"parts": [{"text": "## 처방\n동쪽을 피하세요."}]}}
                ]
            }));
    });

    let engine = engine_for(&server, "test-key");
    let reading = engine
        .run(&profile("홍길동", "1999-03-14", Some("재물 손실이 걱정됩니다.")))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(reading.zodiac, Zodiac::Rabbit);
    assert!(reading.samjae.is_samjae);
    assert_eq!(reading.text, "## 처방\n동쪽을 피하세요.");
}

#[tokio::test]
async fn test_end_to_end_non_samjae_reading() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-flash-latest:generateContent")
            .body_contains("삼재에 해당하지 않습니다");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "candidates": [
                    {"content": {"parts": [{"text": "좋은 한 해가 되겠습니다."}]}}
                ]
            }));
    });

    let engine = engine_for(&server, "test-key");
    let reading = engine
        .run(&profile("김영희", "2000-07-01", None))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(reading.zodiac, Zodiac::Dragon);
    assert!(!reading.samjae.is_samjae);
    assert_eq!(reading.samjae.status, "해당 없음");
    assert_eq!(reading.samjae.period, "-");
}

#[tokio::test]
async fn test_empty_name_never_reaches_the_wire() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200);
    });

    let engine = engine_for(&server, "test-key");
    let err = engine
        .run(&profile("", "1999-03-14", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ReadingError::ValidationError { .. }));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_missing_credential_never_reaches_the_wire() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200);
    });

    let engine = engine_for(&server, "");
    let err = engine
        .run(&profile("홍길동", "1999-03-14", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ReadingError::AuthError { .. }));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_service_failure_carries_underlying_detail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(503).body("model overloaded");
    });

    let engine = engine_for(&server, "test-key");
    let err = engine
        .run(&profile("홍길동", "1999-03-14", None))
        .await
        .unwrap_err();

    match err {
        ReadingError::ServiceError { message } => {
            assert!(message.contains("503"));
            assert!(message.contains("model overloaded"));
        }
        other => panic!("expected ServiceError, got {:?}", other),
    }
}

#[test]
fn test_verdict_matches_classifier_for_reference_years() {
    let (zodiac, info) = ReadingEngine::<GeminiClient>::verdict(&profile(
        "홍길동",
        "1999-03-14",
        None,
    ));
    assert_eq!(zodiac, Zodiac::Rabbit);
    assert_eq!(info, samjae::classify(1999));
    assert!(info.is_samjae);
    assert_eq!(info.year_th, "2년차");
}
