use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quickroutes::api::LocationAPI;
use quickroutes::db::MemoryStore;
use quickroutes::engine::{Engine, Outcome, LANGUAGE};
use quickroutes::entities::Field;
use quickroutes::external::{nominatim, opener::RecordingOpener};

fn places() -> serde_json::Value {
    json!([
        {
            "place_id": 1001,
            "display_name": "Koramangala, Bengaluru, Karnataka, India",
            "lat": "12.9352403",
            "lon": "77.624532"
        },
        {
            "place_id": 1002,
            "display_name": "Koramangala 4th Block, Bengaluru",
            "lat": "12.9338",
            "lon": "77.6291"
        }
    ])
}

fn engine(server: &MockServer) -> (Engine, async_channel::Receiver<quickroutes::engine::Resolution>) {
    let geocoder = nominatim::Client::new(&server.uri(), "quickroutes-test", LANGUAGE).unwrap();

    Engine::new(
        Arc::new(MemoryStore::new()),
        geocoder,
        Arc::new(RecordingOpener::new()),
        Duration::from_millis(100),
    )
}

#[tokio::test]
async fn search_sends_expected_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("format", "json"))
        .and(query_param("q", "Koramangala"))
        .and(query_param("limit", "5"))
        .and(header("accept-language", "en"))
        .and(header("user-agent", "quickroutes-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(places()))
        .expect(1)
        .mount(&server)
        .await;

    let client = nominatim::Client::new(&server.uri(), "quickroutes-test", LANGUAGE).unwrap();
    let results = client.search("Koramangala", 5).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].display_name, "Koramangala, Bengaluru, Karnataka, India");
}

#[tokio::test]
async fn search_maps_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "bad request"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = nominatim::Client::new(&server.uri(), "quickroutes-test", LANGUAGE).unwrap();

    assert!(client
        .search("bad request", 5)
        .await
        .unwrap_err()
        .is_invalid_input_error());
    assert_eq!(client.search("down", 5).await.unwrap_err().code, 4);
    assert_eq!(client.search("garbage", 5).await.unwrap_err().code, 4);
}

#[tokio::test]
async fn debounced_typing_issues_one_request_with_final_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Koramangala"))
        .respond_with(ResponseTemplate::new(200).set_body_json(places()))
        .expect(1)
        .mount(&server)
        .await;

    let (mut engine, resolutions) = engine(&server);

    engine.change_text(Field::Pickup, "Kora".into());
    engine.change_text(Field::Pickup, "Koraman".into());
    engine.change_text(Field::Pickup, "Koramangala".into());

    let resolution = resolutions.recv().await.unwrap();
    assert!(engine.apply_resolution(resolution));

    let draft = engine.draft();
    assert_eq!(draft.pickup_query.text, "Koramangala");
    assert_eq!(draft.pickup_query.suggestions.len(), 2);
    assert_eq!(draft.pickup_query.suggestions[1].place_id, "1002");

    // nothing else was scheduled
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(resolutions.is_empty());

    engine.select_suggestion(Field::Pickup, 0).unwrap();
    assert_eq!(engine.draft().pickup, "12.9352403,77.624532");
    assert_eq!(
        engine.draft().pickup_query.text,
        "Koramangala, Bengaluru, Karnataka, India"
    );
}

#[tokio::test]
async fn typing_in_other_field_does_not_cancel_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Koramangala"))
        .respond_with(ResponseTemplate::new(200).set_body_json(places()))
        .expect(1)
        .mount(&server)
        .await;

    let (mut engine, resolutions) = engine(&server);

    engine.change_text(Field::Pickup, "Koramangala".into());
    engine.change_text(Field::Dropoff, "In".into());

    let mut applied = Vec::new();
    for _ in 0..2 {
        let resolution = resolutions.recv().await.unwrap();
        applied.push(resolution.field);
        assert!(engine.apply_resolution(resolution));
    }

    assert!(applied.contains(&Field::Pickup));
    assert!(applied.contains(&Field::Dropoff));
    assert_eq!(engine.draft().pickup_query.suggestions.len(), 2);
    assert!(engine.draft().dropoff_query.suggestions.is_empty());
}

#[tokio::test]
async fn slow_response_for_superseded_text_is_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Koramangala"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(places())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let (mut engine, resolutions) = engine(&server);

    engine.change_text(Field::Dropoff, "Koramangala".into());

    // let the timer fire so the request is in flight, then keep typing
    tokio::time::sleep(Duration::from_millis(150)).await;
    engine.change_text(Field::Dropoff, "Ko".into());

    let resolution = resolutions.recv().await.unwrap();
    assert_eq!(resolution.seq, 2);
    assert!(matches!(resolution.outcome, Outcome::Cleared));
    assert!(engine.apply_resolution(resolution));

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(resolutions.is_empty());
    assert!(engine.draft().dropoff_query.suggestions.is_empty());
}

#[tokio::test]
async fn places_with_malformed_coordinates_are_dropped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "place_id": 1, "display_name": "Good", "lat": "1.5", "lon": "2.5" },
            { "place_id": 2, "display_name": "Bad", "lat": "", "lon": "2.5" }
        ])))
        .mount(&server)
        .await;

    let (mut engine, resolutions) = engine(&server);

    engine.change_text(Field::Pickup, "Somewhere".into());
    let resolution = resolutions.recv().await.unwrap();
    assert!(engine.apply_resolution(resolution));

    let suggestions = &engine.draft().pickup_query.suggestions;
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].label, "Good");
}
