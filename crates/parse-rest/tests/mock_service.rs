//! Mock service tests for parse-rest.
//!
//! These tests use wiremock to simulate the REST API and check request
//! shapes, decoding, error classification and iteration without network
//! access or real credentials.

use std::sync::{Arc, Mutex};

use parse_core::error::{DecodeError, InvalidInputError, TransportError};
use parse_rest::{
    ApiUrl, BlockingClient, ClassName, Client, Credentials, Error, FileRef, MasterKey, Object,
    ObjectMeta, QueryOptions, ServiceError, SessionToken, Step, TraceSink, TriggerFunction, User,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use wiremock::matchers::{
    body_json, body_string, header, header_exists, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameScore {
    #[serde(flatten)]
    meta: ObjectMeta,
    score: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    player_name: String,
}

impl Object for GameScore {
    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.meta
    }
}

fn client_for(server: &MockServer) -> Client {
    Client::builder(Credentials::new("app-id", "rest-key"))
        .server(ApiUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn game_score() -> ClassName {
    ClassName::new("GameScore").unwrap()
}

fn after(iso: &str) -> String {
    format!(r#"{{"createdAt":{{"$gt":{{"__type":"Date","iso":"{}"}}}}}}"#, iso)
}

fn record(id: &str, second: u32) -> Value {
    json!({
        "objectId": id,
        "score": second * 10,
        "createdAt": format!("2024-01-01T00:00:{:02}.000Z", second),
        "updatedAt": format!("2024-01-01T00:00:{:02}.000Z", second),
    })
}

async fn mount_page(server: &MockServer, cursor: &str, limit: u32, results: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .and(query_param("where", after(cursor).as_str()))
        .and(query_param("limit", limit.to_string().as_str()))
        .and(query_param("order", "createdAt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn test_query_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .and(query_param("where", "{}"))
        .and(query_param("limit", "1000"))
        .and(query_param("order", "createdAt"))
        .and(query_param_is_missing("skip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"objectId": "a", "score": 10},
                {"objectId": "b", "score": 20}
            ]
        })))
        .mount(&server)
        .await;

    let options = QueryOptions::new()
        .filter("{}")
        .limit(1000)
        .order("createdAt")
        .skip(0);
    let scores: Vec<GameScore> = client_for(&server).query(Some(&options)).await.unwrap();

    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].object_id(), Some("a"));
    assert_eq!(scores[0].score, 10);
    assert_eq!(scores[1].object_id(), Some("b"));
    assert_eq!(scores[1].score, 20);
}

#[tokio::test]
async fn test_query_into_empty_destination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"objectId": "a", "score": 10}]
        })))
        .mount(&server)
        .await;

    let mut scores: Vec<GameScore> = Vec::new();
    client_for(&server)
        .query_into(None, &mut scores)
        .await
        .unwrap();

    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].score, 10);
}

#[tokio::test]
async fn test_query_class_schemaless() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/Player"))
        .and(query_param("skip", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "Sean Plott"}]
        })))
        .mount(&server)
        .await;

    let options = QueryOptions::new().skip(20);
    let rows: Vec<Value> = client_for(&server)
        .query_class(&ClassName::new("Player").unwrap(), Some(&options))
        .await
        .unwrap();

    assert_eq!(rows, vec![json!({"name": "Sean Plott"})]);
}

#[tokio::test]
async fn test_standard_headers_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .and(header("x-parse-application-id", "app-id"))
        .and(header("x-parse-rest-api-key", "rest-key"))
        .and(header("x-parse-session-token", "r:session"))
        .and(header("x-parse-master-key", "master"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)
        .with_session_token(SessionToken::new("r:session"))
        .with_master_key(MasterKey::new("master"));
    let scores: Vec<GameScore> = client.query(None).await.unwrap();
    assert!(scores.is_empty());
}

#[tokio::test]
async fn test_envelope_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .query::<GameScore>(None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(DecodeError::Envelope { .. })));
    assert_eq!(err.code(), Some(1));
}

#[tokio::test]
async fn test_payload_error_leaves_destination_alone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"score": "ten"}]
        })))
        .mount(&server)
        .await;

    let mut scores = vec![GameScore {
        score: 99,
        ..GameScore::default()
    }];
    let err = client_for(&server)
        .query_into(None, &mut scores)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(DecodeError::Payload { .. })));
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].score, 99);
}

// ============================================================================
// Error Classification Tests
// ============================================================================

#[tokio::test]
async fn test_known_code_uses_catalog_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 101,
            "error": "object not found for get"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get::<GameScore>("missing")
        .await
        .unwrap_err();

    assert_eq!(err, Error::Service(ServiceError::OBJECT_NOT_FOUND));
    assert_eq!(err.code(), Some(101));
}

#[tokio::test]
async fn test_unknown_code_keeps_service_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 9999,
            "error": "something new"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .query::<GameScore>(None)
        .await
        .unwrap_err();

    let service = err.as_service().unwrap();
    assert_eq!(service.code, 9999);
    assert_eq!(service.message, "something new");
}

#[tokio::test]
async fn test_empty_error_body_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .query::<GameScore>(None)
        .await
        .unwrap_err();
    assert_eq!(err, Error::Unauthorized);
}

#[tokio::test]
async fn test_non_json_error_body_is_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .query::<GameScore>(None)
        .await
        .unwrap_err();
    assert_eq!(err, Error::Service(ServiceError::UNKNOWN));
    assert_eq!(err.code(), Some(1));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = Client::builder(Credentials::new("app-id", "rest-key"))
        .server(ApiUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();

    let err = client.query::<GameScore>(None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::Connection { .. })));
    assert_eq!(err.code(), Some(100));
}

// ============================================================================
// Iterator Tests
// ============================================================================

#[tokio::test]
async fn test_iterator_walks_pages_in_order() {
    let server = MockServer::start().await;

    mount_page(&server, "0000-00-00T00:00:00.000Z", 2, vec![record("a", 1), record("b", 2)]).await;
    mount_page(&server, "2024-01-01T00:00:02.000Z", 2, vec![record("c", 3), record("d", 4)]).await;
    mount_page(&server, "2024-01-01T00:00:04.000Z", 2, vec![record("e", 5)]).await;
    mount_page(&server, "2024-01-01T00:00:05.000Z", 2, vec![]).await;

    let mut iter = client_for(&server)
        .iter::<GameScore>()
        .unwrap()
        .with_page_size(2)
        .unwrap();

    let mut ids = Vec::new();
    loop {
        match iter.advance().await {
            Step::Item(score) => ids.push(score.object_id().unwrap().to_string()),
            Step::End => break,
            Step::Failed(err) => panic!("iteration failed: {}", err),
        }
    }

    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    assert!(iter.last_error().is_none());
    assert!(matches!(iter.advance().await, Step::End));
}

#[tokio::test]
async fn test_iterator_empty_class() {
    let server = MockServer::start().await;

    mount_page(&server, "0000-00-00T00:00:00.000Z", 1000, vec![]).await;

    let mut iter = client_for(&server).iter_class::<Value>(game_score());

    assert!(matches!(iter.advance().await, Step::End));
    assert!(iter.last_error().is_none());
    assert!(iter.next().await.is_none());
}

#[tokio::test]
async fn test_iterator_halts_on_missing_created_at() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "0000-00-00T00:00:00.000Z",
        1000,
        vec![record("a", 1), json!({"objectId": "b", "score": 20})],
    )
    .await;

    let mut iter = client_for(&server).iter_class::<Value>(game_score());

    assert!(matches!(iter.advance().await, Step::Item(_)));
    assert!(matches!(
        iter.advance().await,
        Step::Failed(Error::Decode(DecodeError::MalformedRecord { .. }))
    ));
    assert!(matches!(
        iter.last_error(),
        Some(Error::Decode(DecodeError::MalformedRecord { .. }))
    ));
    // Halting is permanent.
    assert!(matches!(iter.advance().await, Step::Failed(_)));
}

#[tokio::test]
async fn test_iterator_cursor_keeps_sub_millisecond_precision() {
    let server = MockServer::start().await;

    let created = "2024-01-01T00:00:01.000500Z";
    mount_page(
        &server,
        "0000-00-00T00:00:00.000Z",
        1000,
        vec![json!({"objectId": "a", "score": 10, "createdAt": created})],
    )
    .await;
    mount_page(&server, created, 1000, vec![]).await;

    let mut iter = client_for(&server).iter::<GameScore>().unwrap();

    let mut ids = Vec::new();
    while let Some(score) = iter.next().await {
        ids.push(score.unwrap().object_id().unwrap().to_string());
        assert!(ids.len() <= 1, "record fetched again");
    }

    assert_eq!(ids, vec!["a"]);
    assert_eq!(iter.cursor(), Some(created));
    assert!(iter.last_error().is_none());
}

#[tokio::test]
async fn test_iterator_halts_on_undecodable_record() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "0000-00-00T00:00:00.000Z",
        1000,
        vec![
            record("a", 1),
            json!({"objectId": "b", "score": "twenty", "createdAt": "2024-01-01T00:00:02.000Z"}),
        ],
    )
    .await;

    let mut iter = client_for(&server).iter::<GameScore>().unwrap();

    assert!(matches!(iter.advance().await, Step::Item(ref s) if s.score == 10));
    assert!(matches!(
        iter.advance().await,
        Step::Failed(Error::Decode(DecodeError::Payload { .. }))
    ));
    assert!(matches!(
        iter.last_error(),
        Some(Error::Decode(DecodeError::Payload { .. }))
    ));
    // The cursor stays on the last record handed out.
    assert_eq!(iter.cursor(), Some("2024-01-01T00:00:01.000Z"));
}

#[tokio::test]
async fn test_iterator_halts_on_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/classes/GameScore"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 102,
            "error": "bad query"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut iter = client_for(&server).iter_class::<Value>(game_score());

    let first = iter.next().await;
    assert!(matches!(first, Some(Err(Error::Service(ref e))) if e.code == 102));
    assert!(iter.next().await.is_none());
    assert_eq!(iter.last_error().and_then(Error::code), Some(102));
}

#[tokio::test]
async fn test_iterator_stream() {
    use futures_util::StreamExt;

    let server = MockServer::start().await;

    mount_page(&server, "0000-00-00T00:00:00.000Z", 1000, vec![record("a", 1), record("b", 2)]).await;
    mount_page(&server, "2024-01-01T00:00:02.000Z", 1000, vec![]).await;

    let stream = client_for(&server)
        .iter::<GameScore>()
        .unwrap()
        .into_stream();
    let scores: Vec<_> = stream.collect().await;

    assert_eq!(scores.len(), 2);
    assert_eq!(scores[1].as_ref().unwrap().score, 20);
}

// ============================================================================
// Object Tests
// ============================================================================

#[tokio::test]
async fn test_create_records_meta() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/classes/GameScore"))
        .and(body_json(json!({"score": 1337, "playerName": "Sean Plott"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "objectId": "Ed1nuqPvcm",
            "createdAt": "2011-08-20T02:06:57.931Z"
        })))
        .mount(&server)
        .await;

    let mut score = GameScore {
        score: 1337,
        player_name: "Sean Plott".to_string(),
        ..GameScore::default()
    };
    let id = client_for(&server).create(&mut score).await.unwrap();

    assert_eq!(id, "Ed1nuqPvcm");
    assert_eq!(score.object_id(), Some("Ed1nuqPvcm"));
    assert!(score.meta.created_at.is_some());
    assert_eq!(score.meta.created_at, score.meta.updated_at);
}

#[tokio::test]
async fn test_update_and_delete() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/1/classes/GameScore/Ed1nuqPvcm"))
        .and(body_json(json!({"score": 73453})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "updatedAt": "2011-08-21T18:02:52.248Z"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/1/classes/GameScore/Ed1nuqPvcm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut score = GameScore {
        meta: ObjectMeta::with_id("Ed1nuqPvcm"),
        score: 73453,
        ..GameScore::default()
    };

    let updated_at = client.update(&mut score).await.unwrap();
    assert_eq!(score.meta.updated_at, Some(updated_at));

    client.delete(&score).await.unwrap();
}

#[tokio::test]
async fn test_update_unsaved_object_fails_locally() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut score = GameScore::default();
    let err = client_for(&server).update(&mut score).await.unwrap_err();
    assert_eq!(err, Error::InvalidInput(InvalidInputError::MissingObjectId));
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_sign_up_and_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/users"))
        .and(body_json(json!({"username": "cooldude6", "password": "p_n7!-e8"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "objectId": "g7y9tkhB7O",
            "createdAt": "2011-11-07T20:58:34.448Z",
            "sessionToken": "r:pnktnjyb996sj4p156gjtp4im"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1/login"))
        .and(query_param("username", "cooldude6"))
        .and(query_param("password", "p_n7!-e8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objectId": "g7y9tkhB7O",
            "username": "cooldude6",
            "createdAt": "2011-11-07T20:58:34.448Z",
            "updatedAt": "2011-11-07T20:58:34.448Z",
            "sessionToken": "r:pnktnjyb996sj4p156gjtp4im"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut user = User::new("cooldude6", "p_n7!-e8");
    let signed_up = client.create_user(&mut user).await.unwrap();
    assert_eq!(user.object_id(), Some("g7y9tkhB7O"));
    assert_eq!(signed_up.session_token.as_str(), "r:pnktnjyb996sj4p156gjtp4im");

    let logged_in: User = client.login_user("cooldude6", "p_n7!-e8").await.unwrap();
    assert_eq!(logged_in.username, "cooldude6");
    assert_eq!(
        logged_in.session_token.as_ref().map(SessionToken::as_str),
        Some("r:pnktnjyb996sj4p156gjtp4im")
    );
}

#[tokio::test]
async fn test_current_user_and_delete_user() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/users/me"))
        .and(header("x-parse-session-token", "r:token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objectId": "g7y9tkhB7O",
            "username": "cooldude6"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/1/users/g7y9tkhB7O"))
        .and(header("x-parse-session-token", "r:token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_session_token(SessionToken::new("r:token"));
    let me = client.current_user().await.unwrap();
    assert_eq!(me.username, "cooldude6");

    client.delete_user(&me).await.unwrap();
}

#[tokio::test]
async fn test_login_failure_uses_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/login"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 101,
            "error": "Invalid username/password."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login_user::<User>("cooldude6", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err, Error::Service(ServiceError::OBJECT_NOT_FOUND));
}

// ============================================================================
// File Tests
// ============================================================================

#[tokio::test]
async fn test_upload_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/files/hello.txt"))
        .and(header("content-type", "text/plain"))
        .and(body_string("Hello, World!"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "url": "http://files.example.com/tfss-hello.txt",
            "name": "tfss-hello.txt"
        })))
        .mount(&server)
        .await;

    let file = client_for(&server)
        .upload_file("hello.txt", "Hello, World!", "text/plain")
        .await
        .unwrap();

    assert_eq!(
        file,
        FileRef {
            name: "tfss-hello.txt".to_string(),
            url: "http://files.example.com/tfss-hello.txt".to_string(),
        }
    );
}

#[tokio::test]
async fn test_delete_file_requires_master_key() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/1/files/tfss-hello.txt"))
        .and(header("x-parse-master-key", "master"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.delete_file("tfss-hello.txt").await.unwrap_err();
    assert_eq!(err, Error::RequiresMasterKey);

    client
        .with_master_key(MasterKey::new("master"))
        .delete_file("tfss-hello.txt")
        .await
        .unwrap();
}

// ============================================================================
// Hook Tests
// ============================================================================

#[tokio::test]
async fn test_hook_and_trigger_functions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/hooks/functions"))
        .and(header_exists("x-parse-master-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"functionName": "baz", "url": "https://api.example.com/baz"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1/triggers/functions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "className": "GameScore",
                "triggerName": "beforeSave",
                "url": "https://api.example.com/before"
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).with_master_key(MasterKey::new("master"));

    let hooks = client.hook_functions().await.unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0].function_name, "baz");

    let triggers = client.trigger_functions().await.unwrap();
    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].class_name, "GameScore");
}

#[tokio::test]
async fn test_create_trigger_function() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/triggers/functions"))
        .and(body_json(json!({
            "className": "GameScore",
            "url": "https://api.example.com/before"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "className": "GameScore",
            "url": "https://api.example.com/before"
        })))
        .mount(&server)
        .await;

    let trigger = TriggerFunction {
        class_name: "GameScore".to_string(),
        url: "https://api.example.com/before".to_string(),
        ..TriggerFunction::default()
    };
    let stored = client_for(&server)
        .with_master_key(MasterKey::new("master"))
        .create_trigger_function(&trigger)
        .await
        .unwrap();
    assert_eq!(stored, trigger);
}

// ============================================================================
// Tracing Tests
// ============================================================================

#[tokio::test]
async fn test_trace_sink_sees_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/classes/GameScore"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "objectId": "abc",
            "createdAt": "2011-08-20T02:06:57.931Z"
        })))
        .mount(&server)
        .await;

    let seen: Arc<Mutex<Vec<(String, String, String)>>> = Arc::default();
    let sink_seen = seen.clone();
    let sink: Arc<dyn TraceSink> = Arc::new(move |op: &str, path: &str, payload: &str| {
        sink_seen
            .lock()
            .unwrap()
            .push((op.to_string(), path.to_string(), payload.to_string()));
    });

    let mut score = GameScore {
        score: 5,
        ..GameScore::default()
    };
    client_for(&server)
        .with_trace(sink)
        .create(&mut score)
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, "Create >");
    assert_eq!(seen[0].1, "classes/GameScore");
    assert_eq!(seen[0].2, r#"{"score":5}"#);
    assert_eq!(seen[1].0, "Create <");
    assert!(seen[1].2.contains("abc"));
}

// ============================================================================
// Blocking Tests
// ============================================================================

#[test]
fn test_blocking_client() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        mount_page(&server, "0000-00-00T00:00:00.000Z", 1000, vec![record("a", 1)]).await;
        mount_page(&server, "2024-01-01T00:00:01.000Z", 1000, vec![]).await;
        Mock::given(method("GET"))
            .and(path("/1/classes/GameScore"))
            .and(query_param_is_missing("where"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"objectId": "a", "score": 10}]
            })))
            .mount(&server)
            .await;
        server
    });

    let client = BlockingClient::new(client_for(&server)).unwrap();

    let scores: Vec<GameScore> = client.query(None).unwrap();
    assert_eq!(scores.len(), 1);

    let ids: Vec<String> = client
        .iter::<GameScore>()
        .unwrap()
        .map(|score| score.unwrap().object_id().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["a"]);

    drop(client);
    runtime.block_on(async move { server.verify().await });
}
