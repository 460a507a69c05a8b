use football_lambda_players::handler;
use football_lambda_shared::test_utils::{
    fixed_id_generator, memory_gateway, proxy_event, sample_player, FIXED_ID, MESSI_BODY, TABLE,
};
use football_lambda_shared::ProxyResponse;
use football_lib::{to_item, InMemoryStore, PlayerGateway, StoreOp};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{json, Value};

const UNKNOWN_ID: &str = "7d4e2a90-1c3b-4f5e-a6d7-8e9f0a1b2c3d";

async fn invoke(gateway: &PlayerGateway<InMemoryStore>, payload: Value) -> ProxyResponse {
    let event = LambdaEvent::new(payload, Context::default());
    handler(gateway, event)
        .await
        .expect("handler should succeed")
}

async fn seed_messi(gateway: &PlayerGateway<InMemoryStore>) {
    let player = sample_player(FIXED_ID);
    gateway
        .store()
        .insert_raw(TABLE, FIXED_ID, to_item(&player).expect("encodes"))
        .await;
}

#[tokio::test]
async fn lists_empty_table() {
    let gateway = memory_gateway();
    let response = invoke(&gateway, proxy_event("GET", None, None)).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(response.json().unwrap(), json!([]));
}

#[tokio::test]
async fn creates_player_with_generated_id() {
    let gateway = memory_gateway().with_id_generator(fixed_id_generator);
    let response = invoke(&gateway, proxy_event("POST", None, Some(MESSI_BODY))).await;

    assert_eq!(response.status_code, 201);
    assert_eq!(
        response.json().unwrap(),
        json!({
            "id": FIXED_ID,
            "firstName": "Leo",
            "lastName": "Messi",
            "country": "Argentina",
            "position": "Forward",
            "club": "Inter Miami"
        })
    );
    assert_eq!(gateway.store().len(TABLE).await, 1);
}

#[tokio::test]
async fn rejects_malformed_id() {
    let gateway = memory_gateway();
    let response = invoke(&gateway, proxy_event("GET", Some("not-a-uuid"), None)).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.json().unwrap(), json!({"error": "Invalid ID"}));
}

#[tokio::test]
async fn deleting_unknown_player_succeeds() {
    let gateway = memory_gateway();
    let response = invoke(&gateway, proxy_event("DELETE", Some(UNKNOWN_ID), None)).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "null");
}

#[tokio::test]
async fn patch_is_not_allowed() {
    let gateway = memory_gateway();
    let response = invoke(&gateway, proxy_event("PATCH", Some(FIXED_ID), Some("{}"))).await;

    assert_eq!(response.status_code, 405);
    assert_eq!(response.body, r#""method not allowed""#);
    assert_eq!(response.headers.len(), 5);
}

#[tokio::test]
async fn gets_existing_player() {
    let gateway = memory_gateway();
    seed_messi(&gateway).await;

    let response = invoke(&gateway, proxy_event("GET", Some(FIXED_ID), None)).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.json().unwrap(),
        serde_json::to_value(sample_player(FIXED_ID)).unwrap()
    );
}

#[tokio::test]
async fn full_lifecycle() {
    let gateway = memory_gateway();

    let created = invoke(&gateway, proxy_event("POST", None, Some(MESSI_BODY))).await;
    assert_eq!(created.status_code, 201);
    let id = created.json().unwrap()["id"]
        .as_str()
        .expect("id is a string")
        .to_string();

    let fetched = invoke(&gateway, proxy_event("GET", Some(id.as_str()), None)).await;
    assert_eq!(fetched.status_code, 200);
    assert_eq!(fetched.json().unwrap(), created.json().unwrap());

    let update = json!({
        "id": id,
        "firstName": "Lionel",
        "lastName": "Messi",
        "country": "Argentina",
        "position": "Forward",
        "club": "Barcelona"
    })
    .to_string();
    let updated = invoke(&gateway, proxy_event("PUT", None, Some(update.as_str()))).await;
    assert_eq!(updated.status_code, 200);
    assert_eq!(updated.json().unwrap()["club"], "Barcelona");

    let listed = invoke(&gateway, proxy_event("GET", None, None)).await;
    let players = listed.json().unwrap();
    assert_eq!(players.as_array().map(Vec::len), Some(1));
    assert_eq!(players[0]["firstName"], "Lionel");

    let deleted = invoke(&gateway, proxy_event("DELETE", Some(id.as_str()), None)).await;
    assert_eq!(deleted.status_code, 200);

    let missing = invoke(&gateway, proxy_event("GET", Some(id.as_str()), None)).await;
    assert_eq!(missing.status_code, 400);
    assert_eq!(
        missing.json().unwrap(),
        json!({"error": "Failed to fetch record"})
    );
}

#[tokio::test]
async fn updating_unknown_player_is_rejected() {
    let gateway = memory_gateway();
    let body = json!({"id": UNKNOWN_ID, "firstName": "Pedri"}).to_string();

    let response = invoke(&gateway, proxy_event("PUT", None, Some(body.as_str()))).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.json().unwrap(),
        json!({"error": "Player does not exist"})
    );
    assert!(gateway.store().is_empty(TABLE).await);
}

#[tokio::test]
async fn create_collision_is_reported() {
    let gateway = memory_gateway().with_id_generator(fixed_id_generator);
    seed_messi(&gateway).await;

    let response = invoke(&gateway, proxy_event("POST", None, Some(MESSI_BODY))).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.json().unwrap(),
        json!({"error": "Player already exists"})
    );
}

#[tokio::test]
async fn backend_failures_collapse_to_bad_request() {
    let gateway = memory_gateway();
    gateway.store().fail_on(StoreOp::Scan).await;

    let response = invoke(&gateway, proxy_event("GET", None, None)).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.json().unwrap(),
        json!({"error": "Failed to fetch record"})
    );
}

#[tokio::test]
async fn base64_body_is_decoded() {
    let gateway = memory_gateway();
    let mut event = proxy_event("POST", None, None);
    // {"firstName":"Luka"}
    event["body"] = json!("eyJmaXJzdE5hbWUiOiJMdWthIn0=");
    event["isBase64Encoded"] = json!(true);

    let response = invoke(&gateway, event).await;

    assert_eq!(response.status_code, 201);
    assert_eq!(response.json().unwrap()["firstName"], "Luka");
}

#[tokio::test]
async fn undecodable_event_yields_error_envelope() {
    let gateway = memory_gateway();
    let response = invoke(&gateway, json!("not an api gateway event")).await;

    assert_eq!(response.status_code, 400);
    let error = response.json().unwrap()["error"]
        .as_str()
        .expect("error message")
        .to_string();
    assert!(error.starts_with("Invalid request: "), "got {error}");
}
