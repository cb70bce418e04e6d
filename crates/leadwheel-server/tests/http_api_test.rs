//! HTTP API tests for the lead capture service
//!
//! Each test builds the full app (API routes, JSON settings, static files)
//! over an isolated lead log.

use std::path::Path;
use std::sync::Arc;

use actix_web::{App, http::StatusCode, http::header::ContentType, test, web};
use leadwheel_common::{PRIZES, PrizeWheel, REGISTRANT_MARKER};
use leadwheel_persistence::{CsvLeadLog, LeadLog, MemoryLeadLog};
use leadwheel_server::{AppState, Configuration, LeadStore, api::route};
use serde_json::{Value, json};
use tempfile::TempDir;

macro_rules! init_app {
    ($state:expr, $static_dir:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .configure(|cfg| route::configure(cfg, $static_dir)),
        )
        .await
    };
}

fn app_state(log: Arc<dyn LeadLog>) -> web::Data<AppState> {
    let lead_store = LeadStore::new(log, PrizeWheel::seeded(7));
    web::Data::new(AppState::new(Configuration::default(), lead_store))
}

fn memory_state() -> (web::Data<AppState>, TempDir) {
    let static_dir = tempfile::tempdir().unwrap();
    (app_state(Arc::new(MemoryLeadLog::new())), static_dir)
}

fn leads_json(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "name": format!("Lead {}", i),
                "email": format!("lead{}@example.com", i),
                "phone": format!("11 9000-000{}", i),
            })
        })
        .collect()
}

fn post_json(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

// ============================================================================
// Registrant
// ============================================================================

#[actix_web::test]
async fn test_register_user_success() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let req = post_json(
        "/api/cadastrar-usuario",
        json!({"name": " Ana Souza ", "email": "ana@example.com", "phone": "11 91234-5678"}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully!");
    assert_eq!(body["registrant"]["name"], "Ana Souza");
    assert_eq!(body["registrant"]["email"], "ana@example.com");
    assert_eq!(body["registrant"]["phone"], "11 91234-5678");

    let records = state.lead_store.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reference, REGISTRANT_MARKER);
}

#[actix_web::test]
async fn test_register_user_validation_errors() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let cases = [
        (json!({"email": "ana@example.com", "phone": "1"}), "name is required"),
        (json!({"name": "Ana", "email": "  ", "phone": "1"}), "email is required"),
        (json!({"name": "Ana", "email": "ana@example.com"}), "phone is required"),
        (
            json!({"name": "Ana", "email": "ana.example.com", "phone": "1"}),
            "invalid email: must contain '@'",
        ),
    ];

    for (payload, expected) in cases {
        let req = post_json("/api/cadastrar-usuario", payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], expected);
    }

    assert!(state.lead_store.records().unwrap().is_empty());
}

#[actix_web::test]
async fn test_register_user_accepts_legacy_field_names() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let req = post_json(
        "/api/cadastrar-usuario",
        json!({"nome": "Ana", "email": "ana@example.com", "telefone": "123"}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["registrant"]["name"], "Ana");
    assert_eq!(body["registrant"]["phone"], "123");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let req = test::TestRequest::post()
        .uri("/api/cadastrar-usuario")
        .insert_header(ContentType::json())
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("invalid request body"));
}

// ============================================================================
// Lead batches
// ============================================================================

#[actix_web::test]
async fn test_register_leads_success() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    for count in [3, 5] {
        let req = post_json(
            "/api/cadastrar-leads",
            json!({"reference": "Ana Souza", "leads": leads_json(count)}),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], format!("{} leads registered successfully!", count));
        assert_eq!(body["leads_saved"].as_array().unwrap().len(), count);
        assert_eq!(body["leads_saved"][0]["email"], "lead0@example.com");
    }

    let records = state.lead_store.records().unwrap();
    assert_eq!(records.len(), 8);
    assert!(records.iter().all(|r| r.reference == "Ana Souza"));
}

#[actix_web::test]
async fn test_register_leads_size_bounds() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let cases = [
        (leads_json(2), "at least 3 leads are required"),
        (leads_json(6), "at most 5 leads are allowed"),
        (Vec::new(), "at least 3 leads are required"),
    ];
    for (leads, expected) in cases {
        let req = post_json(
            "/api/cadastrar-leads",
            json!({"reference": "Ana", "leads": leads}),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], expected);
    }

    assert!(state.lead_store.records().unwrap().is_empty());
}

#[actix_web::test]
async fn test_register_leads_requires_reference() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let req = post_json("/api/cadastrar-leads", json!({"leads": leads_json(3)})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "reference of the registrant is required");
}

#[actix_web::test]
async fn test_register_leads_invalid_lead_writes_nothing() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let mut leads = leads_json(4);
    leads[2]["email"] = json!("lead2-at-example.com");
    leads[3]["name"] = json!("");

    let req = post_json(
        "/api/cadastrar-leads",
        json!({"referencia": "Ana", "leads": leads}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid email for lead: Lead 2");
    assert!(state.lead_store.records().unwrap().is_empty());
}

// ============================================================================
// Prizes
// ============================================================================

#[actix_web::test]
async fn test_draw_prize() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let req = test::TestRequest::post().uri("/api/sortear-premio").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let prize = body["prize"].as_str().unwrap();
    assert!(PRIZES.contains(&prize));
    assert_eq!(body["message"], format!("Congratulations! You won: {}", prize));
    assert!(state.lead_store.records().unwrap().is_empty());
}

#[actix_web::test]
async fn test_list_prizes() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    let req = test::TestRequest::get().uri("/api/premios").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let prizes: Vec<&str> = body["prizes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert_eq!(prizes, PRIZES);
}

// ============================================================================
// Stats
// ============================================================================

#[actix_web::test]
async fn test_stats_with_csv_log() {
    let data_dir = tempfile::tempdir().unwrap();
    let log = CsvLeadLog::open(data_dir.path().join("leads.csv")).unwrap();
    std::fs::remove_file(log.path()).unwrap();
    let state = app_state(Arc::new(log));
    let static_dir = tempfile::tempdir().unwrap();
    let app = init_app!(state, static_dir.path());

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"total_leads": 0, "total_registrants": 0, "referred_leads": 0}));

    let req = post_json(
        "/api/cadastrar-usuario",
        json!({"name": "Ana", "email": "ana@example.com", "phone": "1"}),
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    let req = post_json(
        "/api/cadastrar-leads",
        json!({"reference": "Ana", "leads": leads_json(4)}),
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"total_leads": 5, "total_registrants": 1, "referred_leads": 4}));

    let content = std::fs::read_to_string(data_dir.path().join("leads.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Name,Email,Phone,Reference,Registered_At"));
    assert!(lines.next().unwrap().starts_with("Ana,ana@example.com,1,CADASTRADOR,"));
    assert_eq!(lines.count(), 4);
}

#[actix_web::test]
async fn test_stats_and_readiness_tolerate_truncated_row() {
    let data_dir = tempfile::tempdir().unwrap();
    let path = data_dir.path().join("leads.csv");
    std::fs::write(
        &path,
        "Name,Email,Phone,Reference,Registered_At\n\
         ana,a@b.c,1,CADASTRADOR,2024-05-17 14:03:09\n\
         Bia,b@x.y,2\n",
    )
    .unwrap();
    let state = app_state(Arc::new(CsvLeadLog::open(&path).unwrap()));
    let static_dir = tempfile::tempdir().unwrap();
    let app = init_app!(state, static_dir.path());

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"total_leads": 2, "total_registrants": 1, "referred_leads": 1}));

    let req = test::TestRequest::get().uri("/api/health/readiness").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[cfg(unix)]
#[actix_web::test]
async fn test_unreadable_log_is_server_error() {
    let data_dir = tempfile::tempdir().unwrap();
    let path = data_dir.path().join("leads.csv");
    let log = CsvLeadLog::open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let state = app_state(Arc::new(log));
    let static_dir = tempfile::tempdir().unwrap();
    let app = init_app!(state, static_dir.path());

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("storage error"));

    let req = test::TestRequest::get().uri("/api/health/readiness").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// ============================================================================
// Health and static frontend
// ============================================================================

#[actix_web::test]
async fn test_health_endpoints() {
    let (state, static_dir) = memory_state();
    let app = init_app!(state, static_dir.path());

    for uri in ["/api/health/liveness", "/api/health/readiness"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "UP");
    }
}

fn write_frontend(dir: &Path) {
    std::fs::write(dir.join("index.html"), "<h1>Leadwheel</h1>").unwrap();
    std::fs::write(dir.join("script.js"), "console.log('wheel');").unwrap();
}

#[actix_web::test]
async fn test_static_frontend() {
    let (state, static_dir) = memory_state();
    write_frontend(static_dir.path());
    let app = init_app!(state, static_dir.path());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "<h1>Leadwheel</h1>");

    let req = test::TestRequest::get().uri("/script.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "console.log('wheel');");

    let req = test::TestRequest::get().uri("/missing.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_api_routes_take_precedence_over_static_files() {
    let (state, static_dir) = memory_state();
    write_frontend(static_dir.path());
    let app = init_app!(state, static_dir.path());

    let req = test::TestRequest::get().uri("/api/premios").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["prizes"].as_array().unwrap().len(), 8);
}
