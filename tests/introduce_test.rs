use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use chrono::{Days, Local};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crpt_introduce::models::{
    Document, DocumentFormat, DocumentType, IntroduceResponse, Produced, Product, ProductionType,
    UsageType,
};
use crpt_introduce::providers::crpt::{ApiError, CrptApi, CrptConfig};
use crpt_introduce::providers::{DocumentTransport, TransportError};
use crpt_introduce::utility::rate_limiter::{AdmissionGate, RateLimitConfig, TimeUnit};
use crpt_introduce::validation::Validator;

#[derive(Debug, Clone)]
struct CapturedRequest {
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: Value,
}

#[derive(Clone)]
struct ServerState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    reply: &'static str,
}

async fn rollout(
    State(state): State<ServerState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state.requests.lock().await.push(CapturedRequest {
        query,
        headers,
        body,
    });
    (state.status, state.reply).into_response()
}

async fn start_server(status: StatusCode, reply: &'static str) -> (SocketAddr, ServerState) {
    let state = ServerState {
        requests: Arc::new(Mutex::new(Vec::new())),
        status,
        reply,
    };
    let app = Router::new()
        .route("/api/v2/pharma/rollout", post(rollout))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, state)
}

fn client(addr: SocketAddr, request_limit: i64) -> CrptApi {
    let config = CrptConfig {
        base_url: format!("http://{}/api/v2/pharma/rollout", addr),
        oms_id: "cdf12109-10d3-11e6-8b6f-0050569977a1".into(),
        user_name: "operator".into(),
        timeout_secs: 5,
        client_token: None,
    };
    let rate_limit = RateLimitConfig {
        request_limit,
        window_amount: 200,
        window_unit: TimeUnit::Milliseconds,
    };
    CrptApi::new(config, &rate_limit).unwrap()
}

fn document() -> Document {
    let yesterday = Local::now().date_naive() - Days::new(1);
    Document {
        usage_type: Some(UsageType::SentToPrinter),
        document_format: Some(DocumentFormat::Manual),
        doc_type: Some(DocumentType::IntroduceGoods),
        participant_inn: Some("7701234567".into()),
        production_date: Some(yesterday),
        products: vec![Product {
            code: Some("04601234567893".into()),
            tnved_code: Some("6401100000".into()),
            ..Default::default()
        }],
        produced: Some(Produced {
            producer_inn: Some("7701234567".into()),
            owner_inn: Some("7701234567".into()),
            production_type: Some(ProductionType::OwnProduction),
        }),
        import: None,
    }
}

const ACCEPTED: &str = r#"{"omsId": "cdf12109-10d3-11e6-8b6f-0050569977a1", "reportId": "a8f1c7e0-2a8b-4c1f-9f5e-3d2b1c0a9e8d"}"#;

#[tokio::test]
async fn posts_document_with_required_headers() {
    let (addr, state) = start_server(StatusCode::OK, ACCEPTED).await;
    let api = client(addr, 5);
    let document = document();

    let response = api
        .introduce_product(&document, Some("secret-token"))
        .await
        .unwrap();

    assert_eq!(response.oms_id, "cdf12109-10d3-11e6-8b6f-0050569977a1");
    assert_eq!(response.report_id, "a8f1c7e0-2a8b-4c1f-9f5e-3d2b1c0a9e8d");

    let requests = state.requests.lock().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(
        request.query.get("omsId").map(String::as_str),
        Some("cdf12109-10d3-11e6-8b6f-0050569977a1")
    );
    assert_eq!(request.headers["content-type"], "application/json");
    assert_eq!(request.headers["clienttoken"], "secret-token");
    assert_eq!(request.headers["username"], "operator");
    assert_eq!(request.headers["accept"], "*/*");

    assert_eq!(request.body["type"], "LP_INTRODUCE_GOODS_AUTO");
    assert_eq!(request.body["participantInn"], "7701234567");
    assert_eq!(
        request.body["productionDate"],
        document
            .production_date
            .unwrap()
            .format("%Y-%m-%d")
            .to_string()
    );
    assert_eq!(request.body["products"][0]["tnvedCode"], "6401100000");
    assert_eq!(request.body["produced"]["productionType"], "OWN_PRODUCTION");
    assert!(request.body.get("import").is_none());
}

#[tokio::test]
async fn error_status_becomes_submission_failure() {
    let (addr, _state) = start_server(StatusCode::UNAUTHORIZED, "bad token").await;
    let api = client(addr, 5);

    let result = api.introduce_product(&document(), Some("token")).await;

    match result {
        Err(ApiError::SubmissionFailed { document: sent, reason }) => {
            assert_eq!(*sent, document());
            assert!(reason.contains("401"), "reason was {reason}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_response_becomes_submission_failure() {
    let (addr, _state) = start_server(StatusCode::OK, "<html>maintenance</html>").await;
    let api = client(addr, 5);

    let result = api.introduce_product(&document(), Some("token")).await;

    assert!(matches!(result, Err(ApiError::SubmissionFailed { .. })));
    assert_eq!(api.metrics().get_snapshot().await.failures, 1);
}

#[tokio::test]
async fn rejected_document_never_reaches_the_server() {
    let (addr, state) = start_server(StatusCode::OK, ACCEPTED).await;
    let api = client(addr, 5);
    let mut document = document();
    document.participant_inn = Some("77012345678".into());

    let result = api.introduce_product(&document, Some("token")).await;

    assert!(matches!(result, Err(ApiError::InvalidDocument)));
    assert!(state.requests.lock().await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submissions_are_spread_over_windows() {
    let (addr, state) = start_server(StatusCode::OK, ACCEPTED).await;
    let api = Arc::new(client(addr, 1));
    let start = tokio::time::Instant::now();

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let api = Arc::clone(&api);
            tokio::spawn(async move { api.introduce_product(&document(), Some("token")).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    // Two admissions per 200ms window: six documents need three windows.
    assert!(start.elapsed() >= Duration::from_millis(400));
    assert_eq!(state.requests.lock().await.len(), 6);

    let metrics = api.metrics().get_snapshot().await;
    assert_eq!(metrics.attempts, 6);
    assert_eq!(metrics.successes, 6);
}

struct TimingOutTransport;

#[async_trait]
impl DocumentTransport for TimingOutTransport {
    async fn send(
        &self,
        _document: &Document,
        _client_token: &str,
    ) -> Result<IntroduceResponse, TransportError> {
        Err(TransportError::Timeout(3))
    }
}

#[tokio::test]
async fn custom_transport_plugs_into_the_client() {
    let rate_limit = RateLimitConfig {
        request_limit: 1,
        window_amount: 50,
        window_unit: TimeUnit::Milliseconds,
    };
    let api = CrptApi::from_parts(
        Arc::new(Validator::new()),
        Arc::new(AdmissionGate::new(&rate_limit)),
        Arc::new(TimingOutTransport),
    );

    let result = api.introduce_product(&document(), Some("token")).await;

    match result {
        Err(ApiError::SubmissionFailed { reason, .. }) => {
            assert_eq!(reason, TransportError::Timeout(3).to_string());
        }
        other => panic!("unexpected result: {other:?}"),
    }
    let metrics = api.metrics().get_snapshot().await;
    assert_eq!(metrics.attempts, 1);
    assert_eq!(metrics.failures, 1);
}
