//! Tests for server construction: readiness signalling and app wiring.

use super::*;
use actix_web::http::StatusCode;
use actix_web::test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::net::SocketAddr;
use user_service::domain::TRACE_ID_HEADER;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

fn memory_app_dependencies(health_state: web::Data<HealthState>) -> AppDependencies {
    let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
    AppDependencies {
        health_state,
        http_state: web::Data::new(build_http_state(&config)),
    }
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(bind_address);
    assert_eq!(config.bind_addr(), bind_address);
    let _server = create_server(health_state.clone(), config).expect("server should bind");

    assert!(health_state.is_ready(), "server creation marks readiness");
}

#[cfg(feature = "metrics")]
#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready_with_metrics(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    let metrics = actix_web_prom::PrometheusMetricsBuilder::new("user_service_server_test")
        .endpoint("/metrics")
        .build()
        .expect("metrics should build for tests");
    let config = ServerConfig::new(bind_address).with_metrics(Some(metrics));
    let _server = create_server(health_state.clone(), config).expect("server should bind");

    assert!(health_state.is_ready());
}

#[rstest]
#[actix_rt::test]
async fn every_response_carries_a_trace_id(health_state: web::Data<HealthState>) {
    let app = test::init_service(build_app(memory_app_dependencies(health_state))).await;

    for uri in ["/users", "/users/0", "/health/live"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert!(
            res.headers().contains_key(TRACE_ID_HEADER),
            "{uri} should carry a trace id"
        );
    }
}

#[rstest]
#[actix_rt::test]
async fn error_payload_trace_id_matches_the_header(health_state: web::Data<HealthState>) {
    let app = test::init_service(build_app(memory_app_dependencies(health_state))).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], json!(header));
}

#[rstest]
#[actix_rt::test]
async fn wired_app_serves_user_crud(health_state: web::Data<HealthState>) {
    let app = test::init_service(build_app(memory_app_dependencies(health_state))).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "alice" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(listed, json!([{ "id": 1, "name": "alice" }]));
}
