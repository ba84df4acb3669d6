//! HTTP 指标标签测试
//!
//! 安装全局 Prometheus recorder，因此单独成为一个测试二进制，且只有一个用例。

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;
use uuid::Uuid;
use voucher_admin_service::{routes, state::AppState};

async fn get(app: &Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_http_metrics_use_route_template() {
    let handle = PrometheusBuilder::new().install_recorder().unwrap();
    let app = routes::app(AppState::in_memory());

    for _ in 0..5 {
        let status = get(&app, &format!("/api/vouchers/{}", Uuid::new_v4())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    let status = get(&app, &format!("/no-such-route/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let rendered = handle.render();
    let series: Vec<&str> = rendered
        .lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .collect();

    assert_eq!(series.len(), 2, "{}", rendered);
    assert!(
        series
            .iter()
            .any(|line| line.contains(r#"path="/api/vouchers/{id}""#) && line.ends_with(" 5")),
        "{}",
        rendered
    );
    assert!(
        series.iter().any(|line| line.contains(r#"path="unmatched""#)),
        "{}",
        rendered
    );
    assert!(!rendered.contains("/no-such-route/"));
}
