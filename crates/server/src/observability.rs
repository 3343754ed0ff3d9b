use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "site_cms_http_requests_total",
        "HTTP requests handled, by method and status",
        &["method", "status"]
    )
    .expect("register http_requests_total")
});

pub static INDEX_SWAPS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("site_cms_index_swaps_total", "Successful index swaps")
        .expect("register index_swaps_total")
});

pub static CHAT_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("site_cms_chat_requests_total", "Chatbot questions received")
        .expect("register chat_requests_total")
});

pub static CHAT_UPSTREAM_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "site_cms_chat_upstream_failures_total",
        "Chatbot requests answered with an apology or an error"
    )
    .expect("register chat_upstream_failures_total")
});

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

/// Count every response by method and status code.
pub async fn track_requests(req: axum::extract::Request, next: axum::middleware::Next) -> axum::response::Response {
    let method = req.method().to_string();
    let res = next.run(req).await;
    HTTP_REQUESTS_TOTAL.with_label_values(&[method.as_str(), res.status().as_str()]).inc();
    res
}
