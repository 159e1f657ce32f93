//! HTTP handlers for the two metrics endpoints.
//!
//! Collection runs on the blocking thread pool: the live endpoint holds a
//! mandatory one-second CPU sampling window, and parking that wait in
//! `spawn_blocking` keeps it from stalling other requests on the async
//! executor. Each request builds a fresh provider, so handlers share no
//! state and need no locks.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::metrics::{
    to_json, LiveMetricsProvider, StaticInfoProvider, SysinfoSource,
};

/// `GET /` — current host utilization. Takes at least one second.
pub async fn live_metrics() -> Response {
    let collected = tokio::task::spawn_blocking(|| {
        LiveMetricsProvider::new(SysinfoSource::new()).collect()
    })
    .await;

    match collected {
        Ok(metrics) => json_response(&metrics),
        Err(err) => {
            error!("Live metrics collection task failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /info` — static hardware and platform identity.
pub async fn static_info() -> Response {
    let collected = tokio::task::spawn_blocking(|| {
        StaticInfoProvider::new(SysinfoSource::new()).collect()
    })
    .await;

    match collected {
        Ok(info) => json_response(&info),
        Err(err) => {
            error!("Static info collection task failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Encode a record and wrap it in a JSON response. An encode failure is a
/// 500, never a 200 with an empty body.
fn json_response<T: Serialize>(record: &T) -> Response {
    match to_json(record) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            error!("Failed to encode metrics record: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::LiveMetrics;

    #[test]
    fn json_response_sets_content_type() {
        let response = json_response(&LiveMetrics::default());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
