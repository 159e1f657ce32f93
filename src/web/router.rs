//! Application router and middleware setup.

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::web::config::WebConfig;
use crate::web::handlers;

/// Create the axum application with both metric routes and middleware.
pub fn create_app(config: &WebConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::live_metrics))
        .route("/info", get(handlers::static_info));

    if config.enable_cors {
        // CorsLayer emits Allow-Headers only on preflight; plain GET
        // responses must carry it too, so it is set on every response.
        app = app
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_headers([header::CONTENT_TYPE]),
            )
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ));
    }

    app.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_app_builds_router() {
        // Smoke test: the router assembles with and without CORS.
        let _with_cors = create_app(&WebConfig::default());
        let _without_cors = create_app(&WebConfig::default().with_cors(false));
    }
}
