//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, limits, timeout, panics)
//! - Own the shared stores handed to handlers
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::angles::handlers::{get_angles, qr_label, save_angles};
use crate::angles::{AngleStore, LabelSlot};
use crate::config::{IndexPage, ServiceConfig};
use crate::http::index::index;
use crate::lifecycle::ShutdownListener;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::response::{json_error_body, method_not_allowed, not_found, panic_response};
use crate::observability::metrics;
use crate::security::{api_key_middleware, headers::with_security_headers};
use crate::uploads::handlers::{create_upload, list_uploads, reset_uploads};
use crate::uploads::UploadStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub uploads: UploadStore,
    pub angles: AngleStore,
    pub api_keys: Arc<Vec<String>>,
    pub index_page: IndexPage,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            uploads: UploadStore::new(),
            angles: AngleStore::new(&config.storage.angles_path),
            api_keys: Arc::new(config.security.api_keys.clone()),
            index_page: config.site.index_page,
        }
    }
}

/// HTTP server for the upload and angle endpoints.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut routes = Router::new()
            .route("/", get(index))
            .route(
                "/upload/",
                post(create_upload).route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    api_key_middleware,
                )),
            )
            .route("/uploads/", get(list_uploads))
            .route("/reset/", post(reset_uploads))
            .route("/save_angles", post(save_angles))
            .route("/get_angles", get(get_angles));

        for slot in LabelSlot::all() {
            routes = routes.route(
                &format!("/qr{slot}"),
                get(move |State(state): State<AppState>| qr_label(state, slot)),
            );
        }

        let mut router = routes
            .route_layer(middleware::from_fn(metrics::track_requests))
            .fallback(not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .with_state(state);

        if config.security.enable_headers {
            router = with_security_headers(router);
        }

        // The tower-http limit is the only one; axum's 2 MiB default is off.
        router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::map_response(json_error_body))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id(request),
                        )
                    }))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            angles_path = %self.config.storage.angles_path,
            index_page = ?self.config.site.index_page,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
