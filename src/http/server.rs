//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, limits, headers)
//! - Bind server to listener
//! - Dispatch admin paths to the encrypted router
//! - Apply hot-reloaded router settings
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::setup_api_router;
use crate::config::{AppConfig, RouterConfig};
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::observability::metrics;
use crate::routing::path::{decode as percent_decode, encode_path};
use crate::routing::{EncryptedRouter, Resolution};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: EncryptedRouter<'static>,
    pub settings: Arc<ArcSwap<RouterConfig>>,
}

/// HTTP server for the navigation service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    settings: Arc<ArcSwap<RouterConfig>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let settings = Arc::new(ArcSwap::from_pointee(config.router.clone()));
        let state = AppState {
            router: EncryptedRouter::global(),
            settings: settings.clone(),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            settings,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(home_handler))
            .route("/{*path}", get(navigate_handler))
            .with_state(state.clone())
            .merge(setup_api_router(state));

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("no-referrer"),
                ));
        }

        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(GlobalConcurrencyLimitLayer::new(config.listener.max_connections))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// Run the server until `shutdown` fires.
    ///
    /// Configs arriving on `config_updates` replace the router settings; other
    /// sections only take effect after a restart.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<AppConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let settings = self.settings.clone();
        let startup_config = self.config.clone();
        let reloader = tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                apply_reload(&settings, &startup_config, new_config);
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the startup config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current router settings.
    pub fn router_settings(&self) -> Arc<RouterConfig> {
        self.settings.load_full()
    }
}

fn apply_reload(settings: &ArcSwap<RouterConfig>, startup: &AppConfig, new_config: AppConfig) {
    if new_config.listener != startup.listener
        || new_config.timeouts != startup.timeouts
        || new_config.security != startup.security
        || new_config.observability != startup.observability
    {
        tracing::warn!("Only [router] settings are reloaded; restart to apply other changes");
    }

    let current = settings.load();
    if **current == new_config.router {
        return;
    }

    tracing::info!(
        home_path = %new_config.router.home_path,
        home_view = %new_config.router.home_view,
        "Router settings reloaded"
    );
    settings.store(Arc::new(new_config.router));
    metrics::record_config_reload();
}

fn make_span(request: &Request<Body>) -> tracing::Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}

/// What the home route mounts.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub path: String,
    pub component: String,
}

impl HomeView {
    fn from_settings(settings: &RouterConfig) -> Self {
        Self {
            path: settings.home_path.clone(),
            component: settings.home_view.clone(),
        }
    }
}

async fn home_handler(State(state): State<AppState>) -> Json<HomeView> {
    let start = Instant::now();
    let settings = state.settings.load();
    metrics::record_navigation("home", start);
    Json(HomeView::from_settings(&settings))
}

/// Resolve an opaque admin path.
/// Answers with the navigation state, or redirects home.
async fn navigate_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();
    let path = uri.path();
    let settings = state.settings.load();

    // A non-root home path lands here too. The request path arrives percent-encoded.
    if percent_decode(path) == settings.home_path.as_str() {
        metrics::record_navigation("home", start);
        return Json(HomeView::from_settings(&settings)).into_response();
    }

    let resolution = state.router.resolve_path(path);
    metrics::record_navigation(resolution.outcome(), start);

    match resolution {
        Resolution::Resolved(route) => {
            tracing::debug!(
                master = %route.master,
                module = %route.module,
                mode = route.mode.as_str(),
                component = %route.component,
                "Navigation resolved"
            );
            Json(route).into_response()
        }
        Resolution::RedirectHome(reason) => {
            tracing::debug!(path = %path, reason = reason.as_str(), "Redirecting home");
            Redirect::temporary(&encode_path(&settings.home_path)).into_response()
        }
    }
}
