use std::future::Future;

use axum::{
    http,
    routing::{get, post},
};
use common_utils::consts;
use shared_metrics as metrics;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::oneshot,
};
use tower_http::{request_id::MakeRequestUuid, trace as tower_trace};

use crate::{
    configs,
    consts::{HEALTH_RESPONSE, SERVICE_NAME},
    error::ConfigurationError,
    logger,
    routes::{payment_methods, AppState},
    utils,
};

/// # Panics
///
/// Will panic if signal handling fails
pub async fn server_builder(config: configs::Config) -> Result<(), ConfigurationError> {
    let listener = config.server.tcp_listener().await?;

    // Signal handler
    let (tx, rx) = oneshot::channel();

    #[allow(clippy::expect_used)]
    tokio::spawn(async move {
        let mut sig_int =
            signal(SignalKind::interrupt()).expect("Failed to initialize SIGINT signal handler");
        let mut sig_term =
            signal(SignalKind::terminate()).expect("Failed to initialize SIGTERM signal handler");
        let mut sig_quit =
            signal(SignalKind::quit()).expect("Failed to initialize QUIT signal handler");
        let mut sig_hup =
            signal(SignalKind::hangup()).expect("Failed to initialize SIGHUP signal handler");

        tokio::select! {
            _ = sig_int.recv() => {
                logger::info!("Received SIGINT");
            }
            _ = sig_term.recv() => {
                logger::info!("Received SIGTERM");
            }
            _ = sig_quit.recv() => {
                logger::info!("Received QUIT");
            }
            _ = sig_hup.recv() => {
                logger::info!("Received SIGHUP");
            }
        }

        tx.send(()).expect("Failed to send shutdown signal");
    });

    #[allow(clippy::expect_used)]
    let shutdown_signal = async {
        rx.await.expect("Failed to receive shutdown signal");
        logger::info!("Shutdown signal received");
    };

    logger::info!(
        service = SERVICE_NAME,
        host = %config.server.host,
        port = %config.server.port,
        catalog_countries = config.catalog.countries.len(),
        catalog_payment_methods = config.catalog.payment_methods.len(),
        "starting server"
    );

    let state = AppState::new(&config);

    serve(listener, router(state), shutdown_signal).await
}

/// All routes of the service, traced and tagged with a request id.
pub fn router(state: AppState) -> axum::Router {
    let logging_layer = tower_trace::TraceLayer::new_for_http()
        .make_span_with(|request: &axum::extract::Request<_>| {
            utils::record_fields_from_header(request)
        })
        .on_request(tower_trace::DefaultOnRequest::new().level(tracing::Level::INFO))
        .on_response(
            tower_trace::DefaultOnResponse::new()
                .level(tracing::Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Micros),
        )
        .on_failure(
            tower_trace::DefaultOnFailure::new()
                .latency_unit(tower_http::LatencyUnit::Micros)
                .level(tracing::Level::ERROR),
        );

    let request_id_layer = tower_http::request_id::SetRequestIdLayer::new(
        http::HeaderName::from_static(consts::X_REQUEST_ID),
        MakeRequestUuid,
    );

    let propagate_request_id_layer = tower_http::request_id::PropagateRequestIdLayer::new(
        http::HeaderName::from_static(consts::X_REQUEST_ID),
    );

    axum::Router::new()
        .route("/health", get(|| async { HEALTH_RESPONSE }))
        .route("/admin/payment/methods", post(payment_methods::methods))
        .route("/admin/payment/methods/search", post(payment_methods::search))
        .route("/admin/payment/methods/list", post(payment_methods::list))
        .route(
            "/admin/payment/methods/restrictions",
            post(payment_methods::restrictions),
        )
        .with_state(state)
        .layer(logging_layer)
        .layer(request_id_layer)
        .layer(propagate_request_id_layer)
}

async fn serve(
    listener: tokio::net::TcpListener,
    router: axum::Router,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ConfigurationError> {
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

pub async fn metrics_server_builder(config: configs::Config) -> Result<(), ConfigurationError> {
    let listener = config.metrics.tcp_listener().await?;

    let router = axum::Router::new().route(
        "/metrics",
        get(|| async {
            let output = metrics::metrics_handler().await;
            match output {
                Ok(metrics) => Ok(metrics),
                Err(error) => {
                    tracing::error!(?error, "Error fetching metrics");

                    Err((
                        http::StatusCode::INTERNAL_SERVER_ERROR,
                        "Error fetching metrics".to_string(),
                    ))
                }
            }
        }),
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async {
            let output = tokio::signal::ctrl_c().await;
            tracing::error!(?output, "shutting down");
        })
        .await?;

    Ok(())
}
