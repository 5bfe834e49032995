use std::sync::Arc;

use axum::{
    Router,
    http::header::InvalidHeaderValue,
    routing::{get, post},
};
use clap::Parser;
use common::traits::DocumentStore;
use contact_form::submitter::SubmitterConfig;
use mimalloc::MiMalloc;
use mongodb_connector::connector::MongoDBConnector;
use tracing::info;
use utils::logger::configure_logger;

use crate::{
    config::Args,
    routes::{contact::contact_handler, page::page_handler},
    service_layers::build_service_layers,
};

mod config;
mod notifications;
mod routes;
mod service_layers;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub(crate) struct ServerState {
    pub(crate) store: Arc<dyn DocumentStore>,
    pub(crate) submitter_config: SubmitterConfig,
    pub(crate) emit_metrics: bool,
}

pub(crate) fn build_router(
    state: ServerState,
    allowed_origin: &str,
) -> Result<Router, InvalidHeaderValue> {
    Ok(Router::new()
        .route("/", get(page_handler))
        .route("/contact", post(contact_handler))
        .layer(build_service_layers(allowed_origin)?)
        .with_state(Arc::new(state)))
}

#[tokio::main]
async fn main() {
    configure_logger();

    let args = Args::parse();

    let db = MongoDBConnector::new(&args.store_config())
        .await
        .expect("Expect MongoDB connection to succeed");

    let state = ServerState {
        store: Arc::new(db),
        submitter_config: args.submitter_config(),
        emit_metrics: true,
    };

    let router = build_router(state, &args.allowed_origin).expect("Expect a valid CORS origin");

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .expect("Expect to bind the listen address");

    info!("Listening on {}", args.bind);

    axum::serve(listener, router)
        .await
        .expect("Expect the server to run");
}
