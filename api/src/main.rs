use std::{net::SocketAddr, sync::Arc};

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use nutrilens_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if args.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await?;

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let app = router(state)?
        .route(
            &format!("{}/metrics", args.server.root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    info!(%addr, root_path = %args.server.root_path, "NutriLens API listening");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
