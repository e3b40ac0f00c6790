//! umapd - UMAP embedding server
//!
//! Serves `POST /api/data`: a dataset and UMAP hyperparameters go in,
//! a 2D embedding plus nearest-neighbor graphs for the original and
//! embedded space come out.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use umapd::api;
use umapd::cli::Cli;
use umapd::config::DEFAULT_HOST;

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.init();

	let addr: SocketAddr = match &cli.address {
		Some(address) => address
			.parse()
			.with_context(|| format!("invalid address '{}'", address))?,
		None => format!("{}:{}", DEFAULT_HOST, cli.port)
			.parse()
			.context("failed to build bind address")?,
	};

	let listener = TcpListener::bind(addr)
		.await
		.with_context(|| format!("failed to bind {}", addr))?;
	info!("umapd v{} listening on {}", env!("CARGO_PKG_VERSION"), listener.local_addr()?);

	axum::serve(listener, api::router())
		.with_graceful_shutdown(shutdown_signal())
		.await
		.context("server error")?;

	info!("shutdown complete");
	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
	};

	#[cfg(unix)]
	let terminate = async {
		signal::unix::signal(signal::unix::SignalKind::terminate())
			.expect("failed to install signal handler")
			.recv()
			.await;
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => info!("received Ctrl+C, shutting down"),
		_ = terminate => info!("received terminate signal, shutting down"),
	}
}
