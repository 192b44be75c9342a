//! Token vending server for the Vivox voice platform.
//!
//! Game clients POST an action (login, join a channel, kick a participant) and
//! receive a short-lived signed token to present to the voice platform.
//! The server is stateless: configuration is loaded once at startup and every
//! request is an independent, pure computation.

mod config;
mod error;
mod log;
mod request;
mod web;

pub use config::*;
pub use error::*;
pub use log::*;
pub use request::*;
pub use web::*;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Optional .env file for local development.
	dotenv::dotenv().ok();

	let config = Config::parse();
	config.log.init();

	let state = AppState::new(&config);

	tracing::info!(bind = %config.bind, issuer = %config.issuer, "listening");

	run_web(config.bind, state).await
}
