use clap::Args;
use tracing_subscriber::EnvFilter;

/// Logging arguments, flattened into the main config.
#[derive(Args, Clone, Debug)]
pub struct Log {
	/// Default log level; RUST_LOG overrides it.
	#[arg(long = "log-level", env = "LOG_LEVEL", default_value = "info")]
	pub level: String,
}

impl Log {
	pub fn init(&self) {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

		tracing_subscriber::fmt().with_env_filter(filter).init();
	}
}
