use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use vivox_token::{Issuer, Key, Realm};

use crate::Log;

/// Process-wide configuration, read once at startup.
///
/// Missing required values are fatal here; they never surface as per-request
/// errors. No `Debug` on purpose: the signing key must not end up in logs.
#[derive(Parser, Clone)]
#[command(version, about)]
pub struct Config {
	#[command(flatten)]
	pub log: Log,

	/// Listen address for the HTTP server.
	#[arg(long, env = "BIND_ADDRESS", default_value = "[::]:8080")]
	pub bind: SocketAddr,

	/// The tenant identity assigned by the voice platform.
	#[arg(long, env = "VIVOX_ISSUER")]
	pub issuer: String,

	/// The shared signing secret assigned by the voice platform.
	#[arg(long, env = "VIVOX_SIGNING_KEY", hide_env_values = true)]
	pub signing_key: String,

	/// The prefix for conference channel names.
	#[arg(long, env = "VIVOX_CHANNEL_PREFIX", default_value = Realm::DEFAULT_CHANNEL_PREFIX)]
	pub channel_prefix: String,

	/// The SIP domain suffix for derived addresses.
	#[arg(long, env = "VIVOX_DOMAIN", default_value = Realm::DEFAULT_DOMAIN)]
	pub domain: String,

	/// Token validity in seconds.
	#[arg(long, env = "VIVOX_TOKEN_DURATION", default_value_t = 90)]
	pub token_duration: u64,

	/// Reject requests that carry no Authorization header.
	#[arg(long, env = "AB_AUTHORIZATION", default_value_t = false)]
	pub require_authorization: bool,
}

impl Config {
	/// Build the token issuer from this configuration.
	pub fn issuer(&self) -> Issuer {
		let realm = Realm {
			issuer: self.issuer.clone(),
			domain: self.domain.clone(),
			channel_prefix: self.channel_prefix.clone(),
		};

		Issuer::new(realm, Key::new(&self.signing_key), Duration::from_secs(self.token_duration))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn defaults() {
		let config = Config::parse_from(["vivox-token-server", "--issuer", "iss1", "--signing-key", "secret"]);

		assert_eq!(config.channel_prefix, "confctl");
		assert_eq!(config.domain, "tla.vivox.com");
		assert_eq!(config.token_duration, 90);
		assert!(!config.require_authorization);
	}

	#[test]
	fn issuer_uses_configured_realm() {
		let config = Config::parse_from([
			"vivox-token-server",
			"--issuer",
			"iss1",
			"--signing-key",
			"secret",
			"--domain",
			"vd1.vivox.com",
			"--channel-prefix",
			"confctl2",
		]);

		let realm = config.issuer().realm().clone();
		assert_eq!(realm.issuer, "iss1");
		assert_eq!(realm.domain, "vd1.vivox.com");
		assert_eq!(realm.channel_prefix, "confctl2");
	}
}
