use std::fmt;

use serde::Serialize;

/// The action a token authorizes, carried as the `vxa` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
	Login,
	Join,
	JoinMuted,
	Kick,
}

impl Action {
	/// Parse the wire name, e.g. `join_muted`.
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"login" => Some(Self::Login),
			"join" => Some(Self::Join),
			"join_muted" => Some(Self::JoinMuted),
			"kick" => Some(Self::Kick),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Login => "login",
			Self::Join => "join",
			Self::JoinMuted => "join_muted",
			Self::Kick => "kick",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The signed token payload.
///
/// Serialize-only on purpose; this crate issues tokens, the voice platform
/// verifies them. Field declaration order is the wire key order, which some
/// verifiers are sensitive to.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claims {
	/// The tenant identity assigned by the voice platform.
	pub iss: String,
	/// Absolute expiry in Unix seconds.
	pub exp: u64,
	/// The authorized action.
	pub vxa: Action,
	/// Random per-token nonce. 16 bits, so collisions are possible and tolerated.
	pub vxi: u16,
	/// The address of the user the token is issued to.
	pub f: String,
	/// The address of the channel being acted on. Absent for `login`.
	pub t: Option<String>,
	/// The user being kicked. Only present for `kick`.
	pub sub: Option<String>,
}
