use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{Claims, Grant, Key, Realm};

/// A freshly signed token, plus the channel address the client presents
/// alongside it for channel actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issued {
	pub token: String,
	pub uri: Option<String>,
}

/// Issues signed tokens for one deployment.
///
/// Holds the read-only pieces established at startup: the addressing realm,
/// the signing key, and the validity window. Issuing is a pure in-memory
/// computation; concurrent calls need no coordination.
#[derive(Debug, Clone)]
pub struct Issuer {
	realm: Realm,
	key: Key,
	ttl: Duration,
}

impl Issuer {
	pub fn new(realm: Realm, key: Key, ttl: Duration) -> Self {
		Self { realm, key, ttl }
	}

	pub fn realm(&self) -> &Realm {
		&self.realm
	}

	/// Issue a token authorizing `grant` for `user_id`.
	///
	/// The expiry is anchored to the current wall clock and the nonce is freshly
	/// random on every call; collisions in the 16-bit nonce are tolerated.
	pub fn issue(&self, user_id: &str, grant: &Grant) -> anyhow::Result<Issued> {
		let now = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.expect("system clock before unix epoch")
			.as_secs();

		self.issue_at(user_id, grant, now, rand::random())
	}

	// The claim set is a pure function of (grant, user, now, nonce), which is
	// what the tests pin down.
	fn issue_at(&self, user_id: &str, grant: &Grant, now: u64, nonce: u16) -> anyhow::Result<Issued> {
		let uri = grant.channel().map(|channel| self.realm.channel_uri(channel));

		let claims = Claims {
			iss: self.realm.issuer.clone(),
			exp: now + self.ttl.as_secs(),
			vxa: grant.action(),
			vxi: nonce,
			f: self.realm.user_uri(user_id),
			t: uri.clone(),
			sub: grant.target().map(str::to_string),
		};

		let token = self.key.sign(&claims)?;
		Ok(Issued { token, uri })
	}
}
