use std::fmt;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::Claims;

type HmacSha256 = Hmac<Sha256>;

/// Base64url without padding; the platform never accepts `=` characters.
fn b64url(data: impl AsRef<[u8]>) -> String {
	URL_SAFE_NO_PAD.encode(data)
}

/// The shared signing secret for a deployment.
///
/// Signs claim sets into the platform's three-segment token format. The secret
/// is the raw bytes of its textual form; there is no decoding step.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
	secret: String,
}

impl Key {
	pub fn new(secret: impl ToString) -> Self {
		Self {
			secret: secret.to_string(),
		}
	}

	/// Sign a claim set into the final token.
	///
	/// The token is `header.payload.signature`, all base64url without padding:
	/// - header: the literal two-byte JSON object `{}`
	/// - payload: the claims serialized as JSON, keys in declaration order
	/// - signature: HMAC-SHA256 over `header.payload`
	pub fn sign(&self, claims: &Claims) -> anyhow::Result<String> {
		let header = b64url("{}");
		let payload = b64url(serde_json::to_vec(claims).context("failed to serialize claims")?);
		let message = format!("{header}.{payload}");

		let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes()).expect("hmac accepts any key length");
		mac.update(message.as_bytes());
		let signature = b64url(mac.finalize().into_bytes());

		Ok(format!("{message}.{signature}"))
	}
}

// Keep the secret out of logs and panics.
impl fmt::Debug for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Key").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::Action;

	fn claims(action: Action) -> Claims {
		Claims {
			iss: "iss1".to_string(),
			exp: 1700000000,
			vxa: action,
			vxi: 4242,
			f: "sip:.iss1.bob.@tla.vivox.com".to_string(),
			t: None,
			sub: None,
		}
	}

	#[test]
	fn three_segments() {
		let token = Key::new("secret").sign(&claims(Action::Login)).expect("failed to sign");

		let segments: Vec<&str> = token.split('.').collect();
		assert_eq!(segments.len(), 3);
		assert!(segments.iter().all(|s| !s.is_empty()));
	}

	#[test]
	fn header_is_empty_object() {
		let token = Key::new("secret").sign(&claims(Action::Login)).expect("failed to sign");

		let header = token.split('.').next().expect("missing header");
		let decoded = URL_SAFE_NO_PAD.decode(header).expect("failed to decode header");
		assert_eq!(decoded, b"{}");
	}

	#[test]
	fn payload_round_trips() {
		let claims = claims(Action::Login);
		let token = Key::new("secret").sign(&claims).expect("failed to sign");

		let payload = token.split('.').nth(1).expect("missing payload");
		let decoded = URL_SAFE_NO_PAD.decode(payload).expect("failed to decode payload");
		let value: serde_json::Value = serde_json::from_slice(&decoded).expect("payload is not json");

		assert_eq!(value["iss"], "iss1");
		assert_eq!(value["exp"], 1700000000);
		assert_eq!(value["vxa"], "login");
		assert_eq!(value["vxi"], 4242);
		assert_eq!(value["f"], "sip:.iss1.bob.@tla.vivox.com");
		let object = value.as_object().expect("payload is not an object");
		assert!(!object.contains_key("t"));
		assert!(!object.contains_key("sub"));
	}

	#[test]
	fn signature_recomputes() {
		let token = Key::new("secret").sign(&claims(Action::Login)).expect("failed to sign");

		let (message, signature) = token.rsplit_once('.').expect("missing signature");
		let mut mac = HmacSha256::new_from_slice(b"secret").expect("hmac accepts any key length");
		mac.update(message.as_bytes());
		assert_eq!(signature, b64url(mac.finalize().into_bytes()));
	}

	#[test]
	fn no_padding_characters() {
		// A 2-byte header encodes to 3 characters, which standard base64 would pad.
		let token = Key::new("secret").sign(&claims(Action::Login)).expect("failed to sign");
		assert!(!token.contains('='));
		assert_eq!(token.split('.').next().expect("missing header").len(), 3);
	}

	#[test]
	fn deterministic_for_identical_claims() {
		let key = Key::new("secret");
		let claims = claims(Action::Join);
		let first = key.sign(&claims).expect("failed to sign");
		let second = key.sign(&claims).expect("failed to sign");
		assert_eq!(first, second);
	}

	#[test]
	fn payload_change_invalidates_signature() {
		let key = Key::new("secret");
		let first = key.sign(&claims(Action::Login)).expect("failed to sign");

		let mut other = claims(Action::Login);
		other.vxi ^= 1;
		let second = key.sign(&other).expect("failed to sign");

		let sig = |token: &str| token.rsplit_once('.').map(|(_, s)| s.to_string()).expect("missing signature");
		assert_ne!(sig(&first), sig(&second));
	}

	#[test]
	fn debug_hides_secret() {
		let key = Key::new("hunter2");
		assert!(!format!("{key:?}").contains("hunter2"));
	}
}
