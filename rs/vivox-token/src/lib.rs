//! Vivox access token generation.
//!
//! Mints the short-lived HMAC-SHA256 tokens that the Vivox voice platform requires
//! before a client may log in, join a channel, or kick a participant.
//! Tokens are issue-only: the platform is the verifier, we never decode our own output.
//!
//! See [`Issuer`] for the high-level entry point, [`Grant`] for the per-action
//! capability model, and [`Key`] for the signing scheme.

mod address;
mod claims;
mod grant;
mod issuer;
mod key;

pub use address::*;
pub use claims::*;
pub use grant::*;
pub use issuer::*;
pub use key::*;
