use crate::{Action, Channel};

/// What a token should authorize, with exactly the fields that action needs.
///
/// Which claims exist for which action is encoded here once instead of being
/// re-checked wherever a claim set is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
	/// Sign in to the voice service.
	Login,
	/// Join a channel.
	Join { channel: Channel },
	/// Join a channel with the microphone muted.
	JoinMuted { channel: Channel },
	/// Remove another participant from a channel.
	Kick { channel: Channel, target: String },
}

impl Grant {
	pub fn action(&self) -> Action {
		match self {
			Self::Login => Action::Login,
			Self::Join { .. } => Action::Join,
			Self::JoinMuted { .. } => Action::JoinMuted,
			Self::Kick { .. } => Action::Kick,
		}
	}

	/// The channel being acted on, if any.
	pub fn channel(&self) -> Option<&Channel> {
		match self {
			Self::Login => None,
			Self::Join { channel } | Self::JoinMuted { channel } | Self::Kick { channel, .. } => Some(channel),
		}
	}

	/// The user being kicked, if any.
	pub fn target(&self) -> Option<&str> {
		match self {
			Self::Kick { target, .. } => Some(target),
			_ => None,
		}
	}
}
