use serde::Deserialize;
use serde_with::skip_serializing_none;
use vivox_token::{Action, Channel, ChannelType, Grant};

use crate::ApiError;

/// A parsed token request body.
///
/// Two field vocabularies are accepted interchangeably: the documented
/// snake_case names and the camelCase names the stock Unreal client sends.
/// Each pair collapses to one canonical value before validation, with the
/// first-named key winning when both are present.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct TokenRequest {
	action: Option<String>,
	#[serde(rename = "type")]
	action_alias: Option<String>,

	user_id: Option<String>,
	#[serde(rename = "username")]
	user_id_alias: Option<String>,

	target_id: Option<String>,
	#[serde(rename = "targetUsername")]
	target_id_alias: Option<String>,

	channel_id: Option<String>,
	#[serde(rename = "channelId")]
	channel_id_alias: Option<String>,

	channel_type: Option<String>,
	#[serde(rename = "channelType")]
	channel_type_alias: Option<String>,
}

/// Pick the canonical value for an alias pair. The empty string counts as
/// absent, but only after precedence is decided, so an empty first-named key
/// still shadows its alias.
fn pick(primary: Option<String>, alias: Option<String>) -> Option<String> {
	primary.or(alias).filter(|value| !value.is_empty())
}

impl TokenRequest {
	/// Validate the request and produce the user plus the grant to issue.
	///
	/// Preconditions are checked in a fixed order so a caller always learns the
	/// first unmet one: missing action, invalid action, missing user, missing
	/// kick target, missing channel id, missing channel type, invalid channel
	/// type.
	pub fn validate(self) -> Result<(String, Grant), ApiError> {
		let action = pick(self.action, self.action_alias).ok_or(ApiError::MissingAction)?;
		let action = Action::parse(&action).ok_or(ApiError::InvalidAction(action))?;

		let user_id = pick(self.user_id, self.user_id_alias).ok_or(ApiError::MissingUser)?;

		let target_id = pick(self.target_id, self.target_id_alias);
		let channel_id = pick(self.channel_id, self.channel_id_alias);
		let channel_type = pick(self.channel_type, self.channel_type_alias);

		let channel = move || -> Result<Channel, ApiError> {
			let id = channel_id.ok_or(ApiError::MissingChannel)?;
			let name = channel_type.ok_or(ApiError::MissingChannelType)?;
			let kind = ChannelType::parse(&name).ok_or(ApiError::InvalidChannelType(name))?;
			Ok(Channel { id, kind })
		};

		let grant = match action {
			Action::Login => Grant::Login,
			Action::Join => Grant::Join { channel: channel()? },
			Action::JoinMuted => Grant::JoinMuted { channel: channel()? },
			Action::Kick => {
				let target = target_id.ok_or(ApiError::MissingTargetUser)?;
				Grant::Kick {
					channel: channel()?,
					target,
				}
			}
		};

		Ok((user_id, grant))
	}
}

/// The success response body, shaped as the stock client expects.
#[skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
	pub access_token: String,
	/// The channel address; present for channel actions only.
	pub uri: Option<String>,
}
