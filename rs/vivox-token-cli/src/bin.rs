//! Mint Vivox access tokens from the command line.
//!
//! Useful for poking at a deployment without a game client:
//!
//! ```text
//! vivox-token --issuer iss1 --signing-key secret --user bob \
//!     join --channel lobby --channel-type nonpositional
//! ```

use std::time::Duration;

use clap::{Parser, Subcommand};
use vivox_token::{Channel, ChannelType, Grant, Issuer, Key, Realm};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
	/// The tenant identity assigned by the voice platform.
	#[arg(long, env = "VIVOX_ISSUER")]
	issuer: String,

	/// The shared signing secret assigned by the voice platform.
	#[arg(long, env = "VIVOX_SIGNING_KEY", hide_env_values = true)]
	signing_key: String,

	/// The SIP domain suffix for derived addresses.
	#[arg(long, env = "VIVOX_DOMAIN", default_value = Realm::DEFAULT_DOMAIN)]
	domain: String,

	/// The prefix for conference channel names.
	#[arg(long, env = "VIVOX_CHANNEL_PREFIX", default_value = Realm::DEFAULT_CHANNEL_PREFIX)]
	channel_prefix: String,

	/// Token validity in seconds.
	#[arg(long, default_value_t = 90)]
	duration: u64,

	/// The user the token is issued to.
	#[arg(long)]
	user: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Sign in to the voice service.
	Login,
	/// Join a channel.
	Join {
		#[command(flatten)]
		channel: ChannelArgs,
	},
	/// Join a channel with the microphone muted.
	JoinMuted {
		#[command(flatten)]
		channel: ChannelArgs,
	},
	/// Remove another participant from a channel.
	Kick {
		#[command(flatten)]
		channel: ChannelArgs,

		/// The user to remove.
		#[arg(long)]
		target: String,
	},
}

#[derive(clap::Args)]
struct ChannelArgs {
	/// The channel to act on.
	#[arg(long)]
	channel: String,

	/// The channel's audio mix: echo, positional, or nonpositional.
	#[arg(long, default_value = "nonpositional", value_parser = channel_type)]
	channel_type: ChannelType,
}

fn channel_type(name: &str) -> Result<ChannelType, String> {
	ChannelType::parse(name).ok_or_else(|| format!("invalid channel type: {name}"))
}

impl ChannelArgs {
	fn into_channel(self) -> Channel {
		Channel {
			id: self.channel,
			kind: self.channel_type,
		}
	}
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let realm = Realm {
		issuer: cli.issuer,
		domain: cli.domain,
		channel_prefix: cli.channel_prefix,
	};
	let issuer = Issuer::new(realm, Key::new(&cli.signing_key), Duration::from_secs(cli.duration));

	let grant = match cli.command {
		Command::Login => Grant::Login,
		Command::Join { channel } => Grant::Join {
			channel: channel.into_channel(),
		},
		Command::JoinMuted { channel } => Grant::JoinMuted {
			channel: channel.into_channel(),
		},
		Command::Kick { channel, target } => Grant::Kick {
			channel: channel.into_channel(),
			target,
		},
	};

	let issued = issuer.issue(&cli.user, &grant)?;
	println!("{}", issued.token);

	Ok(())
}
