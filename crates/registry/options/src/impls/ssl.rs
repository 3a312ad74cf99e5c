//! TLS options.

use bitflags::bitflags;
use fetchopt_registry::{TaggedValue, option};

bitflags! {
	/// Peer certificate verification flags.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct VerifyMode: u64 {
		/// Verify the peer certificate.
		const PEER = 0x01;
		/// Fail if the peer presents no certificate. Server side only.
		const FAIL_IF_NO_PEER_CERT = 0x02;
		/// Request a client certificate only once per session. Server side only.
		const CLIENT_ONCE = 0x04;
	}
}

impl VerifyMode {
	/// No verification.
	pub const NONE: Self = Self::empty();
}

impl Default for VerifyMode {
	fn default() -> Self {
		VerifyMode::PEER
	}
}

option! {
	/// TLS peer certificate verification mode.
	///
	/// Defaults to [`VerifyMode::PEER`].
	pub struct SslVerifyMode {
		key: "ssl-verify-mode",
		type: Size,
		default: VerifyMode::PEER.bits(),
		description: "TLS peer certificate verification flags",
		validate: validate_mode,
	}
}

impl SslVerifyMode {
	/// Returns the verification flags.
	///
	/// Unknown bits are retained.
	pub fn mode(&self) -> VerifyMode {
		VerifyMode::from_bits_retain(self.0)
	}
}

impl From<VerifyMode> for SslVerifyMode {
	fn from(mode: VerifyMode) -> Self {
		Self(mode.bits())
	}
}

fn validate_mode(value: &TaggedValue) -> Result<(), String> {
	let bits = value.size_value().map_err(|e| e.to_string())?;
	match VerifyMode::from_bits(bits) {
		Some(_) => Ok(()),
		None => Err(format!("unknown verification flags: {bits:#x}")),
	}
}
