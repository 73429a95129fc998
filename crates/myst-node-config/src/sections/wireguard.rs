// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! WireGuard service configuration section.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

const DEFAULT_HANDSHAKE_TIMEOUT_SECS: u64 = 2 * 60 * 60;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WireguardConfigLayer {
	pub public_ip: Option<IpAddr>,
	pub outbound_ip: Option<IpAddr>,
	pub handshake_timeout_secs: Option<u64>,
}

impl WireguardConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.public_ip.is_some() {
			self.public_ip = other.public_ip;
		}
		if other.outbound_ip.is_some() {
			self.outbound_ip = other.outbound_ip;
		}
		if other.handshake_timeout_secs.is_some() {
			self.handshake_timeout_secs = other.handshake_timeout_secs;
		}
	}

	pub fn finalize(self) -> WireguardConfig {
		WireguardConfig {
			public_ip: self.public_ip,
			outbound_ip: self.outbound_ip,
			handshake_timeout_secs: self
				.handshake_timeout_secs
				.unwrap_or(DEFAULT_HANDSHAKE_TIMEOUT_SECS),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireguardConfig {
	/// Address consumers connect to. Detected externally when unset.
	pub public_ip: Option<IpAddr>,
	/// Address consumer traffic is forwarded out of.
	pub outbound_ip: Option<IpAddr>,
	/// A peer with no handshake for this long is considered gone.
	pub handshake_timeout_secs: u64,
}

impl WireguardConfig {
	pub fn handshake_timeout(&self) -> Duration {
		Duration::from_secs(self.handshake_timeout_secs)
	}
}

impl Default for WireguardConfig {
	fn default() -> Self {
		Self {
			public_ip: None,
			outbound_ip: None,
			handshake_timeout_secs: DEFAULT_HANDSHAKE_TIMEOUT_SECS,
		}
	}
}
