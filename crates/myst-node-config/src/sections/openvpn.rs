// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenVPN service configuration section.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 1194;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenvpnProtocol {
	#[default]
	Udp,
	Tcp,
}

impl fmt::Display for OpenvpnProtocol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OpenvpnProtocol::Udp => write!(f, "udp"),
			OpenvpnProtocol::Tcp => write!(f, "tcp"),
		}
	}
}

impl FromStr for OpenvpnProtocol {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"udp" => Ok(OpenvpnProtocol::Udp),
			"tcp" => Ok(OpenvpnProtocol::Tcp),
			other => Err(format!("unknown protocol '{other}', expected udp or tcp")),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpenvpnConfigLayer {
	pub protocol: Option<OpenvpnProtocol>,
	pub port: Option<u16>,
}

impl OpenvpnConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.protocol.is_some() {
			self.protocol = other.protocol;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
	}

	pub fn finalize(self) -> OpenvpnConfig {
		OpenvpnConfig {
			protocol: self.protocol.unwrap_or_default(),
			port: self.port.unwrap_or(DEFAULT_PORT),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenvpnConfig {
	pub protocol: OpenvpnProtocol,
	pub port: u16,
}

impl Default for OpenvpnConfig {
	fn default() -> Self {
		Self {
			protocol: OpenvpnProtocol::Udp,
			port: DEFAULT_PORT,
		}
	}
}
