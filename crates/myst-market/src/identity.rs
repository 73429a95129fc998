// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Address of a node participant.
///
/// Addresses are hex strings and compare case-insensitively, so they are
/// normalized to lowercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Identity {
	address: String,
}

impl Identity {
	pub fn from_address(address: impl AsRef<str>) -> Self {
		Self {
			address: address.as_ref().to_lowercase(),
		}
	}

	pub fn address(&self) -> &str {
		&self.address
	}
}

impl fmt::Display for Identity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.address)
	}
}

impl<'de> Deserialize<'de> for Identity {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let address = String::deserialize(deserializer)?;
		Ok(Self::from_address(address))
	}
}

impl From<&str> for Identity {
	fn from(address: &str) -> Self {
		Self::from_address(address)
	}
}
