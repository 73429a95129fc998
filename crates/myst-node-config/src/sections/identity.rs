// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider identity section.

use serde::{Deserialize, Deserializer};
use std::fmt;
use zeroize::Zeroizing;

pub const REDACTED: &str = "[REDACTED]";

/// Keystore passphrase. Never printed, wiped from memory on drop.
#[derive(Clone)]
pub struct Passphrase(Zeroizing<String>);

impl Passphrase {
	pub fn new(value: impl Into<String>) -> Self {
		Self(Zeroizing::new(value.into()))
	}

	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for Passphrase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{REDACTED}")
	}
}

impl<'de> Deserialize<'de> for Passphrase {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(Passphrase::new)
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfigLayer {
	pub address: Option<String>,
	pub passphrase: Option<Passphrase>,
}

impl IdentityConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.address.is_some() {
			self.address = other.address;
		}
		if other.passphrase.is_some() {
			self.passphrase = other.passphrase;
		}
	}

	pub fn finalize(self) -> IdentityConfig {
		IdentityConfig {
			address: self.address,
			passphrase: self.passphrase,
		}
	}
}

/// Keystore identity the node provides services under. When `address` is
/// unset an identity is created on first start.
#[derive(Debug, Clone, Default)]
pub struct IdentityConfig {
	pub address: Option<String>,
	pub passphrase: Option<Passphrase>,
}
