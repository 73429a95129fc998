// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

pub const KEY_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
	#[error("invalid base64: {0}")]
	Base64(String),

	#[error("expected 32 bytes, got {0}")]
	Length(usize),
}

/// Curve25519 public key of a WireGuard peer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WgPublicKey([u8; KEY_LEN]);

impl WgPublicKey {
	pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
		Self(bytes)
	}

	pub fn from_base64(encoded: &str) -> Result<Self, KeyError> {
		let decoded = STANDARD
			.decode(encoded.trim())
			.map_err(|e| KeyError::Base64(e.to_string()))?;
		let bytes: [u8; KEY_LEN] = decoded
			.as_slice()
			.try_into()
			.map_err(|_| KeyError::Length(decoded.len()))?;
		Ok(Self(bytes))
	}

	pub fn to_base64(&self) -> String {
		STANDARD.encode(self.0)
	}

	pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
		&self.0
	}
}

impl fmt::Display for WgPublicKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_base64())
	}
}

impl fmt::Debug for WgPublicKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "WgPublicKey({})", self.to_base64())
	}
}

impl Serialize for WgPublicKey {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_base64())
	}
}

impl<'de> Deserialize<'de> for WgPublicKey {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let encoded = String::deserialize(deserializer)?;
		Self::from_base64(&encoded).map_err(serde::de::Error::custom)
	}
}
