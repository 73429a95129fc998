// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Enabled service types section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServicesConfigLayer {
	pub types: Option<Vec<String>>,
}

impl ServicesConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.types.is_some() {
			self.types = other.types;
		}
	}

	pub fn finalize(self) -> ServicesConfig {
		ServicesConfig {
			types: self.types.unwrap_or_else(default_types),
		}
	}
}

fn default_types() -> Vec<String> {
	vec!["openvpn".to_string(), "noop".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServicesConfig {
	/// Service type names, validated by the services layer.
	pub types: Vec<String>,
}

impl Default for ServicesConfig {
	fn default() -> Self {
		Self {
			types: default_types(),
		}
	}
}
