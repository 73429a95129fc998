// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Service location section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationConfigLayer {
	pub country: Option<String>,
}

impl LocationConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.country.is_some() {
			self.country = other.country;
		}
	}

	pub fn finalize(self) -> LocationConfig {
		LocationConfig {
			country: self.country.map(|c| c.to_uppercase()),
		}
	}
}

/// `country` is an ISO 3166 alpha-2 code; `None` means autodetect.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
	pub country: Option<String>,
}
