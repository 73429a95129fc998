// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::error::{Result, ServiceError};
use myst_node_config::ServicesConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
	Openvpn,
	Wireguard,
	Noop,
}

impl ServiceType {
	pub fn available() -> &'static [ServiceType] {
		&[ServiceType::Openvpn, ServiceType::Wireguard, ServiceType::Noop]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ServiceType::Openvpn => "openvpn",
			ServiceType::Wireguard => "wireguard",
			ServiceType::Noop => "noop",
		}
	}

	/// Resolves the configured service list, rejecting unknown names and
	/// dropping duplicates while keeping order.
	pub fn enabled(config: &ServicesConfig) -> Result<Vec<ServiceType>> {
		let mut enabled = Vec::with_capacity(config.types.len());
		for name in &config.types {
			let service_type: ServiceType = name.parse()?;
			if !enabled.contains(&service_type) {
				enabled.push(service_type);
			}
		}
		Ok(enabled)
	}
}

impl fmt::Display for ServiceType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ServiceType {
	type Err = ServiceError;

	fn from_str(s: &str) -> Result<Self> {
		ServiceType::available()
			.iter()
			.copied()
			.find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ServiceError::UnknownServiceType(s.to_string()))
	}
}
