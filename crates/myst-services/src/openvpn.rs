// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenVPN service: every consumer receives the same server configuration.

use crate::error::Result;
use crate::negotiator::{ConfigNegotiator, NegotiatedConfig};
use async_trait::async_trait;
use myst_market::{Location, Money, PaymentMethod, ServiceDefinition, ServiceProposal};
use myst_node_config::{OpenvpnConfig, OpenvpnProtocol};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

pub const SERVICE_TYPE: &str = "openvpn";
pub const PAYMENT_METHOD: &str = "PER_TIME";

/// Client-side configuration for connecting to this node's OpenVPN server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnConfig {
	pub remote: String,
	pub port: u16,
	pub protocol: OpenvpnProtocol,
	pub tls_preshared_key: String,
	pub ca_certificate: String,
}

impl VpnConfig {
	pub fn new(
		remote: impl Into<String>,
		config: &OpenvpnConfig,
		tls_preshared_key: impl Into<String>,
		ca_certificate: impl Into<String>,
	) -> Self {
		Self {
			remote: remote.into(),
			port: config.port,
			protocol: config.protocol,
			tls_preshared_key: tls_preshared_key.into(),
			ca_certificate: ca_certificate.into(),
		}
	}
}

impl std::fmt::Debug for VpnConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("VpnConfig")
			.field("remote", &self.remote)
			.field("port", &self.port)
			.field("protocol", &self.protocol)
			.field("tls_preshared_key", &"[REDACTED]")
			.finish_non_exhaustive()
	}
}

#[derive(Debug, Clone)]
pub struct OpenvpnService {
	vpn_config: VpnConfig,
}

impl OpenvpnService {
	pub fn new(vpn_config: VpnConfig) -> Self {
		Self { vpn_config }
	}
}

#[async_trait]
impl ConfigNegotiator for OpenvpnService {
	#[instrument(skip_all, fields(remote = %self.vpn_config.remote))]
	async fn provide_config(&self, _consumer_key: &Value) -> Result<NegotiatedConfig> {
		Ok(NegotiatedConfig::without_transport(serde_json::to_value(
			&self.vpn_config,
		)?))
	}
}

pub fn proposal(country: &str, price: Money) -> ServiceProposal {
	ServiceProposal {
		service_type: SERVICE_TYPE.to_string(),
		service_definition: ServiceDefinition {
			location: Location {
				country: country.to_string(),
			},
		},
		payment_method_type: PAYMENT_METHOD.to_string(),
		payment_method: PaymentMethod { price },
		..Default::default()
	}
}
