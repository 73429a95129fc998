// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use super::endpoint::{ConnectionEndpoint, ConnectionEndpointFactory, ServiceConfig};
use super::keys::WgPublicKey;
use super::nat::{NatService, RuleForwarding};
use crate::error::{Result, ServiceError};
use crate::negotiator::{ConfigNegotiator, NegotiatedConfig};
use async_trait::async_trait;
use chrono::Utc;
use myst_node_config::WireguardConfig;
use myst_session::{Liveness, SessionTransport, TransportError};
use serde::Deserialize;
use serde_json::Value;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Key material a consumer sends when asking for a WireGuard session.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsumerKey {
	#[serde(rename = "PublicKey", alias = "public_key")]
	pub public_key: WgPublicKey,
}

/// Hands out one WireGuard endpoint per session.
pub struct WireguardService {
	endpoints: Arc<dyn ConnectionEndpointFactory>,
	nat: Arc<dyn NatService>,
	outbound_ip: Option<IpAddr>,
	handshake_timeout: Duration,
}

impl WireguardService {
	pub fn new(
		config: &WireguardConfig,
		endpoints: Arc<dyn ConnectionEndpointFactory>,
		nat: Arc<dyn NatService>,
	) -> Self {
		Self {
			endpoints,
			nat,
			outbound_ip: config.outbound_ip,
			handshake_timeout: config.handshake_timeout(),
		}
	}

	pub async fn stop(&self) {
		self.nat.stop().await;
		info!("wireguard service stopped");
	}

	async fn configure(
		&self,
		endpoint: &dyn ConnectionEndpoint,
		public_key: &WgPublicKey,
	) -> Result<ServiceConfig> {
		endpoint.add_peer(public_key).await?;
		let config = endpoint.config().await?;

		self.nat.add(RuleForwarding {
			source_address: config.consumer.ip_address,
			target_ip: self.outbound_ip,
		});
		self.nat.start().await?;

		Ok(config)
	}
}

#[async_trait]
impl ConfigNegotiator for WireguardService {
	#[instrument(skip_all)]
	async fn provide_config(&self, consumer_key: &Value) -> Result<NegotiatedConfig> {
		let key: ConsumerKey =
			serde_json::from_value(consumer_key.clone()).map_err(ServiceError::ConsumerKey)?;

		let endpoint = self.endpoints.create()?;
		endpoint.start().await?;

		let config = match self.configure(endpoint.as_ref(), &key.public_key).await {
			Ok(config) => config,
			Err(e) => {
				if let Err(stop_error) = endpoint.stop().await {
					warn!(error = %stop_error, "failed to stop endpoint after negotiation failure");
				}
				return Err(e);
			}
		};

		debug!(
			consumer_ip = %config.consumer.ip_address,
			provider_endpoint = %config.provider.endpoint,
			"wireguard endpoint configured"
		);

		let transport = WireguardTransport::new(endpoint, self.handshake_timeout);

		Ok(NegotiatedConfig {
			config: serde_json::to_value(&config)?,
			transport: Some(Arc::new(transport)),
		})
	}
}

impl std::fmt::Debug for WireguardService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WireguardService")
			.field("outbound_ip", &self.outbound_ip)
			.field("handshake_timeout", &self.handshake_timeout)
			.finish_non_exhaustive()
	}
}

/// Session transport backed by a WireGuard endpoint.
///
/// A peer whose last handshake is older than the timeout is dead. A peer that
/// never completed a handshake is still considered alive.
pub struct WireguardTransport {
	endpoint: Arc<dyn ConnectionEndpoint>,
	handshake_timeout: Duration,
}

impl WireguardTransport {
	pub fn new(endpoint: Arc<dyn ConnectionEndpoint>, handshake_timeout: Duration) -> Self {
		Self {
			endpoint,
			handshake_timeout,
		}
	}
}

#[async_trait]
impl SessionTransport for WireguardTransport {
	async fn probe_liveness(&self) -> Liveness {
		let stats = match self.endpoint.peer_stats().await {
			Ok(stats) => stats,
			Err(e) => return Liveness::ProbeFailed(e.to_string()),
		};

		let Some(last_handshake) = stats.last_handshake else {
			return Liveness::Alive;
		};

		// Negative deltas (clock skew) fail `to_std` and count as recent.
		match (Utc::now() - last_handshake).to_std() {
			Ok(elapsed) if elapsed > self.handshake_timeout => Liveness::Dead,
			_ => Liveness::Alive,
		}
	}

	async fn teardown(&self) -> std::result::Result<(), TransportError> {
		self.endpoint
			.stop()
			.await
			.map_err(|e| TransportError::Teardown(e.to_string()))
	}
}
