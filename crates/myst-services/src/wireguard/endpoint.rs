// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contract for the per-session WireGuard interface.

use super::keys::WgPublicKey;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EndpointError {
	#[error("no free interface resources")]
	ResourcesExhausted,

	#[error("failed to start endpoint: {0}")]
	Start(String),

	#[error("failed to add peer: {0}")]
	AddPeer(String),

	#[error("failed to read endpoint config: {0}")]
	Config(String),

	#[error("failed to read peer stats: {0}")]
	Stats(String),

	#[error("failed to stop endpoint: {0}")]
	Stop(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	pub public_key: WgPublicKey,
	pub endpoint: SocketAddr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerConfig {
	/// Tunnel address assigned to the consumer.
	pub ip_address: IpNet,
}

/// Configuration handed to a WireGuard consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
	pub provider: ProviderConfig,
	pub consumer: ConsumerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerStats {
	pub bytes_received: u64,
	pub bytes_sent: u64,
	/// `None` until the first handshake completes.
	pub last_handshake: Option<DateTime<Utc>>,
}

/// One WireGuard interface serving a single consumer peer.
#[async_trait]
pub trait ConnectionEndpoint: Send + Sync {
	async fn start(&self) -> Result<(), EndpointError>;

	async fn add_peer(&self, public_key: &WgPublicKey) -> Result<(), EndpointError>;

	async fn config(&self) -> Result<ServiceConfig, EndpointError>;

	async fn peer_stats(&self) -> Result<PeerStats, EndpointError>;

	async fn stop(&self) -> Result<(), EndpointError>;
}

pub trait ConnectionEndpointFactory: Send + Sync {
	fn create(&self) -> Result<Arc<dyn ConnectionEndpoint>, EndpointError>;
}

impl<F> ConnectionEndpointFactory for F
where
	F: Fn() -> Result<Arc<dyn ConnectionEndpoint>, EndpointError> + Send + Sync,
{
	fn create(&self) -> Result<Arc<dyn ConnectionEndpoint>, EndpointError> {
		self()
	}
}
