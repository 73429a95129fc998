// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use myst_node_config::WireguardConfig;
use myst_services::wireguard::{
	ConnectionEndpoint, ConnectionEndpointFactory, ConsumerConfig, EndpointError, NatError,
	NatService, PeerStats, ProviderConfig, RuleForwarding, ServiceConfig, WgPublicKey,
};
use myst_services::WireguardService;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn consumer_key() -> WgPublicKey {
	WgPublicKey::from_bytes([3u8; 32])
}

pub fn provider_key() -> WgPublicKey {
	WgPublicKey::from_bytes([9u8; 32])
}

#[derive(Default)]
pub struct FakeEndpoint {
	started: AtomicBool,
	stops: AtomicUsize,
	peers: Mutex<Vec<WgPublicKey>>,
	last_handshake: Mutex<Option<DateTime<Utc>>>,
	fail_add_peer: bool,
	fail_stats: AtomicBool,
	fail_stop: bool,
}

impl FakeEndpoint {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn failing_add_peer() -> Arc<Self> {
		Arc::new(Self {
			fail_add_peer: true,
			..Default::default()
		})
	}

	pub fn failing_stop() -> Arc<Self> {
		Arc::new(Self {
			fail_stop: true,
			..Default::default()
		})
	}

	pub fn is_started(&self) -> bool {
		self.started.load(Ordering::SeqCst)
	}

	pub fn stops(&self) -> usize {
		self.stops.load(Ordering::SeqCst)
	}

	pub fn peers(&self) -> Vec<WgPublicKey> {
		self.peers.lock().unwrap().clone()
	}

	pub fn set_last_handshake(&self, at: Option<DateTime<Utc>>) {
		*self.last_handshake.lock().unwrap() = at;
	}

	pub fn set_stats_failing(&self, failing: bool) {
		self.fail_stats.store(failing, Ordering::SeqCst);
	}
}

#[async_trait]
impl ConnectionEndpoint for FakeEndpoint {
	async fn start(&self) -> Result<(), EndpointError> {
		self.started.store(true, Ordering::SeqCst);
		Ok(())
	}

	async fn add_peer(&self, public_key: &WgPublicKey) -> Result<(), EndpointError> {
		if self.fail_add_peer {
			return Err(EndpointError::AddPeer("interface busy".to_string()));
		}
		self.peers.lock().unwrap().push(*public_key);
		Ok(())
	}

	async fn config(&self) -> Result<ServiceConfig, EndpointError> {
		Ok(ServiceConfig {
			provider: ProviderConfig {
				public_key: provider_key(),
				endpoint: "203.0.113.7:51820".parse().unwrap(),
			},
			consumer: ConsumerConfig {
				ip_address: "10.182.0.2/24".parse().unwrap(),
			},
		})
	}

	async fn peer_stats(&self) -> Result<PeerStats, EndpointError> {
		if self.fail_stats.load(Ordering::SeqCst) {
			return Err(EndpointError::Stats("device gone".to_string()));
		}
		Ok(PeerStats {
			last_handshake: *self.last_handshake.lock().unwrap(),
			..Default::default()
		})
	}

	async fn stop(&self) -> Result<(), EndpointError> {
		self.stops.fetch_add(1, Ordering::SeqCst);
		if self.fail_stop {
			return Err(EndpointError::Stop("device busy".to_string()));
		}
		Ok(())
	}
}

#[derive(Default)]
pub struct FakeNat {
	rules: Mutex<Vec<RuleForwarding>>,
	starts: AtomicUsize,
	stops: AtomicUsize,
	fail_start: bool,
}

impl FakeNat {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn failing_start() -> Arc<Self> {
		Arc::new(Self {
			fail_start: true,
			..Default::default()
		})
	}

	pub fn rules(&self) -> Vec<RuleForwarding> {
		self.rules.lock().unwrap().clone()
	}

	pub fn starts(&self) -> usize {
		self.starts.load(Ordering::SeqCst)
	}

	pub fn stops(&self) -> usize {
		self.stops.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl NatService for FakeNat {
	fn add(&self, rule: RuleForwarding) {
		self.rules.lock().unwrap().push(rule);
	}

	async fn start(&self) -> Result<(), NatError> {
		self.starts.fetch_add(1, Ordering::SeqCst);
		if self.fail_start {
			return Err(NatError::Apply("iptables missing".to_string()));
		}
		Ok(())
	}

	async fn stop(&self) {
		self.stops.fetch_add(1, Ordering::SeqCst);
	}
}

/// Factory that always hands out the same endpoint and counts calls.
pub struct SharedEndpoint {
	pub endpoint: Arc<FakeEndpoint>,
	pub created: AtomicUsize,
}

impl SharedEndpoint {
	pub fn new(endpoint: Arc<FakeEndpoint>) -> Arc<Self> {
		Arc::new(Self {
			endpoint,
			created: AtomicUsize::new(0),
		})
	}

	pub fn created(&self) -> usize {
		self.created.load(Ordering::SeqCst)
	}
}

impl ConnectionEndpointFactory for SharedEndpoint {
	fn create(&self) -> Result<Arc<dyn ConnectionEndpoint>, EndpointError> {
		self.created.fetch_add(1, Ordering::SeqCst);
		Ok(self.endpoint.clone())
	}
}

pub fn wireguard_config() -> WireguardConfig {
	WireguardConfig {
		outbound_ip: Some("192.0.2.10".parse().unwrap()),
		..Default::default()
	}
}

pub fn wireguard_service(
	endpoints: Arc<SharedEndpoint>,
	nat: Arc<FakeNat>,
) -> WireguardService {
	WireguardService::new(&wireguard_config(), endpoints, nat)
}

pub async fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
	F: FnMut() -> bool,
{
	let deadline = tokio::time::Instant::now() + timeout;
	while tokio::time::Instant::now() < deadline {
		if condition() {
			return true;
		}
		tokio::time::sleep(Duration::from_millis(5)).await;
	}
	condition()
}
