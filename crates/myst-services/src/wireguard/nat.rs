// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use ipnet::IpNet;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NatError {
	#[error("failed to apply NAT rules: {0}")]
	Apply(String),
}

/// Masquerades consumer traffic out of the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleForwarding {
	pub source_address: IpNet,
	/// Outbound address; `None` leaves the choice to the NAT backend.
	pub target_ip: Option<IpAddr>,
}

#[async_trait]
pub trait NatService: Send + Sync {
	fn add(&self, rule: RuleForwarding);

	/// Applies all added rules. Safe to call repeatedly.
	async fn start(&self) -> Result<(), NatError>;

	async fn stop(&self);
}
