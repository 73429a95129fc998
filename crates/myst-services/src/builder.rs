// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use myst_market::{Identity, ServiceProposal};
use myst_node_config::NodeConfig;
use myst_session::{
	PaymentOrchestratorFactory, SessionManager, SessionManagerConfig, StorageMemory, UuidIdGenerator,
};
use std::sync::Arc;
use tracing::info;

/// Pins `proposal` and wires a manager with in-memory storage and UUID
/// session IDs.
///
/// The proposal's provider and country are filled from the node identity and
/// location when configured.
pub fn build_session_manager(
	config: &NodeConfig,
	mut proposal: ServiceProposal,
	payments: Arc<dyn PaymentOrchestratorFactory>,
) -> SessionManager {
	if let Some(address) = &config.identity.address {
		proposal.provider_id = Identity::from_address(address);
	}
	if let Some(country) = &config.location.country {
		proposal.service_definition.location.country = country.clone();
	}

	let interval = config.session.idle_check_interval();
	info!(
		proposal_id = proposal.id,
		service_type = %proposal.service_type,
		idle_check_interval_secs = interval.as_secs(),
		"building session manager"
	);

	SessionManager::new(
		proposal,
		Arc::new(UuidIdGenerator),
		Arc::new(StorageMemory::new()),
		payments,
		SessionManagerConfig::with_idle_check_interval(interval),
	)
}
