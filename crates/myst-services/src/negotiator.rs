// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::error::Result;
use async_trait::async_trait;
use myst_session::{ServiceConfiguration, SessionTransport};
use serde_json::Value;
use std::sync::Arc;

/// Outcome of negotiating a session with a consumer.
pub struct NegotiatedConfig {
	/// Handed back to the consumer as the session configuration.
	pub config: ServiceConfiguration,
	/// Present when the service can report liveness and needs teardown.
	pub transport: Option<Arc<dyn SessionTransport>>,
}

impl NegotiatedConfig {
	pub fn without_transport(config: ServiceConfiguration) -> Self {
		Self {
			config,
			transport: None,
		}
	}
}

impl std::fmt::Debug for NegotiatedConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NegotiatedConfig")
			.field("config", &self.config)
			.field("has_transport", &self.transport.is_some())
			.finish()
	}
}

/// Builds the service-specific configuration for one consumer.
#[async_trait]
pub trait ConfigNegotiator: Send + Sync {
	async fn provide_config(&self, consumer_key: &Value) -> Result<NegotiatedConfig>;
}
