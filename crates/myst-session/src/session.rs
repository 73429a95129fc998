// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::transport::SessionTransport;
use chrono::{DateTime, Utc};
use myst_market::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Negotiated, service-specific session configuration handed to the consumer.
pub type ServiceConfiguration = serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SessionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for SessionId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl From<String> for SessionId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// One active provider to consumer tunnel grant.
#[derive(Clone)]
pub struct Session {
	pub id: SessionId,
	pub consumer_id: Identity,
	pub config: ServiceConfiguration,
	pub created_at: DateTime<Utc>,
	transport: Option<Arc<dyn SessionTransport>>,
}

impl Session {
	pub fn new(id: SessionId, consumer_id: Identity, config: ServiceConfiguration) -> Self {
		Self {
			id,
			consumer_id,
			config,
			created_at: Utc::now(),
			transport: None,
		}
	}

	pub fn with_transport(mut self, transport: Option<Arc<dyn SessionTransport>>) -> Self {
		self.transport = transport;
		self
	}

	pub fn transport(&self) -> Option<&Arc<dyn SessionTransport>> {
		self.transport.as_ref()
	}
}

impl fmt::Debug for Session {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session")
			.field("id", &self.id)
			.field("consumer_id", &self.consumer_id)
			.field("config", &self.config)
			.field("created_at", &self.created_at)
			.field("has_transport", &self.transport.is_some())
			.finish()
	}
}
