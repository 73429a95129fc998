// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::error::Result;
use crate::negotiator::ConfigNegotiator;
use myst_market::Identity;
use myst_session::{Session, SessionError, SessionId, SessionManager};
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Serves consumer session requests for one service.
///
/// Negotiation happens before admission; a negotiated transport is torn down
/// again when the manager refuses the session.
pub struct SessionHandler {
	manager: SessionManager,
	negotiator: Arc<dyn ConfigNegotiator>,
}

impl SessionHandler {
	pub fn new(manager: SessionManager, negotiator: Arc<dyn ConfigNegotiator>) -> Self {
		Self {
			manager,
			negotiator,
		}
	}

	#[instrument(skip(self, consumer_id, consumer_key), fields(%consumer_id))]
	pub async fn create(
		&self,
		consumer_id: Identity,
		proposal_id: i64,
		consumer_key: &Value,
	) -> Result<Session> {
		let current = self.manager.current_proposal().id;
		if current != proposal_id {
			return Err(SessionError::InvalidProposal {
				requested: proposal_id,
				current,
			}
			.into());
		}

		let negotiated = self.negotiator.provide_config(consumer_key).await?;
		let transport = negotiated.transport.clone();

		match self
			.manager
			.create(consumer_id, proposal_id, negotiated.config, negotiated.transport)
			.await
		{
			Ok(session) => Ok(session),
			Err(e) => {
				if let Some(transport) = transport {
					if let Err(teardown_error) = transport.teardown().await {
						warn!(error = %teardown_error, "failed to tear down transport of rejected session");
					}
				}
				Err(e.into())
			}
		}
	}

	pub async fn destroy(&self, consumer_id: &Identity, session_id: &SessionId) -> Result<()> {
		self.manager.destroy(consumer_id, session_id).await?;
		Ok(())
	}

	pub fn manager(&self) -> &SessionManager {
		&self.manager
	}
}

impl std::fmt::Debug for SessionHandler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionHandler")
			.field("manager", &self.manager)
			.finish_non_exhaustive()
	}
}
