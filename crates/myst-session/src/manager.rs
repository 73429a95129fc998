// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::config::SessionManagerConfig;
use crate::error::{Result, SessionError};
use crate::id_generator::IdGenerator;
use crate::monitor;
use crate::payment::{PaymentOrchestrator, PaymentOrchestratorFactory};
use crate::session::{ServiceConfiguration, Session, SessionId};
use crate::storage::SessionStorage;
use crate::transport::SessionTransport;
use myst_market::{Identity, ServiceProposal};
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// Every removal from the active map cancels the entry's monitor token, so a
/// cancelled token means the session it watched is gone.
struct ActiveSession {
	orchestrator: Arc<dyn PaymentOrchestrator>,
	monitor: CancellationToken,
}

struct ManagerInner {
	current_proposal: ServiceProposal,
	id_generator: Arc<dyn IdGenerator>,
	storage: Arc<dyn SessionStorage>,
	payments: Arc<dyn PaymentOrchestratorFactory>,
	config: SessionManagerConfig,
	/// Admission lock. Every create and destroy runs its critical section
	/// while holding it; the map holds what only the manager needs per session.
	active: Mutex<HashMap<SessionId, ActiveSession>>,
	shutdown: CancellationToken,
}

/// Creates, supervises and destroys sessions for one pinned proposal.
///
/// Cloning is cheap and every clone drives the same set of sessions. Idle
/// monitors only hold weak references: dropping the last clone cancels every
/// monitor but leaves sessions unreleased, so call
/// [`shutdown`](Self::shutdown) first to stop payments and tear transports
/// down.
#[derive(Clone)]
pub struct SessionManager {
	inner: Arc<ManagerInner>,
}

impl SessionManager {
	pub fn new(
		current_proposal: ServiceProposal,
		id_generator: Arc<dyn IdGenerator>,
		storage: Arc<dyn SessionStorage>,
		payments: Arc<dyn PaymentOrchestratorFactory>,
		config: SessionManagerConfig,
	) -> Self {
		Self {
			inner: Arc::new(ManagerInner {
				current_proposal,
				id_generator,
				storage,
				payments,
				config,
				active: Mutex::new(HashMap::new()),
				shutdown: CancellationToken::new(),
			}),
		}
	}

	/// Admits a consumer onto the current proposal.
	///
	/// Multiple sessions per consumer are allowed. Nothing is stored unless
	/// the payment orchestrator started.
	#[instrument(skip(self, consumer_id, config, transport), fields(%consumer_id))]
	pub async fn create(
		&self,
		consumer_id: Identity,
		proposal_id: i64,
		config: ServiceConfiguration,
		transport: Option<Arc<dyn SessionTransport>>,
	) -> Result<Session> {
		let mut active = self.inner.active.lock().await;

		if self.inner.shutdown.is_cancelled() {
			return Err(SessionError::ShuttingDown);
		}

		let current = &self.inner.current_proposal;
		if current.id != proposal_id {
			return Err(SessionError::InvalidProposal {
				requested: proposal_id,
				current: current.id,
			});
		}

		let id = self
			.inner
			.id_generator
			.generate()
			.map_err(SessionError::IdGeneration)?;

		if active.contains_key(&id) || self.inner.storage.find(&id).is_some() {
			return Err(SessionError::DuplicateId(id));
		}

		let orchestrator = self.inner.payments.create();
		let payment_errors = orchestrator.start(current).await?;

		let session = Session::new(id.clone(), consumer_id, config).with_transport(transport);
		self.inner.storage.add(session.clone());

		let monitor_token = self.inner.shutdown.child_token();
		active.insert(
			id.clone(),
			ActiveSession {
				orchestrator,
				monitor: monitor_token.clone(),
			},
		);

		tokio::spawn(monitor::watch(
			self.downgrade(),
			id.clone(),
			monitor_token,
			payment_errors,
			self.inner.config.idle_check_interval,
		));

		info!(session_id = %id, "session created");

		Ok(session)
	}

	/// Destroys a session owned by `consumer_id`.
	///
	/// Destruction happens at most once: a second call for the same ID fails
	/// with [`SessionError::SessionNotFound`].
	#[instrument(skip(self), fields(%consumer_id, %session_id))]
	pub async fn destroy(&self, consumer_id: &Identity, session_id: &SessionId) -> Result<()> {
		let mut active = self.inner.active.lock().await;

		let session = self
			.inner
			.storage
			.find(session_id)
			.ok_or_else(|| SessionError::SessionNotFound(session_id.clone()))?;

		if &session.consumer_id != consumer_id {
			return Err(SessionError::WrongOwner {
				session_id: session_id.clone(),
			});
		}

		self.inner.release(&mut active, session).await?;

		info!("session destroyed");

		Ok(())
	}

	/// Destroys every session and stops all idle monitors.
	///
	/// Later calls to [`create`](Self::create) fail with
	/// [`SessionError::ShuttingDown`].
	#[instrument(skip(self))]
	pub async fn shutdown(&self) {
		let mut active = self.inner.active.lock().await;
		self.inner.shutdown.cancel();

		let ids: Vec<SessionId> = active.keys().cloned().collect();
		let count = ids.len();

		for id in ids {
			match self.inner.storage.find(&id) {
				Some(session) => {
					if let Err(e) = self.inner.release(&mut active, session).await {
						warn!(session_id = %id, error = %e, "failed to release session during shutdown");
					}
				}
				None => {
					if let Some(entry) = active.remove(&id) {
						if let Err(e) = entry.orchestrator.stop().await {
							warn!(session_id = %id, error = %e, "failed to stop payment orchestrator");
						}
					}
				}
			}
		}

		info!(count, "session manager shut down");
	}

	pub fn current_proposal(&self) -> &ServiceProposal {
		&self.inner.current_proposal
	}

	pub fn config(&self) -> &SessionManagerConfig {
		&self.inner.config
	}

	/// Lock-free lookup against storage.
	pub fn session(&self, session_id: &SessionId) -> Option<Session> {
		self.inner.storage.find(session_id)
	}

	pub async fn session_count(&self) -> usize {
		self.inner.active.lock().await.len()
	}

	pub fn is_shut_down(&self) -> bool {
		self.inner.shutdown.is_cancelled()
	}

	/// Releases a session on behalf of its idle monitor.
	///
	/// Fails with [`SessionError::SessionNotFound`] once `monitor` is
	/// cancelled: the watched session was already released and its ID may
	/// now belong to a new session.
	pub(crate) async fn reap(
		&self,
		session_id: &SessionId,
		monitor: &CancellationToken,
	) -> Result<()> {
		let mut active = self.inner.active.lock().await;

		if monitor.is_cancelled() {
			return Err(SessionError::SessionNotFound(session_id.clone()));
		}

		let session = self
			.inner
			.storage
			.find(session_id)
			.ok_or_else(|| SessionError::SessionNotFound(session_id.clone()))?;

		self.inner.release(&mut active, session).await?;

		info!(%session_id, "session reaped");

		Ok(())
	}

	pub(crate) fn downgrade(&self) -> WeakSessionManager {
		WeakSessionManager(Arc::downgrade(&self.inner))
	}
}

/// Non-owning handle held by idle monitors.
#[derive(Clone)]
pub(crate) struct WeakSessionManager(Weak<ManagerInner>);

impl WeakSessionManager {
	pub(crate) fn upgrade(&self) -> Option<SessionManager> {
		self.0.upgrade().map(|inner| SessionManager { inner })
	}
}

impl ManagerInner {
	/// Stops payments, removes the session and tears its transport down.
	///
	/// Removal and teardown run even when the orchestrator fails to stop; the
	/// stop error is then the one reported.
	async fn release(
		&self,
		active: &mut HashMap<SessionId, ActiveSession>,
		session: Session,
	) -> Result<()> {
		let stopped = match active.remove(&session.id) {
			Some(entry) => {
				entry.monitor.cancel();
				entry.orchestrator.stop().await
			}
			None => Ok(()),
		};

		self.storage.remove(&session.id);

		let torn_down = match session.transport() {
			Some(transport) => transport.teardown().await,
			None => Ok(()),
		};

		match (stopped, torn_down) {
			(Ok(()), Ok(())) => Ok(()),
			(Err(stop_error), Ok(())) => Err(stop_error.into()),
			(Ok(()), Err(teardown_error)) => Err(teardown_error.into()),
			(Err(stop_error), Err(teardown_error)) => {
				warn!(session_id = %session.id, error = %teardown_error, "transport teardown failed");
				Err(stop_error.into())
			}
		}
	}
}

impl Drop for ManagerInner {
	fn drop(&mut self) {
		self.shutdown.cancel();
	}
}

impl std::fmt::Debug for SessionManager {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionManager")
			.field("proposal_id", &self.inner.current_proposal.id)
			.field("config", &self.inner.config)
			.field("is_shut_down", &self.is_shut_down())
			.finish()
	}
}
