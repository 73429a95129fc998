// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-session idle monitor.

use crate::error::SessionError;
use crate::manager::{SessionManager, WeakSessionManager};
use crate::payment::PaymentErrors;
use crate::session::SessionId;
use crate::transport::Liveness;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

enum Probe {
	Continue,
	/// Session has no transport to probe.
	Unprobeable,
	Finished,
}

/// Watches one session until it is released, the token is cancelled or the
/// manager is dropped.
///
/// Reaps the session when its transport reports it dead or when its payment
/// orchestrator emits an error.
pub(crate) async fn watch(
	manager: WeakSessionManager,
	session_id: SessionId,
	cancel: CancellationToken,
	mut payment_errors: PaymentErrors,
	interval: Duration,
) {
	let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
	ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

	let mut probing = true;
	let mut payments_open = true;

	loop {
		if !probing && !payments_open {
			debug!(%session_id, "nothing left to watch, stopping idle monitor");
			return;
		}

		tokio::select! {
			biased;

			_ = cancel.cancelled() => {
				debug!(%session_id, "idle monitor cancelled");
				return;
			}

			payment_error = payment_errors.recv(), if payments_open => {
				match payment_error {
					Some(e) => {
						warn!(%session_id, error = %e, "payment processing failed, destroying session");
						if let Some(manager) = manager.upgrade() {
							reap(&manager, &session_id, &cancel).await;
						}
						return;
					}
					None => payments_open = false,
				}
			}

			_ = ticker.tick(), if probing => {
				match probe(&manager, &session_id, &cancel).await {
					Probe::Continue => {}
					Probe::Unprobeable => probing = false,
					Probe::Finished => return,
				}
			}
		}
	}
}

async fn probe(
	manager: &WeakSessionManager,
	session_id: &SessionId,
	cancel: &CancellationToken,
) -> Probe {
	let Some(manager) = manager.upgrade() else {
		debug!(%session_id, "session manager dropped, stopping idle monitor");
		return Probe::Finished;
	};

	let Some(session) = manager.session(session_id) else {
		debug!(%session_id, "session gone, stopping idle monitor");
		return Probe::Finished;
	};

	let Some(transport) = session.transport().cloned() else {
		return Probe::Unprobeable;
	};

	let liveness = tokio::select! {
		biased;

		_ = cancel.cancelled() => {
			debug!(%session_id, "idle monitor cancelled during probe");
			return Probe::Finished;
		}

		liveness = transport.probe_liveness() => liveness,
	};

	match liveness {
		Liveness::Alive => Probe::Continue,
		Liveness::ProbeFailed(reason) => {
			error!(%session_id, %reason, "failed to monitor if session is active");
			Probe::Continue
		}
		Liveness::Dead => {
			info!(%session_id, "cleaning inactive session");
			reap(&manager, session_id, cancel).await;
			Probe::Finished
		}
	}
}

async fn reap(manager: &SessionManager, session_id: &SessionId, cancel: &CancellationToken) {
	match manager.reap(session_id, cancel).await {
		Ok(()) => {}
		Err(SessionError::SessionNotFound(_)) => {
			debug!(%session_id, "session already destroyed");
		}
		Err(e) => {
			error!(%session_id, error = %e, "failed to destroy session");
		}
	}
}
