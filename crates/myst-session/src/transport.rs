// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
	#[error("teardown failed: {0}")]
	Teardown(String),

	#[error("transport unavailable: {0}")]
	Unavailable(String),
}

/// Result of a liveness probe against a session's transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Liveness {
	/// Traffic is still flowing; keep the session.
	Alive,
	/// The peer went away; the session may be reaped.
	Dead,
	/// The probe itself could not run. Not a reason to reap.
	ProbeFailed(String),
}

/// Transport-side handle attached to a session by the config negotiator.
///
/// The session core never knows which tunnel technology sits behind it.
#[async_trait]
pub trait SessionTransport: Send + Sync {
	async fn probe_liveness(&self) -> Liveness;

	async fn teardown(&self) -> Result<(), TransportError>;
}
