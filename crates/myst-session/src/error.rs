// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::payment::PaymentError;
use crate::session::SessionId;
use crate::transport::TransportError;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SessionError {
	#[error("proposal does not exist: requested {requested}, serving {current}")]
	InvalidProposal { requested: i64, current: i64 },

	#[error("session does not exist: {0}")]
	SessionNotFound(SessionId),

	#[error("wrong session owner for session {session_id}")]
	WrongOwner { session_id: SessionId },

	#[error("failed to generate session id: {0}")]
	IdGeneration(#[source] BoxError),

	#[error("session id already in use: {0}")]
	DuplicateId(SessionId),

	#[error("payment error: {0}")]
	Payment(#[from] PaymentError),

	#[error("transport error: {0}")]
	Transport(#[from] TransportError),

	#[error("session manager is shutting down")]
	ShuttingDown,
}

impl SessionError {
	/// Errors caused by the caller's request rather than by the node.
	pub fn is_rejection(&self) -> bool {
		matches!(
			self,
			SessionError::InvalidProposal { .. }
				| SessionError::SessionNotFound(_)
				| SessionError::WrongOwner { .. }
		)
	}
}

pub type Result<T> = std::result::Result<T, SessionError>;
