// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::error::BoxError;
use crate::session::SessionId;
use uuid::Uuid;

/// Source of unique session identifiers.
pub trait IdGenerator: Send + Sync {
	fn generate(&self) -> Result<SessionId, BoxError>;
}

impl<F> IdGenerator for F
where
	F: Fn() -> Result<SessionId, BoxError> + Send + Sync,
{
	fn generate(&self) -> Result<SessionId, BoxError> {
		self()
	}
}

/// Random v4 UUIDs rendered as strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
	fn generate(&self) -> Result<SessionId, BoxError> {
		Ok(SessionId::new(Uuid::new_v4().to_string()))
	}
}
