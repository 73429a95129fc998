// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session storage keyed by session ID.

use crate::session::{Session, SessionId};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Concurrency-safe session store.
///
/// Implementations synchronize internally; callers hold no lock of their own
/// while calling in.
pub trait SessionStorage: Send + Sync {
	/// Inserts a session, replacing any session stored under the same ID.
	fn add(&self, session: Session);

	fn find(&self, id: &SessionId) -> Option<Session>;

	fn remove(&self, id: &SessionId);
}

#[derive(Default)]
pub struct StorageMemory {
	sessions: RwLock<HashMap<SessionId, Session>>,
}

impl StorageMemory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.sessions.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.sessions.read().is_empty()
	}
}

impl SessionStorage for StorageMemory {
	fn add(&self, session: Session) {
		self.sessions.write().insert(session.id.clone(), session);
	}

	fn find(&self, id: &SessionId) -> Option<Session> {
		self.sessions.read().get(id).cloned()
	}

	fn remove(&self, id: &SessionId) {
		self.sessions.write().remove(id);
	}
}
