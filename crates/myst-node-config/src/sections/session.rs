// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session lifecycle configuration section.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_IDLE_CHECK_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionConfigLayer {
	pub idle_check_interval_secs: Option<u64>,
}

impl SessionConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.idle_check_interval_secs.is_some() {
			self.idle_check_interval_secs = other.idle_check_interval_secs;
		}
	}

	pub fn finalize(self) -> SessionConfig {
		SessionConfig {
			idle_check_interval_secs: self
				.idle_check_interval_secs
				.unwrap_or(DEFAULT_IDLE_CHECK_INTERVAL_SECS),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
	/// Seconds between liveness probes of each active session.
	pub idle_check_interval_secs: u64,
}

impl SessionConfig {
	pub fn idle_check_interval(&self) -> Duration {
		Duration::from_secs(self.idle_check_interval_secs)
	}
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			idle_check_interval_secs: DEFAULT_IDLE_CHECK_INTERVAL_SECS,
		}
	}
}
