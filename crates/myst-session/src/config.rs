// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

pub const DEFAULT_IDLE_CHECK_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionManagerConfig {
	/// How often each session's transport is probed for liveness.
	pub idle_check_interval: Duration,
}

impl SessionManagerConfig {
	pub fn with_idle_check_interval(interval: Duration) -> Self {
		Self {
			idle_check_interval: interval,
		}
	}
}

impl Default for SessionManagerConfig {
	fn default() -> Self {
		Self {
			idle_check_interval: DEFAULT_IDLE_CHECK_INTERVAL,
		}
	}
}
