// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::wireguard::{EndpointError, KeyError, NatError};
use myst_session::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("invalid consumer key: {0}")]
	ConsumerKey(#[source] serde_json::Error),

	#[error("invalid public key: {0}")]
	PublicKey(#[from] KeyError),

	#[error("connection endpoint error: {0}")]
	Endpoint(#[from] EndpointError),

	#[error("NAT error: {0}")]
	Nat(#[from] NatError),

	#[error("unknown service type: {0}")]
	UnknownServiceType(String),

	#[error("session error: {0}")]
	Session(#[from] SessionError),

	#[error("serialization error: {0}")]
	Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
