// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-session payment processing contract.

use async_trait::async_trait;
use myst_market::ServiceProposal;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
	#[error("payment orchestrator failed to start: {0}")]
	Start(String),

	#[error("payment orchestrator failed to stop: {0}")]
	Stop(String),

	#[error("promise rejected: {0}")]
	PromiseRejected(String),

	#[error("settlement failed: {0}")]
	Settlement(String),
}

/// Asynchronous errors emitted by a running orchestrator.
///
/// A closed channel means no further errors will arrive.
pub type PaymentErrors = mpsc::Receiver<PaymentError>;

/// Validates and settles payment promises for the life of one session.
#[async_trait]
pub trait PaymentOrchestrator: Send + Sync {
	async fn start(&self, proposal: &ServiceProposal) -> Result<PaymentErrors, PaymentError>;

	/// Called at most once per successful `start`.
	async fn stop(&self) -> Result<(), PaymentError>;
}

/// Produces a fresh orchestrator for every created session.
pub trait PaymentOrchestratorFactory: Send + Sync {
	fn create(&self) -> Arc<dyn PaymentOrchestrator>;
}

impl<F> PaymentOrchestratorFactory for F
where
	F: Fn() -> Arc<dyn PaymentOrchestrator> + Send + Sync,
{
	fn create(&self) -> Arc<dyn PaymentOrchestrator> {
		self()
	}
}

/// Orchestrator for free proposals: accepts everything, never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPaymentOrchestrator;

#[async_trait]
impl PaymentOrchestrator for NoopPaymentOrchestrator {
	async fn start(&self, _proposal: &ServiceProposal) -> Result<PaymentErrors, PaymentError> {
		let (_tx, rx) = mpsc::channel(1);
		Ok(rx)
	}

	async fn stop(&self) -> Result<(), PaymentError> {
		Ok(())
	}
}
