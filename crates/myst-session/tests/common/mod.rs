// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use async_trait::async_trait;
use myst_market::ServiceProposal;
use myst_session::{
	BoxError, Liveness, PaymentError, PaymentErrors, PaymentOrchestrator,
	PaymentOrchestratorFactory, SessionId, SessionManager, SessionManagerConfig, SessionTransport,
	StorageMemory, TransportError,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};

pub const CURRENT_PROPOSAL_ID: i64 = 68;

pub fn current_proposal() -> ServiceProposal {
	ServiceProposal {
		id: CURRENT_PROPOSAL_ID,
		..Default::default()
	}
}

pub fn mocked_id() -> Result<SessionId, BoxError> {
	Ok(SessionId::new("mocked-id"))
}

#[derive(Default)]
pub struct FakeOrchestrator {
	pub started: AtomicBool,
	pub proposal: Mutex<Option<ServiceProposal>>,
	pub stop_calls: AtomicUsize,
	pub fail_start: bool,
	pub fail_stop: bool,
	errors_tx: Mutex<Option<mpsc::Sender<PaymentError>>>,
}

impl FakeOrchestrator {
	pub fn failing_start() -> Self {
		Self {
			fail_start: true,
			..Default::default()
		}
	}

	pub fn failing_stop() -> Self {
		Self {
			fail_stop: true,
			..Default::default()
		}
	}

	pub fn is_started(&self) -> bool {
		self.started.load(Ordering::SeqCst)
	}

	pub fn stops(&self) -> usize {
		self.stop_calls.load(Ordering::SeqCst)
	}

	pub async fn emit(&self, error: PaymentError) {
		let tx = self.errors_tx.lock().clone();
		if let Some(tx) = tx {
			tx.send(error).await.unwrap();
		}
	}
}

#[async_trait]
impl PaymentOrchestrator for FakeOrchestrator {
	async fn start(&self, proposal: &ServiceProposal) -> Result<PaymentErrors, PaymentError> {
		if self.fail_start {
			return Err(PaymentError::Start("balance unavailable".to_string()));
		}
		self.started.store(true, Ordering::SeqCst);
		*self.proposal.lock() = Some(proposal.clone());

		let (tx, rx) = mpsc::channel(1);
		*self.errors_tx.lock() = Some(tx);
		Ok(rx)
	}

	async fn stop(&self) -> Result<(), PaymentError> {
		self.stop_calls.fetch_add(1, Ordering::SeqCst);
		self.started.store(false, Ordering::SeqCst);
		if self.fail_stop {
			return Err(PaymentError::Stop("settlement pending".to_string()));
		}
		Ok(())
	}
}

/// Hands out the same orchestrator to every session so tests can inspect it.
pub struct SharedOrchestrator(pub Arc<FakeOrchestrator>);

impl PaymentOrchestratorFactory for SharedOrchestrator {
	fn create(&self) -> Arc<dyn PaymentOrchestrator> {
		self.0.clone()
	}
}

pub struct FakeTransport {
	liveness: Mutex<Liveness>,
	pub probes: AtomicUsize,
	pub teardowns: AtomicUsize,
	pub fail_teardown: bool,
}

impl FakeTransport {
	pub fn new(liveness: Liveness) -> Arc<Self> {
		Arc::new(Self {
			liveness: Mutex::new(liveness),
			probes: AtomicUsize::new(0),
			teardowns: AtomicUsize::new(0),
			fail_teardown: false,
		})
	}

	pub fn failing_teardown() -> Arc<Self> {
		Arc::new(Self {
			liveness: Mutex::new(Liveness::Alive),
			probes: AtomicUsize::new(0),
			teardowns: AtomicUsize::new(0),
			fail_teardown: true,
		})
	}

	pub fn set_liveness(&self, liveness: Liveness) {
		*self.liveness.lock() = liveness;
	}

	pub fn probe_count(&self) -> usize {
		self.probes.load(Ordering::SeqCst)
	}

	pub fn teardown_count(&self) -> usize {
		self.teardowns.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl SessionTransport for FakeTransport {
	async fn probe_liveness(&self) -> Liveness {
		self.probes.fetch_add(1, Ordering::SeqCst);
		self.liveness.lock().clone()
	}

	async fn teardown(&self) -> Result<(), TransportError> {
		self.teardowns.fetch_add(1, Ordering::SeqCst);
		if self.fail_teardown {
			return Err(TransportError::Teardown("interface busy".to_string()));
		}
		Ok(())
	}
}

/// Transport whose probes block until [`GatedTransport::open`] is called,
/// then report `liveness`.
pub struct GatedTransport {
	gate: Notify,
	liveness: Liveness,
	pub probes: AtomicUsize,
	pub teardowns: AtomicUsize,
}

impl GatedTransport {
	pub fn new(liveness: Liveness) -> Arc<Self> {
		Arc::new(Self {
			gate: Notify::new(),
			liveness,
			probes: AtomicUsize::new(0),
			teardowns: AtomicUsize::new(0),
		})
	}

	pub fn open(&self) {
		self.gate.notify_waiters();
	}

	pub fn probe_count(&self) -> usize {
		self.probes.load(Ordering::SeqCst)
	}

	pub fn teardown_count(&self) -> usize {
		self.teardowns.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl SessionTransport for GatedTransport {
	async fn probe_liveness(&self) -> Liveness {
		let opened = self.gate.notified();
		self.probes.fetch_add(1, Ordering::SeqCst);
		opened.await;
		self.liveness.clone()
	}

	async fn teardown(&self) -> Result<(), TransportError> {
		self.teardowns.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}
}

pub struct Fixture {
	pub manager: SessionManager,
	pub storage: Arc<StorageMemory>,
	pub orchestrator: Arc<FakeOrchestrator>,
}

pub fn fixture_with(orchestrator: FakeOrchestrator, interval: Duration) -> Fixture {
	let storage = Arc::new(StorageMemory::new());
	let orchestrator = Arc::new(orchestrator);
	let manager = SessionManager::new(
		current_proposal(),
		Arc::new(mocked_id),
		storage.clone(),
		Arc::new(SharedOrchestrator(orchestrator.clone())),
		SessionManagerConfig::with_idle_check_interval(interval),
	);
	Fixture {
		manager,
		storage,
		orchestrator,
	}
}

pub fn fixture() -> Fixture {
	fixture_with(FakeOrchestrator::default(), Duration::from_secs(60))
}

pub async fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
	F: FnMut() -> bool,
{
	let deadline = tokio::time::Instant::now() + timeout;
	while tokio::time::Instant::now() < deadline {
		if condition() {
			return true;
		}
		tokio::time::sleep(Duration::from_millis(5)).await;
	}
	condition()
}
