// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod common;

use common::*;
use myst_market::Identity;
use myst_session::{Liveness, PaymentError, SessionStorage, SessionTransport};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(20);

fn consumer() -> Identity {
	Identity::from_address("deadbeef")
}

async fn create_with(f: &Fixture, transport: &Arc<FakeTransport>) -> myst_session::Session {
	f.manager
		.create(
			consumer(),
			CURRENT_PROPOSAL_ID,
			json!("config_string"),
			Some(transport.clone() as Arc<dyn SessionTransport>),
		)
		.await
		.unwrap()
}

#[tokio::test]
async fn alive_session_is_never_reaped() {
	let f = fixture_with(FakeOrchestrator::default(), INTERVAL);
	let transport = FakeTransport::new(Liveness::Alive);
	let session = create_with(&f, &transport).await;

	assert!(wait_until(Duration::from_secs(2), || transport.probe_count() >= 10).await);

	assert!(f.storage.find(&session.id).is_some());
	assert_eq!(transport.teardown_count(), 0);
	assert_eq!(f.orchestrator.stops(), 0);
}

#[tokio::test]
async fn dead_session_is_reaped_within_one_interval() {
	let f = fixture_with(FakeOrchestrator::default(), INTERVAL);
	let transport = FakeTransport::new(Liveness::Dead);
	let session = create_with(&f, &transport).await;

	assert!(
		wait_until(Duration::from_secs(1), || f.storage.find(&session.id).is_none()).await,
		"inactive session was not reaped"
	);
	assert!(wait_until(Duration::from_secs(1), || transport.teardown_count() == 1).await);

	tokio::time::sleep(INTERVAL * 5).await;
	assert_eq!(transport.teardown_count(), 1);
	assert_eq!(transport.probe_count(), 1);
	assert_eq!(f.orchestrator.stops(), 1);
}

#[tokio::test]
async fn probe_failures_keep_monitoring() {
	let f = fixture_with(FakeOrchestrator::default(), INTERVAL);
	let transport = FakeTransport::new(Liveness::ProbeFailed("stats unavailable".to_string()));
	let session = create_with(&f, &transport).await;

	assert!(wait_until(Duration::from_secs(2), || transport.probe_count() >= 3).await);
	assert!(f.storage.find(&session.id).is_some());
	assert_eq!(transport.teardown_count(), 0);

	transport.set_liveness(Liveness::Dead);
	assert!(wait_until(Duration::from_secs(1), || f.storage.find(&session.id).is_none()).await);
	assert!(wait_until(Duration::from_secs(1), || transport.teardown_count() == 1).await);
}

#[tokio::test]
async fn explicit_destroy_stops_the_monitor() {
	let f = fixture_with(FakeOrchestrator::default(), INTERVAL);
	let transport = FakeTransport::new(Liveness::Alive);
	let session = create_with(&f, &transport).await;

	assert!(wait_until(Duration::from_secs(1), || transport.probe_count() >= 1).await);
	f.manager.destroy(&consumer(), &session.id).await.unwrap();

	let probes = transport.probe_count();
	tokio::time::sleep(INTERVAL * 5).await;
	assert_eq!(transport.probe_count(), probes);
	assert_eq!(transport.teardown_count(), 1);
}

#[tokio::test]
async fn payment_error_destroys_session() {
	let f = fixture_with(FakeOrchestrator::default(), Duration::from_secs(60));
	let transport = FakeTransport::new(Liveness::Alive);
	let session = create_with(&f, &transport).await;

	f.orchestrator
		.emit(PaymentError::PromiseRejected("invalid signature".to_string()))
		.await;

	assert!(
		wait_until(Duration::from_secs(1), || f.storage.find(&session.id).is_none()).await,
		"session survived a payment failure"
	);
	assert!(wait_until(Duration::from_secs(1), || transport.teardown_count() == 1).await);
	assert_eq!(f.orchestrator.stops(), 1);
}

#[tokio::test]
async fn session_without_transport_is_left_alone() {
	let f = fixture_with(FakeOrchestrator::default(), INTERVAL);
	let session = f
		.manager
		.create(consumer(), CURRENT_PROPOSAL_ID, json!("config_string"), None)
		.await
		.unwrap();

	tokio::time::sleep(INTERVAL * 5).await;

	assert!(f.storage.find(&session.id).is_some());
	assert_eq!(f.orchestrator.stops(), 0);
}

#[tokio::test]
async fn shutdown_stops_probing() {
	let f = fixture_with(FakeOrchestrator::default(), INTERVAL);
	let transport = FakeTransport::new(Liveness::Alive);
	create_with(&f, &transport).await;

	assert!(wait_until(Duration::from_secs(1), || transport.probe_count() >= 1).await);
	f.manager.shutdown().await;

	let probes = transport.probe_count();
	tokio::time::sleep(INTERVAL * 5).await;
	assert_eq!(transport.probe_count(), probes);
	assert_eq!(transport.teardown_count(), 1);
}

#[tokio::test]
async fn monitor_of_destroyed_session_spares_its_successor() {
	let f = fixture_with(FakeOrchestrator::default(), INTERVAL);
	let stale = GatedTransport::new(Liveness::Dead);
	let first = f
		.manager
		.create(
			consumer(),
			CURRENT_PROPOSAL_ID,
			json!("config_string"),
			Some(stale.clone() as Arc<dyn SessionTransport>),
		)
		.await
		.unwrap();

	assert!(wait_until(Duration::from_secs(1), || stale.probe_count() >= 1).await);
	f.manager.destroy(&consumer(), &first.id).await.unwrap();

	let fresh = FakeTransport::new(Liveness::Alive);
	let second = create_with(&f, &fresh).await;
	assert_eq!(second.id, first.id);

	stale.open();
	tokio::time::sleep(INTERVAL * 5).await;

	assert!(f.storage.find(&second.id).is_some());
	assert_eq!(fresh.teardown_count(), 0);
	assert_eq!(stale.teardown_count(), 1);
	assert_eq!(f.orchestrator.stops(), 1);
	assert_eq!(f.manager.session_count().await, 1);
}

#[tokio::test]
async fn dropping_the_manager_stops_monitors() {
	let Fixture {
		manager,
		storage,
		orchestrator,
	} = fixture_with(FakeOrchestrator::default(), INTERVAL);
	let transport = FakeTransport::new(Liveness::Alive);
	let session = manager
		.create(
			consumer(),
			CURRENT_PROPOSAL_ID,
			json!("config_string"),
			Some(transport.clone() as Arc<dyn SessionTransport>),
		)
		.await
		.unwrap();

	assert!(wait_until(Duration::from_secs(1), || transport.probe_count() >= 1).await);
	drop(manager);

	tokio::time::sleep(INTERVAL * 2).await;
	let probes = transport.probe_count();
	tokio::time::sleep(INTERVAL * 5).await;

	assert_eq!(transport.probe_count(), probes);
	assert!(storage.find(&session.id).is_some());
	assert_eq!(transport.teardown_count(), 0);
	assert_eq!(orchestrator.stops(), 0);
}
