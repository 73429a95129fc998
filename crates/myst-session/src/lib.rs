// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider-side session lifecycle management.
//!
//! # Overview
//!
//! A [`SessionManager`] admits consumers onto the node's single pinned
//! [`ServiceProposal`](myst_market::ServiceProposal):
//!
//! 1. `create` checks the proposal, generates an ID, starts a per-session
//!    payment orchestrator, stores the session and spawns an idle monitor
//! 2. `destroy` checks ownership, stops the orchestrator, removes the session
//!    and tears down its transport
//! 3. the idle monitor probes transport liveness on a fixed interval and
//!    destroys sessions that went quiet or whose payments failed
//!
//! Create and destroy serialize on one manager-wide lock. Storage has its own
//! synchronization so monitors can look sessions up without that lock.
//!
//! # Example
//!
//! ```ignore
//! use myst_session::{SessionManager, SessionManagerConfig, StorageMemory, UuidIdGenerator};
//!
//! let manager = SessionManager::new(
//!     proposal,
//!     Arc::new(UuidIdGenerator),
//!     Arc::new(StorageMemory::new()),
//!     Arc::new(|| Arc::new(NoopPaymentOrchestrator) as Arc<dyn PaymentOrchestrator>),
//!     SessionManagerConfig::default(),
//! );
//!
//! let session = manager.create(consumer, proposal_id, config, Some(transport)).await?;
//! manager.destroy(&consumer, &session.id).await?;
//! ```

pub mod config;
pub mod error;
pub mod id_generator;
pub mod manager;
mod monitor;
pub mod payment;
pub mod session;
pub mod storage;
pub mod transport;

pub use config::SessionManagerConfig;
pub use error::{BoxError, Result, SessionError};
pub use id_generator::{IdGenerator, UuidIdGenerator};
pub use manager::SessionManager;
pub use payment::{
	NoopPaymentOrchestrator, PaymentError, PaymentErrors, PaymentOrchestrator,
	PaymentOrchestratorFactory,
};
pub use session::{ServiceConfiguration, Session, SessionId};
pub use storage::{SessionStorage, StorageMemory};
pub use transport::{Liveness, SessionTransport, TransportError};
