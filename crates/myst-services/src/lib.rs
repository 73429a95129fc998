// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Service types offered by the provider node.
//!
//! Each service implements [`ConfigNegotiator`]: given the consumer's
//! request it produces the session configuration and, when the service can
//! observe its tunnel, a [`SessionTransport`](myst_session::SessionTransport)
//! the idle monitor probes. [`SessionHandler`] glues a negotiator to a
//! [`SessionManager`](myst_session::SessionManager).

pub mod builder;
pub mod error;
pub mod handler;
pub mod negotiator;
pub mod noop;
pub mod openvpn;
pub mod service_type;
pub mod wireguard;

pub use builder::build_session_manager;
pub use error::{Result, ServiceError};
pub use handler::SessionHandler;
pub use negotiator::{ConfigNegotiator, NegotiatedConfig};
pub use noop::NoopService;
pub use openvpn::{OpenvpnService, VpnConfig};
pub use service_type::ServiceType;
pub use wireguard::WireguardService;
