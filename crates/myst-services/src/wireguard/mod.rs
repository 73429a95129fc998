// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! WireGuard service: one endpoint per session, NAT towards the outbound IP.

mod endpoint;
mod keys;
mod nat;
mod service;

pub use endpoint::{
	ConnectionEndpoint, ConnectionEndpointFactory, ConsumerConfig, EndpointError, PeerStats,
	ProviderConfig, ServiceConfig,
};
pub use keys::{KeyError, WgPublicKey, KEY_LEN};
pub use nat::{NatError, NatService, RuleForwarding};
pub use service::{ConsumerKey, WireguardService, WireguardTransport};

use myst_market::{Currency, Location, Money, PaymentMethod, ServiceDefinition, ServiceProposal};

pub const SERVICE_TYPE: &str = "wireguard";
pub const PAYMENT_METHOD: &str = "WG";

/// Free WireGuard proposal for `country`.
pub fn proposal(country: &str) -> ServiceProposal {
	ServiceProposal {
		service_type: SERVICE_TYPE.to_string(),
		service_definition: ServiceDefinition {
			location: Location {
				country: country.to_string(),
			},
		},
		payment_method_type: PAYMENT_METHOD.to_string(),
		payment_method: PaymentMethod {
			price: Money::new(0, Currency::Myst),
		},
		..Default::default()
	}
}
