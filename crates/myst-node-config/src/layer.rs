// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Deserialize;

use crate::sections::{
	IdentityConfigLayer, LocationConfigLayer, OpenvpnConfigLayer, ServicesConfigLayer,
	SessionConfigLayer, WireguardConfigLayer,
};

/// One source's view of the configuration. Every section is optional so
/// sources only override what they set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeConfigLayer {
	pub session: Option<SessionConfigLayer>,
	pub openvpn: Option<OpenvpnConfigLayer>,
	pub wireguard: Option<WireguardConfigLayer>,
	pub location: Option<LocationConfigLayer>,
	pub identity: Option<IdentityConfigLayer>,
	pub services: Option<ServicesConfigLayer>,
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(existing), Some(other)) => merge(existing, other),
		(None, Some(other)) => *base = Some(other),
		(_, None) => {}
	}
}

impl NodeConfigLayer {
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.session, other.session, SessionConfigLayer::merge);
		merge_section(&mut self.openvpn, other.openvpn, OpenvpnConfigLayer::merge);
		merge_section(&mut self.wireguard, other.wireguard, WireguardConfigLayer::merge);
		merge_section(&mut self.location, other.location, LocationConfigLayer::merge);
		merge_section(&mut self.identity, other.identity, IdentityConfigLayer::merge);
		merge_section(&mut self.services, other.services, ServicesConfigLayer::merge);
	}
}
