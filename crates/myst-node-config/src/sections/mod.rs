// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod identity;
mod location;
mod openvpn;
mod services;
mod session;
mod wireguard;

pub use identity::{IdentityConfig, IdentityConfigLayer, Passphrase};
pub use location::{LocationConfig, LocationConfigLayer};
pub use openvpn::{OpenvpnConfig, OpenvpnConfigLayer, OpenvpnProtocol};
pub use services::{ServicesConfig, ServicesConfigLayer};
pub use session::{SessionConfig, SessionConfigLayer};
pub use wireguard::{WireguardConfig, WireguardConfigLayer};
