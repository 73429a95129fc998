// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Market primitives shared by the provider node.
//!
//! - [`Identity`]: the address of a consumer or provider
//! - [`ServiceProposal`]: an advertised service offering that sessions are
//!   created against

pub mod identity;
pub mod proposal;

pub use identity::Identity;
pub use proposal::{Currency, Location, Money, PaymentMethod, ServiceDefinition, ServiceProposal};
