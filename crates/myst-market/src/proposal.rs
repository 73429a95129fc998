// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::identity::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
	#[default]
	#[serde(rename = "MYST")]
	Myst,
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Currency::Myst => write!(f, "MYST"),
		}
	}
}

/// Amount in the smallest unit of `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Money {
	pub amount: u64,
	pub currency: Currency,
}

impl Money {
	pub fn new(amount: u64, currency: Currency) -> Self {
		Self { amount, currency }
	}

	pub fn is_zero(&self) -> bool {
		self.amount == 0
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
	pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDefinition {
	pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentMethod {
	pub price: Money,
}

/// A service offering published by a provider.
///
/// Sessions are always created against exactly one proposal, identified by
/// `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceProposal {
	pub id: i64,
	#[serde(default)]
	pub provider_id: Identity,
	pub service_type: String,
	pub service_definition: ServiceDefinition,
	pub payment_method_type: String,
	pub payment_method: PaymentMethod,
}

impl ServiceProposal {
	pub fn is_free(&self) -> bool {
		self.payment_method.price.is_zero()
	}

	pub fn country(&self) -> &str {
		&self.service_definition.location.country
	}
}
