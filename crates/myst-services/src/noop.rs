// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Service that negotiates nothing. Used for testing the session flow.

use crate::error::Result;
use crate::negotiator::{ConfigNegotiator, NegotiatedConfig};
use async_trait::async_trait;
use myst_market::{Location, ServiceDefinition, ServiceProposal};
use serde_json::Value;

pub const SERVICE_TYPE: &str = "noop";
pub const PAYMENT_METHOD: &str = "NOOP";

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopService;

#[async_trait]
impl ConfigNegotiator for NoopService {
	async fn provide_config(&self, _consumer_key: &Value) -> Result<NegotiatedConfig> {
		Ok(NegotiatedConfig::without_transport(Value::Null))
	}
}

pub fn proposal(country: &str) -> ServiceProposal {
	ServiceProposal {
		service_type: SERVICE_TYPE.to_string(),
		service_definition: ServiceDefinition {
			location: Location {
				country: country.to_string(),
			},
		},
		payment_method_type: PAYMENT_METHOD.to_string(),
		..Default::default()
	}
}
