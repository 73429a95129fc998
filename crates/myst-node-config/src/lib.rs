// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the provider node.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`MYST_NODE_*`)
//!
//! # Usage
//!
//! ```ignore
//! use myst_node_config::load_config;
//!
//! let config = load_config()?;
//! println!("idle check every {:?}", config.session.idle_check_interval());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::NodeConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
	pub session: SessionConfig,
	pub openvpn: OpenvpnConfig,
	pub wireguard: WireguardConfig,
	pub location: LocationConfig,
	pub identity: IdentityConfig,
	pub services: ServicesConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`MYST_NODE_*`)
/// 2. Config file (`/etc/myst/node.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<NodeConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<NodeConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource), Box::new(EnvSource)];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<NodeConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<NodeConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = NodeConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: NodeConfigLayer) -> Result<NodeConfig, ConfigError> {
	let config = NodeConfig {
		session: layer.session.unwrap_or_default().finalize(),
		openvpn: layer.openvpn.unwrap_or_default().finalize(),
		wireguard: layer.wireguard.unwrap_or_default().finalize(),
		location: layer.location.unwrap_or_default().finalize(),
		identity: layer.identity.unwrap_or_default().finalize(),
		services: layer.services.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		idle_check_interval_secs = config.session.idle_check_interval_secs,
		openvpn_protocol = %config.openvpn.protocol,
		openvpn_port = config.openvpn.port,
		country = config.location.country.as_deref().unwrap_or("auto"),
		identity_configured = config.identity.address.is_some(),
		services = ?config.services.types,
		"Node configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &NodeConfig) -> Result<(), ConfigError> {
	if config.session.idle_check_interval_secs == 0 {
		return Err(ConfigError::Validation(
			"session.idle_check_interval_secs must be greater than zero".to_string(),
		));
	}

	if config.services.types.is_empty() {
		return Err(ConfigError::Validation(
			"at least one service type must be enabled".to_string(),
		));
	}

	if config.identity.passphrase.is_some() && config.identity.address.is_none() {
		return Err(ConfigError::Validation(
			"identity.passphrase is set but identity.address is not".to_string(),
		));
	}

	Ok(())
}
