// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::NodeConfigLayer;
use crate::sections::{
	IdentityConfigLayer, LocationConfigLayer, OpenvpnConfigLayer, OpenvpnProtocol, Passphrase,
	ServicesConfigLayer, SessionConfigLayer, WireguardConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<NodeConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<NodeConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(NodeConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/myst/node.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<NodeConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(NodeConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: NodeConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: MYST_NODE_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<NodeConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_from_lookup(|name| std::env::var(name).ok())
	}
}

/// Builds a layer from any variable lookup; `EnvSource` passes the process
/// environment.
pub(crate) fn load_from_lookup<F>(lookup: F) -> Result<NodeConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let env = Env { lookup };
	Ok(NodeConfigLayer {
		session: Some(SessionConfigLayer {
			idle_check_interval_secs: env.parse("MYST_NODE_SESSION_IDLE_CHECK_INTERVAL_SECS")?,
		}),
		openvpn: Some(OpenvpnConfigLayer {
			protocol: env.parse::<OpenvpnProtocol>("MYST_NODE_OPENVPN_PROTOCOL")?,
			port: env.parse("MYST_NODE_OPENVPN_PORT")?,
		}),
		wireguard: Some(WireguardConfigLayer {
			public_ip: env.parse::<IpAddr>("MYST_NODE_WIREGUARD_PUBLIC_IP")?,
			outbound_ip: env.parse::<IpAddr>("MYST_NODE_WIREGUARD_OUTBOUND_IP")?,
			handshake_timeout_secs: env.parse("MYST_NODE_WIREGUARD_HANDSHAKE_TIMEOUT_SECS")?,
		}),
		location: Some(LocationConfigLayer {
			country: env.var("MYST_NODE_LOCATION_COUNTRY"),
		}),
		identity: Some(IdentityConfigLayer {
			address: env.var("MYST_NODE_IDENTITY"),
			passphrase: env.secret("MYST_NODE_IDENTITY_PASSPHRASE")?,
		}),
		services: Some(ServicesConfigLayer {
			types: env.list("MYST_NODE_SERVICES"),
		}),
	})
}

struct Env<F> {
	lookup: F,
}

impl<F> Env<F>
where
	F: Fn(&str) -> Option<String>,
{
	fn var(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|s| !s.is_empty())
	}

	fn parse<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|e: T::Err| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("'{v}': {e}"),
			}),
			None => Ok(None),
		}
	}

	fn list(&self, name: &str) -> Option<Vec<String>> {
		self.var(name).map(|v| {
			v.split(',')
				.map(|s| s.trim().to_string())
				.filter(|s| !s.is_empty())
				.collect()
		})
	}

	/// Reads `NAME`, or the file named by `NAME_FILE` with trailing newlines
	/// trimmed.
	fn secret(&self, name: &str) -> Result<Option<Passphrase>, ConfigError> {
		if let Some(value) = self.var(name) {
			return Ok(Some(Passphrase::new(value)));
		}

		let file_var = format!("{name}_FILE");
		match self.var(&file_var) {
			Some(path) => {
				let content =
					std::fs::read_to_string(&path).map_err(|e| ConfigError::FileRead {
						path: PathBuf::from(&path),
						source: e,
					})?;
				Ok(Some(Passphrase::new(content.trim_end_matches(['\n', '\r']))))
			}
			None => Ok(None),
		}
	}
}
