//! Application settings loaded via OrthoConfig.
//!
//! Values come from `ITEMS_*` environment variables, command-line flags, or a
//! configuration file, layered by OrthoConfig.

use std::ffi::OsString;

use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the HTTP listener and startup seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ITEMS")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Skip loading the sample items on startup.
    #[ortho_config(default = false)]
    pub sample_data_disabled: bool,
}

impl AppSettings {
    /// Load settings from `args` layered over `ITEMS_*` environment variables.
    ///
    /// The first argument is the program name, as with `std::env::args_os`.
    ///
    /// # Errors
    /// Returns an error when a flag or environment value fails to parse.
    pub fn load_from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|err| eyre!("failed to load settings: {err}"))
    }

    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Address in the `(host, port)` form accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }

    pub fn sample_data_enabled(&self) -> bool {
        !self.sample_data_disabled
    }
}
