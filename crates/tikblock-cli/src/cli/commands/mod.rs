//! Command implementations.

pub mod check;
pub mod config;
pub mod sync;

use anyhow::Result;
use dialoguer::{Input, Password};
use std::path::PathBuf;
use std::time::Duration;
use tikblock_client::{RouterOsClient, TlsPolicy, Transport, TransportConfig};
use tikblock_core::{Credential, DeviceEndpoint};
use tracing::debug;

use super::args::DeviceArgs;
use crate::config::Config;
use crate::output::{ConsoleReporter, OutputFormat};

/// Environment variable holding the RouterOS password
pub const PASSWORD_ENV: &str = "TIKBLOCK_PASSWORD";

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration file
    pub config: Config,

    /// Where the configuration lives
    pub config_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Username and password, from flags, environment, config or prompts.
    pub fn credential(&self, args: &DeviceArgs) -> Result<Credential> {
        let username = match args.username.clone().or_else(|| self.config.username.clone()) {
            Some(username) => username,
            None => Input::<String>::new()
                .with_prompt("Username")
                .interact_text()?,
        };

        let secret = match std::env::var(PASSWORD_ENV) {
            Ok(secret) => secret,
            Err(_) => Password::new().with_prompt("Password").interact()?,
        };

        Ok(Credential::new(username, secret)?)
    }

    /// Device address, from flag, config or prompt.
    pub fn endpoint(&self, args: &DeviceArgs) -> Result<DeviceEndpoint> {
        let device = match args.device.clone().or_else(|| self.config.device.clone()) {
            Some(device) => device,
            None => Input::<String>::new()
                .with_prompt("Router IP")
                .interact_text()?,
        };

        Ok(DeviceEndpoint::parse(&device)?)
    }

    /// HTTP transport shared by the device client and the feed fetcher.
    pub fn transport(&self, args: &DeviceArgs) -> Result<Transport> {
        let mut config = TransportConfig::default()
            .tls(TlsPolicy::from_accept_invalid(args.insecure || self.config.accept_invalid_certs));

        if let Some(secs) = args.timeout.or(self.config.timeout_secs) {
            config = config.timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }

        debug!(?config, "transport settings");
        Ok(Transport::new(config)?)
    }

    /// Collect every operator input, then build the device client.
    ///
    /// Nothing touches the network until this returns.
    pub fn client(&self, args: &DeviceArgs) -> Result<(RouterOsClient, Transport)> {
        let credential = self.credential(args)?;
        let endpoint = self.endpoint(args)?;
        let transport = self.transport(args)?;

        let mut builder =
            RouterOsClient::builder(endpoint, credential).transport(transport.clone());
        if let Some(url) = &args.base_url {
            builder = builder.base_url(url);
        }

        Ok((builder.build()?, transport))
    }

    /// Console reporter for the selected format
    pub const fn reporter(&self) -> ConsoleReporter {
        ConsoleReporter::new(self.output_format, self.verbose)
    }
}
