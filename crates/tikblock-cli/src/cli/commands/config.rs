//! `tikblock config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use tikblock_core::DeviceEndpoint;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if ctx.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    let unset = || "(not set)".dimmed().to_string();
    let show = |name: &str, value: Option<String>| {
        println!("  {} {}", format!("{name}:").bold(), value.unwrap_or_else(unset));
    };

    println!("{}", "Current Configuration:".bold());
    println!();
    show("device", config.device.clone());
    show("username", config.username.clone());
    show("feed_url", config.feed_url.clone());
    show("list", config.list.clone());
    show("timeout_secs", config.timeout_secs.map(|t| t.to_string()));
    show("concurrency", config.concurrency.map(|c| c.to_string()));
    show("accept_invalid_certs", Some(config.accept_invalid_certs.to_string()));
    show("output_format", config.output_format.map(|f| f.to_string()));

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.config.clone();
    apply(&mut config, key, value)?;
    config.save(&ctx.config_path)?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

/// Validate `value` and store it under `key`.
pub fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "device" => {
            DeviceEndpoint::parse(value)?;
            config.device = Some(value.trim().to_string());
        }
        "username" => config.username = Some(value.to_string()),
        "feed_url" | "feed" => config.feed_url = Some(value.to_string()),
        "list" => config.list = Some(value.to_string()),
        "timeout_secs" | "timeout" => config.timeout_secs = Some(value.parse()?),
        "concurrency" => config.concurrency = Some(value.parse()?),
        "accept_invalid_certs" | "insecure" => config.accept_invalid_certs = value.parse()?,
        "output_format" | "output" => config.output_format = Some(value.parse()?),
        "password" => anyhow::bail!(
            "The password is never stored.\n\
             Set TIKBLOCK_PASSWORD or enter it when prompted."
        ),
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 device               - Router IPv4 address\n  \
                 username             - RouterOS username\n  \
                 feed_url             - Feed to download\n  \
                 list                 - Address-list name\n  \
                 timeout_secs         - Per-request timeout, 0 for none\n  \
                 concurrency          - Uploads in flight at once\n  \
                 accept_invalid_certs - Accept self-signed certificates (true/false)\n  \
                 output_format        - Default output format (pretty/json)",
                key
            );
        }
    }

    Ok(())
}
