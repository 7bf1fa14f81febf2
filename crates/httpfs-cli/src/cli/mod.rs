//! CLI for the httpfs read-only HTTP filesystem adapter.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use httpfs_core::config::{self, AdapterConfig};
use httpfs_core::HttpAdapter;
use std::path::PathBuf;

use commands::{run_cat, run_dir_exists, run_exists, run_stat, run_visibility};

/// Top-level CLI: a base URL, transport options, and one read-only command.
#[derive(Debug, Parser)]
#[command(name = "httpfs")]
#[command(about = "httpfs: inspect a remote HTTP tree like a read-only filesystem", long_about = None)]
pub struct Cli {
    /// Base URL of the remote tree. Credentials in the URL mark every path private.
    pub base: String,

    /// Probe with GET instead of HEAD (for origins that reject HEAD).
    #[arg(long, global = true)]
    pub no_head: bool,

    /// Skip TLS peer and host name verification.
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Extra request header, e.g. -H "Authorization: Bearer xyz". Repeatable.
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE", global = true)]
    pub headers: Vec<String>,

    /// Proxy URL for all requests.
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// Per-request deadline in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Config file to use instead of ~/.config/httpfs/config.toml.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether a file exists (prints true/false).
    Exists {
        /// Path relative to the base URL.
        path: String,
    },

    /// Check whether a directory exists (prints true/false).
    DirExists {
        /// Path relative to the base URL.
        path: String,
    },

    /// Show size, last-modified time and MIME type of a file.
    Stat {
        /// Path relative to the base URL.
        path: String,
        /// Print the metadata record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the visibility reported for a path.
    Visibility {
        /// Path relative to the base URL.
        path: String,
    },

    /// Write a file's contents to stdout.
    Cat {
        /// Path relative to the base URL.
        path: String,
        /// Fetch the whole body before writing instead of streaming it.
        #[arg(long)]
        buffered: bool,
    },
}

impl Cli {
    /// Config file values first, then command-line overrides.
    pub fn adapter_config(&self) -> Result<AdapterConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => config::load_or_init()?,
        };
        self.apply_overrides(&mut cfg)?;
        Ok(cfg)
    }

    pub fn apply_overrides(&self, cfg: &mut AdapterConfig) -> Result<()> {
        if self.no_head {
            cfg.supports_head = false;
        }
        if self.insecure {
            cfg.request.verify_peer = false;
            cfg.request.verify_host = false;
        }
        for raw in &self.headers {
            let (name, value) = parse_header_arg(raw)?;
            cfg.request.headers.insert(name, value);
        }
        if let Some(proxy) = &self.proxy {
            cfg.request.proxy = Some(proxy.clone());
        }
        if let Some(secs) = self.timeout {
            cfg.request.timeout_secs = secs;
        }
        Ok(())
    }
}

/// Splits `"Name: value"` into its parts.
fn parse_header_arg(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .with_context(|| format!("header {raw:?} must look like \"Name: value\""))?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("header {raw:?} has an empty name");
    }
    Ok((name.to_string(), value.trim().to_string()))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.adapter_config()?;
        tracing::debug!(
            supports_head = cfg.supports_head,
            success_statuses = ?cfg.success_statuses,
            header_names = ?cfg.request.headers.keys().collect::<Vec<_>>(),
            proxy = cfg.request.proxy.is_some(),
            verify_peer = cfg.request.verify_peer,
            "loaded config"
        );
        let adapter = HttpAdapter::with_config(&cli.base, cfg)?;

        match cli.command {
            CliCommand::Exists { path } => run_exists(&adapter, &path),
            CliCommand::DirExists { path } => run_dir_exists(&adapter, &path),
            CliCommand::Stat { path, json } => run_stat(&adapter, &path, json)?,
            CliCommand::Visibility { path } => run_visibility(&adapter, &path)?,
            CliCommand::Cat { path, buffered } => run_cat(&adapter, &path, buffered)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
