//! Command line and environment configuration.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command line configuration for the portal.
///
/// Every deployment switch also reads from an environment variable, so
/// hosted environments configure the portal without flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalogo", version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// SQLite database path
    #[arg(long, env = "DATABASE_PATH", default_value = "db.sqlite3")]
    pub database: PathBuf,

    /// Local media root directory
    #[arg(long, env = "MEDIA_ROOT", default_value = "media")]
    pub media_root: PathBuf,

    /// URL prefix for locally served media
    #[arg(long, env = "MEDIA_URL", default_value = "/media/")]
    pub media_url: String,

    /// Base URL of the external media host; when set, stored media
    /// resolve against it instead of the local media root
    #[arg(long, env = "MEDIA_HOST_URL")]
    pub media_host_url: Option<String>,

    /// Shared token required by the Markdown preview endpoint
    #[arg(long, env = "PREVIEW_TOKEN")]
    pub preview_token: Option<String>,

    /// Disable Markdown rendering in the preview endpoint
    #[arg(long, env = "RICHTEXT_DISABLED")]
    pub richtext_disabled: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Portal subcommands. Without one, the server runs.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the portal HTTP server
    Serve,
    /// Import a JSON fixture of portal records
    LoadFixture {
        /// Fixture file path
        path: PathBuf,
    },
    /// Re-home stored media files into the canonical layout
    MigrateMedia,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the media URL prefix is empty.
    pub fn validate(&self) -> Result<()> {
        if self.media_url.trim().is_empty() {
            bail!("Media URL prefix must not be empty");
        }

        Ok(())
    }
}
