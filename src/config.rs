//! Configuration Module
//!
//! Command-line parsing and the resolved server configuration.

use std::time::Duration;

use clap::Parser;

use crate::cache::MAX_CONTENT_SIZE;

/// Default listening port
pub const DEFAULT_PORT: u16 = 7962;

/// Default time between reaper sweeps
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Default time an entry may stay untouched before it is evicted
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Share a small piece of text between browsers and scripts.
#[derive(Parser, Debug, Clone)]
#[command(name = "clipsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on (all interfaces)
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub port: u16,
    /// How often the reaper wakes
    pub check_interval: Duration,
    /// How long an entry may go untouched before eviction
    pub idle_timeout: Duration,
    /// Largest request body accepted, in bytes
    pub max_body_size: usize,
}

impl Config {
    /// Builds a Config from parsed command-line arguments.
    ///
    /// Only the port is exposed on the command line; everything else keeps
    /// its default.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            port: cli.port,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            check_interval: DEFAULT_CHECK_INTERVAL,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            max_body_size: MAX_CONTENT_SIZE,
        }
    }
}
