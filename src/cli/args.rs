//! CLI argument definitions using clap
//!
//! Commands:
//! - starblog serve [--host] [--port] [--database-url]
//! - starblog seed [--database-url] [--file <path>]
//!
//! `HOST`, `PORT` and `DATABASE_URL` fill in any flag left out.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::config::{default_database_url, default_host, default_port};
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

/// Starblog - people, planets and favorites over HTTP
#[derive(Parser, Debug)]
#[command(name = "starblog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Load users, people and planets into the store
    Seed {
        #[command(flatten)]
        database: DatabaseArgs,

        /// JSON seed document (defaults to the bundled dataset)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value_t = default_database_url())]
    pub database_url: String,
}

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value_t = default_host())]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = default_port())]
    pub port: u16,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl From<ServerArgs> for HttpServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            database_url: args.database.database_url,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
