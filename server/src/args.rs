use crate::configs::server::ServerConfig;
use clap::Parser;
use std::path::PathBuf;
use timestream::mode::BenchmarkMode;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Timestream record server", long_about = None)]
pub struct Args {
    /// Backend stack to serve
    #[arg(long, value_enum)]
    pub mode: BenchmarkMode,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on, defaults to the port of the selected mode
    #[arg(long)]
    pub port: Option<u16>,

    /// Number of prototype records to pre-allocate
    #[arg(long)]
    pub pool_size: u64,

    /// Name attached to every diagnostic line of this process
    #[arg(long)]
    pub logger_name: Option<String>,

    /// Path of the JSON-lines RPC journal
    #[arg(long)]
    pub log_file: PathBuf,

    /// Diagnostic log filter, e.g. `info` or `server=debug`
    #[arg(long, env = "TIMESTREAM_LOG", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.mode.default_port())
    }

    pub fn logger_name(&self) -> String {
        self.logger_name
            .clone()
            .unwrap_or_else(|| format!("{}-server-{}", self.mode.logger_prefix(), self.pool_size))
    }

    pub fn to_config(&self) -> ServerConfig {
        ServerConfig {
            mode: self.mode,
            pool_size: self.pool_size,
            log_file: self.log_file.clone(),
        }
    }
}
