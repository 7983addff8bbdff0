use super::defaults::{DEFAULT_HOST, DEFAULT_MONITOR_INTERVAL_MS};
use super::parse_positive_ms;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use timestream::clients::single_request::SingleRequest;
use timestream::mode::BenchmarkMode;

#[derive(Parser, Debug, Clone)]
pub struct ClientArgs {
    #[arg(long, value_enum)]
    pub mode: BenchmarkMode,

    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Defaults to the port of the chosen mode
    #[arg(long)]
    pub port: Option<u16>,

    /// Number of records to request
    #[arg(long)]
    pub count: u64,

    /// Journal the request record is appended to
    #[arg(long)]
    pub log_file: PathBuf,

    /// Name used in diagnostics, `<mode>-client-<count>` by default
    #[arg(long)]
    pub logger_name: Option<String>,

    /// Usage journal this process samples itself into for its whole lifetime
    #[arg(long)]
    pub usage_file: Option<PathBuf>,

    /// Self-sampling interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_MONITOR_INTERVAL_MS, value_parser = parse_positive_ms)]
    pub usage_interval_ms: u64,
}

impl ClientArgs {
    pub fn logger_name(&self) -> String {
        self.logger_name.clone().unwrap_or_else(|| {
            format!("{}-client-{}", self.mode.logger_prefix(), self.count)
        })
    }

    pub fn usage_interval(&self) -> Duration {
        Duration::from_millis(self.usage_interval_ms)
    }

    pub fn to_request(&self) -> SingleRequest {
        SingleRequest {
            mode: self.mode,
            host: self.host.clone(),
            port: self.port.unwrap_or_else(|| self.mode.default_port()),
            count: self.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{BenchArgs, BenchCommand};

    #[test]
    fn client_should_default_port_and_logger_from_mode() {
        let args = BenchArgs::try_parse_from([
            "timestream-bench",
            "client",
            "--mode",
            "rest_proto",
            "--count",
            "10",
            "--log-file",
            "client-10-items.jsonl",
        ])
        .unwrap();
        let BenchCommand::Client(client) = args.command else {
            panic!("Expected the client command");
        };

        assert_eq!(client.logger_name(), "rest_proto-client-10");
        let request = client.to_request();
        assert_eq!(request.port, 8000);
        assert_eq!(request.host, "127.0.0.1");
        assert_eq!(request.count, 10);
        assert!(client.usage_file.is_none());
        assert_eq!(client.usage_interval(), Duration::from_millis(2));
    }

    #[test]
    fn zero_usage_interval_should_be_rejected() {
        let result = BenchArgs::try_parse_from([
            "timestream-bench",
            "client",
            "--mode",
            "grpc",
            "--count",
            "1",
            "--log-file",
            "client-1-items.jsonl",
            "--usage-interval-ms",
            "0",
        ]);
        assert!(result.is_err());
    }
}
