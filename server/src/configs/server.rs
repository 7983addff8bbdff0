use crate::server_error::ServerError;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use timestream::mode::BenchmarkMode;

/// Everything a backend needs besides its listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub mode: BenchmarkMode,
    pub pool_size: u64,
    pub log_file: PathBuf,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.log_file.as_os_str().is_empty() {
            return Err(ServerError::InvalidConfiguration(
                "RPC journal path cannot be empty".to_string(),
            ));
        }

        if self.log_file.is_dir() {
            return Err(ServerError::InvalidConfiguration(format!(
                "RPC journal path: {} is a directory",
                self.log_file.display()
            )));
        }

        Ok(())
    }
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ mode: {}, pool_size: {}, log_file: {} }}",
            self.mode,
            self.pool_size,
            self.log_file.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_directory_as_journal_validation_should_fail() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            mode: BenchmarkMode::Grpc,
            pool_size: 1,
            log_file: dir.path().to_path_buf(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn given_file_path_validation_should_pass() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            mode: BenchmarkMode::RestProto,
            pool_size: 1,
            log_file: dir.path().join("server-1-items.jsonl"),
        };
        assert!(config.validate().is_ok());
        assert_eq!(
            config.to_string(),
            format!(
                "{{ mode: rest_proto, pool_size: 1, log_file: {} }}",
                config.log_file.display()
            )
        );
    }
}
