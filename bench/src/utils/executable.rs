use crate::args::defaults::DEFAULT_SERVER_EXECUTABLE;
use crate::error::BenchError;
use std::path::{Path, PathBuf};

/// This binary, used to spawn the `client` and `monitor` subcommands.
pub fn bench_executable() -> Result<PathBuf, BenchError> {
    Ok(std::env::current_exe()?)
}

/// The explicitly configured server executable, or `timestream-server`
/// installed next to this binary.
pub fn server_executable(configured: Option<&Path>) -> Result<PathBuf, BenchError> {
    let path = match configured {
        Some(path) => path.to_path_buf(),
        None => sibling_of(&bench_executable()?, DEFAULT_SERVER_EXECUTABLE),
    };

    if path.exists() {
        Ok(path)
    } else {
        Err(BenchError::ServerExecutableNotFound(path))
    }
}

fn sibling_of(executable: &Path, name: &str) -> PathBuf {
    let name = format!("{name}{}", std::env::consts::EXE_SUFFIX);
    match executable.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
