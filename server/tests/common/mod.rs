use server::configs::server::ServerConfig;
use server::server::serve;
use server::server_error::ServerError;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use timestream::mode::BenchmarkMode;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// In-process backend bound to an ephemeral port, journaling into a scratch
/// directory that lives as long as the server handle.
pub struct TestServer {
    address: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<u64, ServerError>>>,
    journal: PathBuf,
    dir: TempDir,
}

impl TestServer {
    pub async fn start(mode: BenchmarkMode, pool_size: u64) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let journal = dir.path().join(format!("server-{pool_size}-items.jsonl"));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let (shutdown, signal) = oneshot::channel::<()>();
        let config = ServerConfig {
            mode,
            pool_size,
            log_file: journal.clone(),
        };

        let handle = tokio::spawn(serve(config, listener, async {
            let _ = signal.await;
        }));

        Self {
            address,
            shutdown: Some(shutdown),
            handle: Some(handle),
            journal,
            dir,
        }
    }

    pub fn host(&self) -> String {
        self.address.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    pub fn journal(&self) -> &Path {
        &self.journal
    }

    pub fn scratch_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Stops the server and returns how many requests it journaled.
    pub async fn stop(&mut self) -> u64 {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        match self.handle.take() {
            Some(handle) => handle.await.unwrap().unwrap(),
            None => 0,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
