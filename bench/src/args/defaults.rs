pub const DEFAULT_ITERATIONS: u32 = 50;
pub const DEFAULT_SIZES: [u64; 2] = [1, 10];
pub const DEFAULT_PAUSE_SECS: u64 = 10;
pub const DEFAULT_MODE_PAUSE_SECS: u64 = 30;
pub const DEFAULT_GRACE_PERIOD_SECS: u64 = 5;
pub const DEFAULT_MONITOR_INTERVAL_MS: u64 = 2;
pub const DEFAULT_MONITOR_INTERVAL_SECS: f64 = 0.002;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_DATA_DIR: &str = "data/single_request";
pub const DEFAULT_SERVER_EXECUTABLE: &str = "timestream-server";
