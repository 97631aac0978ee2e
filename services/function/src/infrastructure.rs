// インフラストラクチャ層モジュール
pub mod config;
pub mod logging;
pub mod remote_fetcher;

// 再エクスポート
pub use config::{DEFAULT_REMOTE_URL, FunctionConfig, FunctionConfigError};
pub use logging::init_logging;
pub use remote_fetcher::{FetchError, HttpRemoteFetcher, RemoteFetcher};
