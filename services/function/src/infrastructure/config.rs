// 関数設定
//
// リモートリソースの取得先URLを管理する。
// 本番では固定URLを使い、REMOTE_URLはスタブ等へ向ける場合のみ設定する。

use thiserror::Error;
use url::Url;

/// 取得先の既定URL
pub const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// 取得先URLを上書きする環境変数名
const REMOTE_URL_ENV: &str = "REMOTE_URL";

/// 関数設定エラー
#[derive(Debug, Error)]
pub enum FunctionConfigError {
    /// URLとして解釈できない
    #[error("URLが不正です: {value} ({source})")]
    InvalidUrl {
        /// 指定された値
        value: String,
        /// パースエラー
        #[source]
        source: url::ParseError,
    },

    /// http/https以外のスキーム
    #[error("サポートされていないスキームです: {0}")]
    UnsupportedScheme(String),
}

/// 関数設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    remote_url: Url,
}

impl FunctionConfig {
    /// URL文字列から設定を作成
    ///
    /// # 戻り値
    /// - `Ok(FunctionConfig)`: http/httpsの有効なURL
    /// - `Err(FunctionConfigError)`: パース失敗またはスキーム不正
    pub fn new(remote_url: &str) -> Result<Self, FunctionConfigError> {
        let trimmed = remote_url.trim();
        let url = Url::parse(trimmed).map_err(|source| FunctionConfigError::InvalidUrl {
            value: trimmed.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self { remote_url: url }),
            other => Err(FunctionConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `REMOTE_URL`: 取得先URL（任意、未設定または空文字なら既定URL）
    pub fn from_env() -> Result<Self, FunctionConfigError> {
        match std::env::var(REMOTE_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            Some(value) => Self::new(&value),
            None => Self::new(DEFAULT_REMOTE_URL),
        }
    }

    /// 取得先URLを取得
    pub fn remote_url(&self) -> &Url {
        &self.remote_url
    }
}
