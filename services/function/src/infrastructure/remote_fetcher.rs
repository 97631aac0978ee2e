/// リモートリソース取得モジュール
///
/// 固定URLに対してGETリクエストを1回だけ送信し、本文をJSON値として返す。
/// 再試行やタイムアウトは持たない（呼び出し時間の上限はLambda側で強制される）。
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, instrument};
use url::Url;

use super::config::FunctionConfig;

/// リモート取得のエラー型
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTPリクエストエラー（接続失敗、TLSエラーなど）
    #[error("HTTPリクエスト失敗: {0}")]
    RequestFailed(String),

    /// 非成功ステータス
    #[error("リモートエンドポイントがエラーを返しました: status={status}, body={body}")]
    UnexpectedStatus {
        /// HTTPステータスコード
        status: u16,
        /// レスポンス本文
        body: String,
    },

    /// 本文の読み取りエラー
    #[error("レスポンス本文の読み取りに失敗: {0}")]
    BodyReadFailed(String),
}

/// リモート取得トレイト
///
/// 抽象化によりテスト時にモック実装を注入可能にする
#[async_trait]
pub trait RemoteFetcher: Send + Sync {
    /// 取得先にGETを送り、本文をJSON値として返す
    ///
    /// # 戻り値
    /// * `Ok(Value)` - パース済みの本文（JSONでない場合は文字列値）
    /// * `Err(FetchError)` - 通信エラーまたは非成功ステータス
    async fn fetch_json(&self) -> Result<Value, FetchError>;
}

/// reqwestを使用したリモート取得実装
#[derive(Clone)]
pub struct HttpRemoteFetcher {
    client: reqwest::Client,
    url: Url,
}

impl std::fmt::Debug for HttpRemoteFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRemoteFetcher")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpRemoteFetcher {
    /// 設定から作成
    ///
    /// クライアントはコールドスタート時に一度だけ作成し、
    /// 以降の呼び出しではコネクションプールを共有する。
    pub fn new(config: &FunctionConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config.remote_url().clone())
    }

    /// カスタムクライアントで作成
    fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl RemoteFetcher for HttpRemoteFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_json(&self) -> Result<Value, FetchError> {
        debug!("リモートリソースを取得");

        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "リモートリソース取得リクエスト失敗");
                FetchError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = %e, status = %status, "レスポンス本文の読み取りに失敗");
            FetchError::BodyReadFailed(e.to_string())
        })?;

        if !status.is_success() {
            error!(status = %status, body = %text, "リモートエンドポイントがエラーを返却");
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        info!(status = %status, bytes = text.len(), "リモートリソース取得成功");

        Ok(parse_body(&text))
    }
}

/// レスポンス本文をJSON値に変換
///
/// JSONとして解釈できない本文は文字列値としてそのまま返す。
pub fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
