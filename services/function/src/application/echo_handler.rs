/// エコーハンドラー
///
/// 呼び出しごとにリモートリソースを1回取得し、
/// 受け取ったイベントと一緒にレスポンスへ詰めて返す。
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument};

use crate::domain::FunctionResponse;
use crate::infrastructure::{FetchError, RemoteFetcher};

/// エコーハンドラーのエラー型
///
/// どちらのエラーもステータス200のレスポンスには変換せず、
/// 呼び出し元（Lambdaランタイム）にそのまま伝播させる。
#[derive(Debug, Error)]
pub enum EchoHandlerError {
    /// リモート取得エラー
    #[error("リモートリソースの取得に失敗: {0}")]
    Fetch(#[from] FetchError),

    /// レスポンスのシリアライズエラー
    #[error("レスポンスのシリアライズに失敗: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// リモート取得結果をイベントと一緒に返すハンドラー
pub struct EchoHandler<F>
where
    F: RemoteFetcher,
{
    /// リモート取得
    fetcher: F,
}

impl<F> EchoHandler<F>
where
    F: RemoteFetcher,
{
    /// 新しいEchoHandlerを作成
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// 1回の呼び出しを処理
    ///
    /// # 処理フロー
    /// 1. リモートリソースを取得（唯一の待機点）
    /// 2. イベントと取得結果からステータス200のレスポンスを構築
    ///
    /// # Arguments
    /// * `event` - 呼び出し時のイベント（検証せずそのまま埋め込む）
    #[instrument(skip_all)]
    pub async fn handle(&self, event: Value) -> Result<FunctionResponse, EchoHandlerError> {
        let result = self.fetcher.fetch_json().await?;
        let response = FunctionResponse::ok(&event, &result)?;

        info!(
            status_code = response.status_code,
            body_bytes = response.body.len(),
            "レスポンスを構築"
        );

        Ok(response)
    }
}
