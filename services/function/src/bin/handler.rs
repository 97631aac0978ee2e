/// エコーLambdaエントリポイント
///
/// 受け取ったイベントとリモートリソースの取得結果を
/// `{statusCode, body}` 形式で返却する。
/// 取得に失敗した場合はエラーを返し、Lambdaランタイムに呼び出しエラーとして扱わせる。
///
/// # 環境変数
/// - REMOTE_URL: 取得先URL（任意、既定はjsonplaceholderのtodos）
/// - RUST_LOG: ログレベル（任意、既定はinfo）
use echo_function::application::EchoHandler;
use echo_function::domain::FunctionResponse;
use echo_function::infrastructure::{FunctionConfig, HttpRemoteFetcher, RemoteFetcher, init_logging};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 設定を読み込み、HTTPクライアントはコールドスタート時に一度だけ作成
    let config = FunctionConfig::from_env().inspect_err(|err| {
        error!(error = %err, "関数設定の読み込みに失敗");
    })?;
    let handler = EchoHandler::new(HttpRemoteFetcher::new(&config));

    info!(remote_url = %config.remote_url(), "エコーLambda関数を初期化");

    // Lambda関数を実行
    let shared = &handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(shared, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. ペイロードをそのままEchoHandlerへ渡す
/// 2. 成功時はステータス200のレスポンスを返却
/// 3. 失敗時はエラーを返却（200には変換しない）
async fn function_handler<F>(
    handler: &EchoHandler<F>,
    event: LambdaEvent<Value>,
) -> Result<FunctionResponse, Error>
where
    F: RemoteFetcher,
{
    let (payload, context) = event.into_parts();

    info!(request_id = %context.request_id, "呼び出しを受信");

    handler.handle(payload).await.map_err(|err| {
        error!(request_id = %context.request_id, error = %err, "呼び出しに失敗");
        err.into()
    })
}
