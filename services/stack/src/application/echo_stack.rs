// エコー関数スタック
//
// デプロイ対象の固定値。値を変える場合はここを書き換えて再デプロイする。
// コードは `cargo lambda build --release --bin handler` で事前に配置しておく。

use crate::domain::{Code, FunctionProps, Runtime, StackDeclaration, declare_function_stack};

/// スタックID
pub const ECHO_STACK_ID: &str = "EchoFunctionStack";

/// 関数リソースID
pub const ECHO_FUNCTION_ID: &str = "EchoFunction";

/// 実行ランタイム
pub const ECHO_FUNCTION_RUNTIME: Runtime = Runtime::ProvidedAl2023;

/// ビルド成果物の配置場所（ワークスペースルートからの相対パス）
pub const ECHO_FUNCTION_ASSET_PATH: &str = "target/lambda/handler";

/// エントリポイント名
pub const ECHO_FUNCTION_HANDLER: &str = "bootstrap";

/// エコー関数スタックを宣言
pub fn echo_function_stack() -> StackDeclaration {
    declare_function_stack(
        ECHO_STACK_ID,
        ECHO_FUNCTION_ID,
        FunctionProps::new(
            ECHO_FUNCTION_RUNTIME,
            Code::from_asset(ECHO_FUNCTION_ASSET_PATH),
            ECHO_FUNCTION_HANDLER,
        ),
    )
}
