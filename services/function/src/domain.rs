// ドメイン層モジュール
pub mod function_response;

// 再エクスポート
pub use function_response::FunctionResponse;
