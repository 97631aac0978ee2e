// アプリケーション層モジュール
pub mod echo_stack;
pub mod synthesizer;
pub mod template;

// 再エクスポート
pub use echo_stack::{
    ECHO_FUNCTION_ASSET_PATH, ECHO_FUNCTION_HANDLER, ECHO_FUNCTION_ID, ECHO_FUNCTION_RUNTIME,
    ECHO_STACK_ID, echo_function_stack,
};
pub use synthesizer::{SynthError, Synthesizer, logical_id};
pub use template::{CodeProperty, FunctionProperties, Template, TemplateResource};
