// ドメイン層モジュール
pub mod function_resource;
pub mod runtime;
pub mod stack_declaration;

// 再エクスポート
pub use function_resource::{Code, FunctionProps, FunctionResource};
pub use runtime::{Runtime, RuntimeParseError};
pub use stack_declaration::{StackDeclaration, declare_function_stack};
