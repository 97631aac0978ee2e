// スタック宣言
//
// 関数リソースを1つだけ持つ不変の宣言値。
// 外部のプロビジョニングツールがこれを元に差分を取り、作成・更新・削除を行う。

use super::function_resource::{FunctionProps, FunctionResource};

/// 関数リソース1つだけを含むスタック宣言
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDeclaration {
    stack_id: String,
    function: FunctionResource,
}

impl StackDeclaration {
    /// スタックID
    pub fn stack_id(&self) -> &str {
        &self.stack_id
    }

    /// 宣言された関数リソース
    pub fn function(&self) -> &FunctionResource {
        &self.function
    }

    /// スタック内の全リソース
    ///
    /// 他リソースへの依存を持たないため、順序は意味を持たない。
    pub fn resources(&self) -> &[FunctionResource] {
        std::slice::from_ref(&self.function)
    }
}

/// 関数スタックを宣言
///
/// 設定値を検証せずにそのまま保持する。
/// 不正なハンドラー名やコード配置場所は合成時に検出される。
///
/// # Arguments
/// * `stack_id` - スタックID
/// * `function_id` - スタック内での関数リソースID
/// * `props` - ランタイム、コード配置場所、エントリポイント名
pub fn declare_function_stack(
    stack_id: impl Into<String>,
    function_id: impl Into<String>,
    props: FunctionProps,
) -> StackDeclaration {
    StackDeclaration {
        stack_id: stack_id.into(),
        function: FunctionResource::new(function_id.into(), props),
    }
}
