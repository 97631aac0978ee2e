// Lambda関数リソース
//
// 宣言時に一度だけ設定され、以降は変更できない。
// 値を変えるには新しい宣言を作って再デプロイする。

use std::path::{Path, PathBuf};

use super::runtime::Runtime;

/// デプロイ可能なコードの配置場所
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    asset_path: PathBuf,
}

impl Code {
    /// ローカルのビルド成果物ディレクトリを指定
    ///
    /// 存在確認は合成時に行う。
    pub fn from_asset(path: impl Into<PathBuf>) -> Self {
        Self {
            asset_path: path.into(),
        }
    }

    /// 成果物のパスを取得
    pub fn asset_path(&self) -> &Path {
        &self.asset_path
    }
}

/// 関数リソースのプロパティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionProps {
    /// 実行ランタイム
    pub runtime: Runtime,
    /// コードの配置場所
    pub code: Code,
    /// エントリポイント名
    pub handler: String,
}

impl FunctionProps {
    /// 新しいプロパティを作成
    pub fn new(runtime: Runtime, code: Code, handler: impl Into<String>) -> Self {
        Self {
            runtime,
            code,
            handler: handler.into(),
        }
    }
}

/// 宣言済みの関数リソース
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResource {
    id: String,
    props: FunctionProps,
}

impl FunctionResource {
    pub(crate) fn new(id: String, props: FunctionProps) -> Self {
        Self { id, props }
    }

    /// スタック内でのリソースID
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn runtime(&self) -> Runtime {
        self.props.runtime
    }

    pub fn code(&self) -> &Code {
        &self.props.code
    }

    pub fn handler(&self) -> &str {
        &self.props.handler
    }

    pub fn props(&self) -> &FunctionProps {
        &self.props
    }
}
