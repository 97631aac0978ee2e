/// テンプレート合成
///
/// スタック宣言をCloudFormation形式のテンプレートに変換する。
/// 宣言自体は検証を行わないため、設定不備はここで検出する。
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, instrument};

use super::template::{
    ASSET_PATH_METADATA_KEY, ASSET_PROPERTY_METADATA_KEY, CodeProperty, FunctionProperties,
    LAMBDA_FUNCTION_TYPE, Template, TemplateResource,
};
use crate::domain::{FunctionResource, StackDeclaration};

/// 合成エラー
#[derive(Debug, Error)]
pub enum SynthError {
    /// ハンドラー名が空
    #[error("ハンドラー名が空です: resource={0}")]
    EmptyHandler(String),

    /// リソースIDから論理IDを作れない
    #[error("リソースIDから論理IDを生成できません: {0:?}")]
    InvalidLogicalId(String),

    /// コードのアセットが存在しない
    #[error("アセットが見つかりません: {}", .0.display())]
    AssetNotFound(PathBuf),
}

/// テンプレート合成器
#[derive(Debug, Clone)]
pub struct Synthesizer {
    /// 相対アセットパスの解決基準
    asset_root: PathBuf,
    /// アセットの存在確認を行うか
    check_assets: bool,
}

impl Synthesizer {
    /// 新しい合成器を作成（アセット存在確認あり）
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            check_assets: true,
        }
    }

    /// アセットの存在確認を切り替え
    pub fn with_asset_check(mut self, check_assets: bool) -> Self {
        self.check_assets = check_assets;
        self
    }

    /// アセットパスを解決基準と結合（絶対パスはそのまま）
    pub fn resolve_asset(&self, asset_path: &Path) -> PathBuf {
        self.asset_root.join(asset_path)
    }

    /// スタック宣言からテンプレートを合成
    ///
    /// # 戻り値
    /// * `Ok(Template)` - 宣言されたリソースだけを含むテンプレート
    /// * `Err(SynthError)` - ハンドラー名が空、論理IDを作れない、アセットが存在しない
    #[instrument(skip_all, fields(stack_id = %stack.stack_id()))]
    pub fn synthesize(&self, stack: &StackDeclaration) -> Result<Template, SynthError> {
        let mut resources = BTreeMap::new();

        for resource in stack.resources() {
            let logical_id = logical_id(resource.id())?;
            let template_resource = self.synthesize_function(resource)?;

            debug!(
                resource_id = resource.id(),
                logical_id = %logical_id,
                "リソースを合成"
            );
            resources.insert(logical_id, template_resource);
        }

        info!(resource_count = resources.len(), "テンプレート合成完了");

        Ok(Template { resources })
    }

    fn synthesize_function(
        &self,
        resource: &FunctionResource,
    ) -> Result<TemplateResource, SynthError> {
        if resource.handler().trim().is_empty() {
            error!(resource_id = resource.id(), "ハンドラー名が空");
            return Err(SynthError::EmptyHandler(resource.id().to_string()));
        }

        let asset_path = resource.code().asset_path();
        if self.check_assets {
            let resolved = self.resolve_asset(asset_path);
            if !resolved.exists() {
                error!(path = %resolved.display(), "アセットが存在しない");
                return Err(SynthError::AssetNotFound(resolved));
            }
        }

        let asset_path = asset_path.to_string_lossy().into_owned();

        Ok(TemplateResource {
            resource_type: LAMBDA_FUNCTION_TYPE.to_string(),
            properties: FunctionProperties {
                runtime: resource.runtime().as_str().to_string(),
                handler: resource.handler().to_string(),
                code: CodeProperty {
                    asset_path: asset_path.clone(),
                },
            },
            metadata: BTreeMap::from([
                (ASSET_PATH_METADATA_KEY.to_string(), asset_path),
                (ASSET_PROPERTY_METADATA_KEY.to_string(), "Code".to_string()),
            ]),
        })
    }
}

/// リソースIDから論理IDを生成
///
/// CloudFormationの論理IDは英数字のみのため、それ以外の文字を取り除く。
pub fn logical_id(resource_id: &str) -> Result<String, SynthError> {
    let id: String = resource_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    if id.is_empty() {
        return Err(SynthError::InvalidLogicalId(resource_id.to_string()));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::echo_function_stack;
    use crate::domain::{Code, FunctionProps, Runtime, declare_function_stack};
    use crate::infrastructure::logging::init_test_logging;

    // ==================== テストヘルパー ====================

    /// アセットディレクトリを作成した一時ディレクトリを返す
    fn asset_root_with(asset: &str) -> tempfile::TempDir {
        init_test_logging();
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(asset)).unwrap();
        dir
    }

    // ==================== logical_id テスト ====================

    #[test]
    fn test_logical_id_keeps_alphanumerics() {
        assert_eq!(logical_id("EchoFunction").unwrap(), "EchoFunction");
    }

    #[test]
    fn test_logical_id_strips_symbols() {
        assert_eq!(logical_id("echo-function_v2").unwrap(), "echofunctionv2");
    }

    #[test]
    fn test_logical_id_empty() {
        assert!(matches!(
            logical_id("--"),
            Err(SynthError::InvalidLogicalId(id)) if id == "--"
        ));
    }

    // ==================== synthesize テスト ====================

    #[test]
    fn test_synthesize_single_function_resource() {
        let root = asset_root_with("lib/aws-lambda/dist");
        let stack = declare_function_stack(
            "MyStack",
            "MyFunction",
            FunctionProps::new(
                Runtime::Nodejs12x,
                Code::from_asset("lib/aws-lambda/dist"),
                "index.handler",
            ),
        );

        let template = Synthesizer::new(root.path()).synthesize(&stack).unwrap();

        assert_eq!(template.resources.len(), 1);
        assert_eq!(template.count_of_type(LAMBDA_FUNCTION_TYPE), 1);

        let resource = &template.resources["MyFunction"];
        assert_eq!(resource.properties.runtime, "nodejs12.x");
        assert_eq!(resource.properties.handler, "index.handler");
        assert_eq!(resource.properties.code.asset_path, "lib/aws-lambda/dist");
        assert_eq!(resource.metadata[ASSET_PATH_METADATA_KEY], "lib/aws-lambda/dist");
        assert_eq!(resource.metadata[ASSET_PROPERTY_METADATA_KEY], "Code");
    }

    #[test]
    fn test_synthesize_echo_stack() {
        let root = asset_root_with("target/lambda/handler");

        let template = Synthesizer::new(root.path())
            .synthesize(&echo_function_stack())
            .unwrap();

        let resource = &template.resources["EchoFunction"];
        assert_eq!(resource.resource_type, "AWS::Lambda::Function");
        assert_eq!(resource.properties.runtime, "provided.al2023");
        assert_eq!(resource.properties.handler, "bootstrap");
        assert_eq!(resource.properties.code.asset_path, "target/lambda/handler");
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let root = asset_root_with("target/lambda/handler");
        let synthesizer = Synthesizer::new(root.path());

        let first = synthesizer.synthesize(&echo_function_stack()).unwrap();
        let second = synthesizer.synthesize(&echo_function_stack()).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_synthesize_missing_asset() {
        init_test_logging();
        let root = tempfile::tempdir().unwrap();

        let result = Synthesizer::new(root.path()).synthesize(&echo_function_stack());

        match result.unwrap_err() {
            SynthError::AssetNotFound(path) => {
                assert_eq!(path, root.path().join("target/lambda/handler"));
            }
            other => panic!("Expected AssetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_synthesize_without_asset_check() {
        init_test_logging();
        let root = tempfile::tempdir().unwrap();

        let template = Synthesizer::new(root.path())
            .with_asset_check(false)
            .synthesize(&echo_function_stack())
            .unwrap();

        assert_eq!(template.resources.len(), 1);
    }

    #[test]
    fn test_synthesize_empty_handler() {
        let root = asset_root_with("dist");
        let stack = declare_function_stack(
            "S",
            "F",
            FunctionProps::new(Runtime::ProvidedAl2023, Code::from_asset("dist"), "  "),
        );

        match Synthesizer::new(root.path()).synthesize(&stack).unwrap_err() {
            SynthError::EmptyHandler(id) => assert_eq!(id, "F"),
            other => panic!("Expected EmptyHandler, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_asset_absolute_path() {
        let synthesizer = Synthesizer::new("/workspace");
        assert_eq!(
            synthesizer.resolve_asset(Path::new("/opt/dist")),
            PathBuf::from("/opt/dist")
        );
        assert_eq!(
            synthesizer.resolve_asset(Path::new("dist")),
            PathBuf::from("/workspace/dist")
        );
    }

    #[test]
    fn test_synth_error_display() {
        let error = SynthError::AssetNotFound(PathBuf::from("/tmp/missing"));
        assert_eq!(error.to_string(), "アセットが見つかりません: /tmp/missing");
    }
}
