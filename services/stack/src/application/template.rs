// 合成テンプレート
//
// CloudFormation形式のリソーステンプレート。
// 外部のプロビジョニングツールはこれを読み、デプロイ済みの状態と比較する。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lambda関数のリソース型
pub const LAMBDA_FUNCTION_TYPE: &str = "AWS::Lambda::Function";

/// アセットパスのメタデータキー
pub const ASSET_PATH_METADATA_KEY: &str = "aws:asset:path";

/// アセットを参照するプロパティ名のメタデータキー
pub const ASSET_PROPERTY_METADATA_KEY: &str = "aws:asset:property";

/// リソーステンプレート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    /// 論理ID → リソース
    pub resources: BTreeMap<String, TemplateResource>,
}

impl Template {
    /// 指定した型のリソース数を数える
    #[cfg(test)]
    pub(crate) fn count_of_type(&self, resource_type: &str) -> usize {
        self.resources
            .values()
            .filter(|r| r.resource_type == resource_type)
            .count()
    }
}

/// テンプレート上の1リソース
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateResource {
    /// リソース型
    #[serde(rename = "Type")]
    pub resource_type: String,
    /// リソースプロパティ
    pub properties: FunctionProperties,
    /// ツール向けメタデータ
    pub metadata: BTreeMap<String, String>,
}

/// Lambda関数のプロパティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionProperties {
    pub runtime: String,
    pub handler: String,
    pub code: CodeProperty,
}

/// コードの配置場所
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeProperty {
    /// ローカルの成果物パス（アップロードは外部ツールが行う）
    pub asset_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_template() -> Template {
        let resource = TemplateResource {
            resource_type: LAMBDA_FUNCTION_TYPE.to_string(),
            properties: FunctionProperties {
                runtime: "provided.al2023".to_string(),
                handler: "bootstrap".to_string(),
                code: CodeProperty {
                    asset_path: "target/lambda/handler".to_string(),
                },
            },
            metadata: BTreeMap::from([
                (ASSET_PATH_METADATA_KEY.to_string(), "target/lambda/handler".to_string()),
                (ASSET_PROPERTY_METADATA_KEY.to_string(), "Code".to_string()),
            ]),
        };

        Template {
            resources: BTreeMap::from([("EchoFunction".to_string(), resource)]),
        }
    }

    #[test]
    fn test_serialize_cloudformation_shape() {
        let value = serde_json::to_value(sample_template()).unwrap();

        assert_eq!(
            value,
            json!({
                "Resources": {
                    "EchoFunction": {
                        "Type": "AWS::Lambda::Function",
                        "Properties": {
                            "Runtime": "provided.al2023",
                            "Handler": "bootstrap",
                            "Code": {"AssetPath": "target/lambda/handler"}
                        },
                        "Metadata": {
                            "aws:asset:path": "target/lambda/handler",
                            "aws:asset:property": "Code"
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_deserialize_written_template() {
        let template = sample_template();
        let text = serde_json::to_string_pretty(&template).unwrap();
        let parsed: Template = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, template);
    }

    #[test]
    fn test_count_of_type() {
        let template = sample_template();
        assert_eq!(template.count_of_type(LAMBDA_FUNCTION_TYPE), 1);
        assert_eq!(template.count_of_type("AWS::IAM::Role"), 0);
    }
}
