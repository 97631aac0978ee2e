// Lambdaランタイム識別子
//
// 宣言できるランタイムを列挙型で閉じておき、
// 未知の識別子は合成前のパース時点でエラーにする。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ランタイム識別子のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("不明なランタイム識別子です: {0}")]
pub struct RuntimeParseError(pub String);

/// Lambda実行ランタイム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Runtime {
    /// カスタムランタイム（Amazon Linux 2023）
    #[serde(rename = "provided.al2023")]
    ProvidedAl2023,
    /// カスタムランタイム（Amazon Linux 2）
    #[serde(rename = "provided.al2")]
    ProvidedAl2,
    #[serde(rename = "nodejs12.x")]
    Nodejs12x,
    #[serde(rename = "nodejs18.x")]
    Nodejs18x,
    #[serde(rename = "nodejs20.x")]
    Nodejs20x,
    #[serde(rename = "nodejs22.x")]
    Nodejs22x,
    #[serde(rename = "python3.12")]
    Python312,
    #[serde(rename = "python3.13")]
    Python313,
}

impl Runtime {
    /// 宣言可能な全ランタイム
    pub const ALL: [Runtime; 8] = [
        Runtime::ProvidedAl2023,
        Runtime::ProvidedAl2,
        Runtime::Nodejs12x,
        Runtime::Nodejs18x,
        Runtime::Nodejs20x,
        Runtime::Nodejs22x,
        Runtime::Python312,
        Runtime::Python313,
    ];

    /// テンプレートに出力する識別子
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::ProvidedAl2023 => "provided.al2023",
            Runtime::ProvidedAl2 => "provided.al2",
            Runtime::Nodejs12x => "nodejs12.x",
            Runtime::Nodejs18x => "nodejs18.x",
            Runtime::Nodejs20x => "nodejs20.x",
            Runtime::Nodejs22x => "nodejs22.x",
            Runtime::Python312 => "python3.12",
            Runtime::Python313 => "python3.13",
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Runtime {
    type Err = RuntimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Runtime::ALL
            .iter()
            .copied()
            .find(|runtime| runtime.as_str() == trimmed)
            .ok_or_else(|| RuntimeParseError(trimmed.to_string()))
    }
}
