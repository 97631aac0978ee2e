// テンプレート書き出し
//
// 合成済みテンプレートを `<outdir>/<StackId>.template.json` に保存する。

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::application::Template;

/// 書き出しエラー
#[derive(Debug, Error)]
pub enum TemplateWriteError {
    /// ファイル操作エラー
    #[error("ファイル操作に失敗: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// シリアライズエラー
    #[error("テンプレートのシリアライズに失敗: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// スタックIDからテンプレートファイル名を生成
pub fn template_file_name(stack_id: &str) -> String {
    format!("{}.template.json", stack_id)
}

/// テンプレートを書き出す
///
/// 出力先ディレクトリが無ければ作成し、既存ファイルは上書きする。
///
/// # 戻り値
/// * `Ok(PathBuf)` - 書き出したファイルのパス
pub fn write_template(
    template: &Template,
    outdir: &Path,
    stack_id: &str,
) -> Result<PathBuf, TemplateWriteError> {
    std::fs::create_dir_all(outdir).map_err(|source| TemplateWriteError::Io {
        path: outdir.to_path_buf(),
        source,
    })?;

    let path = outdir.join(template_file_name(stack_id));
    let json = serde_json::to_string_pretty(template)?;

    std::fs::write(&path, json).map_err(|source| TemplateWriteError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "テンプレートを書き出し");

    Ok(path)
}
