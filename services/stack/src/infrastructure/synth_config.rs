// 合成設定
//
// テンプレートの出力先とアセットパスの解決基準を環境変数から読み込む。
// コマンドライン引数が指定された場合はそちらを優先する。

use std::path::PathBuf;

/// 出力先ディレクトリの環境変数名
const OUTDIR_ENV: &str = "CDK_OUTDIR";

/// アセット解決基準の環境変数名
const ASSET_ROOT_ENV: &str = "ASSET_ROOT";

/// 既定の出力先ディレクトリ
pub const DEFAULT_OUTDIR: &str = "cdk.out";

/// 既定のアセット解決基準
pub const DEFAULT_ASSET_ROOT: &str = ".";

/// 合成設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthConfig {
    /// テンプレートの出力先ディレクトリ
    pub outdir: PathBuf,
    /// 相対アセットパスの解決基準
    pub asset_root: PathBuf,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from(DEFAULT_OUTDIR),
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
        }
    }
}

impl SynthConfig {
    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `CDK_OUTDIR`: 出力先ディレクトリ（デフォルト: cdk.out）
    /// - `ASSET_ROOT`: アセット解決基準（デフォルト: カレントディレクトリ）
    pub fn from_env() -> Self {
        let get_path = |key: &str, default: &str| -> PathBuf {
            std::env::var(key)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            outdir: get_path(OUTDIR_ENV, DEFAULT_OUTDIR),
            asset_root: get_path(ASSET_ROOT_ENV, DEFAULT_ASSET_ROOT),
        }
    }

    /// コマンドライン引数で上書き
    pub fn with_overrides(self, outdir: Option<PathBuf>, asset_root: Option<PathBuf>) -> Self {
        Self {
            outdir: outdir.unwrap_or(self.outdir),
            asset_root: asset_root.unwrap_or(self.asset_root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    unsafe fn cleanup_env() {
        unsafe {
            std::env::remove_var("CDK_OUTDIR");
            std::env::remove_var("ASSET_ROOT");
        }
    }

    #[test]
    #[serial(synth_env)]
    fn test_from_env_defaults() {
        unsafe { cleanup_env() };

        let config = SynthConfig::from_env();

        assert_eq!(config, SynthConfig::default());
        assert_eq!(config.outdir, PathBuf::from("cdk.out"));
        assert_eq!(config.asset_root, PathBuf::from("."));
    }

    #[test]
    #[serial(synth_env)]
    fn test_from_env_values() {
        unsafe {
            cleanup_env();
            std::env::set_var("CDK_OUTDIR", "/tmp/out");
            std::env::set_var("ASSET_ROOT", "/workspace");
        }

        let config = SynthConfig::from_env();

        assert_eq!(config.outdir, PathBuf::from("/tmp/out"));
        assert_eq!(config.asset_root, PathBuf::from("/workspace"));

        unsafe { cleanup_env() };
    }

    #[test]
    #[serial(synth_env)]
    fn test_from_env_empty_value_uses_default() {
        unsafe {
            cleanup_env();
            std::env::set_var("CDK_OUTDIR", "");
        }

        let config = SynthConfig::from_env();
        assert_eq!(config.outdir, PathBuf::from(DEFAULT_OUTDIR));

        unsafe { cleanup_env() };
    }

    #[test]
    fn test_with_overrides() {
        let config = SynthConfig::default().with_overrides(Some(PathBuf::from("out")), None);

        assert_eq!(config.outdir, PathBuf::from("out"));
        assert_eq!(config.asset_root, PathBuf::from(DEFAULT_ASSET_ROOT));
    }
}
