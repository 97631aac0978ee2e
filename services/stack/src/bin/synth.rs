/// スタック合成CLI
///
/// エコー関数スタックをCloudFormation形式のテンプレートに合成する。
/// 差分確認・デプロイ・削除は外部のプロビジョニングツールが行う。
///
/// # 環境変数
/// - CDK_OUTDIR: テンプレート出力先（デフォルト: cdk.out、--outputで上書き可能）
/// - ASSET_ROOT: アセット解決基準（デフォルト: カレントディレクトリ、--asset-rootで上書き可能）
///
/// # ローカル実行
/// ```bash
/// # 先に関数をビルドしておく
/// cargo lambda build --release --bin handler
///
/// # テンプレートを合成
/// cargo run --bin synth -- synth
///
/// # スタック一覧
/// cargo run --bin synth -- ls
/// ```
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stack::application::{Synthesizer, echo_function_stack};
use stack::infrastructure::{SynthConfig, init_logging, write_template};
use tracing::{error, info};

/// コマンドライン引数
#[derive(Parser, Debug)]
#[command(name = "synth")]
#[command(about = "エコー関数スタックのテンプレートを合成")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// テンプレートを合成して標準出力とファイルに書き出す
    Synth {
        /// 出力先ディレクトリ（CDK_OUTDIRより優先）
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// 相対アセットパスの解決基準（ASSET_ROOTより優先）
        #[arg(long)]
        asset_root: Option<PathBuf>,

        /// アセットの存在確認を行わない
        #[arg(long)]
        no_asset_check: bool,
    },

    /// 宣言されているスタックIDを一覧表示
    Ls,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();
    let config = SynthConfig::from_env();

    run(cli.command, config, &mut std::io::stdout().lock()).inspect_err(|err| {
        error!(error = %err, "合成に失敗");
    })
}

/// サブコマンドを実行
fn run(
    command: Command,
    config: SynthConfig,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let stack = echo_function_stack();

    match command {
        Command::Synth {
            output,
            asset_root,
            no_asset_check,
        } => {
            let config = config.with_overrides(output, asset_root);

            let template = Synthesizer::new(&config.asset_root)
                .with_asset_check(!no_asset_check)
                .synthesize(&stack)?;
            let path = write_template(&template, &config.outdir, stack.stack_id())?;

            info!(
                stack_id = stack.stack_id(),
                path = %path.display(),
                "スタックを合成"
            );

            writeln!(out, "{}", serde_json::to_string_pretty(&template)?)?;
        }
        Command::Ls => {
            writeln!(out, "{}", stack.stack_id())?;
        }
    }

    Ok(())
}
