use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "review-ai")]
#[command(about = "飲食レビュー解析ツール（カテゴリ別感情解析）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 解析結果の出力オプション（analyze/input/sample共通）
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// 解析結果JSONの出力先
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 解析結果Excelの出力先
    #[arg(short, long)]
    pub excel: Option<PathBuf>,

    /// 解析結果を保存しない
    #[arg(long)]
    pub no_save: bool,

    /// 明細表を表示しない
    #[arg(long)]
    pub summary_only: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レビューファイル/テキストを解析
    Analyze {
        /// 入力ファイルまたはフォルダ (.txt/.csv/.xlsx)
        paths: Vec<PathBuf>,

        /// レビュー本文を直接指定（改行で複数件）
        #[arg(short, long)]
        text: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// 対話的にレビューを入力して解析
    Input {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// サンプルデータで解析
    Sample {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// 保存済みの解析結果を表示
    History {
        /// 表示件数（省略時は設定値）
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 設定を表示/編集
    Config {
        /// 保存先CSVを設定
        #[arg(long)]
        set_storage: Option<PathBuf>,

        /// 解析結果を既定で保存するか
        #[arg(long)]
        set_save: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
