use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobsearch")]
#[command(about = "求人検索アシスタント（履歴書アップロード・解析・求人検索）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書をアップロードしてセッションを開始
    Upload {
        /// 履歴書ファイル（.pdf/.doc/.docx）
        #[arg(required = true)]
        file: PathBuf,

        /// LLMではなく従来のパーサーを使用
        #[arg(long)]
        traditional: bool,
    },

    /// アップロード済みの履歴書を解析
    Analyze,

    /// 求人を検索
    Search {
        /// 職種（省略時はプロフィールから補完）
        #[arg(short, long)]
        title: Option<String>,

        /// 勤務地
        #[arg(short, long)]
        location: Option<String>,
    },

    /// プロフィール（ユーザー詳細）を表示
    Details,

    /// マッチ結果JSONを表示
    Matches {
        /// マッチ結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 保存中のセッションを表示・削除
    Session {
        /// セッションを表示
        #[arg(long)]
        show: bool,

        /// セッションを削除
        #[arg(long)]
        clear: bool,
    },

    /// 設定を管理
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        base_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 対話モード
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upload_traditional() {
        let cli = Cli::parse_from(["jobsearch", "upload", "resume.pdf", "--traditional"]);
        match cli.command {
            Commands::Upload { file, traditional } => {
                assert_eq!(file, PathBuf::from("resume.pdf"));
                assert!(traditional);
            }
            _ => panic!("upload expected"),
        }
    }

    #[test]
    fn test_parse_search_with_global_flags() {
        let cli = Cli::parse_from([
            "jobsearch",
            "search",
            "--title",
            "Rust Engineer",
            "--base-url",
            "http://api.test",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://api.test"));
        match cli.command {
            Commands::Search { title, location } => {
                assert_eq!(title.as_deref(), Some("Rust Engineer"));
                assert!(location.is_none());
            }
            _ => panic!("search expected"),
        }
    }

    #[test]
    fn test_upload_requires_file() {
        assert!(Cli::try_parse_from(["jobsearch", "upload"]).is_err());
    }
}
