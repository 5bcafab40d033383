// src/args.rs
use clap::{Args as ClapArgs, Parser, ValueEnum, ValueHint};
use std::path::PathBuf;
use text_count_domain::Normalization;

#[derive(Parser, Debug)]
#[command(
    name = "text_count",
    version,
    about = "文字数/行数/バイト数/原稿用紙換算の集計ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub count: CountArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,

    #[command(flatten)]
    pub state: StateArgs,

    /// 対象ファイル（省略または `-` で標準入力）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub file: Option<PathBuf>,
}

impl Args {
    /// File to read, `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountArgs {
    /// 総文字数から改行を除く
    #[arg(long, help_heading = "計測")]
    pub no_newlines: bool,

    /// 空白除く文字数で空白・タブ・全角空白を除く
    #[arg(long, help_heading = "計測")]
    pub exclude_spaces: bool,

    /// 原稿用紙換算で約物の重み付けをしない
    #[arg(long, help_heading = "計測")]
    pub flat_pages: bool,

    /// 計測前のUnicode正規化 (none, nfc, nfkc)
    #[arg(long, value_parser = parse_normalization, help_heading = "計測")]
    pub normalize: Option<Normalization>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 出現頻度の上位N文字を表示
    #[arg(long, help_heading = "出力")]
    pub top: Option<usize>,

    /// 出力先ファイル
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorArgs {
    /// ファイルの変更を監視して再計測
    #[arg(long, requires = "file", help_heading = "動作")]
    pub watch: bool,

    /// 監視時の再計測までの待機時間（ミリ秒）
    #[arg(long, help_heading = "動作")]
    pub debounce_ms: Option<u64>,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct StateArgs {
    /// 設定とテキストの保存先（値なしで既定のデータディレクトリ）
    #[arg(long, num_args = 0..=1, value_hint = ValueHint::DirPath, help_heading = "設定")]
    pub state_dir: Option<Option<PathBuf>>,

    /// 今回の計測オプションを設定として保存
    #[arg(long, requires = "state_dir", help_heading = "設定")]
    pub save: bool,

    /// 前回保存したテキストを再計測
    #[arg(long, requires = "state_dir", conflicts_with = "file", help_heading = "設定")]
    pub last: bool,

    /// 保存済みの設定とテキストを消去
    #[arg(long, requires = "state_dir", help_heading = "設定")]
    pub clear: bool,

    /// 設定とテキストをJSONに書き出す
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "設定")]
    pub export_settings: Option<PathBuf>,

    /// JSONから設定とテキストを読み込む
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "設定")]
    pub import_settings: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Report,
}

fn parse_normalization(s: &str) -> Result<Normalization, String> {
    s.parse().map_err(|err: text_count_shared_kernel::DomainError| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_stdin_as_table() {
        let args = Args::try_parse_from(["text_count"]).unwrap();
        assert_eq!(args.output.format, OutputFormat::Table);
        assert!(args.input_path().is_none());
        assert!(args.state.state_dir.is_none());
    }

    #[test]
    fn dash_means_stdin() {
        let args = Args::try_parse_from(["text_count", "-"]).unwrap();
        assert!(args.input_path().is_none());
    }

    #[test]
    fn normalization_is_case_insensitive() {
        let args = Args::try_parse_from(["text_count", "--normalize", "NFKC", "a.txt"]).unwrap();
        assert_eq!(args.count.normalize, Some(Normalization::Nfkc));
        assert!(Args::try_parse_from(["text_count", "--normalize", "nfd"]).is_err());
    }

    #[test]
    fn state_dir_value_is_optional() {
        let args = Args::try_parse_from(["text_count", "--state-dir"]).unwrap();
        assert_eq!(args.state.state_dir, Some(None));

        let args = Args::try_parse_from(["text_count", "--state-dir", "/tmp/tc", "a.txt"]).unwrap();
        assert_eq!(args.state.state_dir, Some(Some(PathBuf::from("/tmp/tc"))));
    }

    #[test]
    fn persistence_flags_require_a_state_dir() {
        for flag in ["--save", "--last", "--clear"] {
            assert!(Args::try_parse_from(["text_count", flag]).is_err(), "{flag}");
            assert!(Args::try_parse_from(["text_count", "--state-dir", "/tmp/tc", flag]).is_ok(), "{flag}");
        }
        assert!(Args::try_parse_from(["text_count", "--state-dir", "/tmp/tc", "--last", "a.txt"]).is_err());
    }

    #[test]
    fn watch_requires_a_file() {
        assert!(Args::try_parse_from(["text_count", "--watch"]).is_err());
        assert!(Args::try_parse_from(["text_count", "--watch", "draft.txt"]).is_ok());
    }
}
