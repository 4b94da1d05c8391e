use clap::Parser;
use std::path::PathBuf;

/// Copy a file, the files under a directory, or a directory tree to the clipboard.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Example: cpc src/ --exclude node_modules --exclude .git"
)]
pub struct Args {
    /// The file or directory to process.
    pub input: String,

    /// Pattern to exclude. Any path containing this string will be ignored.
    #[arg(short = 'x', long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Copy a tree of the given directory instead of file contents.
    #[arg(long)]
    pub tree: bool,

    /// Only copy the files directly inside the directory.
    #[arg(long)]
    pub no_recursive: bool,

    /// Print the text without touching the clipboard.
    #[arg(long)]
    pub no_clipboard: bool,

    /// Also write the text to a file.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Clipboard program (and arguments) that reads the text on stdin.
    #[arg(long, value_name = "CMD", env = "CPC_CLIPBOARD_CMD")]
    pub clipboard_cmd: Option<String>,

    /// Use the built-in system clipboard instead of an external program.
    #[arg(long, env = "CPC_NATIVE_CLIPBOARD", conflicts_with = "clipboard_cmd")]
    pub native_clipboard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_is_repeatable() {
        let args = Args::try_parse_from(["cpc", "src", "--exclude", "target", "-x", ".git"]).unwrap();
        assert_eq!(args.input, "src");
        assert_eq!(args.exclude, vec!["target".to_string(), ".git".to_string()]);
        assert!(!args.tree);
        assert!(!args.no_recursive);
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["cpc", "--tree"]).is_err());
    }

    #[test]
    fn clipboard_cmd_conflicts_with_native() {
        let result = Args::try_parse_from([
            "cpc",
            ".",
            "--clipboard-cmd",
            "xclip",
            "--native-clipboard",
        ]);
        assert!(result.is_err());
    }
}
