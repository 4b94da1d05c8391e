//! Copy a file, the files under a directory, or a directory tree to the
//! clipboard, echoing the copied text to stdout.

pub mod aggregate;
pub mod args;
pub mod clipboard;
pub mod error;
pub mod output;
pub mod resolve;
pub mod tree;
pub mod walker;

pub use args::Args;
pub use error::{ClipboardError, CpcError, Result};

use clipboard::ClipboardSink;
use output::Destination;
use resolve::{ExcludeSet, InputPath};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Runs one invocation, printing to stdout.
pub fn run(args: &Args) -> Result<()> {
    let mut sink = clipboard::from_args(args);
    let clipboard: Option<&mut dyn ClipboardSink> = match sink {
        Some(ref mut sink) => Some(&mut **sink),
        None => None,
    };
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    run_with(args, clipboard, &mut stdout)
}

/// Runs one invocation against the given clipboard and stdout.
pub fn run_with(
    args: &Args,
    clipboard: Option<&mut dyn ClipboardSink>,
    stdout: &mut dyn Write,
) -> Result<()> {
    let excludes = ExcludeSet::new(args.exclude.iter().cloned());
    let input = InputPath::resolve(&args.input);
    log::debug!("resolved '{}' to {:?}", args.input, input);

    if let Some(sink) = clipboard.as_deref() {
        log::debug!("clipboard: {}", sink.name());
    }
    let destination = Destination {
        clipboard,
        out_file: args.out.as_deref(),
    };

    if args.tree {
        let InputPath::Directory(root) = input else {
            return Err(CpcError::NotADirectory(args.input.clone()));
        };
        let text = tree::render_tree(&root, &excludes);
        if output::deliver(&text, destination, stdout)? {
            confirm(
                stdout,
                &format!("Copied tree output of directory '{}' to clipboard.", args.input),
            );
        }
        return Ok(());
    }

    match input {
        InputPath::File(path) => copy_file(&path, &args.input, destination, stdout),
        InputPath::Directory(root) => {
            copy_directory(&root, &excludes, !args.no_recursive, destination, stdout)
        }
        InputPath::Invalid(_) => Err(CpcError::InvalidPath(args.input.clone())),
    }
}

fn copy_file(
    path: &Path,
    input: &str,
    destination: Destination<'_, '_>,
    stdout: &mut dyn Write,
) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|source| CpcError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    if output::deliver(&text, destination, stdout)? {
        confirm(stdout, &format!("Copied '{input}' to clipboard."));
    }
    Ok(())
}

fn copy_directory(
    root: &Path,
    excludes: &ExcludeSet,
    recursive: bool,
    destination: Destination<'_, '_>,
    stdout: &mut dyn Write,
) -> Result<()> {
    let aggregated = aggregate::aggregate(root, excludes, recursive);
    if aggregated.is_empty() {
        let _ = writeln!(stdout, "No files found to copy (or all were excluded).");
        return Ok(());
    }

    log::debug!("aggregated {} files", aggregated.blocks().len());
    if output::deliver(&aggregated.render(), destination, stdout)? {
        confirm(stdout, "All files copied to clipboard.");
    }
    Ok(())
}

fn confirm(stdout: &mut dyn Write, message: &str) {
    let _ = writeln!(stdout, "\n{message}");
}
