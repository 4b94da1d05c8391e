use crate::clipboard::ClipboardSink;
use crate::error::{CpcError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Where the computed text goes besides stdout.
pub struct Destination<'a, 'p> {
    pub clipboard: Option<&'a mut dyn ClipboardSink>,
    pub out_file: Option<&'p Path>,
}

/// Tries the clipboard, echoes `text` to `stdout`, then writes the optional
/// output file. Returns whether the clipboard copy succeeded; a clipboard
/// failure is logged and never stops the echo.
pub fn deliver(text: &str, destination: Destination<'_, '_>, stdout: &mut dyn Write) -> Result<bool> {
    let copied = match destination.clipboard {
        Some(sink) => match sink.set_text(text) {
            Ok(()) => true,
            Err(err) => {
                log::error!("{err}");
                false
            }
        },
        None => false,
    };

    // Ignore a closed stdout.
    let _ = writeln!(stdout, "{text}");

    if let Some(path) = destination.out_file {
        fs::write(path, text).map_err(|source| CpcError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Output written to {}.", path.display());
    }
    Ok(copied)
}
