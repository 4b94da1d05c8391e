//! Clipboard backends.
//!
//! The default backend pipes the text into a platform clipboard program
//! (`pbcopy`, `clip`, `wl-copy` or `xclip`). `arboard` is available as an
//! in-process alternative.

use crate::args::Args;
use crate::error::ClipboardError;
use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

pub trait ClipboardSink {
    /// Human readable name used in messages.
    fn name(&self) -> &str;

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into an external program's stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Splits a command line such as `xclip -selection clipboard` on whitespace.
    pub fn parse(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        Self::new(program, parts.collect())
    }

    /// The configured command line, or the platform default when unset or blank.
    pub fn from_setting(command_line: Option<&str>) -> Self {
        match command_line {
            Some(command_line) if !command_line.trim().is_empty() => Self::parse(command_line),
            _ => Self::platform_default(),
        }
    }

    /// The clipboard program for the current platform and session.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(windows) {
            Self::new("clip", Vec::new())
        } else if env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::new())
        } else {
            Self::parse("xclip -selection clipboard")
        }
    }

    fn failed(&self, reason: impl ToString) -> ClipboardError {
        ClipboardError::ToolFailed {
            tool: self.program.clone(),
            reason: reason.to_string(),
        }
    }
}

impl ClipboardSink for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.program.is_empty() {
            return Err(ClipboardError::ToolMissing {
                tool: String::new(),
            });
        }

        // stdout is discarded; some tools (wl-copy) leave a daemon holding it open.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => ClipboardError::ToolMissing {
                    tool: self.program.clone(),
                },
                _ => self.failed(err),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()) {
                Ok(()) => {}
                // Tools may exit without reading stdin.
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
                Err(err) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(self.failed(err));
                }
            }
        }

        let status = child.wait().map_err(|err| self.failed(err))?;
        if status.success() {
            Ok(())
        } else {
            Err(self.failed(status))
        }
    }
}

/// The system clipboard through `arboard`.
#[derive(Debug, Default)]
pub struct NativeClipboard;

impl NativeClipboard {
    const NAME: &'static str = "system clipboard";

    fn failed(err: arboard::Error) -> ClipboardError {
        ClipboardError::ToolFailed {
            tool: Self::NAME.to_string(),
            reason: err.to_string(),
        }
    }
}

impl ClipboardSink for NativeClipboard {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|err| match err {
            arboard::Error::ClipboardNotSupported => ClipboardError::ToolMissing {
                tool: Self::NAME.to_string(),
            },
            other => Self::failed(other),
        })?;
        clipboard.set_text(text).map_err(Self::failed)
    }
}

/// Picks the backend the arguments ask for; `None` when the clipboard is
/// disabled.
pub fn from_args(args: &Args) -> Option<Box<dyn ClipboardSink>> {
    if args.no_clipboard {
        return None;
    }
    if args.native_clipboard {
        return Some(Box::new(NativeClipboard));
    }
    let command = CommandClipboard::from_setting(args.clipboard_cmd.as_deref());
    log::debug!("clipboard command: {} {:?}", command.program, command.args);
    Some(Box::new(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_program_and_arguments() {
        let command = CommandClipboard::parse("  xclip -selection   clipboard ");
        assert_eq!(
            command,
            CommandClipboard::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()]
            )
        );
    }

    #[test]
    fn blank_setting_falls_back_to_platform_default() {
        let default = CommandClipboard::platform_default();
        assert_eq!(CommandClipboard::from_setting(None), default);
        assert_eq!(CommandClipboard::from_setting(Some("")), default);
        assert_eq!(CommandClipboard::from_setting(Some("   ")), default);
        assert_eq!(
            CommandClipboard::from_setting(Some("wl-copy --primary")),
            CommandClipboard::new("wl-copy", vec!["--primary".to_string()])
        );
    }

    #[test]
    fn missing_program_is_reported_as_missing() {
        let mut command = CommandClipboard::parse("cpc-test-no-such-clipboard-tool");
        let err = command.set_text("text").unwrap_err();
        assert!(matches!(err, ClipboardError::ToolMissing { ref tool } if tool == "cpc-test-no-such-clipboard-tool"));
    }

    #[test]
    fn empty_command_is_reported_as_missing() {
        let mut command = CommandClipboard::parse("   ");
        assert!(matches!(
            command.set_text("text"),
            Err(ClipboardError::ToolMissing { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn successful_program_accepts_text() {
        let mut command = CommandClipboard::parse("cat");
        command.set_text("hello clipboard").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported_as_failure() {
        let mut command = CommandClipboard::parse("false");
        let err = command.set_text("text").unwrap_err();
        assert!(matches!(err, ClipboardError::ToolFailed { ref tool, .. } if tool == "false"));
    }
}
