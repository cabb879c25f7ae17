//! Clipboard adapter that pipes text into a platform clipboard tool.

use std::{
    io::{self, Write},
    process::{Command, Stdio},
};

use handlegen_core::{
    application::{ApplicationError, ports::Clipboard},
    error::HandlegenResult,
};
use tracing::{debug, instrument};

/// An external program that accepts clipboard contents on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardTool {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

const WL_COPY: ClipboardTool = ClipboardTool::new("wl-copy", &[]);
const XCLIP: ClipboardTool = ClipboardTool::new("xclip", &["-selection", "clipboard"]);
const XSEL: ClipboardTool = ClipboardTool::new("xsel", &["--clipboard", "--input"]);
const PBCOPY: ClipboardTool = ClipboardTool::new("pbcopy", &[]);
const CLIP: ClipboardTool = ClipboardTool::new("clip", &[]);

/// System clipboard backed by whichever platform tool can be spawned.
///
/// Tools are tried in order; the first one that starts wins.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    tools: Vec<ClipboardTool>,
}

impl SystemClipboard {
    /// Candidate tools for the current platform.
    pub fn detect() -> Self {
        let tools = if cfg!(target_os = "macos") {
            vec![PBCOPY]
        } else if cfg!(target_os = "windows") {
            vec![CLIP]
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            vec![WL_COPY, XCLIP, XSEL]
        } else {
            vec![XCLIP, XSEL, WL_COPY]
        };
        Self { tools }
    }

    /// Use an explicit tool list.
    pub fn new(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[ClipboardTool] {
        &self.tools
    }

    /// `Err` only when the tool cannot be started. Once spawned, the child
    /// is always waited on; a failed write comes back next to its status.
    fn pipe(
        tool: &ClipboardTool,
        text: &str,
    ) -> io::Result<(std::process::ExitStatus, io::Result<()>)> {
        let mut child = Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin is dropped at the end of its match arm, closing the pipe.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        Ok((status, written))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::detect()
    }
}

impl Clipboard for SystemClipboard {
    #[instrument(skip_all, fields(len = text.len()))]
    fn write_text(&self, text: &str) -> HandlegenResult<()> {
        let mut tried = Vec::with_capacity(self.tools.len());

        for tool in &self.tools {
            match Self::pipe(tool, text) {
                Ok((_, Err(e))) => {
                    return Err(ApplicationError::ClipboardWriteFailed {
                        reason: format!("could not write to {}: {}", tool.program, e),
                    }
                    .into());
                }
                Ok((status, Ok(()))) if status.success() => {
                    debug!(tool = tool.program, "Copied to clipboard");
                    return Ok(());
                }
                Ok((status, Ok(()))) => {
                    return Err(ApplicationError::ClipboardWriteFailed {
                        reason: format!("{} exited with {}", tool.program, status),
                    }
                    .into());
                }
                Err(e) => {
                    debug!(tool = tool.program, error = %e, "Clipboard tool not usable");
                    tried.push(tool.program);
                }
            }
        }

        Err(ApplicationError::ClipboardUnavailable {
            reason: if tried.is_empty() {
                "no clipboard tools configured".into()
            } else {
                format!("none of {} could be started", tried.join(", "))
            },
        }
        .into())
    }
}
