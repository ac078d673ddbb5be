//! Command handlers for the `fglc` CLI.
//!
//! Each submodule implements one command. Shared pieces (reading files,
//! option parsing) live here in the module root.

use fgl_diagnostic::emitter::ColorMode;
use fgl_diagnostic::DiagnosticConfig;

mod check;
mod debug;

pub use check::{check_file, check_source, CheckSummary};
pub use debug::{lex_file, parse_file, write_outline, write_tokens};

/// Options accepted by `fglc check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    /// Name list consulted for calls not defined in the file.
    pub symbols: Option<String>,
    /// Skip the resolution pass; report lexical and syntax errors only.
    pub no_check: bool,
    pub color: ColorMode,
    /// Maximum number of errors shown (0 = unlimited).
    pub error_limit: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            symbols: None,
            no_check: false,
            color: ColorMode::Auto,
            error_limit: DiagnosticConfig::default().error_limit,
        }
    }
}

impl CheckOptions {
    /// Parse flags and the file path from the arguments after the command.
    pub fn parse(args: &[String]) -> Result<(CheckOptions, String), String> {
        let mut options = CheckOptions::default();
        let mut path = None;

        for arg in args {
            if let Some(file) = arg.strip_prefix("--symbols=") {
                options.symbols = Some(file.to_string());
            } else if arg == "--no-check" {
                options.no_check = true;
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                options.color = ColorMode::parse(mode)
                    .ok_or_else(|| format!("invalid color mode '{mode}' (auto, always, never)"))?;
            } else if let Some(limit) = arg.strip_prefix("--limit=") {
                options.error_limit = limit
                    .parse()
                    .map_err(|_| format!("invalid error limit '{limit}'"))?;
            } else if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            } else if path.is_none() {
                path = Some(arg.clone());
            } else {
                return Err(format!("unexpected argument '{arg}'"));
            }
        }

        let path = path.ok_or_else(|| "missing file path".to_string())?;
        Ok((options, path))
    }

    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig {
            error_limit: self.error_limit,
            ..DiagnosticConfig::default()
        }
    }
}

/// Read a source file, turning I/O failures into a user-facing message.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

#[cfg(test)]
mod tests;
