//! FGL front-end driver.
//!
//! Thin layer over the library crates for inspecting what the front end
//! does with a file:
//!
//! ```text
//! read_file ──► fgl_lexer::lex ──► fgl_parse::parse ──► fgl_parse::check
//!                    │                    │                    │
//!                  `lex`               `parse`              `check`
//! ```
//!
//! Command bodies write to any `io::Write` so tests can capture them; the
//! binary only wires them to stdout and stderr.

pub mod commands;
mod symbol_file;
pub mod tracing_setup;

pub use symbol_file::SymbolFile;
