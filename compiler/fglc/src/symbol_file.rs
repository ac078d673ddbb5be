//! Symbol provider backed by a plain-text name list.
//!
//! One name per line; blank lines and lines starting with `#` are ignored.
//! Names compare case-insensitively.

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use fgl_parse::SymbolProvider;
use rustc_hash::FxHashSet;
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct SymbolFile {
    names: FxHashSet<String>,
}

impl SymbolFile {
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_ascii_lowercase)
            .collect();
        SymbolFile { names }
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let symbols = Self::parse(&std::fs::read_to_string(path)?);
        debug!(path = %path.display(), names = symbols.len(), "loaded symbol file");
        Ok(symbols)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl SymbolProvider for SymbolFile {
    fn lookup(&self, names: &BTreeSet<String>) -> FxHashSet<String> {
        names
            .iter()
            .filter(|name| self.names.contains(name.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use fgl_parse::SymbolProvider;
    use pretty_assertions::assert_eq;

    use super::SymbolFile;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let file = SymbolFile::parse("# library\n\n  Open_Window \nlog_error\n");
        assert_eq!(file.len(), 2);

        let asked: BTreeSet<String> = ["open_window", "missing"]
            .into_iter()
            .map(String::from)
            .collect();
        let found: Vec<String> = file.lookup(&asked).into_iter().collect();
        assert_eq!(found, vec!["open_window".to_string()]);
    }

    #[test]
    fn test_empty_file() {
        assert!(SymbolFile::parse("# nothing here\n").is_empty());
    }
}
