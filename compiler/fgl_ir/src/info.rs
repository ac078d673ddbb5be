//! Descriptive metadata for hover and outline tooling.

use crate::Span;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolScope {
    /// Defined at module level, visible to every function of the module.
    Module,
    /// Defined inside a MAIN, FUNCTION or REPORT body.
    Local,
}

/// A named definition with its location and documentation text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolInfo {
    pub name: String,
    pub scope: SymbolScope,
    /// Span of the defining name.
    pub location: Span,
    pub documentation: Option<String>,
}

impl SymbolInfo {
    pub fn new(name: impl Into<String>, scope: SymbolScope, location: Span) -> Self {
        SymbolInfo {
            name: name.into(),
            scope,
            location,
            documentation: None,
        }
    }

    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}
