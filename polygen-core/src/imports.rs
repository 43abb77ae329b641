//! Import tracking for languages with conditional imports.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks the imports a generated file needs and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted, so the
/// rendered import block is deterministic for identical inputs.
///
/// # Example
///
/// ```
/// use polygen_core::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("datetime", "datetime");
/// imports.add("datetime", "date");
/// imports.add_module("time");
///
/// let modules: Vec<&str> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["datetime", "time"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a module import without specific symbols (Go packages, proto files).
    pub fn add_module(&mut self, module: &str) {
        self.imports.entry(module.to_string()).or_default();
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Forget every collected import.
    pub fn clear(&mut self) {
        self.imports.clear();
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("typing", "Optional");
        imports.add("typing", "List");
        imports.add("datetime", "datetime");

        assert!(imports.has_module("typing"));
        assert!(imports.has_symbol("typing", "List"));
        assert!(!imports.has_symbol("typing", "Dict"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_import_collector_dedup_and_order() {
        let mut imports = ImportCollector::new();
        imports.add("typing", "Optional");
        imports.add("typing", "Any");
        imports.add("typing", "Optional");

        let (module, symbols) = imports.iter().next().unwrap();
        assert_eq!(module, "typing");
        assert_eq!(
            symbols.iter().map(String::as_str).collect::<Vec<_>>(),
            ["Any", "Optional"]
        );
    }

    #[test]
    fn test_import_collector_lookup_and_clear() {
        let mut a = ImportCollector::new();
        a.add("typing", "Optional");
        a.add("typing", "List");
        a.add_module("time");

        assert!(a.has_symbol("typing", "Optional"));
        assert!(a.has_symbol("typing", "List"));
        assert!(!a.has_symbol("typing", "Any"));
        assert!(a.has_module("time"));

        a.clear();
        assert!(a.is_empty());
    }
}
