//! Symbolic-name -> file-path mapping for one view.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps symbolic local-resource names to absolute file paths.
///
/// Pure lookup table: no filesystem access. Whether the file exists is
/// checked by the [`SchemeResolver`](crate::SchemeResolver) at request time,
/// so a file may appear after it was registered.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    entries: HashMap<String, PathBuf>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a mapping. Registering an existing name replaces its path.
    pub fn register(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(name.into(), path.into());
    }

    /// Remove a mapping. Returns whether anything was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Look up the path registered for `name`.
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_resolve() {
        let mut reg = ResourceRegistry::new();
        reg.register("logo.png", "/app/assets/logo.png");
        assert_eq!(
            reg.resolve("logo.png"),
            Some(Path::new("/app/assets/logo.png"))
        );
        assert!(reg.contains("logo.png"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        let reg = ResourceRegistry::new();
        assert!(reg.resolve("missing.png").is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn last_write_wins() {
        let mut reg = ResourceRegistry::new();
        reg.register("app.js", "/v1/app.js");
        reg.register("app.js", "/v2/app.js");
        assert_eq!(reg.resolve("app.js"), Some(Path::new("/v2/app.js")));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unregister_removes_and_tolerates_absent() {
        let mut reg = ResourceRegistry::new();
        reg.register("a.css", "/a.css");
        assert!(reg.unregister("a.css"));
        assert!(reg.resolve("a.css").is_none());
        assert!(!reg.unregister("a.css"));
        assert!(!reg.unregister("never-registered"));
    }

    #[test]
    fn names_are_sorted() {
        let mut reg = ResourceRegistry::new();
        reg.register("b", "/b");
        reg.register("c", "/c");
        reg.register("a", "/a");
        assert_eq!(reg.names(), vec!["a", "b", "c"]);
        reg.clear();
        assert!(reg.names().is_empty());
    }

    #[test]
    fn resolve_does_not_touch_filesystem() {
        let mut reg = ResourceRegistry::new();
        reg.register("ghost", "/definitely/not/here.bin");
        assert_eq!(
            reg.resolve("ghost"),
            Some(Path::new("/definitely/not/here.bin"))
        );
    }
}
