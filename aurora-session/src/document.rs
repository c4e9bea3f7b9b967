use std::collections::HashMap;

use aurora_utils::{AuroraError, Result};

use crate::host::DocumentLabel;

/// An open file's canonical in-memory state
///
/// When a file is shown in more than one pane, this is the single true
/// copy; panes hold views into it, never independent content.
#[derive(Debug)]
pub struct Document {
    /// Unique identity
    path: String,
    /// Tab label derived from the path
    display_name: String,
    /// Current text
    canonical_content: String,
    /// Content as last written to the file backend
    saved_content: String,
}

impl Document {
    fn new(path: impl Into<String>, display_name: impl Into<String>, content: String) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.into(),
            saved_content: content.clone(),
            canonical_content: content,
        }
    }

    /// Get the document path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the display name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Get the current content
    pub fn content(&self) -> &str {
        &self.canonical_content
    }

    /// Get the content as last saved
    pub fn saved_content(&self) -> &str {
        &self.saved_content
    }

    /// Whether the current content differs from the last saved content
    pub fn is_modified(&self) -> bool {
        self.canonical_content != self.saved_content
    }

    /// Get a label for prompt UIs
    pub fn label(&self) -> DocumentLabel {
        DocumentLabel {
            path: self.path.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Canonical store of content per open path
///
/// Holds at most one [`Document`] per path. All I/O lives with the
/// caller; the registry only owns state.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: HashMap<String, Document>,
}

impl DocumentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a document is open for `path`
    pub fn contains(&self, path: &str) -> bool {
        self.documents.contains_key(path)
    }

    /// Get a document by path
    pub fn get(&self, path: &str) -> Option<&Document> {
        self.documents.get(path)
    }

    /// Number of open documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents are open
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Insert a freshly read document, or return the existing one
    ///
    /// Opening a path that is already open never creates a second copy;
    /// the content argument is ignored in that case.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        display_name: impl Into<String>,
        content: String,
    ) -> &Document {
        let path = path.into();
        self.documents
            .entry(path.clone())
            .or_insert_with(|| Document::new(path, display_name, content))
    }

    /// Replace the canonical content after a surface edit
    ///
    /// Returns the resulting modified flag. The caller is responsible
    /// for pushing the new content into every other pane showing `path`
    /// before yielding back to the event loop.
    pub fn update_content(&mut self, path: &str, new_content: &str) -> Result<bool> {
        let doc = self.documents.get_mut(path).ok_or_else(|| {
            AuroraError::internal(format!("content update for unopened document: {}", path))
        })?;
        if doc.canonical_content != new_content {
            doc.canonical_content = new_content.to_string();
        }
        Ok(doc.is_modified())
    }

    /// Mark the canonical content as persisted
    ///
    /// Called after the file backend write succeeded; clears `modified`.
    pub fn mark_saved(&mut self, path: &str) -> Result<()> {
        let doc = self.documents.get_mut(path).ok_or_else(|| {
            AuroraError::internal(format!("save mark for unopened document: {}", path))
        })?;
        doc.saved_content = doc.canonical_content.clone();
        Ok(())
    }

    /// Drop the document for `path`
    ///
    /// Called when no pane references the path anymore.
    pub fn release(&mut self, path: &str) -> Option<Document> {
        self.documents.remove(path)
    }

    /// Labels of all modified documents
    pub fn modified_labels(&self) -> Vec<DocumentLabel> {
        let mut labels: Vec<DocumentLabel> = self
            .documents
            .values()
            .filter(|d| d.is_modified())
            .map(|d| d.label())
            .collect();
        labels.sort_by(|a, b| a.path.cmp(&b.path));
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Document Tests ====================

    #[test]
    fn test_document_fresh_is_unmodified() {
        let mut registry = DocumentRegistry::new();
        let doc = registry.insert("/a.txt", "a.txt", "hello".into());

        assert_eq!(doc.path(), "/a.txt");
        assert_eq!(doc.display_name(), "a.txt");
        assert_eq!(doc.content(), "hello");
        assert_eq!(doc.saved_content(), "hello");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_document_label() {
        let mut registry = DocumentRegistry::new();
        let doc = registry.insert("/src/top.sv", "top.sv", "".into());

        let label = doc.label();
        assert_eq!(label.path, "/src/top.sv");
        assert_eq!(label.display_name, "top.sv");
    }

    // ==================== Registry Tests ====================

    #[test]
    fn test_registry_no_duplicate_per_path() {
        let mut registry = DocumentRegistry::new();
        registry.insert("/a.txt", "a.txt", "first".into());
        registry.insert("/a.txt", "a.txt", "second".into());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("/a.txt").unwrap().content(), "first");
    }

    #[test]
    fn test_registry_update_content_sets_modified() {
        let mut registry = DocumentRegistry::new();
        registry.insert("/a.txt", "a.txt", "hello".into());

        let modified = registry.update_content("/a.txt", "hello world").unwrap();
        assert!(modified);
        assert_eq!(registry.get("/a.txt").unwrap().content(), "hello world");
        assert!(registry.get("/a.txt").unwrap().is_modified());
    }

    #[test]
    fn test_registry_update_back_to_saved_clears_modified() {
        let mut registry = DocumentRegistry::new();
        registry.insert("/a.txt", "a.txt", "hello".into());

        registry.update_content("/a.txt", "hello!").unwrap();
        let modified = registry.update_content("/a.txt", "hello").unwrap();
        assert!(!modified);
        assert!(!registry.get("/a.txt").unwrap().is_modified());
    }

    #[test]
    fn test_registry_update_unknown_path_is_internal_error() {
        let mut registry = DocumentRegistry::new();
        let err = registry.update_content("/ghost.txt", "x").unwrap_err();
        assert!(matches!(err, AuroraError::Internal(_)));
    }

    #[test]
    fn test_registry_mark_saved_clears_modified() {
        let mut registry = DocumentRegistry::new();
        registry.insert("/a.txt", "a.txt", "hello".into());
        registry.update_content("/a.txt", "hello world").unwrap();

        registry.mark_saved("/a.txt").unwrap();

        let doc = registry.get("/a.txt").unwrap();
        assert!(!doc.is_modified());
        assert_eq!(doc.saved_content(), "hello world");
    }

    #[test]
    fn test_registry_mark_saved_idempotent() {
        let mut registry = DocumentRegistry::new();
        registry.insert("/a.txt", "a.txt", "hello".into());

        registry.mark_saved("/a.txt").unwrap();
        registry.mark_saved("/a.txt").unwrap();
        assert!(!registry.get("/a.txt").unwrap().is_modified());
    }

    #[test]
    fn test_registry_release() {
        let mut registry = DocumentRegistry::new();
        registry.insert("/a.txt", "a.txt", "hello".into());

        let released = registry.release("/a.txt");
        assert!(released.is_some());
        assert!(registry.is_empty());
        assert!(registry.release("/a.txt").is_none());
    }

    #[test]
    fn test_registry_modified_labels_sorted() {
        let mut registry = DocumentRegistry::new();
        registry.insert("/b.txt", "b.txt", "".into());
        registry.insert("/a.txt", "a.txt", "".into());
        registry.insert("/c.txt", "c.txt", "".into());

        registry.update_content("/c.txt", "x").unwrap();
        registry.update_content("/a.txt", "y").unwrap();

        let labels = registry.modified_labels();
        let paths: Vec<&str> = labels.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/a.txt", "/c.txt"]);
    }
}
