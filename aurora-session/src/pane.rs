use aurora_utils::{AuroraError, Result};

/// Pane identifier
///
/// Small positive integer, assigned monotonically by the session and
/// never reused, so a pane keeps its identity across sibling closes.
pub type PaneId = u64;

/// One visible editing surface's tab set and active selection
///
/// Tabs are references into the document registry by path; the pane
/// never owns file content.
#[derive(Debug)]
pub struct Pane {
    /// Unique pane identifier
    id: PaneId,
    /// Open tab paths in insertion order
    tab_order: Vec<String>,
    /// Currently active tab, always a member of `tab_order` when set
    active_tab: Option<String>,
    /// Whether this pane currently routes global actions
    focused: bool,
}

impl Pane {
    /// Create a new, empty, unfocused pane
    pub(crate) fn new(id: PaneId) -> Self {
        Self {
            id,
            tab_order: Vec::new(),
            active_tab: None,
            focused: false,
        }
    }

    /// Get pane ID
    pub fn id(&self) -> PaneId {
        self.id
    }

    /// Whether this pane has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Open tab paths in insertion order
    pub fn tabs(&self) -> &[String] {
        &self.tab_order
    }

    /// Get the active tab path
    pub fn active_tab(&self) -> Option<&str> {
        self.active_tab.as_deref()
    }

    /// Whether a tab for `path` is open in this pane
    pub fn has_tab(&self, path: &str) -> bool {
        self.tab_order.iter().any(|p| p == path)
    }

    /// Number of open tabs
    pub fn tab_count(&self) -> usize {
        self.tab_order.len()
    }

    /// Whether this pane has no tabs
    pub fn is_empty(&self) -> bool {
        self.tab_order.is_empty()
    }

    /// Add a tab for `path` and make it active
    ///
    /// Adding an already-open path is switch semantics, not a duplicate.
    pub fn add_tab(&mut self, path: &str) {
        if !self.has_tab(path) {
            self.tab_order.push(path.to_string());
        }
        self.active_tab = Some(path.to_string());
    }

    /// Remove the tab for `path`
    ///
    /// If it was active, the last remaining tab in insertion order
    /// becomes active, or none if the pane is now empty.
    pub fn remove_tab(&mut self, path: &str) -> Result<()> {
        if !self.has_tab(path) {
            return Err(AuroraError::TabNotFound {
                pane_id: self.id,
                path: path.to_string(),
            });
        }

        self.tab_order.retain(|p| p != path);

        if self.active_tab.as_deref() == Some(path) {
            self.active_tab = self.tab_order.last().cloned();
        }
        Ok(())
    }

    /// Make the tab for `path` active
    ///
    /// No-op if already active. The path must be open in this pane;
    /// anything else is a caller defect.
    pub fn set_active(&mut self, path: &str) -> Result<()> {
        if self.active_tab.as_deref() == Some(path) {
            return Ok(());
        }
        if !self.has_tab(path) {
            return Err(AuroraError::TabNotFound {
                pane_id: self.id,
                path: path.to_string(),
            });
        }
        self.active_tab = Some(path.to_string());
        Ok(())
    }
}
