use aurora_utils::{AuroraError, Result};
use tracing::debug;

use crate::pane::{Pane, PaneId};

/// Hard cap on concurrent panes
pub const MAX_PANES: usize = 3;

/// The ordered collection of panes and their focus routing
///
/// Empty only while no file is open. Whenever at least one pane exists,
/// exactly one pane is focused. Pane ids are assigned monotonically and
/// never reused.
#[derive(Debug)]
pub struct Session {
    /// Live panes in creation order
    panes: Vec<Pane>,
    /// Next pane id to assign, starting at 1
    next_pane_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            panes: Vec::new(),
            next_pane_id: 1,
        }
    }

    /// Live panes in creation order
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// Number of live panes
    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Whether no panes exist (the "no file open" application state)
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Get a pane by id
    pub fn pane(&self, pane_id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|p| p.id() == pane_id)
    }

    /// Get a mutable pane by id
    pub fn pane_mut(&mut self, pane_id: PaneId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.id() == pane_id)
    }

    /// Get the focused pane
    pub fn focused_pane(&self) -> Option<&Pane> {
        self.panes.iter().find(|p| p.is_focused())
    }

    /// Get the focused pane mutably
    pub fn focused_pane_mut(&mut self) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.is_focused())
    }

    /// Get the focused pane's id
    pub fn focused_pane_id(&self) -> Option<PaneId> {
        self.focused_pane().map(|p| p.id())
    }

    /// Return the focused pane's id, creating the first pane if none exist
    pub fn ensure_pane(&mut self) -> PaneId {
        if self.panes.is_empty() {
            let id = self.allocate_pane();
            debug!(pane_id = id, "Created first pane");
            return id;
        }
        // Invariant: a non-empty session always has a focused pane
        self.focused_pane_id()
            .unwrap_or_else(|| self.panes[0].id())
    }

    /// Split a pane into a new pane viewing the same document
    ///
    /// The new pane opens the source pane's active tab and takes focus.
    /// Both panes end up viewing the same registry document; this is a
    /// view duplication, not a content copy.
    ///
    /// # Errors
    /// - `MaxPanesReached` when the pane cap is hit
    /// - `PaneNotFound` when `source` names a dead pane
    /// - `NoActiveTab` when the source pane has nothing to duplicate
    ///   (or the session is empty)
    pub fn split(&mut self, source: Option<PaneId>) -> Result<PaneId> {
        if self.panes.len() >= MAX_PANES {
            return Err(AuroraError::MaxPanesReached);
        }

        let source_pane = match source {
            Some(id) => self.pane(id).ok_or(AuroraError::PaneNotFound(id))?,
            None => self.focused_pane().ok_or(AuroraError::NoActiveTab)?,
        };
        let path = source_pane
            .active_tab()
            .ok_or(AuroraError::NoActiveTab)?
            .to_string();
        let source_id = source_pane.id();

        let new_id = self.allocate_pane();
        self.pane_mut(new_id)
            .expect("pane just created")
            .add_tab(&path);

        debug!(source = source_id, new_pane = new_id, path = %path, "Split pane");
        Ok(new_id)
    }

    /// Move focus to `pane_id`
    ///
    /// No-op if already focused.
    pub fn set_focus(&mut self, pane_id: PaneId) -> Result<()> {
        if self.pane(pane_id).is_none() {
            return Err(AuroraError::PaneNotFound(pane_id));
        }
        for pane in &mut self.panes {
            pane.set_focused(pane.id() == pane_id);
        }
        Ok(())
    }

    /// Remove a pane
    ///
    /// Pure bookkeeping: confirmation flows and document release are the
    /// workbench's job. If the removed pane was focused and panes
    /// remain, the first remaining pane takes focus.
    pub fn remove_pane(&mut self, pane_id: PaneId) -> Result<Pane> {
        let index = self
            .panes
            .iter()
            .position(|p| p.id() == pane_id)
            .ok_or(AuroraError::PaneNotFound(pane_id))?;

        let pane = self.panes.remove(index);

        if pane.is_focused() {
            if let Some(first) = self.panes.first_mut() {
                first.set_focused(true);
            }
        }

        debug!(pane_id, remaining = self.panes.len(), "Removed pane");
        Ok(pane)
    }

    /// Number of panes holding a tab for `path`
    pub fn reference_count(&self, path: &str) -> usize {
        self.panes.iter().filter(|p| p.has_tab(path)).count()
    }

    /// Tab paths of `pane_id` that no other pane references
    ///
    /// These are the documents that would become unreachable if the
    /// pane closed unsaved.
    pub fn paths_exclusive_to(&self, pane_id: PaneId) -> Vec<String> {
        let Some(pane) = self.pane(pane_id) else {
            return Vec::new();
        };
        pane.tabs()
            .iter()
            .filter(|path| self.reference_count(path) == 1)
            .cloned()
            .collect()
    }

    // New panes always take focus, both on first open and on split.
    fn allocate_pane(&mut self) -> PaneId {
        let id = self.next_pane_id;
        self.next_pane_id += 1;

        for pane in &mut self.panes {
            pane.set_focused(false);
        }
        let mut pane = Pane::new(id);
        pane.set_focused(true);
        self.panes.push(pane);
        id
    }
}
