use tracing::{debug, info};

use aurora_utils::{AuroraError, Result};

use crate::document::DocumentRegistry;
use crate::host::{CloseDecision, ConfirmPrompt, DocumentLabel, EditorHost, FileAccess, Navigator};
use crate::pane::PaneId;
use crate::session::Session;

/// The user-facing open/switch/close/save flow
///
/// Owns the [`Session`] and [`DocumentRegistry`] and mediates every
/// mutation between them and the application's collaborators. I/O
/// failures are returned to the caller with all state exactly as it was
/// before the failed operation; nothing is retried.
pub struct Workbench<F, P, H, N> {
    session: Session,
    registry: DocumentRegistry,
    files: F,
    prompt: P,
    host: H,
    navigator: N,
}

impl<F, P, H, N> Workbench<F, P, H, N>
where
    F: FileAccess,
    P: ConfirmPrompt,
    H: EditorHost,
    N: Navigator,
{
    /// Create a workbench wired to its collaborators
    pub fn new(files: F, prompt: P, host: H, navigator: N) -> Self {
        Self {
            session: Session::new(),
            registry: DocumentRegistry::new(),
            files,
            prompt,
            host,
            navigator,
        }
    }

    /// Get the session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get the document registry
    pub fn documents(&self) -> &DocumentRegistry {
        &self.registry
    }

    /// Whether any open document has unsaved changes
    pub fn has_unsaved_changes(&self) -> bool {
        !self.registry.modified_labels().is_empty()
    }

    /// Labels of all modified documents, for prompt UIs
    pub fn modified_documents(&self) -> Vec<DocumentLabel> {
        self.registry.modified_labels()
    }

    /// Open `path` in the focused pane, creating the first pane lazily
    ///
    /// Opening a path already shown in the focused pane switches to its
    /// tab instead of reopening. A failed read leaves no document and
    /// no tab behind.
    pub async fn open_file(&mut self, path: &str, display_name: &str) -> Result<()> {
        if let Some(pane) = self.session.focused_pane() {
            if pane.has_tab(path) {
                let pane_id = pane.id();
                debug!(pane_id, path, "Open request switches to existing tab");
                return self.set_active_tab(pane_id, path);
            }
        }

        // Read before touching any state so a failed read changes nothing.
        if !self.registry.contains(path) {
            let content = self.files.read(path).await?;
            self.registry.insert(path, display_name, content);
        }

        let pane_id = self.session.ensure_pane();
        self.session
            .pane_mut(pane_id)
            .ok_or(AuroraError::PaneNotFound(pane_id))?
            .add_tab(path);

        let content = self.document_content(path)?;
        self.host.bind(pane_id, path, &content);
        self.notify_active_path();

        info!(pane_id, path, "Opened file");
        Ok(())
    }

    /// Switch a pane's active tab
    ///
    /// Rebinds the pane's surface to the document and, if the pane is
    /// focused, drives the navigation highlight. Unfocused panes never
    /// touch the global highlight.
    pub fn set_active_tab(&mut self, pane_id: PaneId, path: &str) -> Result<()> {
        let pane = self
            .session
            .pane_mut(pane_id)
            .ok_or(AuroraError::PaneNotFound(pane_id))?;

        if pane.active_tab() == Some(path) {
            return Ok(());
        }
        pane.set_active(path)?;
        let focused = pane.is_focused();

        let content = self.document_content(path)?;
        self.host.bind(pane_id, path, &content);
        if focused {
            self.navigator.active_path_changed(Some(path));
        }
        Ok(())
    }

    /// Split a pane into a new pane viewing the same document
    pub fn split(&mut self, source: Option<PaneId>) -> Result<PaneId> {
        let new_id = self.session.split(source)?;
        let path = self
            .session
            .pane(new_id)
            .and_then(|p| p.active_tab())
            .map(String::from)
            .ok_or_else(|| AuroraError::internal("split pane has no active tab"))?;

        let content = self.document_content(&path)?;
        self.host.bind(new_id, &path, &content);
        // The new pane takes focus, so it drives the highlight.
        self.navigator.active_path_changed(Some(&path));
        Ok(new_id)
    }

    /// Move focus to a pane
    pub fn set_focus(&mut self, pane_id: PaneId) -> Result<()> {
        if self.session.focused_pane_id() == Some(pane_id) {
            return Ok(());
        }
        self.session.set_focus(pane_id)?;
        self.notify_active_path();
        Ok(())
    }

    /// A pane's surface reported gaining input focus
    pub fn handle_focus_gained(&mut self, pane_id: PaneId) -> Result<()> {
        self.set_focus(pane_id)
    }

    /// A pane's surface reported an edit
    ///
    /// The registry becomes the new canonical value and every other
    /// pane showing `path` is refreshed before this returns. The
    /// originating surface is the source and is not re-pushed.
    pub fn handle_content_changed(
        &mut self,
        origin: PaneId,
        path: &str,
        new_content: &str,
    ) -> Result<()> {
        let modified = self.registry.update_content(path, new_content)?;

        for pane in self.session.panes() {
            if pane.id() != origin && pane.has_tab(path) {
                self.host.sync_content(pane.id(), path, new_content);
            }
        }
        self.host.set_modified(path, modified);
        Ok(())
    }

    /// Save a document to the file backend
    ///
    /// On write failure the document stays modified and untouched.
    pub async fn save_file(&mut self, path: &str) -> Result<()> {
        let content = self.document_content(path)?;
        self.files.write(path, &content).await?;
        self.registry.mark_saved(path)?;
        self.host.set_modified(path, false);
        info!(path, "Saved file");
        Ok(())
    }

    /// Save the focused pane's active document; no-op if there is none
    pub async fn save_active(&mut self) -> Result<()> {
        let Some(path) = self
            .session
            .focused_pane()
            .and_then(|p| p.active_tab())
            .map(String::from)
        else {
            return Ok(());
        };
        self.save_file(&path).await
    }

    /// Close a tab, prompting if the document is modified
    ///
    /// Returns `false` when the user cancelled; all state is then
    /// exactly as before the call. A pane emptied by the close is
    /// auto-closed when other panes remain (without a second prompt);
    /// the last pane persists empty.
    pub async fn close_tab(&mut self, pane_id: PaneId, path: &str) -> Result<bool> {
        let pane = self
            .session
            .pane(pane_id)
            .ok_or(AuroraError::PaneNotFound(pane_id))?;
        if !pane.has_tab(path) {
            return Err(AuroraError::TabNotFound {
                pane_id,
                path: path.to_string(),
            });
        }

        let unsaved = self
            .registry
            .get(path)
            .filter(|d| d.is_modified())
            .map(|d| d.label());
        if let Some(label) = unsaved {
            match self.prompt.prompt_unsaved(std::slice::from_ref(&label)).await {
                CloseDecision::Cancel => {
                    debug!(pane_id, path, "Tab close cancelled");
                    return Ok(false);
                }
                CloseDecision::Save => self.save_file(path).await?,
                CloseDecision::Discard => {}
            }
        }

        self.finish_close_tab(pane_id, path)?;
        Ok(true)
    }

    /// Close the focused pane's active tab; no-op if there is none
    pub async fn close_active_tab(&mut self) -> Result<bool> {
        let Some((pane_id, path)) = self
            .session
            .focused_pane()
            .and_then(|p| p.active_tab().map(|t| (p.id(), t.to_string())))
        else {
            return Ok(true);
        };
        self.close_tab(pane_id, &path).await
    }

    /// Close a pane, prompting for documents only it references
    ///
    /// Returns `false` when the user cancelled. On `Save`, each at-risk
    /// document is written before the pane is destroyed; a failed write
    /// aborts the close with the session intact.
    pub async fn close_pane(&mut self, pane_id: PaneId) -> Result<bool> {
        if self.session.pane(pane_id).is_none() {
            return Err(AuroraError::PaneNotFound(pane_id));
        }

        let at_risk: Vec<DocumentLabel> = self
            .session
            .paths_exclusive_to(pane_id)
            .iter()
            .filter_map(|p| self.registry.get(p))
            .filter(|d| d.is_modified())
            .map(|d| d.label())
            .collect();

        if !at_risk.is_empty() {
            match self.prompt.prompt_unsaved(&at_risk).await {
                CloseDecision::Cancel => {
                    debug!(pane_id, "Pane close cancelled");
                    return Ok(false);
                }
                CloseDecision::Save => {
                    for label in &at_risk {
                        self.save_file(&label.path).await?;
                    }
                }
                CloseDecision::Discard => {}
            }
        }

        let pane = self.session.remove_pane(pane_id)?;
        self.host.dispose_pane(pane_id);
        for path in pane.tabs() {
            self.release_if_unreferenced(path);
        }
        self.notify_active_path();

        info!(pane_id, "Closed pane");
        Ok(true)
    }

    fn finish_close_tab(&mut self, pane_id: PaneId, path: &str) -> Result<()> {
        let pane = self
            .session
            .pane_mut(pane_id)
            .ok_or(AuroraError::PaneNotFound(pane_id))?;
        let was_active = pane.active_tab() == Some(path);
        pane.remove_tab(path)?;
        let now_empty = pane.is_empty();

        if now_empty && self.session.pane_count() > 1 {
            // The tab-level prompt already resolved the unsaved state.
            self.session.remove_pane(pane_id)?;
            self.host.dispose_pane(pane_id);
        } else if was_active && !now_empty {
            let active = self
                .session
                .pane(pane_id)
                .and_then(|p| p.active_tab())
                .map(String::from)
                .ok_or_else(|| AuroraError::internal("non-empty pane has no active tab"))?;
            let content = self.document_content(&active)?;
            self.host.bind(pane_id, &active, &content);
        }

        self.release_if_unreferenced(path);
        self.notify_active_path();

        debug!(pane_id, path, "Closed tab");
        Ok(())
    }

    fn document_content(&self, path: &str) -> Result<String> {
        self.registry
            .get(path)
            .map(|d| d.content().to_string())
            .ok_or_else(|| AuroraError::internal(format!("no document open for {}", path)))
    }

    fn release_if_unreferenced(&mut self, path: &str) {
        if self.session.reference_count(path) == 0 && self.registry.release(path).is_some() {
            self.host.release_document(path);
            debug!(path, "Released document");
        }
    }

    fn notify_active_path(&mut self) {
        let path = self
            .session
            .focused_pane()
            .and_then(|p| p.active_tab())
            .map(String::from);
        self.navigator.active_path_changed(path.as_deref());
    }
}
