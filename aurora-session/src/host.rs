//! Collaborator seams between the session core and the application
//!
//! The workbench is wired to these traits once at construction; nothing
//! in the core reaches back into the UI through globals or late lookups.
//! The core is single-threaded by design, so the async traits carry no
//! `Send` bound.
#![allow(async_fn_in_trait)]

use aurora_utils::Result;

use crate::pane::PaneId;

/// Identifies a document in prompt UIs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLabel {
    pub path: String,
    pub display_name: String,
}

/// Resolution of an unsaved-changes prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Save the listed documents, then proceed
    Save,
    /// Proceed without saving
    Discard,
    /// Abort the close; all state stays as it was
    Cancel,
}

/// Asynchronous file backend
///
/// Single-shot operations, no retry. Failures are surfaced to the user
/// by the caller and never crash the session.
pub trait FileAccess {
    /// Read the full content of `path`
    async fn read(&self, path: &str) -> Result<String>;

    /// Write `content` to `path`
    async fn write(&self, path: &str, content: &str) -> Result<()>;
}

/// Confirmation UI for unsaved documents
pub trait ConfirmPrompt {
    /// Ask the user what to do with `documents` before they are lost
    async fn prompt_unsaved(&mut self, documents: &[DocumentLabel]) -> CloseDecision;
}

/// Adapter to the text editing surfaces (one per pane)
///
/// All notifications are synchronous: when a workbench call returns,
/// every surface reflects the new state.
pub trait EditorHost {
    /// Bind a pane's surface to a document (tab switch or open)
    fn bind(&mut self, pane_id: PaneId, path: &str, content: &str);

    /// Refresh a non-originating pane after another pane edited `path`
    fn sync_content(&mut self, pane_id: PaneId, path: &str, content: &str);

    /// Update the modified indicator everywhere `path` is shown
    fn set_modified(&mut self, path: &str, modified: bool);

    /// Tear down a closed pane's surface resources
    fn dispose_pane(&mut self, pane_id: PaneId);

    /// Drop surface resources tied to a released document
    fn release_document(&mut self, path: &str);
}

/// Adapter to the file tree / navigation UI
pub trait Navigator {
    /// The focused pane's active path changed (None clears highlight)
    fn active_path_changed(&mut self, path: Option<&str>);
}
