//! Multi-pane document session core for aurora
//!
//! Tracks which files are open, in which editor panes, with what content
//! and modification status. The [`DocumentRegistry`] is the single source
//! of truth for file content shared across panes; the [`Session`] owns
//! pane lifecycle and focus routing; the [`Workbench`] ties them to the
//! surrounding application through the collaborator traits in [`host`].
//!
//! The core is single-threaded and event-driven: only file reads/writes
//! and confirmation prompts suspend, and cross-pane content propagation
//! completes before the triggering call returns.

mod document;
pub mod host;
mod pane;
mod session;
mod workbench;

pub use document::{Document, DocumentRegistry};
pub use host::{CloseDecision, ConfirmPrompt, DocumentLabel, EditorHost, FileAccess, Navigator};
pub use pane::{Pane, PaneId};
pub use session::{Session, MAX_PANES};
pub use workbench::Workbench;
