//! Scripted collaborators for workbench tests
//!
//! Each mock shares its state through `Rc` so tests keep a handle for
//! assertions after moving a clone into the workbench. The core is
//! single-threaded, so `RefCell` interior mutability is enough.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use aurora_session::{
    CloseDecision, ConfirmPrompt, DocumentLabel, EditorHost, FileAccess, Navigator, PaneId,
};
use aurora_utils::{AuroraError, Result};

// ==================== File backend ====================

#[derive(Default)]
struct FakeFilesInner {
    files: RefCell<HashMap<String, String>>,
    fail_reads: RefCell<HashSet<String>>,
    fail_writes: RefCell<HashSet<String>>,
    reads: RefCell<Vec<String>>,
    writes: RefCell<Vec<(String, String)>>,
}

/// In-memory file backend with scriptable failures
#[derive(Default, Clone)]
pub struct FakeFiles {
    inner: Rc<FakeFilesInner>,
}

impl FakeFiles {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let files = FakeFiles::default();
        for (path, content) in entries {
            files
                .inner
                .files
                .borrow_mut()
                .insert(path.to_string(), content.to_string());
        }
        files
    }

    pub fn fail_read(&self, path: &str) {
        self.inner.fail_reads.borrow_mut().insert(path.to_string());
    }

    pub fn fail_write(&self, path: &str) {
        self.inner.fail_writes.borrow_mut().insert(path.to_string());
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.inner.files.borrow().get(path).cloned()
    }

    pub fn read_count(&self, path: &str) -> usize {
        self.inner.reads.borrow().iter().filter(|p| *p == path).count()
    }

    pub fn write_count(&self, path: &str) -> usize {
        self.inner
            .writes
            .borrow()
            .iter()
            .filter(|(p, _)| p == path)
            .count()
    }
}

impl FileAccess for FakeFiles {
    async fn read(&self, path: &str) -> Result<String> {
        self.inner.reads.borrow_mut().push(path.to_string());
        if self.inner.fail_reads.borrow().contains(path) {
            return Err(AuroraError::FileRead {
                path: path.into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted failure"),
            });
        }
        self.inner
            .files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| AuroraError::FileRead {
                path: path.into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            })
    }

    async fn write(&self, path: &str, content: &str) -> Result<()> {
        if self.inner.fail_writes.borrow().contains(path) {
            return Err(AuroraError::FileWrite {
                path: path.into(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "scripted failure",
                ),
            });
        }
        self.inner
            .files
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
        self.inner
            .writes
            .borrow_mut()
            .push((path.to_string(), content.to_string()));
        Ok(())
    }
}

// ==================== Confirmation prompt ====================

#[derive(Default)]
struct ScriptedPromptInner {
    replies: RefCell<VecDeque<CloseDecision>>,
    prompts: RefCell<Vec<Vec<DocumentLabel>>>,
}

/// Prompt that replays queued decisions and records what it was asked
///
/// Panics on an unscripted prompt so tests catch surprise dialogs.
#[derive(Default, Clone)]
pub struct ScriptedPrompt {
    inner: Rc<ScriptedPromptInner>,
}

impl ScriptedPrompt {
    pub fn replying(decisions: &[CloseDecision]) -> Self {
        let prompt = ScriptedPrompt::default();
        prompt.inner.replies.borrow_mut().extend(decisions.iter().copied());
        prompt
    }

    pub fn prompt_count(&self) -> usize {
        self.inner.prompts.borrow().len()
    }

    pub fn last_prompt(&self) -> Option<Vec<DocumentLabel>> {
        self.inner.prompts.borrow().last().cloned()
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    async fn prompt_unsaved(&mut self, documents: &[DocumentLabel]) -> CloseDecision {
        self.inner.prompts.borrow_mut().push(documents.to_vec());
        self.inner
            .replies
            .borrow_mut()
            .pop_front()
            .expect("unscripted confirmation prompt")
    }
}

// ==================== Editor host ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Bind {
        pane_id: PaneId,
        path: String,
        content: String,
    },
    Sync {
        pane_id: PaneId,
        path: String,
        content: String,
    },
    Modified {
        path: String,
        modified: bool,
    },
    DisposePane(PaneId),
    ReleaseDocument(String),
}

/// Editor host that records every notification in order
#[derive(Default, Clone)]
pub struct RecordingHost {
    events: Rc<RefCell<Vec<HostEvent>>>,
}

impl RecordingHost {
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn contains(&self, event: &HostEvent) -> bool {
        self.events.borrow().iter().any(|e| e == event)
    }
}

impl EditorHost for RecordingHost {
    fn bind(&mut self, pane_id: PaneId, path: &str, content: &str) {
        self.events.borrow_mut().push(HostEvent::Bind {
            pane_id,
            path: path.to_string(),
            content: content.to_string(),
        });
    }

    fn sync_content(&mut self, pane_id: PaneId, path: &str, content: &str) {
        self.events.borrow_mut().push(HostEvent::Sync {
            pane_id,
            path: path.to_string(),
            content: content.to_string(),
        });
    }

    fn set_modified(&mut self, path: &str, modified: bool) {
        self.events.borrow_mut().push(HostEvent::Modified {
            path: path.to_string(),
            modified,
        });
    }

    fn dispose_pane(&mut self, pane_id: PaneId) {
        self.events.borrow_mut().push(HostEvent::DisposePane(pane_id));
    }

    fn release_document(&mut self, path: &str) {
        self.events
            .borrow_mut()
            .push(HostEvent::ReleaseDocument(path.to_string()));
    }
}

// ==================== Navigator ====================

/// Navigator that records every highlight change
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    highlights: Rc<RefCell<Vec<Option<String>>>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<Option<String>> {
        self.highlights.borrow().last().cloned()
    }

    pub fn history(&self) -> Vec<Option<String>> {
        self.highlights.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn active_path_changed(&mut self, path: Option<&str>) {
        self.highlights.borrow_mut().push(path.map(String::from));
    }
}

// ==================== Harness ====================

pub type TestWorkbench =
    aurora_session::Workbench<FakeFiles, ScriptedPrompt, RecordingHost, RecordingNavigator>;

pub struct Harness {
    pub files: FakeFiles,
    pub prompt: ScriptedPrompt,
    pub host: RecordingHost,
    pub navigator: RecordingNavigator,
    pub workbench: TestWorkbench,
}

/// Build a workbench over scripted collaborators
pub fn harness(entries: &[(&str, &str)], replies: &[CloseDecision]) -> Harness {
    let files = FakeFiles::with(entries);
    let prompt = ScriptedPrompt::replying(replies);
    let host = RecordingHost::default();
    let navigator = RecordingNavigator::default();
    let workbench = aurora_session::Workbench::new(
        files.clone(),
        prompt.clone(),
        host.clone(),
        navigator.clone(),
    );
    Harness {
        files,
        prompt,
        host,
        navigator,
        workbench,
    }
}
