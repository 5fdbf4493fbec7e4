use std::sync::mpsc::Receiver;

use crate::fetch::{self, FetchError};
use crate::model::{ExamKind, NO_SELECTION, Problem, ProblemsView};

pub mod actions;

/// One in-flight request to the problems endpoint. Carries the view it
/// displaced so a failed fetch can put it back.
pub struct PendingFetch {
    pub generation: u64,
    pub kind: ExamKind,
    pub exam_number: i32,
    pub prior_view: ProblemsView,
}

pub struct BrowserApp {
    pub current_exam_number: i32,
    pub outdated_exam_number: i32,
    pub view: ProblemsView,
    endpoint: String,
    // Bumped on every selection; responses carrying an older value are stale.
    fetch_generation: u64,
    pending_fetch: Option<PendingFetch>,
    fetch_rx: Option<Receiver<(u64, Result<Vec<Problem>, FetchError>)>>,
}

impl BrowserApp {
    pub fn new() -> Self {
        Self::with_endpoint(fetch::default_endpoint())
    }

    /// The endpoint is injected so the selection handling stays testable
    /// without a running backend.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            current_exam_number: NO_SELECTION,
            outdated_exam_number: NO_SELECTION,
            view: ProblemsView::Idle,
            endpoint: endpoint.into(),
            fetch_generation: 0,
            pending_fetch: None,
            fetch_rx: None,
        }
    }

    pub fn selected_value(&self, kind: ExamKind) -> i32 {
        match kind {
            ExamKind::Current => self.current_exam_number,
            ExamKind::Outdated => self.outdated_exam_number,
        }
    }

    fn selected_value_mut(&mut self, kind: ExamKind) -> &mut i32 {
        match kind {
            ExamKind::Current => &mut self.current_exam_number,
            ExamKind::Outdated => &mut self.outdated_exam_number,
        }
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.pending_fetch.is_some()
    }
}

impl Default for BrowserApp {
    fn default() -> Self {
        Self::new()
    }
}
