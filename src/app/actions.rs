use std::sync::mpsc;

use super::{BrowserApp, PendingFetch};
use crate::fetch;
use crate::model::{ExamKind, NO_SELECTION, ProblemsView};

impl BrowserApp {
    /// Change handler for either selector: stores the new value, resets the
    /// sibling selector to the sentinel and requests the problems of the new
    /// exam number. At most one selector holds a non-zero value afterwards.
    pub fn select_exam(&mut self, kind: ExamKind, exam_number: i32) {
        *self.selected_value_mut(kind) = exam_number;
        *self.selected_value_mut(kind.sibling()) = NO_SELECTION;

        // Anything still in flight answers a selection that no longer exists.
        self.fetch_generation += 1;

        if exam_number == NO_SELECTION {
            // The fetcher would resolve to an empty list anyway; apply it
            // directly and skip the round trip.
            self.pending_fetch = None;
            self.fetch_rx = None;
            self.view = ProblemsView::Loaded {
                kind,
                exam_number,
                problems: Vec::new(),
            };
            return;
        }

        let generation = self.fetch_generation;
        let prior_view = std::mem::replace(&mut self.view, ProblemsView::Loading {
            kind,
            exam_number,
        });
        self.pending_fetch = Some(PendingFetch {
            generation,
            kind,
            exam_number,
            prior_view,
        });

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);
        let endpoint = self.endpoint.clone();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = fetch::fetch_problems(&endpoint, exam_number);
            let _ = tx.send((generation, result));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch::fetch_problems(&endpoint, exam_number).await;
            let _ = tx.send((generation, result));
        });
    }

    /// Polled once per frame; applies at most one finished fetch. A result
    /// from an older generation lost the race against a newer selection and
    /// is dropped without touching the view.
    pub fn poll_fetch_result(&mut self) {
        let Some((generation, result)) = self
            .fetch_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok())
        else {
            return;
        };

        if generation != self.fetch_generation {
            log::debug!("Отброшен устаревший ответ (поколение {generation})");
            return;
        }

        self.fetch_rx = None;
        let Some(pending) = self.pending_fetch.take() else {
            return;
        };

        match result {
            Ok(problems) => {
                self.view = ProblemsView::Loaded {
                    kind: pending.kind,
                    exam_number: pending.exam_number,
                    problems,
                };
            }
            Err(err) => {
                // As in the page script: log, no retry, no error banner. The
                // loading view gives way back to whatever was shown before.
                log::error!("Ошибка при получении заданий: {err}");
                self.view = pending.prior_view;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::model::Problem;

    // Nothing listens on the discard port; spawned fetches fail fast.
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/get_problems";

    fn app() -> BrowserApp {
        BrowserApp::with_endpoint(DEAD_ENDPOINT)
    }

    #[test]
    fn selecting_one_kind_resets_the_sibling() {
        let mut app = app();

        app.select_exam(ExamKind::Current, 5);
        assert_eq!(app.current_exam_number, 5);
        assert_eq!(app.outdated_exam_number, NO_SELECTION);

        app.select_exam(ExamKind::Outdated, -3);
        assert_eq!(app.outdated_exam_number, -3);
        assert_eq!(app.current_exam_number, NO_SELECTION);
    }

    #[test]
    fn sentinel_selection_shows_empty_state_without_a_fetch() {
        let mut app = app();

        app.select_exam(ExamKind::Current, NO_SELECTION);

        assert!(!app.is_fetch_pending());
        assert_eq!(app.view, ProblemsView::Loaded {
            kind: ExamKind::Current,
            exam_number: NO_SELECTION,
            problems: Vec::new(),
        });
    }

    #[test]
    fn nonzero_selection_starts_a_pending_fetch() {
        let mut app = app();

        app.select_exam(ExamKind::Outdated, -7);

        assert!(app.is_fetch_pending());
    }

    #[test]
    fn selection_shows_loading_until_the_result_arrives() {
        let mut app = app();

        app.select_exam(ExamKind::Current, 5);

        assert_eq!(app.view, ProblemsView::Loading {
            kind: ExamKind::Current,
            exam_number: 5,
        });
    }

    #[test]
    fn reselecting_invalidates_the_previous_fetch() {
        let mut app = app();

        app.select_exam(ExamKind::Current, 5);
        let first = app.fetch_generation;
        app.select_exam(ExamKind::Current, 6);

        assert!(app.fetch_generation > first);
    }

    #[test]
    fn stale_generation_responses_are_dropped() {
        let mut app = app();
        let (tx, rx) = mpsc::channel();
        app.fetch_rx = Some(rx);
        app.pending_fetch = Some(PendingFetch {
            generation: 1,
            kind: ExamKind::Current,
            exam_number: 5,
            prior_view: ProblemsView::Idle,
        });
        app.fetch_generation = 2; // a newer selection happened meanwhile

        tx.send((1, Ok(vec![Problem::from("<p>поздно</p>")])))
            .unwrap();
        app.poll_fetch_result();

        assert_eq!(app.view, ProblemsView::Idle);
        assert!(app.is_fetch_pending()); // the newer fetch is still awaited
    }

    #[test]
    fn current_generation_response_replaces_the_view() {
        let mut app = app();
        let (tx, rx) = mpsc::channel();
        app.fetch_rx = Some(rx);
        app.pending_fetch = Some(PendingFetch {
            generation: 1,
            kind: ExamKind::Current,
            exam_number: 5,
            prior_view: ProblemsView::Idle,
        });
        app.fetch_generation = 1;

        let fragments = vec![
            "<p>a</p>".to_string(),
            "<p>b</p>".to_string(),
            "<p>c</p>".to_string(),
        ];
        tx.send((1, Ok(fragments))).unwrap();
        app.poll_fetch_result();

        match &app.view {
            ProblemsView::Loaded { problems, .. } => assert_eq!(problems.len(), 3),
            other => panic!("unexpected view: {other:?}"),
        }
        assert!(!app.is_fetch_pending());
    }

    #[test]
    fn empty_response_yields_the_empty_state_view() {
        let mut app = app();
        let (tx, rx) = mpsc::channel();
        app.fetch_rx = Some(rx);
        app.pending_fetch = Some(PendingFetch {
            generation: 1,
            kind: ExamKind::Outdated,
            exam_number: -9,
            prior_view: ProblemsView::Idle,
        });
        app.fetch_generation = 1;

        tx.send((1, Ok(Vec::new()))).unwrap();
        app.poll_fetch_result();

        assert_eq!(app.view, ProblemsView::Loaded {
            kind: ExamKind::Outdated,
            exam_number: -9,
            problems: Vec::new(),
        });
    }

    #[test]
    fn failed_fetch_keeps_the_previous_view() {
        let mut app = app();
        let previous = ProblemsView::Loaded {
            kind: ExamKind::Current,
            exam_number: 5,
            problems: vec![Problem::from("<p>старое</p>")],
        };
        app.view = ProblemsView::Loading {
            kind: ExamKind::Outdated,
            exam_number: -3,
        };

        let (tx, rx) = mpsc::channel();
        app.fetch_rx = Some(rx);
        app.pending_fetch = Some(PendingFetch {
            generation: 2,
            kind: ExamKind::Outdated,
            exam_number: -3,
            prior_view: previous.clone(),
        });
        app.fetch_generation = 2;

        tx.send((
            2,
            Err(FetchError::Transport {
                message: "connection refused".to_string(),
            }),
        ))
        .unwrap();
        app.poll_fetch_result();

        assert!(!app.is_fetch_pending());
        assert_eq!(app.view, previous);
    }
}
