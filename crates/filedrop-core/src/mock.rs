//! Test doubles for the upload seams.
//!
//! Available to unit tests and, with the `mock` feature, to integration
//! tests and downstream crates.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::UploadError;
use crate::models::{UploadId, UploadRecord, UploadResponse};
use crate::progress::{ProgressDriver, ProgressSimulator};
use crate::session::{Transport, UploadFailure, UploadListener, UploadRequest};
use crate::state::{UploadList, UploadStore};

/// Timestamp returned by [`fixed_clock`] (2024-01-01T00:00:00Z).
pub const FIXED_NOW_MS: u64 = 1_704_067_200_000;

pub fn fixed_clock() -> u64 {
    FIXED_NOW_MS
}

/// What [`MockTransport`] saw for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentRequest {
    pub file_name: String,
    pub endpoint: String,
    pub category: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Transport whose files are strings and whose replies are queued.
///
/// With an empty queue every request succeeds.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<UploadResponse, UploadError>>>,
    requests: RefCell<Vec<SentRequest>>,
    hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Result<UploadResponse, UploadError>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Run `f` while a request is in flight.
    pub fn on_send(&self, f: impl Fn() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(f));
    }

    pub fn requests(&self) -> Vec<SentRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    type File = String;

    async fn send(
        &self,
        request: UploadRequest<'_, Self::File>,
    ) -> Result<UploadResponse, UploadError> {
        self.requests.borrow_mut().push(SentRequest {
            file_name: request.file_name.to_string(),
            endpoint: request.endpoint.to_string(),
            category: request.category.to_string(),
            authorization: request.credential.map(|c| c.header_value()),
            body: request.file.clone(),
        });

        if let Some(hook) = self.hook.borrow().as_ref() {
            hook();
        }

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(UploadResponse {
                    success: true,
                    message: "Uploaded".to_string(),
                    file_id: None,
                })
            })
    }
}

/// Listener that keeps every event it receives.
#[derive(Default)]
pub struct RecordingListener {
    completed: RefCell<Vec<(UploadRecord, UploadResponse)>>,
    errors: RefCell<Vec<UploadFailure>>,
}

impl RecordingListener {
    pub fn completed(&self) -> Vec<(UploadRecord, UploadResponse)> {
        self.completed.borrow().clone()
    }

    pub fn errors(&self) -> Vec<UploadFailure> {
        self.errors.borrow().clone()
    }
}

impl UploadListener for RecordingListener {
    fn on_complete(&self, record: &UploadRecord, response: &UploadResponse) {
        self.completed
            .borrow_mut()
            .push((record.clone(), response.clone()));
    }

    fn on_error(&self, failure: &UploadFailure) {
        self.errors.borrow_mut().push(failure.clone());
    }
}

/// Store that remembers every list it was given.
#[derive(Default)]
pub struct HistoryStore {
    current: RefCell<UploadList>,
    history: RefCell<Vec<UploadList>>,
}

impl HistoryStore {
    pub fn history(&self) -> Vec<UploadList> {
        self.history.borrow().clone()
    }
}

impl UploadStore for HistoryStore {
    fn snapshot(&self) -> UploadList {
        self.current.borrow().clone()
    }

    fn apply(&self, f: impl FnOnce(&UploadList) -> UploadList) {
        let next = f(&self.current.borrow());
        self.history.borrow_mut().push(next.clone());
        *self.current.borrow_mut() = next;
    }
}

/// Progress driver that counts starts and guard drops.
#[derive(Default)]
pub struct CountingProgress {
    started: Cell<usize>,
    stopped: Rc<Cell<usize>>,
}

/// Guard handed out by [`CountingProgress`].
pub struct CountingGuard(Rc<Cell<usize>>);

impl Drop for CountingGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

impl CountingProgress {
    pub fn started(&self) -> usize {
        self.started.get()
    }

    pub fn stopped(&self) -> usize {
        self.stopped.get()
    }
}

impl ProgressDriver for CountingProgress {
    type Guard = CountingGuard;

    fn start(&self, _id: UploadId) -> Self::Guard {
        self.started.set(self.started.get() + 1);
        CountingGuard(Rc::clone(&self.stopped))
    }
}

/// Progress driver whose timer only fires when [`ManualTicker::fire`] is
/// called, so ticks can be interleaved with an in-flight request.
pub struct ManualTicker<S> {
    store: S,
    sim: ProgressSimulator,
    running: Rc<Cell<Option<UploadId>>>,
}

/// Guard handed out by [`ManualTicker`]; dropping it stops the ticks.
pub struct TickerGuard(Rc<Cell<Option<UploadId>>>);

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.0.set(None);
    }
}

impl<S: UploadStore> ManualTicker<S> {
    pub fn new(store: S, sim: ProgressSimulator) -> Self {
        Self {
            store,
            sim,
            running: Rc::new(Cell::new(None)),
        }
    }

    /// One timer tick for the running upload; a no-op once its guard is gone.
    pub fn fire(&self) {
        if let Some(id) = self.running.get() {
            self.store.apply(|list| list.tick_progress(id, &self.sim));
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get().is_some()
    }
}

impl<S: UploadStore> ProgressDriver for ManualTicker<S> {
    type Guard = TickerGuard;

    fn start(&self, id: UploadId) -> Self::Guard {
        self.running.set(Some(id));
        TickerGuard(Rc::clone(&self.running))
    }
}
