//! Sequential upload orchestration.
//!
//! [`UploadSession`] ties the pieces together for each file: validate,
//! insert a record, start the progress animation, send one request, then
//! settle the record and notify the [`UploadListener`]. Files in a batch
//! are handled strictly one after another. There is no retry and no
//! cancellation.

use std::fmt;
use std::rc::Rc;

use crate::config::UploadConfig;
use crate::error::{UploadError, ValidationError};
use crate::models::{FileMeta, UploadId, UploadRecord, UploadResponse};
use crate::progress::ProgressDriver;
use crate::state::UploadStore;
use crate::validate::validate;

// =============================================================================
// Credentials
// =============================================================================

/// Bearer token passed explicitly to each batch.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Blank tokens yield `None`.
    pub fn bearer(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

// =============================================================================
// Seams
// =============================================================================

/// Everything needed to send one file.
#[derive(Debug)]
pub struct UploadRequest<'a, F> {
    pub file: &'a F,
    pub file_name: &'a str,
    pub endpoint: &'a str,
    /// Value of the multipart `category` field
    pub category: &'a str,
    pub credential: Option<&'a Credential>,
}

/// Sends a single multipart POST.
///
/// Implementations issue exactly one request and map every failure to an
/// [`UploadError`]. Futures need not be `Send`; the widget lives on the
/// browser's single thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Platform file handle (e.g. `web_sys::File`).
    type File;

    async fn send(
        &self,
        request: UploadRequest<'_, Self::File>,
    ) -> Result<UploadResponse, UploadError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type File = T::File;

    async fn send(
        &self,
        request: UploadRequest<'_, Self::File>,
    ) -> Result<UploadResponse, UploadError> {
        (**self).send(request).await
    }
}

/// Why a file ended up failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFailure {
    pub file_name: String,
    /// Record shown for the failure; `None` when the list was full.
    pub record_id: Option<UploadId>,
    pub error: UploadError,
}

impl UploadFailure {
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Receives the two outward events of the widget.
pub trait UploadListener {
    fn on_complete(&self, record: &UploadRecord, response: &UploadResponse);

    fn on_error(&self, failure: &UploadFailure);
}

impl UploadListener for () {
    fn on_complete(&self, _record: &UploadRecord, _response: &UploadResponse) {}

    fn on_error(&self, _failure: &UploadFailure) {}
}

impl<L: UploadListener + ?Sized> UploadListener for &L {
    fn on_complete(&self, record: &UploadRecord, response: &UploadResponse) {
        (**self).on_complete(record, response)
    }

    fn on_error(&self, failure: &UploadFailure) {
        (**self).on_error(failure)
    }
}

impl<L: UploadListener + ?Sized> UploadListener for Rc<L> {
    fn on_complete(&self, record: &UploadRecord, response: &UploadResponse) {
        (**self).on_complete(record, response)
    }

    fn on_error(&self, failure: &UploadFailure) {
        (**self).on_error(failure)
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// Result of processing one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Server accepted the file.
    Completed(UploadRecord),
    /// Request failed or server refused.
    Failed(UploadFailure),
    /// Rejected client-side; no request was sent.
    Rejected(UploadFailure),
}

/// Tally of a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub completed: usize,
    pub failed: usize,
    pub rejected: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &UploadOutcome) {
        match outcome {
            UploadOutcome::Completed(_) => self.completed += 1,
            UploadOutcome::Failed(_) => self.failed += 1,
            UploadOutcome::Rejected(_) => self.rejected += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.completed + self.failed + self.rejected
    }
}

// =============================================================================
// Session
// =============================================================================

/// Drives uploads against a store, transport, listener and progress driver.
pub struct UploadSession<T, S, L = (), P = ()> {
    config: Rc<UploadConfig>,
    transport: T,
    store: S,
    listener: L,
    progress: P,
    clock: fn() -> u64,
}

impl<T, S> UploadSession<T, S>
where
    T: Transport,
    S: UploadStore,
{
    /// Session without listener or progress animation.
    ///
    /// `clock` returns the current time in milliseconds since the Unix epoch.
    pub fn new(config: Rc<UploadConfig>, transport: T, store: S, clock: fn() -> u64) -> Self {
        Self {
            config,
            transport,
            store,
            listener: (),
            progress: (),
            clock,
        }
    }
}

impl<T, S, L, P> UploadSession<T, S, L, P>
where
    T: Transport,
    S: UploadStore,
    L: UploadListener,
    P: ProgressDriver,
{
    pub fn with_listener<L2: UploadListener>(self, listener: L2) -> UploadSession<T, S, L2, P> {
        UploadSession {
            config: self.config,
            transport: self.transport,
            store: self.store,
            listener,
            progress: self.progress,
            clock: self.clock,
        }
    }

    pub fn with_progress<P2: ProgressDriver>(self, progress: P2) -> UploadSession<T, S, L, P2> {
        UploadSession {
            config: self.config,
            transport: self.transport,
            store: self.store,
            listener: self.listener,
            progress,
            clock: self.clock,
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and upload a single file.
    ///
    /// The listener hears exactly one event per call.
    pub async fn process(
        &self,
        file: &T::File,
        meta: &FileMeta,
        credential: Option<&Credential>,
    ) -> UploadOutcome {
        let tracked = self.store.snapshot().len();
        if let Err(err) = validate(&self.config, meta, tracked) {
            return self.reject(meta, err);
        }

        let record = UploadRecord::uploading(meta, (self.clock)());
        let id = record.id;
        let inserted = record.clone();
        self.store.apply(move |list| list.with_record(inserted));

        let request = UploadRequest {
            file,
            file_name: &meta.name,
            endpoint: &self.config.endpoint,
            category: &self.config.category,
            credential,
        };
        let result = {
            let _ticker = self.progress.start(id);
            self.transport.send(request).await
        };

        match result {
            Ok(response) => {
                let mut completed = record;
                completed.complete();
                self.store
                    .apply(|list| list.with_updated(id, UploadRecord::complete));
                self.listener.on_complete(&completed, &response);
                UploadOutcome::Completed(completed)
            }
            Err(error) => {
                let message = error.to_string();
                self.store
                    .apply(move |list| list.with_updated(id, move |r| r.fail(message)));
                let failure = UploadFailure {
                    file_name: meta.name.clone(),
                    record_id: Some(id),
                    error,
                };
                self.listener.on_error(&failure);
                UploadOutcome::Failed(failure)
            }
        }
    }

    /// Process files one at a time, awaiting each upload before validating
    /// the next.
    pub async fn process_batch<I>(&self, files: I, credential: Option<&Credential>) -> BatchSummary
    where
        I: IntoIterator<Item = (T::File, FileMeta)>,
    {
        let mut summary = BatchSummary::default();
        for (file, meta) in files {
            let outcome = self.process(&file, &meta, credential).await;
            summary.record(&outcome);
        }
        summary
    }

    fn reject(&self, meta: &FileMeta, err: ValidationError) -> UploadOutcome {
        // A full list stays full: capacity rejections get no record.
        let record_id = match err {
            ValidationError::TooManyFiles { .. } => None,
            _ => {
                let record = UploadRecord::rejected(meta, (self.clock)(), err.to_string());
                let id = record.id;
                self.store.apply(move |list| list.with_record(record));
                Some(id)
            }
        };

        let failure = UploadFailure {
            file_name: meta.name.clone(),
            record_id,
            error: err.into(),
        };
        self.listener.on_error(&failure);
        UploadOutcome::Rejected(failure)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::mock::{
        CountingProgress, HistoryStore, ManualTicker, MockTransport, RecordingListener,
        fixed_clock,
    };
    use crate::models::UploadStatus;
    use crate::progress::ProgressSimulator;
    use crate::state::UploadList;

    const MB: u64 = 1024 * 1024;

    fn pdf(name: &str, size: u64) -> FileMeta {
        FileMeta::new(name, size, "application/pdf")
    }

    fn config() -> Rc<UploadConfig> {
        Rc::new(UploadConfig {
            max_files: 3,
            ..UploadConfig::default()
        })
    }

    #[test]
    fn test_credential_bearer() {
        assert!(Credential::bearer("").is_none());
        assert!(Credential::bearer("   ").is_none());
        let cred = Credential::bearer(" abc123 ").unwrap();
        assert_eq!(cred.header_value(), "Bearer abc123");
        assert_eq!(format!("{:?}", cred), "Credential(<redacted>)");
    }

    #[tokio::test]
    async fn test_oversize_file_is_rejected_without_request() {
        let transport = MockTransport::new();
        let store = RefCell::new(UploadList::new());
        let listener = RecordingListener::default();
        let session =
            UploadSession::new(config(), &transport, &store, fixed_clock).with_listener(&listener);

        let outcome = session
            .process(&"bytes".to_string(), &pdf("big.pdf", 20 * MB), None)
            .await;

        assert!(matches!(outcome, UploadOutcome::Rejected(_)));
        assert_eq!(transport.request_count(), 0);

        let list = store.snapshot();
        let record = list.iter().next().unwrap();
        assert_eq!(record.status, UploadStatus::Error);
        assert_eq!(record.progress, 0);
        assert_eq!(
            record.error.as_deref(),
            Some("File size must be less than 10 MB")
        );

        let errors = listener.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "File size must be less than 10 MB");
        assert_eq!(errors[0].record_id, Some(record.id));
    }

    #[tokio::test]
    async fn test_unsupported_type_is_rejected_without_request() {
        let transport = MockTransport::new();
        let store = RefCell::new(UploadList::new());
        let session = UploadSession::new(config(), &transport, &store, fixed_clock);

        let meta = FileMeta::new("tool.exe", MB, "application/x-msdownload");
        let outcome = session.process(&String::new(), &meta, None).await;

        assert!(matches!(outcome, UploadOutcome::Rejected(_)));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(store.snapshot().counts().failed, 1);
    }

    #[tokio::test]
    async fn test_success_completes_record() {
        let transport = MockTransport::new();
        transport.push_response(Ok(UploadResponse {
            success: true,
            message: "Stored".to_string(),
            file_id: Some("f_9".to_string()),
        }));
        let store = HistoryStore::default();
        let listener = RecordingListener::default();
        let session =
            UploadSession::new(config(), &transport, &store, fixed_clock).with_listener(&listener);

        let outcome = session
            .process(&"%PDF".to_string(), &pdf("contract.pdf", MB), None)
            .await;

        let UploadOutcome::Completed(record) = outcome else {
            panic!("expected completion");
        };
        assert_eq!(record.status, UploadStatus::Completed);
        assert_eq!(record.progress, 100);

        // uploading -> completed
        let statuses: Vec<_> = store
            .history()
            .iter()
            .map(|list| list.iter().next().unwrap().status)
            .collect();
        assert_eq!(statuses, vec![UploadStatus::Uploading, UploadStatus::Completed]);

        let completed = listener.completed();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].0.name, "contract.pdf");
        assert_eq!(completed[0].1.file_id.as_deref(), Some("f_9"));
        assert!(listener.errors().is_empty());
    }

    #[tokio::test]
    async fn test_server_failure_marks_error_once() {
        let transport = MockTransport::new();
        transport.push_response(Err(UploadError::Http {
            status: 500,
            message: Some("Disk full".to_string()),
        }));
        let store = RefCell::new(UploadList::new());
        let listener = RecordingListener::default();
        let session =
            UploadSession::new(config(), &transport, &store, fixed_clock).with_listener(&listener);

        let outcome = session
            .process(&String::new(), &pdf("a.pdf", MB), None)
            .await;

        assert!(matches!(outcome, UploadOutcome::Failed(_)));
        let list = store.snapshot();
        let record = list.iter().next().unwrap();
        assert_eq!(record.status, UploadStatus::Error);
        assert_eq!(record.progress, 0);
        assert_eq!(record.error.as_deref(), Some("Disk full"));
        assert_eq!(listener.errors().len(), 1);
        assert_eq!(listener.errors()[0].message(), "Disk full");
        assert!(listener.completed().is_empty());
    }

    #[tokio::test]
    async fn test_network_error_marks_error() {
        let transport = MockTransport::new();
        transport.push_response(Err(UploadError::Network("Failed to fetch".to_string())));
        let store = RefCell::new(UploadList::new());
        let listener = RecordingListener::default();
        let session =
            UploadSession::new(config(), &transport, &store, fixed_clock).with_listener(&listener);

        session
            .process(&String::new(), &pdf("a.pdf", MB), None)
            .await;

        assert_eq!(store.snapshot().counts().failed, 1);
        assert_eq!(
            listener.errors()[0].message(),
            "Network error: Failed to fetch"
        );
    }

    #[tokio::test]
    async fn test_request_carries_config_and_credential() {
        let transport = MockTransport::new();
        let store = RefCell::new(UploadList::new());
        let config = Rc::new(UploadConfig {
            endpoint: "https://files.example.com/upload".to_string(),
            category: "invoices".to_string(),
            ..UploadConfig::default()
        });
        let session = UploadSession::new(config, &transport, &store, fixed_clock);
        let credential = Credential::bearer("tok").unwrap();

        session
            .process(&"data".to_string(), &pdf("a.pdf", 4), Some(&credential))
            .await;
        session
            .process(&"data".to_string(), &pdf("b.pdf", 4), None)
            .await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].endpoint, "https://files.example.com/upload");
        assert_eq!(requests[0].category, "invoices");
        assert_eq!(requests[0].file_name, "a.pdf");
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok"));
        assert_eq!(requests[1].authorization, None);
    }

    #[tokio::test]
    async fn test_capacity_rejection_adds_no_record() {
        let transport = MockTransport::new();
        let store = RefCell::new(UploadList::new());
        let listener = RecordingListener::default();
        let session =
            UploadSession::new(config(), &transport, &store, fixed_clock).with_listener(&listener);

        let files = (0..4).map(|i| (String::new(), pdf(&format!("{}.pdf", i), MB)));
        let summary = session.process_batch(files, None).await;

        assert_eq!(
            summary,
            BatchSummary {
                completed: 3,
                failed: 0,
                rejected: 1
            }
        );
        assert_eq!(store.snapshot().len(), 3);
        assert_eq!(transport.request_count(), 3);

        let errors = listener.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].file_name, "3.pdf");
        assert_eq!(errors[0].record_id, None);
        assert_eq!(errors[0].message(), "Maximum of 3 files reached");
    }

    #[tokio::test]
    async fn test_batch_is_sequential_and_ordered() {
        let transport = MockTransport::new();
        let store = HistoryStore::default();
        let session = UploadSession::new(config(), &transport, &store, fixed_clock);

        let files = vec![
            (String::new(), pdf("first.pdf", MB)),
            (String::new(), pdf("second.pdf", MB)),
        ];
        session.process_batch(files, None).await;

        // The second record appears only after the first has completed.
        let history = store.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[1].len(), 1);
        assert_eq!(
            history[1].iter().next().unwrap().status,
            UploadStatus::Completed
        );
        assert_eq!(history[2].len(), 2);

        let names: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|r| r.file_name)
            .collect();
        assert_eq!(names, vec!["first.pdf", "second.pdf"]);
    }

    #[tokio::test]
    async fn test_progress_guard_spans_request() {
        let transport = MockTransport::new();
        let store = RefCell::new(UploadList::new());
        let progress = CountingProgress::default();
        let session =
            UploadSession::new(config(), &transport, &store, fixed_clock).with_progress(&progress);

        session
            .process(&String::new(), &pdf("a.pdf", MB), None)
            .await;
        session
            .process(&String::new(), &pdf("b.pdf", 20 * MB), None)
            .await;

        // Rejected files never start the animation.
        assert_eq!(progress.started(), 1);
        assert_eq!(progress.stopped(), 1);
    }

    #[tokio::test]
    async fn test_removed_while_uploading_still_reports() {
        let transport = MockTransport::new();
        let store = Rc::new(RefCell::new(UploadList::new()));
        let listener = RecordingListener::default();

        // Remove the record while the request is in flight, as a user click could.
        let hook_store = Rc::clone(&store);
        transport.on_send(move || {
            let id = hook_store.snapshot().iter().next().map(|r| r.id);
            if let Some(id) = id {
                hook_store.apply(|list| list.without(id));
            }
        });

        let session = UploadSession::new(config(), &transport, Rc::clone(&store), fixed_clock)
            .with_listener(&listener);
        session
            .process(&String::new(), &pdf("a.pdf", MB), None)
            .await;

        assert!(store.snapshot().is_empty());
        assert_eq!(listener.completed().len(), 1);
    }

    #[tokio::test]
    async fn test_ticks_during_request_then_completion_wins() {
        let transport = MockTransport::new();
        let store = Rc::new(RefCell::new(UploadList::new()));
        let ticker = Rc::new(ManualTicker::new(
            Rc::clone(&store),
            ProgressSimulator::default(),
        ));

        // Timer fires while the request is in flight; more ticks than it
        // takes to reach the ceiling.
        let seen = Rc::new(Cell::new((UploadStatus::Completed, 0u8)));
        let (hook_ticker, hook_store, hook_seen) =
            (Rc::clone(&ticker), Rc::clone(&store), Rc::clone(&seen));
        transport.on_send(move || {
            for _ in 0..3 {
                hook_ticker.fire();
            }
            let after_three = hook_store.snapshot().iter().next().map(|r| r.progress);
            assert_eq!(after_three, Some(30));

            for _ in 0..20 {
                hook_ticker.fire();
            }
            if let Some(record) = hook_store.snapshot().iter().next() {
                hook_seen.set((record.status, record.progress));
            }
        });

        let session = UploadSession::new(config(), &transport, Rc::clone(&store), fixed_clock)
            .with_progress(&*ticker);
        session
            .process(&String::new(), &pdf("a.pdf", MB), None)
            .await;

        assert_eq!(seen.get(), (UploadStatus::Uploading, 90));

        let record = store.snapshot().iter().next().cloned().unwrap();
        assert_eq!(record.status, UploadStatus::Completed);
        assert_eq!(record.progress, 100);

        // A tick that lands after settling changes nothing.
        assert!(!ticker.is_running());
        ticker.fire();
        store.apply(|list| list.tick_progress(record.id, &ProgressSimulator::default()));
        assert_eq!(store.snapshot().get(record.id).map(|r| r.progress), Some(100));
    }

    #[tokio::test]
    async fn test_ticks_during_request_then_failure_resets() {
        let transport = MockTransport::new();
        transport.push_response(Err(UploadError::Network("offline".into())));
        let store = Rc::new(RefCell::new(UploadList::new()));
        let ticker = Rc::new(ManualTicker::new(
            Rc::clone(&store),
            ProgressSimulator::default(),
        ));

        let hook_ticker = Rc::clone(&ticker);
        transport.on_send(move || {
            for _ in 0..4 {
                hook_ticker.fire();
            }
        });

        let session = UploadSession::new(config(), &transport, Rc::clone(&store), fixed_clock)
            .with_progress(&*ticker);
        session
            .process(&String::new(), &pdf("a.pdf", MB), None)
            .await;

        let record = store.snapshot().iter().next().cloned().unwrap();
        assert_eq!(record.status, UploadStatus::Error);
        assert_eq!(record.progress, 0);
        assert!(!ticker.is_running());
    }
}
