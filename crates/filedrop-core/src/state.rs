//! Upload list state container.
//!
//! Every change produces a whole new [`UploadList`] which replaces the old
//! one in a single store write. Timer ticks and network completions can
//! interleave on the event loop; because neither holds a stale copy across
//! an await, no update is lost.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{UploadId, UploadRecord, UploadStatus};
use crate::progress::ProgressSimulator;

/// Ordered list of tracked uploads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadList {
    records: Vec<UploadRecord>,
}

/// Number of records per status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub uploading: usize,
    pub completed: usize,
    pub failed: usize,
}

impl UploadList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: UploadId) -> Option<&UploadRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadRecord> {
        self.records.iter()
    }

    /// New list with `record` appended.
    pub fn with_record(&self, record: UploadRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// New list with the record `id` modified by `f`. Unknown ids leave the
    /// list unchanged.
    pub fn with_updated(&self, id: UploadId, f: impl FnOnce(&mut UploadRecord)) -> Self {
        let mut records = self.records.clone();
        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            f(record);
        }
        Self { records }
    }

    /// New list without the record `id`; the order of the rest is kept.
    pub fn without(&self, id: UploadId) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .collect(),
        }
    }

    /// New list with one simulated progress tick applied to `id`, if it is
    /// still uploading.
    pub fn tick_progress(&self, id: UploadId, sim: &ProgressSimulator) -> Self {
        self.with_updated(id, |record| {
            if record.status.is_uploading() {
                record.progress = sim.advance(record.progress);
            }
        })
    }

    pub fn counts(&self) -> StatusCounts {
        self.records
            .iter()
            .fold(StatusCounts::default(), |mut counts, r| {
                match r.status {
                    UploadStatus::Uploading => counts.uploading += 1,
                    UploadStatus::Completed => counts.completed += 1,
                    UploadStatus::Error => counts.failed += 1,
                }
                counts
            })
    }
}

impl FromIterator<UploadRecord> for UploadList {
    fn from_iter<I: IntoIterator<Item = UploadRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Holder of the current [`UploadList`].
///
/// Writers never edit in place; they hand [`apply`](UploadStore::apply) a
/// transform from the current list to the next one.
pub trait UploadStore {
    fn snapshot(&self) -> UploadList;

    fn apply(&self, f: impl FnOnce(&UploadList) -> UploadList);
}

impl UploadStore for RefCell<UploadList> {
    fn snapshot(&self) -> UploadList {
        self.borrow().clone()
    }

    fn apply(&self, f: impl FnOnce(&UploadList) -> UploadList) {
        let next = f(&self.borrow());
        *self.borrow_mut() = next;
    }
}

impl<S: UploadStore + ?Sized> UploadStore for &S {
    fn snapshot(&self) -> UploadList {
        (**self).snapshot()
    }

    fn apply(&self, f: impl FnOnce(&UploadList) -> UploadList) {
        (**self).apply(f)
    }
}

impl<S: UploadStore + ?Sized> UploadStore for Rc<S> {
    fn snapshot(&self) -> UploadList {
        (**self).snapshot()
    }

    fn apply(&self, f: impl FnOnce(&UploadList) -> UploadList) {
        (**self).apply(f)
    }
}
