use filedrop_core::{ProgressDriver, ProgressSimulator, UploadId, UploadStore};
use gloo_timers::callback::Interval;

use super::SignalStore;

/// Advances a record's simulated progress on a repeating timer.
///
/// The returned [`Interval`] is the guard: dropping it when the request
/// settles cancels the timer.
#[derive(Clone, Copy)]
pub struct IntervalProgress {
    store: SignalStore,
    sim: ProgressSimulator,
}

impl IntervalProgress {
    pub fn new(store: SignalStore, sim: ProgressSimulator) -> Self {
        Self { store, sim }
    }
}

impl ProgressDriver for IntervalProgress {
    type Guard = Interval;

    fn start(&self, id: UploadId) -> Self::Guard {
        let store = self.store;
        let sim = self.sim;
        Interval::new(sim.interval_ms, move || {
            store.apply(|list| list.tick_progress(id, &sim));
        })
    }
}
