//! Simulated upload progress.
//!
//! The browser's fetch API reports nothing while a request body is sent, so
//! the bar is animated by a timer instead: it creeps toward a ceiling below
//! 100 and only reaches 100 when the server answers. It does not reflect
//! bytes transferred.

use serde::{Deserialize, Serialize};

use crate::models::UploadId;

/// Timer parameters of the progress animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressSimulator {
    /// Delay between ticks in milliseconds.
    pub interval_ms: u32,
    /// Percentage points added per tick.
    pub step: u8,
    /// Highest value a tick can reach; must stay below 100.
    pub ceiling: u8,
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self {
            interval_ms: 200,
            step: 10,
            ceiling: 90,
        }
    }
}

impl ProgressSimulator {
    /// Next displayed value. Never decreases, never passes the ceiling.
    pub fn advance(&self, current: u8) -> u8 {
        if current >= self.ceiling {
            current
        } else {
            current.saturating_add(self.step).min(self.ceiling)
        }
    }
}

/// Starts the progress animation for an upload.
///
/// The returned guard keeps the animation alive; dropping it stops the ticks.
pub trait ProgressDriver {
    type Guard;

    fn start(&self, id: UploadId) -> Self::Guard;
}

/// No animation.
impl ProgressDriver for () {
    type Guard = ();

    fn start(&self, _id: UploadId) -> Self::Guard {}
}

impl<P: ProgressDriver + ?Sized> ProgressDriver for &P {
    type Guard = P::Guard;

    fn start(&self, id: UploadId) -> Self::Guard {
        (**self).start(id)
    }
}

/// Animation only when configured.
impl<P: ProgressDriver> ProgressDriver for Option<P> {
    type Guard = Option<P::Guard>;

    fn start(&self, id: UploadId) -> Self::Guard {
        self.as_ref().map(|driver| driver.start(id))
    }
}
