//! Scroll sampling: geometry → percent, the bounded sample series, and the
//! one-frame-at-a-time coalescing slot used by the browser tracker.

use super::config;

/// Percent of the scrollable range covered by `offset`.
///
/// Degenerate geometry (page no taller than the viewport) and non-finite
/// inputs read as `0`. Overscroll from momentum scrolling is clamped into
/// `[0, 100]`.
pub fn scroll_percent(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = document_height - viewport_height;
    if !max_scroll.is_finite() || max_scroll <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    sanitize(offset / max_scroll * 100.0)
}

fn sanitize(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Ordered record of scroll samples for one page view.
///
/// Always starts with a single `0` sample. Below `capacity` it is strictly
/// append-only. Reaching `capacity` halves the stored samples, keeping the
/// first and the newest, so the overall shape survives long sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSeries {
    samples: Vec<f64>,
    capacity: usize,
    recorded: u64,
}

impl ScrollSeries {
    pub const INITIAL: f64 = 0.0;
    const MIN_CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self::with_capacity(config::story().series_capacity)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(Self::MIN_CAPACITY);
        let mut samples = Vec::with_capacity(capacity.min(1024));
        samples.push(Self::INITIAL);
        Self {
            samples,
            capacity,
            recorded: 1,
        }
    }

    pub fn push(&mut self, sample: f64) {
        if self.samples.len() >= self.capacity {
            self.compact();
        }
        self.samples.push(sanitize(sample));
        self.recorded = self.recorded.saturating_add(1);
    }

    fn compact(&mut self) {
        let last_index = self.samples.len() - 1;
        let newest = self.samples[last_index];
        let mut kept: Vec<f64> = self.samples.iter().copied().step_by(2).collect();
        if last_index % 2 == 1 {
            kept.push(newest);
        }
        tracing::debug!(
            from = self.samples.len(),
            to = kept.len(),
            "Compacted scroll series"
        );
        self.samples = kept;
    }

    /// Most recent sample.
    pub fn latest(&self) -> f64 {
        self.samples.last().copied().unwrap_or(Self::INITIAL)
    }

    /// Sample before the most recent one, `0` when there is none.
    pub fn previous(&self) -> f64 {
        self.samples
            .len()
            .checked_sub(2)
            .map(|idx| self.samples[idx])
            .unwrap_or(Self::INITIAL)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples accepted over the page view, compaction included.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

impl Default for ScrollSeries {
    fn default() -> Self {
        Self::new()
    }
}

/// Single pending-frame slot.
///
/// Scheduling a new frame hands back the one it displaced so the caller can
/// cancel it; at most one frame is ever outstanding.
#[derive(Debug)]
pub struct FrameCoalescer<H> {
    pending: Option<H>,
}

impl<H> FrameCoalescer<H> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// Called from inside the frame callback once it has run.
    pub fn complete(&mut self) -> Option<H> {
        self.pending.take()
    }

    /// Teardown: the pending frame, if any, for the caller to cancel.
    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H> Default for FrameCoalescer<H> {
    fn default() -> Self {
        Self::new()
    }
}
