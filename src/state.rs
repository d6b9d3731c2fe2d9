use crate::data::model::{Attribute, StatsRun};
use crate::data::stats::{BoxStats, box_stats};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded run (None until a load succeeds).
    pub run: Option<StatsRun>,

    /// Cached box statistics, same order as `Attribute::ALL`.
    /// A `None` entry is an empty series.
    pub stats: [Option<BoxStats>; 3],

    /// Whether outlier points are drawn.
    pub show_outliers: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            run: None,
            stats: [None, None, None],
            show_outliers: true,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded run and precompute its box statistics.
    pub fn set_run(&mut self, run: StatsRun) {
        self.stats = run.series.each_ref().map(|s| box_stats(&s.values));
        self.run = Some(run);
        self.status_message = None;
    }

    pub fn stats_for(&self, attribute: Attribute) -> Option<&BoxStats> {
        self.stats[attribute.index()].as_ref()
    }
}
