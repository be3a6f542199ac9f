//! Timing report of a startup load.

use std::fmt;
use std::time::Duration;

use super::task::LoadTask;

/// Summary of the loading operation.
///
/// `total_duration` is wall time from the first spawn to the last join;
/// `task_durations` are measured inside each loader thread.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingSummary {
    /// Per-task wall time in spawn order.
    pub task_durations: Vec<(LoadTask, Duration)>,
    /// Wall time of the whole construction.
    pub total_duration: Duration,
    /// Whether the holder was built in pre-download mode.
    pub download_only: bool,
    /// Short names of every checkpoint loaded, including ones later dropped.
    pub loaded_models: Vec<&'static str>,
    /// Name of the source models came from.
    pub source: &'static str,
}

impl LoadingSummary {
    /// Sum of every task's own wall time: the cost of loading sequentially.
    #[must_use]
    pub fn sum_of_tasks(&self) -> Duration {
        self.task_durations.iter().map(|(_, d)| *d).sum()
    }

    /// Ratio of sequential cost to observed wall time. Above 1.0 means the
    /// loaders overlapped.
    #[must_use]
    pub fn parallel_speedup(&self) -> f64 {
        let total = self.total_duration.as_secs_f64();
        if total == 0.0 {
            return 0.0;
        }
        self.sum_of_tasks().as_secs_f64() / total
    }

    /// The longest task, which bounds the total from below.
    #[must_use]
    pub fn slowest_task(&self) -> Option<(LoadTask, Duration)> {
        self.task_durations.iter().copied().max_by_key(|(_, d)| *d)
    }

    #[must_use]
    pub fn task_duration(&self, task: LoadTask) -> Option<Duration> {
        self.task_durations
            .iter()
            .find(|(t, _)| *t == task)
            .map(|(_, d)| *d)
    }
}

impl fmt::Display for LoadingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Loaded {} models from {} in {:.2}s ({:.2}x parallel){}",
            self.loaded_models.len(),
            self.source,
            self.total_duration.as_secs_f64(),
            self.parallel_speedup(),
            if self.download_only { " [download only]" } else { "" }
        )?;
        for (task, duration) in &self.task_durations {
            writeln!(f, "  {:<24} {:>8.2}s", task.to_string(), duration.as_secs_f64())?;
        }
        Ok(())
    }
}
