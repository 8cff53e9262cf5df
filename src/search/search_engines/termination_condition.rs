use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// How often (in expansions) memory usage is sampled when a memory limit is
/// set. Sampling on every expansion is too slow.
const MEMORY_SAMPLE_INTERVAL: usize = 1024;

/// Optional limits on a single search. A search without limits runs until it
/// finds a goal or exhausts its frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub expansion_limit: Option<usize>,
    pub memory_limit_mb: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_time_limit(self, time_limit: Duration) -> Self {
        Self {
            time_limit: Some(time_limit),
            ..self
        }
    }

    pub fn with_expansion_limit(self, expansion_limit: usize) -> Self {
        Self {
            expansion_limit: Some(expansion_limit),
            ..self
        }
    }

    pub fn with_memory_limit_mb(self, memory_limit_mb: usize) -> Self {
        Self {
            memory_limit_mb: Some(memory_limit_mb),
            ..self
        }
    }
}

/// Checks the [`SearchLimits`] of one running search. Engines ask it before
/// every expansion whether they should stop.
#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        info!(
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
            expansion_limit = limits.expansion_limit,
            memory_limit_mb = limits.memory_limit_mb,
        );
        Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    fn sample_memory(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    /// Whether the search should stop after `expanded_nodes` expansions, and
    /// if so with which result.
    pub fn should_terminate<S, A>(&mut self, expanded_nodes: usize) -> Option<SearchResult<S, A>> {
        self.log_if_needed();
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() > time_limit {
                info!("time limit exceeded");
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(expansion_limit) = self.limits.expansion_limit {
            if expanded_nodes >= expansion_limit {
                info!("expansion limit exceeded");
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.limits.memory_limit_mb {
            if expanded_nodes % MEMORY_SAMPLE_INTERVAL == 0 {
                self.sample_memory();
            }
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    info!("memory limit exceeded");
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_terminates() {
        let mut termination = TerminationCondition::new(SearchLimits::unlimited());
        assert!(termination
            .should_terminate::<(), ()>(usize::MAX - 1)
            .is_none());
    }

    #[test]
    fn expansion_limit() {
        let mut termination =
            TerminationCondition::new(SearchLimits::unlimited().with_expansion_limit(10));
        assert!(termination.should_terminate::<(), ()>(9).is_none());
        assert!(matches!(
            termination.should_terminate::<(), ()>(10),
            Some(SearchResult::ExpansionLimitExceeded)
        ));
    }

    #[test]
    fn memory_limit_is_checked_on_sampled_expansions() {
        let limits = SearchLimits::unlimited().with_memory_limit_mb(0);

        // nothing has been sampled before the first sampled expansion
        let mut termination = TerminationCondition::new(limits);
        assert!(termination.should_terminate::<(), ()>(1).is_none());

        let mut termination = TerminationCondition::new(limits);
        let result = termination.should_terminate::<(), ()>(0);
        if memory_stats().is_some() {
            assert!(matches!(result, Some(SearchResult::MemoryLimitExceeded)));
            // the peak stays over the limit between samples
            assert!(matches!(
                termination.should_terminate::<(), ()>(1),
                Some(SearchResult::MemoryLimitExceeded)
            ));
        } else {
            assert!(result.is_none());
        }
    }

    #[test]
    fn time_limit() {
        let mut termination =
            TerminationCondition::new(SearchLimits::unlimited().with_time_limit(Duration::ZERO));
        std::thread::sleep(Duration::from_millis(2));
        assert!(matches!(
            termination.should_terminate::<(), ()>(0),
            Some(SearchResult::TimeLimitExceeded)
        ));
    }
}
