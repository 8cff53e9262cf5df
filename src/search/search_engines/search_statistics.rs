use crate::search::HeuristicValue;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of child nodes generated
    generated_nodes: usize,
    /// Number of generated nodes dropped because their state was explored
    pruned_nodes: usize,
    /// Number of frontier entries skipped because their state was explored
    /// after they were added
    stale_nodes: usize,
    /// Largest number of nodes held by the frontier at once
    max_frontier_size: usize,
    /// Number of bounded iterations, only used by iterative deepening
    iterations: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            stale_nodes: 0,
            max_frontier_size: 0,
            iterations: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn increment_stale_nodes(&mut self) {
        self.stale_nodes += 1;
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(frontier_size);
    }

    /// Start a new bounded iteration of an iterative deepening search.
    pub fn register_iteration(&mut self, bound: HeuristicValue) {
        self.iterations += 1;
        debug!(iteration = self.iterations, bound = bound.into_inner());
    }

    pub fn get_expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            stale_nodes = self.stale_nodes,
            max_frontier_size = self.max_frontier_size,
            iterations = self.iterations,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
