//! Tracker - per-search bookkeeping
//!
//! Counts visited nodes against the budget and remembers the best variation
//! seen at each board height, so a search that never reaches its goal can
//! still hand back its closest result.

use std::collections::BTreeMap;
use std::rc::Rc;

use trix_core::types::SearchSettings;

use crate::Variation;

#[derive(Debug, Clone)]
pub struct Tracker {
    visited: usize,
    /// Best variation per board height
    history: BTreeMap<usize, Rc<Variation>>,
    max_nodes: usize,
    max_depth: usize,
    cutoff_depth: usize,
}

impl Tracker {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            visited: 0,
            history: BTreeMap::new(),
            max_nodes: settings.max_nodes,
            max_depth: 0,
            cutoff_depth: settings.cutoff_depth,
        }
    }

    /// Count a visit and record the variation if it is the best at its height
    pub fn visit(&mut self, variation: &Rc<Variation>) {
        self.visited += 1;
        self.max_depth = self.max_depth.max(variation.number_of_actions());
        if variation.is_root() {
            return;
        }
        let improves = self
            .history
            .get(&variation.height())
            .map_or(true, |best| variation.priority_score() < best.priority_score());
        if improves {
            self.history.insert(variation.height(), Rc::clone(variation));
        }
    }

    /// Whether `variation` should stop expanding
    pub fn should_cutoff(&self, variation: &Variation) -> bool {
        self.visited >= self.max_nodes || variation.number_of_actions() >= self.cutoff_depth
    }

    /// Best recorded variation at the lowest height seen
    pub fn best(&self) -> Option<&Rc<Variation>> {
        self.history.values().next()
    }

    pub fn best_at(&self, height: usize) -> Option<&Rc<Variation>> {
        self.history.get(&height)
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Most actions seen on any visited variation
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
