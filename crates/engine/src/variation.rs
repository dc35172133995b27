//! Variation - one node of the game tree
//!
//! A variation is the environment reached by playing `actions` from the
//! search root. It never changes after construction; [`Variation::fork`]
//! builds the child on a forked environment, which is what makes caching the
//! utility sound.

use std::cell::OnceCell;
use std::cmp::Ordering;

use trix_core::{Action, Environment, EnvironmentError};

use crate::Referee;

#[derive(Debug, Clone)]
pub struct Variation {
    environment: Environment,
    depth: usize,
    actions: Vec<Action>,
    utility: OnceCell<f64>,
}

impl Variation {
    /// The search root: no actions, depth 0
    pub fn root(environment: Environment) -> Self {
        Self::new(environment, 0, Vec::new())
    }

    pub fn new(environment: Environment, depth: usize, actions: Vec<Action>) -> Self {
        Self {
            environment,
            depth,
            actions,
            utility: OnceCell::new(),
        }
    }

    /// The variation one action further down; `self` is untouched
    pub fn fork(&self, action: Action) -> Result<Variation, EnvironmentError> {
        let environment = self.environment.fork(action)?;
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        Ok(Variation::new(environment, self.depth + 1, actions))
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Search-tree depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Actions from the root, in play order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn number_of_actions(&self) -> usize {
        self.actions.len()
    }

    /// Board height after the last action
    pub fn height(&self) -> usize {
        self.environment.board().height()
    }

    pub fn is_root(&self) -> bool {
        self.actions.is_empty()
    }

    /// The first action played from the root
    pub fn root_action(&self) -> Option<&Action> {
        self.actions.first()
    }

    /// Referee score of the board, computed once with the configured weights
    pub fn utility(&self) -> f64 {
        *self.utility.get_or_init(|| {
            let weights = self.environment.configuration().weights;
            Referee::new(self.environment.board(), weights).score()
        })
    }

    /// Ordering key: fewer actions first, then lower utility
    pub fn priority_score(&self) -> PriorityScore {
        PriorityScore {
            number_of_actions: self.number_of_actions(),
            utility: self.utility(),
        }
    }
}

/// Ranks variations; the smaller score is the better variation
#[derive(Debug, Clone, Copy)]
pub struct PriorityScore {
    pub number_of_actions: usize,
    pub utility: f64,
}

impl PartialEq for PriorityScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityScore {}

impl PartialOrd for PriorityScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number_of_actions
            .cmp(&other.number_of_actions)
            .then_with(|| self.utility.total_cmp(&other.utility))
    }
}
