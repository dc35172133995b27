//! Agents - drive an environment to the end of its piece stream
//!
//! An agent looks at the live environment, produces a [`Plan`] and the
//! provided [`Agent::run`] loop commits it. The loop ends when nothing is
//! pending or held, or when the agent has nothing left it can do.

use std::rc::Rc;

use tracing::{info, warn};
use trix_core::types::{AgentKind, Configuration, SearchSettings};
use trix_core::{Action, Environment, EnvironmentError};

use crate::{search_node, Variation};

/// What an agent decided to play next
#[derive(Debug, Clone)]
pub enum Plan {
    /// A variation that reached the goal
    Reached(Rc<Variation>),
    /// The closest variation found within budget
    BestKnown(Rc<Variation>),
    NothingToDo,
}

impl Plan {
    pub fn variation(&self) -> Option<&Rc<Variation>> {
        match self {
            Plan::Reached(variation) | Plan::BestKnown(variation) => Some(variation),
            Plan::NothingToDo => None,
        }
    }

    /// Actions to commit, in order
    pub fn actions(&self) -> &[Action] {
        self.variation().map_or(&[], |variation| variation.actions())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Plan::Reached(_) => "reached",
            Plan::BestKnown(_) => "best_known",
            Plan::NothingToDo => "nothing_to_do",
        }
    }
}

/// Totals for one completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Plans committed
    pub decisions: usize,
    /// Actions committed across all plans
    pub actions: usize,
    /// Rows cleared over the whole game
    pub cleared: usize,
    /// Board height at the end
    pub height: usize,
}

pub trait Agent {
    fn name(&self) -> &'static str;

    /// Decide what to play from the current state
    fn choose(&self, environment: &Environment) -> Plan;

    /// Commit plans until nothing is pending or held
    fn run(&self, environment: &mut Environment) -> Result<RunSummary, EnvironmentError> {
        let mut summary = RunSummary::default();

        while environment.remaining() > 0 || !environment.buffer().is_empty() {
            let plan = self.choose(environment);
            if plan.actions().is_empty() {
                warn!(
                    agent = self.name(),
                    remaining = environment.remaining(),
                    buffered = environment.buffer().len(),
                    "nothing to do with pieces left"
                );
                break;
            }

            for &action in plan.actions() {
                environment.update(action)?;
            }
            summary.decisions += 1;
            summary.actions += plan.actions().len();
            info!(
                agent = self.name(),
                outcome = plan.kind(),
                actions = plan.actions().len(),
                height = environment.board().height(),
                remaining = environment.remaining(),
                "committed plan"
            );
        }

        summary.cleared = environment.board().cleared();
        summary.height = environment.board().height();
        info!(
            agent = self.name(),
            decisions = summary.decisions,
            actions = summary.actions,
            cleared = summary.cleared,
            height = summary.height,
            "run finished"
        );
        Ok(summary)
    }
}

/// One-ply lookahead: play the single action with the lowest utility
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent;

impl Agent for GreedyAgent {
    fn name(&self) -> &'static str {
        AgentKind::Default.as_str()
    }

    fn choose(&self, environment: &Environment) -> Plan {
        let root = Variation::root(environment.detached());
        let mut best: Option<Variation> = None;
        for action in search_node::candidate_actions(environment) {
            let Ok(candidate) = root.fork(action) else {
                continue;
            };
            if best
                .as_ref()
                .map_or(true, |current| candidate.utility() < current.utility())
            {
                best = Some(candidate);
            }
        }
        best.map_or(Plan::NothingToDo, |variation| Plan::BestKnown(Rc::new(variation)))
    }
}

/// Best-first search toward the goal height
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchAgent {
    pub settings: SearchSettings,
}

impl SearchAgent {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }
}

impl Agent for SearchAgent {
    fn name(&self) -> &'static str {
        AgentKind::Search.as_str()
    }

    fn choose(&self, environment: &Environment) -> Plan {
        search_node::plan(environment, &self.settings)
    }
}

/// The agent configured for `kind`
pub fn for_kind(kind: AgentKind, configuration: &Configuration) -> Box<dyn Agent> {
    match kind {
        AgentKind::Default => Box::new(GreedyAgent),
        AgentKind::Search => Box::new(SearchAgent::new(configuration.search)),
    }
}
