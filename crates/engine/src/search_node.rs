//! Search node - placement search over [`Variation`]s
//!
//! Binds the generic [`AStar`] loop to the game. Each node is one action
//! applied to its parent's variation; the fork happens lazily the first time
//! the node's state is needed, so children that never leave the frontier
//! cost nothing but their priority.
//!
//! - Cost: one per action.
//! - Heuristic: the height change a placement is expected to cause.
//! - Goal: any non-root variation whose board is back at the goal height.
//! - Terminal: the shared [`Tracker`] says the node or depth budget is spent.

use std::cell::OnceCell;
use std::rc::Rc;

use tracing::{debug, warn};
use trix_core::types::SearchSettings;
use trix_core::{Action, Board, Environment, Piece};

use crate::search::{AStar, Node};
use crate::{Plan, Tracker, Variation};

#[derive(Debug)]
pub struct MinimalSearchNode {
    parent: Option<Rc<Variation>>,
    action: Action,
    state: OnceCell<Option<Rc<Variation>>>,
    cost: i64,
    heuristic: i64,
    goal_height: usize,
}

impl MinimalSearchNode {
    pub fn root(variation: Rc<Variation>, goal_height: usize) -> Self {
        Self {
            parent: None,
            action: Action::DoNothing,
            state: OnceCell::from(Some(variation)),
            cost: 0,
            heuristic: 0,
            goal_height,
        }
    }

    fn child(&self, parent: &Rc<Variation>, action: Action) -> Self {
        Self {
            parent: Some(Rc::clone(parent)),
            action,
            state: OnceCell::new(),
            cost: self.cost + 1,
            heuristic: heuristic(parent.environment().board(), &action),
            goal_height: self.goal_height,
        }
    }

    /// The action that produced this node (`DoNothing` for the root)
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// The variation this node stands for, forked on first access.
    ///
    /// `None` when the action could not be applied; such a node is terminal
    /// and never a goal.
    pub fn variation(&self) -> Option<&Rc<Variation>> {
        self.state
            .get_or_init(|| {
                let parent = self.parent.as_ref()?;
                match parent.fork(self.action) {
                    Ok(variation) => Some(Rc::new(variation)),
                    Err(err) => {
                        warn!(code = err.code(), %err, "dropping inapplicable action");
                        None
                    }
                }
            })
            .as_ref()
    }
}

impl Node for MinimalSearchNode {
    type Context = Tracker;

    fn cost(&self) -> i64 {
        self.cost
    }

    fn heuristic_value(&self) -> i64 {
        self.heuristic
    }

    fn visit(&self, tracker: &mut Tracker) {
        if let Some(variation) = self.variation() {
            tracker.visit(variation);
        }
    }

    fn is_terminal(&self, tracker: &Tracker) -> bool {
        self.variation()
            .map_or(true, |variation| tracker.should_cutoff(variation))
    }

    fn is_goal(&self, _tracker: &Tracker) -> bool {
        self.variation()
            .is_some_and(|variation| !variation.is_root() && variation.height() == self.goal_height)
    }

    fn children(&self, _tracker: &Tracker) -> Vec<Self> {
        let Some(variation) = self.variation() else {
            return Vec::new();
        };
        candidate_actions(variation.environment())
            .into_iter()
            .map(|action| self.child(variation, action))
            .collect()
    }
}

/// Every action worth trying from `environment`, in expansion order:
/// buffered pieces first, then the next pending piece, then holding it.
///
/// Each placement is tried in every distinct rotation at every offset that
/// fits. Buffered pieces with the same shape are only expanded once. Holding
/// is skipped for the last pending piece and when the buffer is full.
pub fn candidate_actions(environment: &Environment) -> Vec<Action> {
    let mut actions = Vec::new();

    let mut seen: Vec<Piece> = Vec::with_capacity(environment.buffer().len());
    for &original in environment.buffer() {
        if seen.contains(&original) {
            continue;
        }
        seen.push(original);
        for piece in original.rotations() {
            actions.extend(
                environment
                    .possible_left_offsets_for(&piece)
                    .map(|left_offset| Action::PlaceFromBuffer {
                        piece,
                        left_offset,
                        original,
                    }),
            );
        }
    }

    if let Some(percept) = environment.perceive() {
        for piece in percept.piece.rotations() {
            actions.extend(
                environment
                    .possible_left_offsets_for(&piece)
                    .map(|left_offset| Action::PlaceNextPiece { piece, left_offset }),
            );
        }
        if percept.pieces.len() > 1 && !environment.buffer_is_full() {
            actions.push(Action::AddToBuffer {
                piece: percept.piece,
            });
        }
    }

    actions
}

/// Expected height change from `action`: the piece's height minus the
/// deepest open column it covers, never below minus the piece's height.
/// Zero for anything that is not a placement.
pub fn heuristic(board: &Board, action: &Action) -> i64 {
    let Some((piece, left_offset)) = action.placement() else {
        return 0;
    };
    let piece_height = piece.height() as i64;
    let depth = (left_offset..left_offset + piece.width())
        .map(|column| board.depth_for_column(column))
        .max()
        .unwrap_or(0) as i64;
    (piece_height - depth).max(-piece_height)
}

/// Search from `environment` for a sequence that brings the board back to
/// the goal height, falling back to the best variation recorded on the way.
pub fn plan(environment: &Environment, settings: &SearchSettings) -> Plan {
    let root = Rc::new(Variation::root(environment.detached()));
    let mut tracker = Tracker::new(settings);
    let mut search = AStar::new(MinimalSearchNode::root(root, settings.goal_height));

    let plan = match search.search(&mut tracker) {
        Some(goal) => goal
            .variation()
            .cloned()
            .map_or(Plan::NothingToDo, Plan::Reached),
        None => tracker
            .best()
            .cloned()
            .map_or(Plan::NothingToDo, Plan::BestKnown),
    };

    debug!(
        outcome = plan.kind(),
        actions = plan.actions().len(),
        visited = tracker.visited(),
        expanded = search.expanded(),
        pending = search.pending(),
        max_depth = tracker.max_depth(),
        "search finished"
    );
    plan
}
