//! Placement search and agents
//!
//! Everything that decides *where* pieces go lives here; the board model it
//! explores is in `trix-core`.
//!
//! # Module Structure
//!
//! - [`search`]: generic best-first search (`Node`, `GeneralSearch`, `AStar`, `DepthFirst`)
//! - [`referee`]: weighted board score, lower is better
//! - [`variation`]: immutable game-tree nodes with a cached utility
//! - [`tracker`]: node budget, depth cutoff and best variation per height
//! - [`search_node`]: the placement problem expressed as a search `Node`
//! - [`agent`]: plans, the run loop and the two agents
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trix_core::{pieces, Environment};
//! use trix_core::types::Configuration;
//! use trix_engine::{Agent, SearchAgent};
//!
//! let config = Configuration { width: 4, buffer: 1, ..Configuration::default() };
//! let mut env = Environment::new(Arc::new(config), pieces::parse_pieces("22"));
//!
//! let summary = SearchAgent::default().run(&mut env).unwrap();
//! assert_eq!(summary.height, 0);
//! assert_eq!(env.board().cleared(), 2);
//! ```

pub mod agent;
pub mod referee;
pub mod search;
pub mod search_node;
pub mod tracker;
pub mod variation;

pub use agent::{for_kind, Agent, GreedyAgent, Plan, RunSummary, SearchAgent};
pub use referee::{Feature, Referee};
pub use search::{AStar, DepthFirst, Frontier, GeneralSearch, Node, PriorityFrontier};
pub use search_node::{candidate_actions, MinimalSearchNode};
pub use tracker::Tracker;
pub use variation::{PriorityScore, Variation};
