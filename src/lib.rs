//! Trix (workspace facade crate).
//!
//! Re-exports the member crates under one roof so tests, benches and the
//! `trix` binary can write `trix::{core, engine, types}`.

pub use trix_core as core;
pub use trix_engine as engine;
pub use trix_types as types;
