// Rule-based project analysis engine.
// Pure, synchronous functions; the async surface lives in `analyzer` and `handlers`.

pub mod analyzer;
pub mod categorizer;
pub mod complexity;
pub mod demonstration;
pub mod handlers;
pub mod models;
pub mod profession;
pub mod scope;
