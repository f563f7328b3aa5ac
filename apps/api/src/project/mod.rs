// Project workflow helpers: draft assembly, per-skill feedback, pipeline staging.

pub mod draft;
pub mod feedback;
pub mod handlers;
pub mod pipeline;
pub mod plan;
