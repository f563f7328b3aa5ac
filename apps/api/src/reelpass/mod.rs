// ReelPass: 0–1000 reputation score over five independently capped components.

pub mod handlers;
pub mod models;
pub mod scoring;
