// Skill suggestions keyed on the detected profession plus universal and contextual sets.

pub mod generator;
pub mod handlers;
