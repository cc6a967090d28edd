pub mod movement;
pub mod rules;
