pub mod types;
pub mod grid;
pub mod tiles;
pub mod state;
pub mod systems;
