pub mod a2a;
pub mod agent;
pub mod config;
pub mod errors;
pub mod graph;
pub mod models;
pub mod systems;
