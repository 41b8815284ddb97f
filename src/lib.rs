pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod render;
pub mod spawner;
pub mod viewport;
