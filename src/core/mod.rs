pub mod actions;
pub mod config;
pub mod data;
pub mod random;
