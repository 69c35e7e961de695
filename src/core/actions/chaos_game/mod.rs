pub mod chaos_game;
pub mod point_generator;
pub mod ports;
