pub mod chaos_config;
