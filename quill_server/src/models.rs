pub mod client;
pub mod config;
pub mod errors;
pub mod generation;
pub mod prompts;
pub mod state;
