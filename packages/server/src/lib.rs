// Sensitive-Text Masking - API Core
//
// HTTP wrapper around the masking pipeline. The router takes an analyzer
// generic over its text generator so tests can run it against a mock.

pub mod config;
pub mod server;

pub use config::*;
