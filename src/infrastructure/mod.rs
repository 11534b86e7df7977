//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Initial catalog data (seed)
//! - Repository implementations (repositories)
//! - Application state (state)

pub mod config;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod state;

pub use repositories::*;
pub use state::AppState;
