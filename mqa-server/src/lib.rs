//! # mqa-server
//!
//! HTTP boundary for the member-message QA service:
//!
//! - [`config`] – environment-driven configuration with CLI overrides
//! - [`service`] – the [`QaService`] facade over cache, index, and engine
//! - [`routes`] – axum router: ask, health, and service info

pub mod config;
pub mod routes;
pub mod service;


pub use config::{Config, ConfigError};
pub use routes::build_router;
pub use service::QaService;
