//! chatgate core
//!
//! Routes a conversation to one of three chat-completion backends and
//! normalizes their replies and failures into a single contract.
//!
//! # Structure
//! - `config` - immutable gateway configuration loaded at startup
//! - `domain` - message types shared by every layer
//! - `infrastructure::model` - routing-spec parser, provider clients, dispatcher
//! - `infrastructure::server` - axum REST gateway

pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use config::{ConfigError, GatewayConfig};
pub use domain::types;
pub use infrastructure::{model, server};
