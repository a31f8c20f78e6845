//! Model infrastructure module
//!
//! Routes a conversation to exactly one of the known providers.
//!
//! # Structure
//! - `routing` - Provider enum and routing-spec parser
//! - `types` - ProviderError taxonomy
//! - `traits` - ModelProvider, ModelClient traits
//! - `adapter` - Message format adapters
//! - `factory` - Builds provider clients from config
//! - `clients` - Individual client implementations
//! - `dispatcher` - Dispatcher selecting a client per request

pub mod adapter;
pub mod clients;
pub mod dispatcher;
pub mod factory;
pub mod routing;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use dispatcher::Dispatcher;
pub use routing::{Provider, RoutingSpec};
pub use traits::{ModelClient, ModelProvider};
pub use types::{ErrorKind, ProviderError};
