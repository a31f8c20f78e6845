mod docs;
pub mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use error::{ServerError, status_for};
pub use router::router;

use crate::config::ServerSettings;
use crate::model::ModelProvider;
use std::sync::Arc;

pub async fn serve<P>(provider: Arc<P>, settings: &ServerSettings) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    router::serve(provider, settings).await
}
