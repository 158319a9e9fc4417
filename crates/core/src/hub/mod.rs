pub mod tfhub;

use async_trait::async_trait;

use crate::error::HubError;
use crate::models::ModelHandle;

/// A source of pre-trained modules, addressed by URL.
#[async_trait]
pub trait ModelHub: Send + Sync {
    async fn load(&self, url: &str) -> Result<ModelHandle, HubError>;
}

pub use tfhub::TfHubClient;
