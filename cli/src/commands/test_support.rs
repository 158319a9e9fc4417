use actionhub_core::{HubError, ModelHandle, ModelHub};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Hub double that records every URL it is asked for.
#[derive(Default)]
pub struct MockHub {
    pub failure: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockHub {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ModelHub for MockHub {
    async fn load(&self, url: &str) -> Result<ModelHandle, HubError> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(message) = &self.failure {
            return Err(HubError::Rejected(message.clone()));
        }
        Ok(ModelHandle {
            url: url.to_string(),
            path: PathBuf::from("/cache/module"),
            size_bytes: 1024,
            from_cache: false,
            fetched_at: chrono::Utc::now(),
        })
    }
}
