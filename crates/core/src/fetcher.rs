use std::io::Write;

use tracing::warn;

use crate::error::FetchError;
use crate::hub::ModelHub;
use crate::models::{ModelChoice, ModelHandle};

/// Resolves a `ModelChoice` to its hub URL and loads it, reporting progress
/// to `out`.
pub struct ModelFetcher<H> {
    hub: H,
}

impl<H: ModelHub> ModelFetcher<H> {
    pub fn new(hub: H) -> Self {
        Self { hub }
    }

    pub fn hub(&self) -> &H {
        &self.hub
    }

    /// Exactly one `ModelHub::load` call per invocation, no retries. Any
    /// failure, including a broken `out`, comes back as a `FetchError`.
    pub async fn resolve_and_load<W: Write + ?Sized>(
        &self,
        choice: ModelChoice,
        out: &mut W,
    ) -> Result<ModelHandle, FetchError> {
        let url = choice.url();
        let io_err = |e: std::io::Error| FetchError::new(url, e);

        writeln!(
            out,
            "Downloading {} model from TensorFlow Hub...",
            choice.display_name()
        )
        .map_err(io_err)?;
        if choice == ModelChoice::MoViNetA0 {
            writeln!(out, "This may take a few minutes...").map_err(io_err)?;
        }
        out.flush().map_err(io_err)?;

        let handle = self.hub.load(url).await.map_err(|e| {
            warn!(url, error = %e, "model fetch failed");
            FetchError::new(url, e)
        })?;

        writeln!(out, "✓ Model downloaded successfully!").map_err(io_err)?;
        if choice == ModelChoice::MoViNetA0 {
            writeln!(out, "Model loaded from: {}", url).map_err(io_err)?;
        }

        Ok(handle)
    }
}
