use async_trait::async_trait;
use flate2::read::GzDecoder;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use super::ModelHub;
use crate::config::HubConfig;
use crate::error::HubError;
use crate::models::ModelHandle;

/// Client for TF-Hub style handles. Modules are fetched as gzip tarballs and
/// unpacked into `<cache_dir>/<sha256 of url>`.
pub struct TfHubClient {
    client: Client,
    cache_dir: PathBuf,
    show_progress: bool,
}

impl TfHubClient {
    pub fn new(config: &HubConfig) -> Result<Self, HubError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            cache_dir: config.resolved_cache_dir(),
            show_progress: config.show_progress,
        })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn module_dir(&self, url: &str) -> PathBuf {
        self.cache_dir.join(cache_key(url))
    }

    pub fn is_cached(&self, url: &str) -> bool {
        self.module_dir(url).is_dir()
    }

    async fn download_archive(&self, url: &str, dest: &Path) -> Result<u64, HubError> {
        let request_url = compressed_url(url);
        debug!(url = %request_url, "requesting compressed module");

        let response = self.client.get(&request_url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(HubError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(HubError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let pb = self.progress_bar(response.content_length());

        let mut file = File::create(dest)?;
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
            downloaded += chunk.len() as u64;
            pb.set_position(downloaded);
        }
        file.flush()?;

        pb.finish_and_clear();
        Ok(downloaded)
    }

    fn progress_bar(&self, total_size: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        match total_size {
            Some(len) => {
                let pb = ProgressBar::new(len);
                pb.set_style(
                    ProgressStyle::with_template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
                    )
                    .map(|s| s.progress_chars("#>-"))
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::with_template(
                        "{spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec})",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb
            }
        }
    }

    fn cached_handle(&self, url: &str, module_dir: PathBuf) -> Result<ModelHandle, HubError> {
        Ok(ModelHandle {
            url: url.to_string(),
            size_bytes: dir_size(&module_dir)?,
            path: module_dir,
            from_cache: true,
            fetched_at: chrono::Utc::now(),
        })
    }
}

#[async_trait]
impl ModelHub for TfHubClient {
    async fn load(&self, url: &str) -> Result<ModelHandle, HubError> {
        let module_dir = self.module_dir(url);
        if module_dir.is_dir() {
            info!(url, path = %module_dir.display(), "using cached module");
            return self.cached_handle(url, module_dir);
        }

        fs::create_dir_all(&self.cache_dir)?;

        let key = cache_key(url);
        let archive_path = self.cache_dir.join(format!("{}.tar.gz.part", key));
        let staging_dir = self.cache_dir.join(format!("{}.tmp", key));

        let result = match self.download_archive(url, &archive_path).await {
            Ok(0) => Err(HubError::Archive("empty module archive".to_string())),
            Ok(bytes) => {
                debug!(bytes, path = %archive_path.display(), "unpacking module archive");
                let (archive, staging, target) =
                    (archive_path.clone(), staging_dir, module_dir.clone());
                tokio::task::spawn_blocking(move || install_archive(&archive, &staging, &target))
                    .await
                    .map_err(|e| HubError::Io(std::io::Error::other(e)))
                    .and_then(|r| r)
            }
            Err(e) => Err(e),
        };

        if archive_path.exists() {
            if let Err(e) = fs::remove_file(&archive_path) {
                debug!(error = %e, "could not remove partial archive");
            }
        }
        result?;

        let size_bytes = dir_size(&module_dir)?;
        info!(url, size_bytes, path = %module_dir.display(), "module installed");

        Ok(ModelHandle {
            url: url.to_string(),
            path: module_dir,
            size_bytes,
            from_cache: false,
            fetched_at: chrono::Utc::now(),
        })
    }
}

/// Directory name for a handle: lowercase hex SHA-256 of the URL.
pub fn cache_key(url: &str) -> String {
    format!("{:x}", Sha256::digest(url.as_bytes()))
}

/// Ask the hub for the compressed tarball form of a handle.
pub fn compressed_url(url: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}tf-hub-format=compressed", url, sep)
}

/// Unpack a gzip tarball into `staging`, then move it into place at `target`.
/// On failure neither directory is left behind.
pub fn install_archive(archive: &Path, staging: &Path, target: &Path) -> Result<(), HubError> {
    if staging.exists() {
        fs::remove_dir_all(staging)?;
    }
    fs::create_dir_all(staging)?;

    let file = File::open(archive)?;
    let mut tarball = tar::Archive::new(GzDecoder::new(BufReader::new(file)));
    if let Err(e) = tarball.unpack(staging) {
        if let Err(cleanup) = fs::remove_dir_all(staging) {
            debug!(error = %cleanup, "could not remove staging dir");
        }
        return Err(HubError::Archive(e.to_string()));
    }

    fs::rename(staging, target)?;
    Ok(())
}

fn dir_size(path: &Path) -> Result<u64, HubError> {
    let mut size = 0;
    if path.is_file() {
        size = path.metadata()?.len();
    } else if path.is_dir() {
        for entry in fs::read_dir(path)? {
            let path = entry?.path();
            if path.is_file() {
                size += path.metadata()?.len();
            } else if path.is_dir() {
                size += dir_size(&path)?;
            }
        }
    }
    Ok(size)
}
