//! Download capability that saves artifacts into a local directory.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use pcommon::BoxFuture;
use presult::{DownloadTrigger, ResultError};

pub const DEFAULT_DOWNLOAD_NAME: &str = "processed-file";

#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    client: Client,
    directory: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(client: Client, directory: impl Into<PathBuf>) -> Self {
        Self {
            client,
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Destination for `filename`, confined to the download directory.
    pub fn target_path(&self, filename: &str) -> PathBuf {
        let name = Path::new(filename.trim())
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty() && *name != "..")
            .unwrap_or(DEFAULT_DOWNLOAD_NAME);

        self.directory.join(name)
    }

    async fn fetch_into(&self, url: &str, target: &Path) -> Result<u64, ResultError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ResultError::download(format!("request for '{url}' failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResultError::download(format!(
                "download of '{url}' failed with status {status}"
            )));
        }

        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|err| ResultError::download(format!("cannot create download directory: {err}")))?;

        let mut file = tokio::fs::File::create(target)
            .await
            .map_err(|err| ResultError::download(format!("cannot create '{}': {err}", target.display())))?;

        let mut written = 0_u64;
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk
                .map_err(|err| ResultError::download(format!("download interrupted: {err}")))?;
            file.write_all(&chunk)
                .await
                .map_err(|err| ResultError::download(format!("write failed: {err}")))?;
            written += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|err| ResultError::download(format!("write failed: {err}")))?;

        Ok(written)
    }
}

impl DownloadTrigger for DirectoryDownloader {
    fn trigger_download<'a>(
        &'a self,
        url: &'a str,
        filename: &'a str,
    ) -> BoxFuture<'a, Result<(), ResultError>> {
        Box::pin(async move {
            let target = self.target_path(filename);
            let written = self.fetch_into(url, &target).await?;

            tracing::debug!(url, path = %target.display(), bytes = written, "download saved");
            Ok(())
        })
    }
}
