//! Streaming archive download with progress tracking

use futures_util::StreamExt;
use indicatif::ProgressBar;
use log::{debug, info};
use reqwest::StatusCode;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::time::timeout;

use crate::config::ArchiveSource;
use crate::install::error::InstallError;

const DOWNLOAD_CONNECT_TIMEOUT: Duration = Duration::from_secs(30); // Initial connection
const DOWNLOAD_INACTIVITY_TIMEOUT: Duration = Duration::from_secs(300); // 5 min no data

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Download `source.url` into `source.destination`
///
/// The body is streamed to disk chunk by chunk. Any failure removes the
/// partially written destination before the error is returned. On success
/// the file has been flushed, synced and closed, and the byte count is
/// returned.
pub async fn download_archive(
    source: &ArchiveSource,
    progress: &ProgressBar,
) -> Result<u64, InstallError> {
    match fetch_to_file(source, progress).await {
        Ok(bytes) => {
            info!("Downloaded {} bytes to {}", bytes, source.destination.display());
            Ok(bytes)
        }
        Err(e) => {
            discard_partial(&source.destination).await;
            Err(e)
        }
    }
}

async fn fetch_to_file(source: &ArchiveSource, progress: &ProgressBar) -> Result<u64, InstallError> {
    let network = |e: reqwest::Error| InstallError::Network {
        url: source.url.clone(),
        source: e,
    };

    let client = reqwest::Client::builder()
        .connect_timeout(DOWNLOAD_CONNECT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(network)?;
    let response = client.get(&source.url).send().await.map_err(network)?;

    // Body is dropped unread on any other status
    if response.status() != StatusCode::OK {
        return Err(InstallError::HttpStatus {
            url: source.url.clone(),
            status: response.status(),
        });
    }

    if let Some(total_bytes) = response.content_length() {
        progress.set_length(total_bytes);
    }

    let write_error = |e: std::io::Error| InstallError::Write {
        path: source.destination.clone(),
        source: e,
    };

    if let Some(parent) = source.destination.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }
    let file = tokio::fs::File::create(&source.destination)
        .await
        .map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    let mut downloaded: u64 = 0;

    let mut stream = response.bytes_stream();
    loop {
        let chunk = match timeout(DOWNLOAD_INACTIVITY_TIMEOUT, stream.next()).await {
            Ok(Some(Ok(chunk))) => chunk,
            Ok(Some(Err(e))) => return Err(network(e)),
            Ok(None) => break, // Stream ended normally
            Err(_) => {
                return Err(InstallError::Stalled {
                    url: source.url.clone(),
                    idle: DOWNLOAD_INACTIVITY_TIMEOUT,
                });
            }
        };

        writer.write_all(&chunk).await.map_err(write_error)?;
        downloaded += chunk.len() as u64;
        progress.set_position(downloaded);
    }

    writer.flush().await.map_err(write_error)?;
    let file = writer.into_inner();
    file.sync_all().await.map_err(write_error)?;
    drop(file);

    Ok(downloaded)
}

/// Best-effort removal of a partial download; errors are ignored
async fn discard_partial(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => debug!("Removed partial download {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => debug!("Could not remove partial download {}: {}", path.display(), e),
    }
}
