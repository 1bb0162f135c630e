//! Error types for the download and install stages.
//!
//! Probes never fail; only the fetch, extraction and search stages produce
//! an [`InstallError`]. Each variant belongs to exactly one stage, reported
//! by [`InstallError::kind`].

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Pipeline stage a failure originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Extraction,
    Search,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Transport => "transport",
            Self::Extraction => "extraction",
            Self::Search => "search",
        })
    }
}

#[derive(Debug, Error)]
pub enum InstallError {
    /// The server answered with anything other than `200 OK`.
    #[error("Download of {url} failed: server answered HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("Download of {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No bytes arrived within the inactivity window.
    #[error("Download of {url} stalled: no data received for {} seconds", .idle.as_secs())]
    Stalled { url: String, idle: Duration },

    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a readable ZIP archive: {source}", .archive.display())]
    Archive {
        archive: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Could not unpack into {}: {source}", .path.display())]
    Unpack {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{executable} not found under {} after extraction", .root.display())]
    ExecutableNotFound { executable: String, root: PathBuf },

    /// A blocking task panicked or was cancelled.
    #[error("{stage} task aborted: {source}")]
    Aborted {
        stage: FailureKind,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl InstallError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::HttpStatus { .. }
            | Self::Network { .. }
            | Self::Stalled { .. }
            | Self::Write { .. } => FailureKind::Transport,
            Self::Archive { .. } | Self::Unpack { .. } => FailureKind::Extraction,
            Self::ExecutableNotFound { .. } => FailureKind::Search,
            Self::Aborted { stage, .. } => *stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_names_code() {
        let error = InstallError::HttpStatus {
            url: "https://example.invalid/ffmpeg.zip".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("https://example.invalid/ffmpeg.zip"));
        assert_eq!(error.kind(), FailureKind::Transport);
    }

    #[test]
    fn kinds_follow_stage() {
        let stalled = InstallError::Stalled {
            url: "u".to_string(),
            idle: Duration::from_secs(300),
        };
        assert_eq!(stalled.kind(), FailureKind::Transport);
        assert!(stalled.to_string().contains("300 seconds"));

        let unpack = InstallError::Unpack {
            path: PathBuf::from("ffmpeg"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(unpack.kind(), FailureKind::Extraction);

        let missing = InstallError::ExecutableNotFound {
            executable: "ffmpeg.exe".to_string(),
            root: PathBuf::from("ffmpeg"),
        };
        assert_eq!(missing.kind(), FailureKind::Search);
        assert!(missing.to_string().contains("ffmpeg.exe not found"));
    }

    #[test]
    fn failure_kind_display() {
        assert_eq!(FailureKind::Transport.to_string(), "transport");
        assert_eq!(FailureKind::Extraction.to_string(), "extraction");
        assert_eq!(FailureKind::Search.to_string(), "search");
    }
}
