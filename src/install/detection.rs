//! Availability and local-cache probes
//!
//! Both checks answer "is FFmpeg already usable?" without ever failing:
//! absence is a normal result.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Check whether `program` is invocable from `PATH`
///
/// Resolves the program with `which`, then runs it with `version_arg` and
/// reports whether it exited successfully. Output is discarded.
pub async fn is_on_path(program: &str, version_arg: &str) -> bool {
    let resolved = match which::which(program) {
        Ok(path) => path,
        Err(e) => {
            debug!("{} not resolvable on PATH: {}", program, e);
            return false;
        }
    };

    let status = Command::new(&resolved)
        .arg(version_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await;

    match status {
        Ok(status) if status.success() => {
            debug!("{} answered {} successfully", resolved.display(), version_arg);
            true
        }
        Ok(status) => {
            debug!("{} exited with {}", resolved.display(), status);
            false
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => {
            // Unexpected: permission denied, broken binary, etc.
            warn!("Failed to run {}: {}", resolved.display(), e);
            false
        }
    }
}

/// Look for an executable left by a previous run at `<install_root>/bin/<name>`
pub fn find_cached_executable(install_root: &Path, executable_name: &str) -> Option<PathBuf> {
    let candidate = install_root.join("bin").join(executable_name);
    if candidate.is_file() {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn probe_true_on_zero_exit() {
        assert!(is_on_path(env!("CARGO"), "--version").await);
    }

    #[tokio::test]
    async fn probe_false_on_non_zero_exit() {
        assert!(!is_on_path(env!("CARGO"), "--no-such-flag-for-cargo").await);
    }

    #[tokio::test]
    async fn probe_false_when_program_missing() {
        assert!(!is_on_path("ffmpeg-bootstrap-missing-program-7c1f", "-version").await);
    }

    #[test]
    fn cache_hit_returns_exact_path() {
        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("ffmpeg.exe"), b"MZ").unwrap();

        assert_eq!(
            find_cached_executable(root.path(), "ffmpeg.exe"),
            Some(bin.join("ffmpeg.exe"))
        );
    }

    #[test]
    fn cache_miss_is_none() {
        let root = tempfile::tempdir().unwrap();
        assert_eq!(find_cached_executable(root.path(), "ffmpeg.exe"), None);

        // install root itself missing
        let gone = root.path().join("never-created");
        assert_eq!(find_cached_executable(&gone, "ffmpeg.exe"), None);
    }

    #[test]
    fn directory_with_executable_name_is_not_a_hit() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("bin").join("ffmpeg.exe")).unwrap();
        assert_eq!(find_cached_executable(root.path(), "ffmpeg.exe"), None);
    }
}
