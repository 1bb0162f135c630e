//! ZIP extraction into the install root

use log::{info, warn};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use super::search::find_executable;
use crate::install::error::{FailureKind, InstallError};

/// Unpack every entry of `archive` under `install_root`, preserving layout
///
/// The install root is created if missing. Entries whose names would escape
/// the root are skipped.
pub async fn extract_archive(archive: &Path, install_root: &Path) -> Result<(), InstallError> {
    // Wrap ZIP extraction in spawn_blocking (CPU-bound operation)
    let archive = archive.to_path_buf();
    let install_root = install_root.to_path_buf();

    tokio::task::spawn_blocking(move || unpack_zip(&archive, &install_root))
        .await
        .map_err(|e| InstallError::Aborted {
            stage: FailureKind::Extraction,
            source: e,
        })?
}

fn unpack_zip(archive_path: &Path, install_root: &Path) -> Result<(), InstallError> {
    let unpack_error = |path: &Path, e: std::io::Error| InstallError::Unpack {
        path: path.to_path_buf(),
        source: e,
    };
    let archive_error = |e: zip::result::ZipError| InstallError::Archive {
        archive: archive_path.to_path_buf(),
        source: e,
    };

    std::fs::create_dir_all(install_root).map_err(|e| unpack_error(install_root, e))?;

    let zip_file = std::fs::File::open(archive_path).map_err(|e| unpack_error(archive_path, e))?;
    let mut archive = ZipArchive::new(zip_file).map_err(archive_error)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(archive_error)?;

        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping archive entry with unsafe path: {}", entry.name());
            continue;
        };
        let out_path = install_root.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path).map_err(|e| unpack_error(&out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| unpack_error(parent, e))?;
        }
        let mut out_file =
            std::fs::File::create(&out_path).map_err(|e| unpack_error(&out_path, e))?;
        std::io::copy(&mut entry, &mut out_file).map_err(|e| unpack_error(&out_path, e))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&out_path, std::fs::Permissions::from_mode(mode & 0o7777))
                .map_err(|e| unpack_error(&out_path, e))?;
        }
    }

    info!(
        "Extracted {} entries from {} into {}",
        archive.len(),
        archive_path.display(),
        install_root.display()
    );
    Ok(())
}

/// Extract the downloaded archive, delete it, and locate the executable
///
/// The archive is deleted as soon as extraction succeeds; failing to delete
/// it is only logged. When the executable cannot be found the extracted
/// tree is left in place for inspection.
pub async fn install_archive(
    archive: &Path,
    install_root: &Path,
    executable_name: &str,
) -> Result<PathBuf, InstallError> {
    extract_archive(archive, install_root).await?;

    if let Err(e) = tokio::fs::remove_file(archive).await {
        warn!("Could not delete downloaded archive {}: {}", archive.display(), e);
    }

    let root = install_root.to_path_buf();
    let name = executable_name.to_string();
    let found = tokio::task::spawn_blocking(move || find_executable(&root, &name))
        .await
        .map_err(|e| InstallError::Aborted {
            stage: FailureKind::Search,
            source: e,
        })?;

    found.ok_or_else(|| InstallError::ExecutableNotFound {
        executable: executable_name.to_string(),
        root: install_root.to_path_buf(),
    })
}
