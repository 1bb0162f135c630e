use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Portable FFmpeg build (essentials flavour, Windows x64 ZIP).
pub const FFMPEG_DOWNLOAD_URL: &str =
    "https://www.gyan.dev/ffmpeg/builds/ffmpeg-release-essentials.zip";

/// Directory, next to the running executable, that receives the unpacked bundle.
pub const INSTALL_DIR_NAME: &str = "ffmpeg";

/// Temporary archive, written beside the install root and removed after extraction.
pub const ARCHIVE_FILE_NAME: &str = "ffmpeg.zip";

pub const EXECUTABLE_NAME: &str = "ffmpeg.exe";

/// Name used to look FFmpeg up on `PATH`.
pub const PROBE_PROGRAM: &str = "ffmpeg";

/// FFmpeg uses single-dash long options.
pub const VERSION_ARG: &str = "-version";

/// Where the archive comes from and where it is staged while downloading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSource {
    pub url: String,
    pub destination: PathBuf,
}

/// Everything the bootstrap pipeline needs, passed explicitly to each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub source: ArchiveSource,
    pub install_root: PathBuf,
    pub executable_name: String,
    pub probe_program: String,
    pub version_arg: String,
}

impl FetchConfig {
    /// Default layout rooted at `base_dir`: `<base_dir>/ffmpeg` and `<base_dir>/ffmpeg.zip`.
    pub fn beside(base_dir: &Path) -> Self {
        Self {
            source: ArchiveSource {
                url: FFMPEG_DOWNLOAD_URL.to_string(),
                destination: base_dir.join(ARCHIVE_FILE_NAME),
            },
            install_root: base_dir.join(INSTALL_DIR_NAME),
            executable_name: EXECUTABLE_NAME.to_string(),
            probe_program: PROBE_PROGRAM.to_string(),
            version_arg: VERSION_ARG.to_string(),
        }
    }

    /// Default layout rooted at the directory holding the running executable.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().context("Could not determine current executable")?;
        let base_dir = exe
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Executable has no parent directory: {}", exe.display()))?;
        Ok(Self::beside(base_dir))
    }

    /// Location a previous run would have left the executable at.
    pub fn cached_executable_path(&self) -> PathBuf {
        self.install_root.join("bin").join(&self.executable_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beside_places_archive_next_to_install_root() {
        let base = Path::new("/opt/app");
        let config = FetchConfig::beside(base);

        assert_eq!(config.install_root, base.join("ffmpeg"));
        assert_eq!(config.source.destination, base.join("ffmpeg.zip"));
        assert_eq!(config.install_root.parent(), config.source.destination.parent());
        assert_eq!(config.source.url, FFMPEG_DOWNLOAD_URL);
    }

    #[test]
    fn cached_path_is_under_bin() {
        let config = FetchConfig::beside(Path::new("/opt/app"));
        assert_eq!(
            config.cached_executable_path(),
            Path::new("/opt/app/ffmpeg/bin/ffmpeg.exe")
        );
    }

    #[test]
    fn from_current_exe_resolves() {
        let config = FetchConfig::from_current_exe().unwrap();
        assert!(config.install_root.ends_with(INSTALL_DIR_NAME));
        assert_eq!(config.executable_name, EXECUTABLE_NAME);
    }
}
