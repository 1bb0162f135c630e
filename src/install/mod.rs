//! FFmpeg acquisition pipeline
//!
//! Checks whether FFmpeg is already usable, otherwise downloads the release
//! archive, unpacks it into the install root, locates the executable and
//! prints how to put it on `PATH`.

mod detection;
mod download;
mod error;
mod guidance;
mod orchestration;
mod prompt;

// Public exports
pub use detection::{find_cached_executable, is_on_path};
pub use download::{download_archive, extract_archive, find_executable, install_archive};
pub use error::{FailureKind, InstallError};
pub use guidance::{PathGuidance, ShellKind};
pub use orchestration::{Outcome, run};
pub use prompt::{Prompter, TerminalPrompter};
