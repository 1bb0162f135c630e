//! Archive download, extraction and executable discovery
//!
//! ## Module Organization
//!
//! - `core` - Streaming HTTP download with progress tracking
//! - `extract` - ZIP extraction and the install step
//! - `search` - Locating the executable in the extracted tree

mod core;
mod extract;
mod search;

pub use core::download_archive;
pub use extract::{extract_archive, install_archive};
pub use search::find_executable;
