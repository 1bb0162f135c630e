//! # ffmpeg-bootstrap
//!
//! Makes a portable FFmpeg build available to the application shipped next
//! to this program.
//!
//! ```rust,no_run
//! use ffmpeg_bootstrap::config::FetchConfig;
//! use ffmpeg_bootstrap::install::{self, TerminalPrompter};
//! use termcolor::{ColorChoice, StandardStream};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FetchConfig::from_current_exe()?;
//!     let mut stdout = StandardStream::stdout(ColorChoice::Auto);
//!     let outcome = install::run(&config, &TerminalPrompter, &mut stdout).await;
//!     println!("success: {}", outcome.is_success());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod install;
