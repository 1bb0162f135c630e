//! Bootstrap orchestration
//!
//! Runs the stages in order: PATH probe, local-cache probe, confirmation,
//! download, extraction and search, then PATH guidance. The first two short
//! circuit the rest. Download and install failures are reported as a
//! warning and never abort the process.

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorSpec, WriteColor};

use super::detection::{find_cached_executable, is_on_path};
use super::download::{download_archive, install_archive};
use super::error::InstallError;
use super::guidance::{PathGuidance, ShellKind};
use super::prompt::{Prompter, show_welcome};
use crate::config::FetchConfig;

/// Terminal state of a bootstrap run
#[derive(Debug)]
pub enum Outcome {
    /// FFmpeg already answers on `PATH`; nothing was done.
    AlreadyAvailable,
    /// A previous run left the executable in the install root.
    Cached(PathBuf),
    /// Freshly downloaded and extracted.
    Installed(PathBuf),
    /// The user declined the download.
    Declined,
    /// Download or install failed; the application still runs without FFmpeg.
    Failed(InstallError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::AlreadyAvailable | Self::Cached(_) | Self::Installed(_))
    }
}

/// Run the full bootstrap, then wait for the user before returning
///
/// User-facing text goes to `out`. The exit pause happens exactly once,
/// whatever the outcome.
pub async fn run<P, W>(config: &FetchConfig, prompter: &P, out: &mut W) -> Outcome
where
    P: Prompter,
    W: WriteColor,
{
    let outcome = bootstrap(config, prompter, out).await;
    info!("Bootstrap finished: {:?}", outcome);

    let _ = out.flush();
    prompter.pause_before_exit();
    outcome
}

async fn bootstrap<P, W>(config: &FetchConfig, prompter: &P, out: &mut W) -> Outcome
where
    P: Prompter,
    W: WriteColor,
{
    if is_on_path(&config.probe_program, &config.version_arg).await {
        write_status(out, Color::Green, "✓ FFmpeg is already available on PATH.");
        return Outcome::AlreadyAvailable;
    }

    if let Some(cached) = find_cached_executable(&config.install_root, &config.executable_name) {
        write_status(
            out,
            Color::Green,
            &format!("✓ FFmpeg found at {}", cached.display()),
        );
        print_guidance(out, &cached);
        return Outcome::Cached(cached);
    }

    show_welcome(out, &config.source.url);
    let _ = out.flush();
    if !prompter.confirm_download(&config.source.url) {
        info!("User declined the FFmpeg download");
        let _ = writeln!(out, "Skipped. FFmpeg can be installed later by running this program again.");
        return Outcome::Declined;
    }

    match fetch_and_install(config, out).await {
        Ok(executable) => {
            write_status(
                out,
                Color::Green,
                &format!("✓ FFmpeg installed at {}", executable.display()),
            );
            print_guidance(out, &executable);
            Outcome::Installed(executable)
        }
        Err(e) => {
            // The status line below is the only warning the user sees
            info!("FFmpeg installation failed ({} error): {}", e.kind(), e);
            write_status(
                out,
                Color::Yellow,
                &format!(
                    "⚠ FFmpeg could not be installed: {e}\n  \
                     You can still use the application, but quality may be limited."
                ),
            );
            Outcome::Failed(e)
        }
    }
}

async fn fetch_and_install<W: WriteColor>(
    config: &FetchConfig,
    out: &mut W,
) -> Result<PathBuf, InstallError> {
    let _ = writeln!(out, "📥 Downloading FFmpeg...");
    let _ = out.flush();

    let progress = download_bar();
    let result = download_archive(&config.source, &progress).await;
    progress.finish_and_clear();
    let bytes = result?;
    info!("Archive size: {} bytes", bytes);

    let _ = writeln!(out, "📦 Extracting to {}...", config.install_root.display());
    let _ = out.flush();
    install_archive(
        &config.source.destination,
        &config.install_root,
        &config.executable_name,
    )
    .await
}

fn download_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("   [{bar:50.green/blue}] {bytes}/{total_bytes}  {bytes_per_sec}")
    {
        bar.set_style(style.progress_chars("█▓░"));
    }
    bar
}

fn print_guidance<W: WriteColor>(out: &mut W, executable: &Path) {
    match PathGuidance::for_executable(executable, ShellKind::host()) {
        Some(guidance) => {
            let _ = guidance.write_to(out);
        }
        None => warn!("No parent directory for {}", executable.display()),
    }
}

fn write_status<W: WriteColor>(out: &mut W, color: Color, message: &str) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(out, "{message}");
    let _ = out.reset();
}
