//! Interactive gates for the bootstrapper
//!
//! The pipeline blocks on user input twice: before downloading and before
//! exiting. Both go through [`Prompter`] so callers can script the answers.

use inquire::{Confirm, InquireError};
use log::{debug, info};
use std::io::{BufRead, IsTerminal, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Source of the user's answers
pub trait Prompter {
    /// Block until the user accepts or declines the download of `url`
    fn confirm_download(&self, url: &str) -> bool;

    /// Block until the user acknowledges the final message
    fn pause_before_exit(&self);
}

/// Prompter backed by the process's stdin/stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm_download(&self, url: &str) -> bool {
        let question = "Download and install FFmpeg now?";

        if !std::io::stdin().is_terminal() {
            return confirm_from_line(question);
        }

        let answer = Confirm::new(question)
            .with_default(true)
            .with_help_message(&format!("Source: {url}"))
            .prompt();

        match answer {
            Ok(answer) => answer,
            Err(InquireError::NotTTY) => confirm_from_line(question),
            Err(e) => {
                info!("Confirmation prompt ended without an answer: {}", e);
                false
            }
        }
    }

    fn pause_before_exit(&self) {
        print!("\nPress Enter to exit...");
        let _ = std::io::stdout().flush();
        let _ = read_line();
    }
}

/// Plain line-based fallback when no terminal is attached
fn confirm_from_line(question: &str) -> bool {
    print!("{question} [Y/n] ");
    let _ = std::io::stdout().flush();

    match read_line() {
        Some(line) => answer_is_yes(&line),
        // EOF: nobody to ask, keep the default
        None => true,
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            debug!("Failed to read from stdin: {}", e);
            None
        }
    }
}

fn answer_is_yes(line: &str) -> bool {
    !matches!(line.trim().to_ascii_lowercase().as_str(), "n" | "no")
}

/// Display welcome banner
pub fn show_welcome<W: WriteColor>(out: &mut W, url: &str) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
    let _ = writeln!(out, "\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let _ = out.reset();

    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    let _ = writeln!(out, "\n                       FFmpeg setup");
    let _ = out.reset();

    let _ = writeln!(out, "\nFFmpeg was not found on this system.");
    let _ = writeln!(out, "It will be downloaded from:");
    let _ = writeln!(out, "  {url}");

    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
    let _ = writeln!(out, "\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    let _ = out.reset();
}
