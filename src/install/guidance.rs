//! PATH configuration guidance
//!
//! Prints how to add the FFmpeg directory to `PATH`. The environment itself
//! is never modified.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorSpec, WriteColor};

/// Shell the printed command is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// Windows command processor (`setx`)
    Cmd,
    /// POSIX shells reading `~/.profile`
    Posix,
}

impl ShellKind {
    pub fn host() -> Self {
        if cfg!(windows) { Self::Cmd } else { Self::Posix }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGuidance {
    pub bin_dir: PathBuf,
    pub shell: ShellKind,
}

impl PathGuidance {
    /// Guidance for the directory containing `executable`
    pub fn for_executable(executable: &Path, shell: ShellKind) -> Option<Self> {
        let bin_dir = executable.parent()?.to_path_buf();
        Some(Self { bin_dir, shell })
    }

    /// Copy-pasteable command that appends the directory to `PATH`
    pub fn command(&self) -> String {
        let dir = self.bin_dir.display();
        match self.shell {
            ShellKind::Cmd => format!("setx PATH \"%PATH%;{dir}\""),
            ShellKind::Posix => format!("echo 'export PATH=\"$PATH:{dir}\"' >> ~/.profile"),
        }
    }

    pub fn write_to<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(out, "\nTo use FFmpeg from any terminal, add this folder to your PATH:")?;
        out.reset()?;
        writeln!(out, "  {}", self.bin_dir.display())?;

        writeln!(out, "\nRun this command once:")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "  {}", self.command())?;
        out.reset()?;

        writeln!(out, "\nThen open a new terminal for the change to take effect.")?;
        Ok(())
    }
}
