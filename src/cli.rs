use clap::Parser;

/// Download URL and paths are fixed; only `--help` and `--version` are accepted.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Download a portable FFmpeg build next to this program",
    long_about = "Checks whether FFmpeg is on PATH or was installed by a previous run. \
                  Otherwise asks for confirmation, downloads the FFmpeg release archive, \
                  unpacks it into an `ffmpeg` folder beside this executable and prints \
                  how to add it to PATH."
)]
pub struct Args {}
