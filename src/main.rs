use clap::Parser;
use ffmpeg_bootstrap::cli;
use ffmpeg_bootstrap::config::FetchConfig;
use ffmpeg_bootstrap::install::{self, TerminalPrompter};
use log::error;
use termcolor::{ColorChoice, StandardStream};

fn main() {
    let _args = cli::Args::parse();

    // Warnings by default; RUST_LOG overrides
    env_logger::Builder::new()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("FATAL: Failed to create Tokio runtime: {e}");
            std::process::exit(1);
        }
    };

    let config = match FetchConfig::from_current_exe() {
        Ok(config) => config,
        Err(e) => {
            error!("{e:#}");
            eprintln!("FATAL: {e:#}");
            std::process::exit(1);
        }
    };

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    // Installation failures are warnings; the exit code stays 0
    let _outcome = rt.block_on(install::run(&config, &TerminalPrompter, &mut stdout));
}
