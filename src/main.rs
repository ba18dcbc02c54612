mod app;
mod cli;
mod command;
mod config;
mod consts;
mod difficulty;
mod engine;
mod game;
mod menu;
mod util;
use crate::app::{App, Globals};
use crate::cli::{Arguments, Invocation};
use crate::config::Config;
use crate::difficulty::Difficulty;
use anyhow::Context;
use lexopt::Parser;
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Invocation::from_parser(Parser::from_env()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print!("{}", Invocation::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{}", Invocation::USAGE);
            return ExitCode::from(2);
        }
    };
    let (globals, difficulty) = match setup(args) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let terminal = ratatui::init();
    let r = App::new(globals, difficulty).run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// Everything that can fail before the terminal is taken over: logging,
/// configuration, and the grid
fn setup(args: Arguments) -> anyhow::Result<(Globals, Option<Difficulty>)> {
    if let Some(ref path) = args.log_file {
        let level = if args.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        let file = fs_err::File::create(path).context("failed to create log file")?;
        WriteLogger::init(level, simplelog::Config::default(), file)
            .context("failed to initialize logging")?;
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    log::debug!("Configuration: {config:?}");
    let globals = Globals::new(config).context("invalid playing field")?;
    Ok((globals, args.difficulty))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("I/O error: {e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn broken_pipe_is_success() {
        assert_eq!(
            format!("{:?}", io_exit(Err(ErrorKind::BrokenPipe.into()))),
            format!("{:?}", ExitCode::SUCCESS)
        );
    }

    #[test]
    fn other_io_errors_exit_2() {
        assert_eq!(
            format!("{:?}", io_exit(Err(ErrorKind::Other.into()))),
            format!("{:?}", ExitCode::from(2))
        );
        assert_eq!(
            format!("{:?}", io_exit(Ok(()))),
            format!("{:?}", ExitCode::SUCCESS)
        );
    }

    #[test]
    fn missing_explicit_config_fails_setup() {
        let tmpdir = tempfile::tempdir().unwrap();
        let args = Arguments {
            config: Some(tmpdir.path().join("missing.toml")),
            ..Arguments::default()
        };
        assert!(setup(args).is_err());
    }

    #[test]
    fn setup_with_config_and_difficulty() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "difficulty = \"easy\"\n").unwrap();
        let args = Arguments {
            config: Some(path),
            difficulty: Some(Difficulty::Hard),
            ..Arguments::default()
        };
        let (globals, difficulty) = setup(args).unwrap();
        assert_eq!(globals.config.difficulty, Difficulty::Easy);
        assert_eq!(difficulty, Some(Difficulty::Hard));
    }
}
