use crate::difficulty::Difficulty;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Explicit configuration file; a missing file is then an error
    pub(crate) config: Option<PathBuf>,

    /// Skip the menu and start a game at this difficulty
    pub(crate) difficulty: Option<Difficulty>,

    /// Write a log to this file
    pub(crate) log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    pub(crate) debug: bool,
}

impl Invocation {
    pub(crate) const USAGE: &'static str = concat!(
        "Usage: gridsnake [<options>]\n",
        "\n",
        "Play Snake in the terminal\n",
        "\n",
        "Options:\n",
        "  -c, --config <PATH>        Read configuration from the given file\n",
        "  -d, --difficulty <LEVEL>   Start playing right away at the given difficulty\n",
        "                             (easy, normal, or hard)\n",
        "      --log-file <PATH>      Write log messages to the given file\n",
        "      --debug                Include debug messages in the log\n",
        "  -h, --help                 Display this help message and exit\n",
        "  -V, --version              Show the program version and exit\n",
    );

    pub(crate) fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('d') | Arg::Long("difficulty") => {
                    args.difficulty = Some(parser.value()?.parse()?);
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("debug") => args.debug = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            Invocation::Run(Arguments::default())
        );
    }

    #[test]
    fn all_options() {
        assert_eq!(
            parse(&[
                "--config",
                "snake.toml",
                "-d",
                "hard",
                "--log-file=snake.log",
                "--debug"
            ])
            .unwrap(),
            Invocation::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                difficulty: Some(Difficulty::Hard),
                log_file: Some(PathBuf::from("snake.log")),
                debug: true,
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["-d", "easy", "--help"]).unwrap(), Invocation::Help);
    }

    #[test]
    fn version() {
        assert_eq!(parse(&["-V"]).unwrap(), Invocation::Version);
    }

    #[test]
    fn bad_difficulty() {
        assert!(parse(&["--difficulty", "medium"]).is_err());
    }

    #[test]
    fn missing_value() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn positional() {
        assert!(parse(&["extra"]).is_err());
    }
}
