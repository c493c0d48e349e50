//! Parsing command-line arguments.

use clap::{
    builder::RangedU64ValueParser, crate_description, crate_name, crate_version,
    error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Command, Error,
};
use gridca_lib::{Automaton, Config, Simulation};
use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) world: Box<dyn Simulation>,
    pub(crate) generations: u64,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn command() -> Command {
    let command = Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Grid-based cellular automata in the terminal\n\
             \n\
             Available automata:\n\
             * conway: Conway's Game of Life;\n\
             * floating: the Game of Life with floating point cells;\n\
             * elementary: one-dimensional elementary automata, \
             with the generations shown from top to bottom;\n\
             * langton: Langton's loops;\n\
             * chou-reggia: Chou-Reggia loops.\n\
             \n\
             The grid wraps around at the edges.",
        )
        .arg(
            Arg::new("AUTOMATON")
                .help("Which automaton to run [default: langton]")
                .long_help(
                    "Which automaton to run [default: langton]\n\
                     One of conway, floating, elementary, langton and chou-reggia.",
                )
                .index(1)
                .value_parser(|s: &str| s.parse::<Automaton>()),
        )
        .arg(
            Arg::new("ROWS")
                .help("Number of rows [default: 88]")
                .long_help(
                    "Number of rows [default: 88]\n\
                     For elementary automata, this is the number of generations shown.",
                )
                .short('y')
                .long("rows")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..)),
        )
        .arg(
            Arg::new("COLS")
                .help("Number of columns [default: 88]")
                .short('x')
                .long("cols")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..)),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule number of elementary automata [default: 110]")
                .short('r')
                .long("rule")
                .value_parser(value_parser!(u8)),
        )
        .arg(
            Arg::new("FRAMERATE")
                .help("Generations per second")
                .long_help(
                    "Generations per second\n\
                     Defaults to 25 for loops and 10 for other automata.",
                )
                .short('f')
                .long("frame-rate")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("TABLE")
                .help("Reads the rule table of loops from a file")
                .long_help(
                    "Reads the rule table of loops from a file\n\
                     One rule per line: the state of the cell, the states of its \
                     neighbors up, right, down and left, and the new state, \
                     e.g. `00710 4` or `\"00710\": 4`. Everything after `#` is a comment. \
                     Each rule also applies to the rotations of its neighborhood.",
                )
                .short('t')
                .long("table")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a JSON, YAML or TOML file")
                .long_help(
                    "Reads the configuration from a JSON, YAML or TOML file\n\
                     The format is chosen by the file extension. \
                     Other command-line arguments override the file.",
                )
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("NOSEED")
                .help("Starts with an empty grid")
                .long("no-seed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("PAUSED")
                .help("Starts paused")
                .short('p')
                .long("paused")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "tui")]
    let command = command
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run before printing")
                .long_help(
                    "Number of generations to run before printing\n\
                     Only useful when --no-tui is set.",
                )
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64))
                .default_value("0")
                .requires("NOTUI"),
        )
        .arg(
            Arg::new("NOTUI")
                .help("Prints the grid without entering the TUI")
                .short('n')
                .long("no-tui")
                .action(ArgAction::SetTrue),
        );

    #[cfg(not(feature = "tui"))]
    let command = command.arg(
        Arg::new("GENERATIONS")
            .help("Number of generations to run before printing")
            .short('g')
            .long("generations")
            .value_parser(value_parser!(u64))
            .default_value("0"),
    );

    command
}

/// Reads a configuration in the format given by the extension of `path`.
pub(crate) fn parse_config(path: &Path, text: &str) -> Result<Config, String> {
    match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(text).map_err(|e| e.to_string()),
        Some("yaml" | "yml") => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(text).map_err(|e| e.to_string()),
        _ => Err(format!(
            "unknown configuration format of {}; expected .json, .yaml or .toml",
            path.display()
        )),
    }
}

fn read_file(command: &mut Command, path: &Path) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|e| command.error(ErrorKind::Io, format!("{}: {}", path.display(), e)))
}

/// Applies the command-line arguments on top of `config`.
fn apply_matches(matches: &ArgMatches, mut config: Config) -> Config {
    if let Some(&automaton) = matches.get_one::<Automaton>("AUTOMATON") {
        config = config.set_automaton(automaton);
    }
    if let Some(&rows) = matches.get_one::<usize>("ROWS") {
        config.rows = rows;
    }
    if let Some(&cols) = matches.get_one::<usize>("COLS") {
        config.cols = cols;
    }
    if let Some(&rule) = matches.get_one::<u8>("RULE") {
        config = config.set_rule(rule);
    }
    if let Some(&frame_rate) = matches.get_one::<u32>("FRAMERATE") {
        config = config.set_frame_rate(frame_rate);
    }
    if matches.get_flag("NOSEED") {
        config = config.set_seeded(false);
    }
    if matches.get_flag("PAUSED") {
        config = config.set_paused(true);
    }
    config
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(args)?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => {
                let text = read_file(&mut command, path)?;
                parse_config(path, &text)
                    .map_err(|e| command.error(ErrorKind::InvalidValue, e))?
            }
            None => Config::default(),
        };
        config = apply_matches(&matches, config);
        if let Some(path) = matches.get_one::<PathBuf>("TABLE") {
            let text = read_file(&mut command, path)?;
            config = config.set_rule_table(text);
        }

        let world = config
            .world()
            .map_err(|e| command.error(ErrorKind::InvalidValue, e))?;
        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(0);

        Ok(Args {
            config,
            world,
            generations,
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() -> Result<(), Error> {
        let args = Args::parse_from(["gridca"])?;
        assert_eq!(args.config, Config::default());
        assert_eq!((args.world.cols(), args.world.rows()), (88, 88));
        assert!(args.world.is_running());
        assert_eq!(args.generations, 0);
        Ok(())
    }

    #[test]
    fn arguments() -> Result<(), Error> {
        let args = Args::parse_from([
            "gridca",
            "elementary",
            "--rows",
            "8",
            "-x",
            "16",
            "--rule",
            "30",
            "--frame-rate",
            "4",
            "--paused",
        ])?;
        assert_eq!(
            args.config,
            Config::new(Automaton::Elementary, 8, 16)
                .set_rule(30)
                .set_frame_rate(4)
                .set_paused(true)
        );
        assert_eq!(args.config.frame_rate(), 4);
        assert!(!args.world.is_running());
        Ok(())
    }

    #[test]
    fn invalid_arguments() {
        for args in [
            &["gridca", "brian"][..],
            &["gridca", "--rows", "0"],
            &["gridca", "--rule", "256"],
            &["gridca", "--frame-rate", "0"],
            &["gridca", "--table", "/nonexistent/table.txt"],
            &["gridca", "--config", "/nonexistent/config.json"],
        ] {
            assert!(Args::parse_from(args.iter().copied()).is_err(), "{:?}", args);
        }
    }

    #[cfg(feature = "tui")]
    #[test]
    fn no_tui() -> Result<(), Error> {
        let args = Args::parse_from(["gridca", "conway", "-n", "-g", "3"])?;
        assert!(args.no_tui);
        assert_eq!(args.generations, 3);
        assert!(Args::parse_from(["gridca", "-g", "3"]).is_err());
        Ok(())
    }

    #[test]
    fn config_formats() -> Result<(), String> {
        let expected = Config::new(Automaton::ChouReggiaLoops, 20, 30).set_seeded(false);
        let json = r#"{"automaton": "chou-reggia-loops", "rows": 20, "cols": 30, "seeded": false}"#;
        let yaml = "automaton: chou-reggia-loops\nrows: 20\ncols: 30\nseeded: false\n";
        let toml = "automaton = \"chou-reggia-loops\"\nrows = 20\ncols = 30\nseeded = false\n";
        assert_eq!(parse_config(Path::new("a.json"), json)?, expected);
        assert_eq!(parse_config(Path::new("a.yaml"), yaml)?, expected);
        assert_eq!(parse_config(Path::new("a.yml"), yaml)?, expected);
        assert_eq!(parse_config(Path::new("a.toml"), toml)?, expected);
        assert!(parse_config(Path::new("a.txt"), json).is_err());
        assert!(parse_config(Path::new("a.json"), yaml).is_err());
        Ok(())
    }

    #[test]
    fn short_names_in_config() -> Result<(), String> {
        for automaton in Automaton::ALL {
            let toml = format!("automaton = \"{}\"\n", automaton);
            let json = format!(r#"{{"automaton": "{}"}}"#, automaton);
            let yaml = format!("automaton: {}\n", automaton);
            let expected = Config::default().set_automaton(automaton);
            assert_eq!(parse_config(Path::new("a.toml"), &toml)?, expected);
            assert_eq!(parse_config(Path::new("a.json"), &json)?, expected);
            assert_eq!(parse_config(Path::new("a.yaml"), &yaml)?, expected);
        }
        Ok(())
    }

    #[test]
    fn flags_override_config() {
        let config = Config::new(Automaton::Conway, 10, 10).set_frame_rate(2);
        let matches = command()
            .try_get_matches_from(["gridca", "floating", "--cols", "40", "--no-seed"])
            .map(|matches| apply_matches(&matches, config));
        assert_eq!(
            matches.ok(),
            Some(
                Config::new(Automaton::FloatingConway, 10, 40)
                    .set_frame_rate(2)
                    .set_seeded(false)
            )
        );
    }

    #[test]
    fn verify_command() {
        command().debug_assert();
    }
}
