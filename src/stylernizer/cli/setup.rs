use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "stylernizer",
    bin_name = "stylernizer",
    version,
    about = "Register, list and run named plot functions",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level: error, warn, info, debug or trace (RUST_LOG overrides)
    #[arg(short = 'l', long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Import modules, print the plots tree and cache the module list
    Register {
        /// Module identifiers, e.g. stylernizer.gallery
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the plots tree
    List {
        /// Only keys starting with one of these prefixes
        names: Vec<String>,
    },

    /// Make every plot whose key starts with one of the given prefixes
    Run {
        /// Key prefixes; all plots when omitted
        names: Vec<String>,

        /// Save each plot to the output directory
        #[arg(
            long,
            action = ArgAction::Set,
            num_args = 0..=1,
            default_value_t = true,
            default_missing_value = "true"
        )]
        save: bool,

        /// Open each plot in the viewer
        #[arg(
            long,
            action = ArgAction::Set,
            num_args = 0..=1,
            default_value_t = false,
            default_missing_value = "true"
        )]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stylernizer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn run_defaults_to_save_without_show() {
        let cli = parse(&["run"]);
        assert_eq!(
            cli.command,
            Commands::Run {
                names: vec![],
                save: true,
                show: false
            }
        );
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn run_flags_take_optional_values() {
        let cli = parse(&["run", "pkg.sub", "other", "--save", "false", "--show"]);
        assert_eq!(
            cli.command,
            Commands::Run {
                names: vec!["pkg.sub".into(), "other".into()],
                save: false,
                show: true
            }
        );
    }

    #[test]
    fn register_needs_names() {
        assert!(Cli::try_parse_from(["stylernizer", "register"]).is_err());
        let cli = parse(&["-l", "debug", "register", "a.b", "c"]);
        assert_eq!(
            cli.command,
            Commands::Register {
                names: vec!["a.b".into(), "c".into()]
            }
        );
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn list_filters_are_optional() {
        assert_eq!(parse(&["list"]).command, Commands::List { names: vec![] });
        assert_eq!(
            parse(&["list", "pkg", "--log-level", "warn"]).log_level,
            "warn"
        );
    }
}
