use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

#[derive(Debug, Clone)]
pub struct OutputFlags {
    pub json: bool,
    pub markdown: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub defaults_file: Option<String>,
    pub env_file: Option<PathBuf>,
    pub output: OutputFlags,
    pub verbose: u8,
    pub quiet: bool,
    pub command: CommandKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Dsn(DsnArgs),
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DsnArgs {
    pub database: Option<String>,
    pub from_env: bool,
}

pub fn build_cli() -> Command {
    let mut cmd = Command::new("mycnf")
        .about("Build MySQL DSNs from a client defaults file")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand_value_name("COMMAND");

    cmd = add_global_args(cmd);

    cmd = cmd.subcommand(command_dsn());
    cmd = cmd.subcommand(command_config());

    cmd
}

pub fn parse_args() -> CliArgs {
    let matches = build_cli().get_matches();
    parse_matches(&matches)
}

pub fn try_parse_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    Ok(parse_matches(&matches))
}

fn add_global_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("defaults-file")
            .long("defaults-file")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .global(true)
            .help("Read this defaults file instead of ~/.my.cnf"),
    )
    .arg(
        Arg::new("env-file")
            .long("env-file")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .global(true)
            .help("Load environment variables from file (default: .env)"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Output as JSON"),
    )
    .arg(
        Arg::new("markdown")
            .long("markdown")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force markdown table output"),
    )
    .arg(
        Arg::new("pretty")
            .long("pretty")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force pretty-printed table output"),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true)
            .help("Enable debug logging"),
    )
    .arg(
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Suppress non-error output"),
    )
}

fn command_dsn() -> Command {
    Command::new("dsn")
        .about("Print the DSN built from the defaults file")
        .arg(
            Arg::new("database")
                .long("database")
                .short('D')
                .value_name("NAME")
                .help("Database to connect to (overrides the defaults file)"),
        )
        .arg(
            Arg::new("from-env")
                .long("from-env")
                .action(ArgAction::SetTrue)
                .conflicts_with("database")
                .help("Use MYSQL_DSN instead of the defaults file"),
        )
}

fn command_config() -> Command {
    Command::new("config").about("Display the parsed [client] section")
}

fn parse_matches(matches: &ArgMatches) -> CliArgs {
    let defaults_file = matches.get_one::<String>("defaults-file").cloned();
    let env_file = matches.get_one::<String>("env-file").map(PathBuf::from);
    let output = OutputFlags {
        json: matches.get_flag("json"),
        markdown: matches.get_flag("markdown"),
        pretty: matches.get_flag("pretty"),
    };
    let verbose = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");

    let command = match matches.subcommand() {
        Some(("dsn", sub_m)) => CommandKind::Dsn(DsnArgs {
            database: sub_m.get_one::<String>("database").cloned(),
            from_env: sub_m.get_flag("from-env"),
        }),
        Some(("config", _)) => CommandKind::Config,
        _ => CommandKind::Dsn(DsnArgs::default()),
    };

    CliArgs {
        defaults_file,
        env_file,
        output,
        verbose,
        quiet,
        command,
    }
}
