use std::io::{self, Write};

use anyhow::Result;

use crate::cli::{CliArgs, DsnArgs};
use crate::commands::common;
use crate::db::DsnSource;
use crate::error::{AppError, ErrorKind};
use crate::output::{self, OutputFormat, json};

pub fn run(args: &CliArgs, cmd: &DsnArgs) -> Result<()> {
    if cmd.from_env && args.defaults_file.is_some() {
        return Err(AppError::new(
            ErrorKind::Config,
            "--from-env cannot be combined with --defaults-file",
        )
        .into());
    }

    let env = common::load_env(args);
    let source = if cmd.from_env {
        DsnSource::Environment
    } else {
        DsnSource::DefaultsFile {
            path: args.defaults_file.clone(),
            database: cmd.database.clone(),
        }
    };
    let dsn = source.resolve(&env)?;

    if args.quiet {
        return Ok(());
    }

    match output::select_format(&args.output) {
        OutputFormat::Json => {
            let payload = json::dsn_to_json(&dsn, &source);
            writeln!(io::stdout(), "{}", json::emit_json_value(&payload, true)?)?;
        }
        _ => writeln!(io::stdout(), "{}", dsn)?,
    }

    Ok(())
}
