mod common;
mod config;
mod dsn;

use anyhow::Result;

use crate::cli::{CliArgs, CommandKind};

pub fn dispatch(args: &CliArgs) -> Result<()> {
    match &args.command {
        CommandKind::Dsn(cmd) => dsn::run(args, cmd),
        CommandKind::Config => config::run(args),
    }
}
