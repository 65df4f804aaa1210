use anyhow::Result;

use crate::cli::CliArgs;
use crate::config::{self, DefaultsFileConfig, Env};

pub fn load_env(args: &CliArgs) -> Env {
    Env::from_system(args.env_file.as_deref())
}

pub fn load_defaults(args: &CliArgs, env: &Env) -> Result<DefaultsFileConfig> {
    Ok(config::read_defaults_file(args.defaults_file.as_deref(), env)?)
}
