use crate::config::{Env, read_defaults_file};
use crate::db::dsn::build_dsn;
use crate::error::{AppError, ErrorKind, Result};

pub const MYSQL_DSN_VAR: &str = "MYSQL_DSN";

/// Where a DSN comes from. The two sources are never mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DsnSource {
    DefaultsFile {
        path: Option<String>,
        database: Option<String>,
    },
    Environment,
}

impl DsnSource {
    pub fn resolve(&self, env: &Env) -> Result<String> {
        match self {
            DsnSource::DefaultsFile { path, database } => {
                build_dsn_from_defaults_file(path.as_deref(), database.as_deref(), env)
            }
            DsnSource::Environment => dsn_from_environment(env),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DsnSource::DefaultsFile { .. } => "defaultsFile",
            DsnSource::Environment => "environment",
        }
    }
}

/// Reads a defaults file and turns it into a DSN.
pub fn build_dsn_from_defaults_file(
    path: Option<&str>,
    database: Option<&str>,
    env: &Env,
) -> Result<String> {
    let config = read_defaults_file(path, env)?;
    Ok(build_dsn(&config, database, env))
}

/// Returns `$MYSQL_DSN` verbatim.
pub fn dsn_from_environment(env: &Env) -> Result<String> {
    match env.get_non_empty(MYSQL_DSN_VAR) {
        Some(dsn) => {
            tracing::debug!("Using DSN from {}", MYSQL_DSN_VAR);
            Ok(dsn)
        }
        None => Err(AppError::new(
            ErrorKind::NotConfigured,
            format!("{} not set or empty", MYSQL_DSN_VAR),
        )),
    }
}
