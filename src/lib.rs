// Allow some clippy lints project-wide for code style consistency
#![allow(clippy::uninlined_format_args)]

//! Turn a MySQL client defaults file (`~/.my.cnf`) into a driver DSN of the
//! form `user[:password]@proto(addr)/[dbname]?allowNativePasswords=true`,
//! or take a ready-made DSN from `MYSQL_DSN`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod output;

pub use config::{DefaultsFileConfig, Env, read_defaults_file};
pub use db::{DsnSource, build_dsn, build_dsn_from_defaults_file, dsn_from_environment};
pub use error::{AppError, ErrorKind};
