pub mod dsn;
pub mod source;

pub use dsn::{CONNECTION_OPTIONS, build_dsn};
pub use source::{DsnSource, MYSQL_DSN_VAR, build_dsn_from_defaults_file, dsn_from_environment};
