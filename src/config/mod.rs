mod env;
mod loader;
mod schema;

pub use env::Env;
pub use loader::{
    CLIENT_SECTION, DEFAULT_DEFAULTS_FILE, expand_tilde, load_client_section, read_defaults_file,
    resolve_defaults_path,
};
pub use schema::{DEFAULT_MYSQL_PORT, DefaultsFileConfig, quote_trim};
