use crate::config::{DefaultsFileConfig, Env};

/// Forces mysql_native_password compatibility so that users created with
/// that plugin can still log in against servers defaulting to
/// caching_sha2_password.
pub const CONNECTION_OPTIONS: &str = "?allowNativePasswords=true";

/// Builds a `user[:password]@proto(addr)/[dbname]?opts` DSN.
///
/// An empty `config.user` falls back to `$USER`. A socket wins over a host,
/// and a non-empty `database` wins over `config.database`. Values are
/// inserted verbatim.
pub fn build_dsn(config: &DefaultsFileConfig, database: Option<&str>, env: &Env) -> String {
    let mut dsn = String::new();

    if !config.user.is_empty() {
        dsn.push_str(&config.user);
    } else {
        dsn.push_str(&env.get("USER").unwrap_or_default());
    }
    if !config.password.is_empty() {
        dsn.push(':');
        dsn.push_str(&config.password);
    }

    if !config.socket.is_empty() {
        dsn.push_str(&format!("@unix({})/", config.socket));
    } else if !config.host.is_empty() {
        dsn.push_str(&format!("@tcp({}:{})/", config.host, config.effective_port()));
    } else {
        dsn.push_str("@/");
    }

    match database.filter(|db| !db.is_empty()) {
        Some(database) => dsn.push_str(database),
        None => dsn.push_str(&config.database),
    }

    dsn.push_str(CONNECTION_OPTIONS);
    dsn
}
