use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_MYSQL_PORT: u16 = 3306;

const QUOTE_CHARS: [char; 2] = ['"', '\''];

/// Connection defaults taken from the `[client]` section of a defaults file.
///
/// Empty strings and a zero port mean "not set in the file".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsFileConfig {
    pub filename: String,
    pub user: String,
    pub password: String,
    pub socket: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl DefaultsFileConfig {
    /// Builds a config from the raw `[client]` key/value pairs.
    ///
    /// Unknown keys are ignored. `user` and `password` are quote-trimmed,
    /// everything else is taken verbatim. A `port` that is not a valid
    /// 16-bit unsigned integer is left unset.
    pub fn from_client_section(
        filename: impl Into<String>,
        section: &HashMap<String, String>,
    ) -> Self {
        let mut config = DefaultsFileConfig {
            filename: filename.into(),
            ..DefaultsFileConfig::default()
        };

        if let Some(user) = section.get("user") {
            config.user = quote_trim(user).to_string();
        }
        if let Some(password) = section.get("password") {
            config.password = quote_trim(password).to_string();
        }
        if let Some(socket) = section.get("socket") {
            config.socket = socket.clone();
        }
        if let Some(host) = section.get("host") {
            config.host = host.clone();
        }
        if let Some(port) = section.get("port") {
            match port.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => {
                    tracing::debug!(
                        "Ignoring invalid port {:?} in {}: {}",
                        port,
                        config.filename,
                        err
                    );
                }
            }
        }
        if let Some(database) = section.get("database") {
            config.database = database.clone();
        }

        config
    }

    /// The port to connect on: the configured one, or 3306 when unset.
    pub fn effective_port(&self) -> u16 {
        if self.port != 0 {
            self.port
        } else {
            DEFAULT_MYSQL_PORT
        }
    }
}

/// Trims surrounding whitespace and removes one layer of matching
/// `"` or `'` quotes.
pub fn quote_trim(value: &str) -> &str {
    let value = value.trim();
    if value.len() >= 2 {
        for quote in QUOTE_CHARS {
            if value.starts_with(quote) && value.ends_with(quote) {
                return &value[1..value.len() - 1];
            }
        }
    }
    value
}
