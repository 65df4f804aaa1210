use serde_json::json;

use crate::config::DefaultsFileConfig;
use crate::db::DsnSource;

pub const PASSWORD_MASK: &str = "********";

pub fn emit_json_value(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn error_json(message: &str, kind: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "kind": kind,
        }
    })
}

pub fn dsn_to_json(dsn: &str, source: &DsnSource) -> serde_json::Value {
    json!({
        "dsn": dsn,
        "source": source.as_str(),
    })
}

pub fn config_to_json(config: &DefaultsFileConfig) -> serde_json::Value {
    let mut value = serde_json::to_value(config).unwrap_or(serde_json::Value::Null);
    if let Some(map) = value.as_object_mut() {
        map.insert("password".to_string(), json!(mask_password(&config.password)));
        map.insert("effectivePort".to_string(), json!(config.effective_port()));
    }
    value
}

/// Masks a non-empty password, leaving an empty one visible as unset.
pub fn mask_password(password: &str) -> &'static str {
    if password.is_empty() { "" } else { PASSWORD_MASK }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_json_masks_password() {
        let config = DefaultsFileConfig {
            filename: "/home/alice/.my.cnf".to_string(),
            user: "alice".to_string(),
            password: "secret".to_string(),
            host: "db".to_string(),
            ..DefaultsFileConfig::default()
        };
        let value = config_to_json(&config);
        assert_eq!(value["filename"], "/home/alice/.my.cnf");
        assert_eq!(value["user"], "alice");
        assert_eq!(value["password"], PASSWORD_MASK);
        assert_eq!(value["port"], 0);
        assert_eq!(value["effectivePort"], 3306);
    }

    #[test]
    fn dsn_json_names_source() {
        let value = dsn_to_json("x@/?allowNativePasswords=true", &DsnSource::Environment);
        assert_eq!(value["source"], "environment");
        assert_eq!(value["dsn"], "x@/?allowNativePasswords=true");
    }
}
