use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use configparser::ini::Ini;

use super::env::Env;
use super::schema::DefaultsFileConfig;
use crate::error::{AppError, ErrorKind, Result};

pub const DEFAULT_DEFAULTS_FILE: &str = "~/.my.cnf";
pub const CLIENT_SECTION: &str = "client";

/// Reads the `[client]` section of a MySQL defaults file.
///
/// `None` or an empty path means `~/.my.cnf`. The file is re-read on
/// every call.
pub fn read_defaults_file(path: Option<&str>, env: &Env) -> Result<DefaultsFileConfig> {
    let filename = resolve_defaults_path(path, env);
    tracing::debug!("Reading defaults file {}", filename);

    let section = load_client_section(Path::new(&filename))?;
    Ok(DefaultsFileConfig::from_client_section(filename, &section))
}

/// Applies the `~/.my.cnf` default and expands the first `~` to `HOME`.
pub fn resolve_defaults_path(path: Option<&str>, env: &Env) -> String {
    let path = match path {
        Some(path) if !path.is_empty() => path,
        _ => DEFAULT_DEFAULTS_FILE,
    };
    let home = env.get("HOME").unwrap_or_default();
    expand_tilde(path, &home)
}

/// Replaces the first `~` anywhere in `path` with `home`.
pub fn expand_tilde(path: &str, home: &str) -> String {
    path.replacen('~', home, 1)
}

/// Option-file syntax: `#`/`;` start a comment only at the beginning of a
/// line, `=` is the only delimiter, and names are case-sensitive.
fn defaults_file_parser() -> Ini {
    let mut defaults = Ini::new().defaults();
    defaults.enable_inline_comments = false;
    defaults.delimiters = vec!['='];
    defaults.case_sensitive = true;
    Ini::new_from_defaults(defaults)
}

/// Parses `path` as INI and returns the `[client]` key/value pairs.
///
/// Keys listed without a value are dropped. A file with no `[client]`
/// section yields an empty map.
pub fn load_client_section(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|err| {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            _ => ErrorKind::Config,
        };
        AppError::new(
            kind,
            format!("Could not load defaults-file {:?}: {}", path.display().to_string(), err),
        )
    })?;

    let mut ini = defaults_file_parser();
    let mut sections = ini.read(content).map_err(|err| {
        AppError::new(
            ErrorKind::Parse,
            format!("Could not parse defaults-file {:?}: {}", path.display().to_string(), err),
        )
    })?;

    match sections.remove(CLIENT_SECTION) {
        Some(section) => Ok(section
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect()),
        None => {
            tracing::warn!("No [{}] section in {}", CLIENT_SECTION, path.display());
            Ok(HashMap::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn write_file(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).expect("write defaults file");
        path.display().to_string()
    }

    #[test]
    fn expands_only_first_tilde() {
        assert_eq!(expand_tilde("~/.my.cnf", "/home/alice"), "/home/alice/.my.cnf");
        assert_eq!(expand_tilde("/etc/~x/~y", "/h"), "/etc//hx/~y");
        assert_eq!(expand_tilde("/etc/my.cnf", "/h"), "/etc/my.cnf");
    }

    #[test]
    fn resolves_default_path_against_home() {
        let env = Env::from_pairs(&[("HOME", "/home/alice")]);
        assert_eq!(resolve_defaults_path(None, &env), "/home/alice/.my.cnf");
        assert_eq!(resolve_defaults_path(Some(""), &env), "/home/alice/.my.cnf");
        assert_eq!(resolve_defaults_path(Some("~/.my.cnf"), &env), "/home/alice/.my.cnf");
        assert_eq!(resolve_defaults_path(Some("/etc/my.cnf"), &env), "/etc/my.cnf");
    }

    #[test]
    fn unset_home_expands_to_empty() {
        let env = Env::from_pairs(&[]);
        assert_eq!(resolve_defaults_path(None, &env), "/.my.cnf");
    }

    #[test]
    fn reads_client_section() {
        let dir = temp_dir();
        let path = write_file(
            dir.path(),
            "my.cnf",
            "[mysqld]\nport=1234\n\n[client]\nuser=root1\npassword=\"testpassword1\"\nhost=127.0.0.1\n",
        );

        let config = read_defaults_file(Some(path.as_str()), &Env::from_pairs(&[])).expect("read");
        assert_eq!(config.filename, path);
        assert_eq!(config.user, "root1");
        assert_eq!(config.password, "testpassword1");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 0);
    }

    #[test]
    fn tilde_path_is_read_from_home() {
        let dir = temp_dir();
        write_file(dir.path(), ".my.cnf", "[client]\nuser=alice\nsocket=/tmp/mysql.sock\n");
        let home = dir.path().display().to_string();
        let env = Env::from_pairs(&[("HOME", home.as_str())]);

        let config = read_defaults_file(None, &env).expect("read");
        assert_eq!(config.filename, format!("{}/.my.cnf", home));
        assert_eq!(config.user, "alice");
        assert_eq!(config.socket, "/tmp/mysql.sock");
    }

    #[test]
    fn valueless_keys_are_ignored() {
        let dir = temp_dir();
        let path = write_file(dir.path(), "my.cnf", "[client]\nskip-ssl\nuser=bob\n");

        let section = load_client_section(Path::new(&path)).expect("load");
        assert_eq!(section.len(), 1);
        assert_eq!(section.get("user").map(String::as_str), Some("bob"));
    }

    #[test]
    fn missing_client_section_gives_empty_config() {
        let dir = temp_dir();
        let path = write_file(dir.path(), "my.cnf", "[mysqld]\nuser=mysql\n");

        let config = read_defaults_file(Some(path.as_str()), &Env::from_pairs(&[])).expect("read");
        assert!(config.user.is_empty());
        assert!(config.host.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = temp_dir();
        let path = dir.path().join("absent.cnf").display().to_string();

        let err =
            read_defaults_file(Some(path.as_str()), &Env::from_pairs(&[])).expect_err("missing");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.contains("absent.cnf"));
    }

    #[test]
    fn malformed_section_header_is_parse_error() {
        let dir = temp_dir();
        let path = write_file(dir.path(), "my.cnf", "[client\nuser=root\n");

        let err =
            read_defaults_file(Some(path.as_str()), &Env::from_pairs(&[])).expect_err("malformed");
        assert_eq!(err.kind, ErrorKind::Parse);
    }

    #[test]
    fn comment_characters_inside_values_are_kept() {
        let dir = temp_dir();
        let path = write_file(
            dir.path(),
            "my.cnf",
            "# full-line comment\n[client]\n; another one\nuser=root\npassword=ab#cd;ef\n",
        );
        let config = read_defaults_file(Some(path.as_str()), &Env::default()).expect("read");
        assert_eq!(config.password, "ab#cd;ef");

        let path = write_file(dir.path(), "quoted.cnf", "[client]\npassword=\"p#ss;1\"\n");
        let config = read_defaults_file(Some(path.as_str()), &Env::default()).expect("read");
        assert_eq!(config.password, "p#ss;1");
    }

    #[test]
    fn values_with_delimiter_characters_are_verbatim() {
        let dir = temp_dir();
        let path = write_file(
            dir.path(),
            "my.cnf",
            "[client]\nuser='app'\npassword=p@ss:w;rd#1\nhost=::1\nsocket=/run/my sql;#.sock\ndatabase=a=b\n",
        );

        let config = read_defaults_file(Some(path.as_str()), &Env::default()).expect("read");
        assert_eq!(config.user, "app");
        assert_eq!(config.password, "p@ss:w;rd#1");
        assert_eq!(config.host, "::1");
        assert_eq!(config.socket, "/run/my sql;#.sock");
        assert_eq!(config.database, "a=b");
    }

    #[test]
    fn names_are_case_sensitive_and_colon_is_not_a_delimiter() {
        let dir = temp_dir();
        let path = write_file(
            dir.path(),
            "my.cnf",
            "[Client]\nuser=upper\n[client]\nUSER=shout\nhost: db\nuser=lower\n",
        );

        let section = load_client_section(Path::new(&path)).expect("load");
        assert_eq!(section.get("user").map(String::as_str), Some("lower"));
        assert_eq!(section.get("USER").map(String::as_str), Some("shout"));
        assert!(!section.contains_key("host"));
    }
}
