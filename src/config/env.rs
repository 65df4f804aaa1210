use std::collections::HashMap;
use std::path::Path;

/// Read-only snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    pub fn from_system(env_file: Option<&Path>) -> Self {
        match env_file {
            Some(path) => {
                if let Err(err) = dotenvy::from_path(path) {
                    tracing::warn!("Could not load env file {}: {}", path.display(), err);
                }
            }
            None => {
                // Load .env file if present (silently ignore if missing)
                let _ = dotenvy::dotenv();
            }
        }

        let mut vars: HashMap<String, String> = std::env::vars().collect();
        if !vars.contains_key("HOME") {
            if let Some(home) = dirs::home_dir() {
                vars.insert("HOME".to_string(), home.display().to_string());
            }
        }
        Self { vars }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut vars = HashMap::new();
        for (k, v) in pairs {
            vars.insert((*k).to_string(), (*v).to_string());
        }
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    /// Like [`Env::get`], but treats an empty value as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<String> {
        self.vars.get(key).filter(|v| !v.is_empty()).cloned()
    }
}
