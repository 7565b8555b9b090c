//! Runtime configuration resolved once at startup.
//!
//! Precedence is command-line flag, then environment, then default.
//! Resolution goes through an environment lookup closure so it can be
//! exercised without touching the process environment.

use std::path::{Path, PathBuf};

pub const DEFAULT_EDITOR: &str = "vim";
pub const DEFAULT_MAX_SHEET_BYTES: usize = 1024 * 1024;

const APP_DIR: &str = "keeper";
const STORE_FILE: &str = "store.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub store_path: PathBuf,
    /// Editor command line, possibly with arguments (`code --wait`).
    pub editor: String,
    pub max_sheet_bytes: usize,
    pub log_dir: PathBuf,
}

impl Config {
    /// Resolves against the real process environment.
    pub fn from_env(store_flag: Option<&Path>) -> Self {
        Self::resolve(store_flag, |key| std::env::var(key).ok(), dirs::data_dir())
    }

    pub fn resolve<F>(store_flag: Option<&Path>, env: F, data_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_dir = data_dir.map(|d| d.join(APP_DIR));

        let store_path = store_flag
            .map(Path::to_path_buf)
            .or_else(|| non_empty(env("KEEPER_STORE")).map(PathBuf::from))
            .unwrap_or_else(|| match &app_dir {
                Some(dir) => dir.join(STORE_FILE),
                None => PathBuf::from(STORE_FILE),
            });

        let editor = non_empty(env("VISUAL"))
            .or_else(|| non_empty(env("EDITOR")))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        let max_sheet_bytes = env("KEEPER_MAX_SHEET_BYTES")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MAX_SHEET_BYTES);

        let log_dir = non_empty(env("KEEPER_LOG_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| match &app_dir {
                Some(dir) => dir.join("logs"),
                None => PathBuf::from("logs"),
            });

        Self {
            store_path,
            editor,
            max_sheet_bytes,
            log_dir,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> Box<dyn Fn(&str) -> Option<String>> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Box::new(move |key: &str| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(None, env_of(&[]), Some(PathBuf::from("/data")));
        assert_eq!(config.store_path, PathBuf::from("/data/keeper/store.json"));
        assert_eq!(config.log_dir, PathBuf::from("/data/keeper/logs"));
        assert_eq!(config.editor, "vim");
        assert_eq!(config.max_sheet_bytes, DEFAULT_MAX_SHEET_BYTES);
    }

    #[test]
    fn test_no_data_dir_falls_back_to_cwd() {
        let config = Config::resolve(None, env_of(&[]), None);
        assert_eq!(config.store_path, PathBuf::from("store.json"));
    }

    #[test]
    fn test_flag_beats_env() {
        let env = env_of(&[("KEEPER_STORE", "/env/store.json")]);
        let config = Config::resolve(Some(Path::new("/flag.json")), env, None);
        assert_eq!(config.store_path, PathBuf::from("/flag.json"));
    }

    #[test]
    fn test_env_overrides() {
        let env = env_of(&[
            ("KEEPER_STORE", "/env/store.json"),
            ("EDITOR", "nano"),
            ("VISUAL", "code --wait"),
            ("KEEPER_MAX_SHEET_BYTES", "4096"),
            ("KEEPER_LOG_DIR", "/var/log/keeper"),
        ]);
        let config = Config::resolve(None, env, Some(PathBuf::from("/data")));
        assert_eq!(config.store_path, PathBuf::from("/env/store.json"));
        assert_eq!(config.editor, "code --wait");
        assert_eq!(config.max_sheet_bytes, 4096);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/keeper"));
    }

    #[test]
    fn test_bad_limit_and_blank_editor_ignored() {
        let env = env_of(&[("KEEPER_MAX_SHEET_BYTES", "lots"), ("VISUAL", " "), ("EDITOR", "nano")]);
        let config = Config::resolve(None, env, None);
        assert_eq!(config.max_sheet_bytes, DEFAULT_MAX_SHEET_BYTES);
        assert_eq!(config.editor, "nano");
    }
}
