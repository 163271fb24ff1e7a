use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::core::AvgPolicy;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) eval_bin: Option<String>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) avg_policy: Option<AvgPolicy>,
    #[serde(default)]
    pub(crate) sequential: bool,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) preview: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) path: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.path = Some(path);
                        return config;
                    }
                    Err(e) => {
                        // Logging is not set up yet; it depends on `debug` here
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        // 1. Working directory, next to qrels/ and runs/
        let mut paths = vec![PathBuf::from("treccsv.toml")];

        // 2. XDG config: ~/.config/treccsv/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("treccsv").join("config.toml"));
        }

        // 3. Platform config dir (macOS: ~/Library/Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("treccsv").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }
}
