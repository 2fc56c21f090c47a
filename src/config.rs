use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".neonkeyrc.json";

/// Environment variable consulted for the translation API key.
pub const API_KEY_ENV: &str = "NEONKEY_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned for locale files and templates.
    #[serde(default = "default_root_path", alias = "neonPath")]
    pub root_path: String,
    /// Locale whose files are listed first (e.g. `cs_CZ`).
    #[serde(default, alias = "defaultLanguage")]
    pub default_locale_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "apiKey")]
    pub translation_api_key: Option<String>,
    #[serde(default = "default_translation_model", alias = "model")]
    pub translation_model: String,
    #[serde(default = "default_translation_api_url")]
    pub translation_api_url: String,
    #[serde(default = "default_neon_extension")]
    pub neon_extension: String,
    #[serde(default = "default_template_extension")]
    pub template_extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_root_path() -> String {
    "app".to_string()
}

fn default_translation_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_translation_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_neon_extension() -> String {
    "neon".to_string()
}

fn default_template_extension() -> String {
    "latte".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            default_locale_tag: None,
            translation_api_key: None,
            translation_model: default_translation_model(),
            translation_api_url: default_translation_api_url(),
            neon_extension: default_neon_extension(),
            template_extension: default_template_extension(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or an
    /// extension is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.neon_extension.trim().is_empty() {
            anyhow::bail!("'neonExtension' must not be empty");
        }
        if self.template_extension.trim().is_empty() {
            anyhow::bail!("'templateExtension' must not be empty");
        }

        Ok(())
    }

    /// Root directory resolved against the project directory.
    pub fn root_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.root_path)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config resolve against.
    pub project_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let project_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                project_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            project_dir: start_dir.to_path_buf(),
        }),
    }
}
