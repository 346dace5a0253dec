use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prompt theme used by the terminal engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Colorful,
    Plain,
}

/// Presentation options for the terminal engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    pub theme: ThemeChoice,
    /// Answer pre-selected on yes/no prompts.
    pub confirm_default: bool,
    pub allow_empty_text: bool,
    /// Print field doc comments above their prompt.
    pub show_descriptions: bool,
    /// Overrides the struct title shown above the prompts.
    pub title: Option<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Colorful,
            confirm_default: false,
            allow_empty_text: true,
            show_descriptions: true,
            title: None,
        }
    }
}

impl FormOptions {
    /// Load options from `path`, or from the platform config file when no path
    /// is given. Missing platform config means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            return Self::from_file(&expanded);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let options: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded form options");
        Ok(options)
    }
}

/// `<config dir>/questionnaire/config.toml` for the current platform.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "questionnaire").map(|dirs| dirs.config_dir().join("config.toml"))
}
