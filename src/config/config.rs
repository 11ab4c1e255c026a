use crate::fastq::DEFAULT_FASTQ_PATTERN;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user configuration, read from the platform config directory.
/// Every field has a default so a missing or partial file is fine.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Regex used by `fastq-cat` to group files when no --pattern is given.
    #[serde(default = "default_fastq_pattern")]
    pub fastq_pattern: String,

    /// Bin count for mutation-position histograms.
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// How many trinucleotide contexts the context chart shows.
    #[serde(default = "default_top_contexts")]
    pub top_contexts: usize,
}

fn default_fastq_pattern() -> String {
    DEFAULT_FASTQ_PATTERN.to_string()
}

fn default_histogram_bins() -> usize {
    50
}

fn default_top_contexts() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fastq_pattern: default_fastq_pattern(),
            histogram_bins: default_histogram_bins(),
            top_contexts: default_top_contexts(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "mutsig", "mutsig-tools")
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = project_dirs() {
            let config_path = proj_dirs.config_dir().join("config.toml");
            if let Some(config) = Self::load_from(&config_path) {
                return config;
            }
        }
        Config::default()
    }

    fn load_from(config_path: &Path) -> Option<Self> {
        if !config_path.exists() {
            return None;
        }
        let content = fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    }

    /// Write this configuration to the platform config directory. Returns
    /// the file path, or `None` when no config directory is available.
    pub fn save(&self) -> Result<Option<PathBuf>> {
        match project_dirs() {
            Some(proj_dirs) => self.save_to(proj_dirs.config_dir()).map(Some),
            None => Ok(None),
        }
    }

    pub fn save_to(&self, config_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(config_dir).with_context(|| {
            format!("Failed to create config directory {}", config_dir.display())
        })?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("histogram_bins = 25").unwrap();
        assert_eq!(config.histogram_bins, 25);
        assert_eq!(config.top_contexts, 10);
        assert_eq!(config.fastq_pattern, DEFAULT_FASTQ_PATTERN);
    }

    #[test]
    fn saved_defaults_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::default().save_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("config.toml"));

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.histogram_bins, 50);
        assert_eq!(config.fastq_pattern, DEFAULT_FASTQ_PATTERN);
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("config.toml")).is_none());
    }
}
