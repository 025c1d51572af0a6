//! Site configuration management for `tola.toml`.
//!
//! # Sections
//!
//! | Section           | Purpose                                   |
//! |-------------------|-------------------------------------------|
//! | `[build]`         | Content/output paths, source extension    |
//! | `[trail]`         | Index page, strictness, visit command     |
//! | `[[trail.items]]` | The trail itself (nested via `subtrail`)  |
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"
//! output = "public"
//!
//! [trail]
//! index = "index"
//!
//! [[trail.items]]
//! text = "Intro"
//! link = "intro"
//! ```

mod build;
pub mod defaults;
mod error;
mod trail;

use build::BuildConfig;
use error::ConfigError;
use trail::TrailConfig;

use crate::cli::Cli;
use crate::trail::{Trail, TrailItem, check};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing tola.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Trail settings and the bound trail
    #[serde(default)]
    pub trail: TrailConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string and bind `[[trail.items]]`.
    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        if let Some(forest) = config.trail.items.take() {
            config.set_bound_trail(forest);
        }
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).with_context(|| format!("in `{}`", path.display()))
    }

    /// Load, apply CLI overrides and validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        if !config_path.exists() {
            bail!("Config file not found: {}", config_path.display());
        }

        let mut config = Self::from_path(&config_path)?;
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// The trail bound to this site, if any.
    pub fn bound_trail(&self) -> Option<&[TrailItem]> {
        self.trail.registry.bound()
    }

    /// Replace the bound trail, returning the previous one.
    pub fn set_bound_trail(&mut self, trail: Trail) -> Option<Trail> {
        self.trail.registry.bind(trail)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_name));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let extension = &self.build.extension;
        if extension.is_empty() {
            bail!(ConfigError::Validation(
                "[build.extension] must not be empty".into()
            ));
        }
        if extension.starts_with('.') {
            bail!(ConfigError::Validation(format!(
                "[build.extension] must not start with a dot, use \"{}\"",
                extension.trim_start_matches('.')
            )));
        }

        if self.trail.index.is_empty() {
            bail!(ConfigError::Validation(
                "[trail.index] must not be empty".into()
            ));
        }

        if let Some(program) = self.trail.visit_command.first() {
            which::which(program).with_context(|| {
                format!("[trail.visit_command]: `{program}` not found. Please install it first.")
            })?;
        }

        if self.trail.strict
            && let Some(forest) = self.bound_trail()
        {
            let problems = check::check(forest, &self.build.content, extension);
            if !problems.is_empty() {
                let details: Vec<_> = problems.iter().map(ToString::to_string).collect();
                bail!(ConfigError::Validation(format!(
                    "[trail.strict] rejected the trail: {}",
                    details.join("; ")
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn write_site(config: &str, content: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tola.toml"), config).unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        for file in content {
            fs::write(dir.path().join("content").join(file), "").unwrap();
        }
        dir
    }

    fn cli_for(dir: &TempDir, extra: &[&str]) -> Cli {
        let root = dir.path().to_str().unwrap();
        let mut args = vec!["tola-trail", "--root", root];
        args.extend_from_slice(extra);
        args.push("check");
        Cli::parse_from(args)
    }

    const SAMPLE: &str = r#"
        [[trail.items]]
        text = "Intro"
        link = "intro"

        [[trail.items]]
        text = "Sub"
        link = "sub"
    "#;

    #[test]
    fn test_from_str_empty() {
        let config = SiteConfig::from_str("").unwrap();
        assert!(config.bound_trail().is_none());
    }

    #[test]
    fn test_from_str_rejects_unknown_section() {
        let result = SiteConfig::from_str("[serve]\nport = 8080\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/nonexistent/tola.toml")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_load_resolves_paths_against_root() {
        let dir = write_site(SAMPLE, &["intro.typ", "sub.typ"]);
        let config = SiteConfig::load(&cli_for(&dir, &[])).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.get_root(), root);
        assert_eq!(config.config_path, root.join("tola.toml"));
        assert_eq!(config.build.content, root.join("content"));
        assert_eq!(config.build.output, root.join("public"));
        assert_eq!(config.bound_trail().unwrap().len(), 2);
    }

    #[test]
    fn test_load_cli_overrides_output() {
        let dir = write_site(SAMPLE, &[]);
        let config = SiteConfig::load(&cli_for(&dir, &["--output", "site"])).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.build.output, root.join("site"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::load(&cli_for(&dir, &[])).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_validate_extension() {
        let mut config = SiteConfig::default();
        config.build.extension = ".typ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not start with a dot"));

        config.build.extension = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_index() {
        let mut config = SiteConfig::default();
        config.trail.index = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_visit_command() {
        let mut config = SiteConfig::default();
        config.trail.visit_command = vec!["definitely-not-an-installed-program-xyz".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_strict_rejects_dangling_link() {
        let config = format!("[trail]\nstrict = true\n{SAMPLE}");
        let dir = write_site(&config, &["intro.typ"]);
        let err = SiteConfig::load(&cli_for(&dir, &[])).unwrap_err();

        assert!(format!("{err:#}").contains("`sub` has no source document"));
    }

    #[test]
    fn test_strict_accepts_clean_trail() {
        let config = format!("[trail]\nstrict = true\n{SAMPLE}");
        let dir = write_site(&config, &["intro.typ", "sub.typ"]);
        assert!(SiteConfig::load(&cli_for(&dir, &[])).is_ok());
    }

    #[test]
    fn test_lenient_allows_dangling_link() {
        let dir = write_site(SAMPLE, &[]);
        assert!(SiteConfig::load(&cli_for(&dir, &[])).is_ok());
    }

    #[test]
    fn test_from_str_binds_items() {
        let config = SiteConfig::from_str(SAMPLE).unwrap();

        assert!(config.trail.items.is_none());
        assert!(config.trail.registry.is_bound());
        assert_eq!(config.bound_trail().unwrap()[1].link, "sub");
    }

    #[test]
    fn test_set_bound_trail_replaces() {
        let mut config = SiteConfig::from_str(SAMPLE).unwrap();
        let old = config.set_bound_trail(vec![TrailItem::new("Only", "only")]);

        assert_eq!(old.unwrap().len(), 2);
        assert_eq!(config.bound_trail().unwrap()[0].link, "only");
    }
}
