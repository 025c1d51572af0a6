//! Command-line host for interactive navigation.
//!
//! Resolves visited identifiers to source documents under `[build.content]`
//! and either opens them with `[trail.visit_command]` or prints their path.

use crate::{commands::Host, config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{
    path::{Path, PathBuf},
    process::Command,
};
use walkdir::WalkDir;

/// [`Host`] backed by the content directory.
pub struct CliHost<'a> {
    config: &'a SiteConfig,
    document: String,
    /// Last resolved document, kept for reporting.
    pub visited: Option<PathBuf>,
}

impl<'a> CliHost<'a> {
    pub fn new(config: &'a SiteConfig, document: impl Into<String>) -> Self {
        Self {
            config,
            document: document.into(),
            visited: None,
        }
    }

    /// Map an identifier to a file below the content directory.
    ///
    /// `s1` and `s1.typ` both resolve to `**/s1.typ`. Only the source
    /// extension counts as one, so `chapter.1` becomes `chapter.1.typ`.
    /// Directories are walked in file-name order and the first match wins;
    /// without a match the path is `{content}/s1.typ`.
    fn resolve(&self, identifier: &str) -> PathBuf {
        let content = &self.config.build.content;
        let extension = self.config.build.extension.as_str();
        let file_name = if Path::new(identifier).extension().is_some_and(|ext| ext == extension) {
            identifier.to_owned()
        } else {
            format!("{identifier}.{extension}")
        };

        WalkDir::new(content)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .find(|e| e.file_name().to_str() == Some(file_name.as_str()))
            .map(walkdir::DirEntry::into_path)
            .unwrap_or_else(|| content.join(&file_name))
    }

    fn open(&self, path: &Path) -> Result<()> {
        let Some((program, args)) = self.config.trail.visit_command.split_first() else {
            println!("{}", path.display());
            return Ok(());
        };

        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to run `{program}`"))?;

        if !status.success() {
            bail!("`{program}` exited with {status}");
        }
        Ok(())
    }
}

impl Host for CliHost<'_> {
    fn current_document(&self) -> String {
        self.document.clone()
    }

    fn visit_document(&mut self, identifier: &str) -> Result<()> {
        let path = self.resolve(identifier);
        if !path.exists() {
            log!("warn"; "{} does not exist yet", path.display());
        }
        log!("visit"; "{}", path.display());
        self.open(&path)?;
        self.visited = Some(path);
        Ok(())
    }

    fn message(&mut self, message: &str) {
        log!("visit"; "{message}");
    }
}
