//! Navigation markup injection into built pages.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_pages()  ──► every *.html under [build.output]
//!     │
//!     └── inject_page()    ──► (parallel, rayon)
//!             │
//!             ├── page_identifier()  public/guide/s1/index.html → "s1.html"
//!             └── render_markers()   <!-- trail:nav -->     → nav bar
//!                                    <!-- trail:listing --> → listing
//! ```
//!
//! Pages without markers are never rewritten.

use crate::{config::SiteConfig, log, trail::render};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};
use walkdir::WalkDir;

/// Replaced by the navigation bar.
pub const NAV_MARKER: &str = "<!-- trail:nav -->";

/// Replaced by the trail listing chosen for the page.
pub const LISTING_MARKER: &str = "<!-- trail:listing -->";

/// Fill markers in every page under the output directory.
///
/// Returns the number of rewritten pages.
pub fn build_site(config: &SiteConfig) -> Result<usize> {
    let output = &config.build.output;
    if !output.is_dir() {
        bail!("Output directory not found: {}", output.display());
    }

    if !config.trail.registry.is_bound() {
        log!("warn"; "no [[trail.items]] configured, markers will be cleared");
    }

    let pages = collect_pages(output);
    log!("build"; "scanning {} pages", pages.len());

    let updated = AtomicUsize::new(0);
    pages.par_iter().try_for_each(|page| {
        if inject_page(page, output, config)? {
            updated.fetch_add(1, Ordering::Relaxed);
        }
        Ok::<_, anyhow::Error>(())
    })?;

    let updated = updated.into_inner();
    log!("build"; "updated {updated} of {} pages", pages.len());
    Ok(updated)
}

/// All `*.html` files below `dir`.
fn collect_pages(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Rewrite one page. Returns whether the file changed.
fn inject_page(path: &Path, output: &Path, config: &SiteConfig) -> Result<bool> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page: {}", path.display()))?;

    if !html.contains(NAV_MARKER) && !html.contains(LISTING_MARKER) {
        return Ok(false);
    }

    let identifier = page_identifier(output, path);
    let rendered = render_markers(&html, &identifier, config);
    if rendered == html {
        return Ok(false);
    }

    fs::write(path, rendered)
        .with_context(|| format!("Failed to write page: {}", path.display()))?;
    Ok(true)
}

/// Document identifier of a built page.
///
/// The identifier keeps its extension so that search reduces it to a stem
/// exactly once (`chapter.1.html` → `chapter.1`). Directory-style output
/// is named after its directory:
///
/// | Page | Identifier |
/// |------|------------|
/// | `public/index.html` | `index.html` |
/// | `public/s1.html` | `s1.html` |
/// | `public/guide/s1/index.html` | `s1.html` |
pub fn page_identifier(output: &Path, page: &Path) -> String {
    let relative = page.strip_prefix(output).unwrap_or(page);
    let nested_dir = relative
        .parent()
        .filter(|parent| *parent != Path::new(""))
        .filter(|_| relative.file_name().is_some_and(|name| name == "index.html"))
        .and_then(Path::file_name);

    match nested_dir {
        Some(dir) => format!("{}.html", dir.to_string_lossy()),
        None => relative
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Replace both markers in `html` for the page `identifier`.
pub fn render_markers(html: &str, identifier: &str, config: &SiteConfig) -> String {
    let (nav, listing) = match config.bound_trail() {
        Some(forest) => (
            render::nav_bar(forest, identifier),
            render::listing_for(forest, identifier, &config.trail.index).unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    html.replace(NAV_MARKER, &nav).replace(LISTING_MARKER, &listing)
}
