//! Site building orchestration.
//!
//! Coordinates page rendering and asset copying.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_posts() ──► ordered post collection
//!     │
//!     ├── render_routes() ──► one RenderedRoute per page
//!     │       (fixed routes + one per post)
//!     │
//!     ├── rayon::join
//!     │       ├── write_pages()  ──► <route>/index.html
//!     │       └── copy_assets()  ──► copied asset files
//!     │
//!     └── build_feed() + build_sitemap() (config-gated)
//! ```

use crate::{
    config::SiteConfig,
    content,
    generator::{rss, sitemap},
    log,
    render::{SiteData, pages, projects, shell, vault},
    utils::minify::minify_page,
};
use anyhow::{Context, Result, anyhow};
use maud::Markup;
use rayon::prelude::*;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
    time::SystemTime,
};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

// ============================================================================
// Built Page Set
// ============================================================================

/// One rendered route, as seen by the feed/sitemap generators.
pub struct BuiltPage {
    /// URL path component, e.g. `/reports/hello/`
    pub url_path: String,
    /// Full URL including base, e.g. `https://example.com/reports/hello/`
    pub full_url: String,
    /// Source modification time, for sitemap lastmod (posts only)
    pub lastmod: Option<SystemTime>,
}

/// Result of one full build.
pub struct BuiltSite {
    pub pages: Vec<BuiltPage>,
}

/// A rendered page waiting to be written.
struct RenderedRoute {
    url_path: String,
    html: String,
    lastmod: Option<SystemTime>,
}

impl RenderedRoute {
    fn fixed(url_path: &str, markup: Markup) -> Self {
        Self {
            url_path: url_path.to_string(),
            html: markup.into_string(),
            lastmod: None,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Build the entire site: render every route and copy assets in parallel,
/// then generate the feed and sitemap if enabled.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &'static SiteConfig) -> Result<BuiltSite> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let posts = content::collect_posts(config)?;
    log!("content"; "found {} posts", posts.len());

    let site = SiteData {
        config,
        posts: &posts,
    };
    let routes = render_routes(&site);

    let asset_files = collect_asset_files(&config.build.assets);
    let has_error = AtomicBool::new(false);

    log!("build"; "rendering {} pages, {} assets", routes.len(), asset_files.len());

    let (pages_result, assets_result) = rayon::join(
        || write_pages(&routes, config, &has_error),
        || copy_assets(&asset_files, config, &has_error),
    );
    pages_result?;
    assets_result?;

    let built = BuiltSite {
        pages: routes
            .into_iter()
            .map(|route| BuiltPage {
                full_url: format!("{}{}", config.base_url(), route.url_path),
                url_path: route.url_path,
                lastmod: route.lastmod,
            })
            .collect(),
    };

    rss::build_feed(config, &posts)?;
    sitemap::build_sitemap(config, &built.pages)?;

    log_build_result(output)?;

    Ok(built)
}

// ============================================================================
// Route Rendering
// ============================================================================

/// Render every route of the site: the five fixed pages plus one page
/// per post.
fn render_routes(site: &SiteData) -> Vec<RenderedRoute> {
    let mut routes = vec![
        RenderedRoute::fixed(shell::HOME_PATH, pages::landing(site)),
        RenderedRoute::fixed(shell::REPORTS_PATH, pages::reports(site)),
        RenderedRoute::fixed(shell::PROJECTS_PATH, projects::projects(site)),
        RenderedRoute::fixed(shell::PARTNERSHIP_PATH, pages::partnership(site)),
        RenderedRoute::fixed(shell::VAULT_PATH, vault::vault(site)),
    ];

    for post in site.posts {
        routes.push(RenderedRoute {
            url_path: shell::post_path(&post.slug),
            html: pages::post_page(site, post).into_string(),
            lastmod: fs::metadata(&post.source).and_then(|m| m.modified()).ok(),
        });
    }

    routes
}

/// Map a URL path to its output file: every route becomes
/// `<output>/<path>/index.html`.
fn route_output_path(url_path: &str, output: &Path) -> PathBuf {
    output.join(url_path.trim_matches('/')).join("index.html")
}

fn write_pages(
    routes: &[RenderedRoute],
    config: &SiteConfig,
    has_error: &AtomicBool,
) -> Result<()> {
    routes.par_iter().try_for_each(|route| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = write_page(route, config) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", route.url_path, e);
            }
            return Err(anyhow!("Build failed"));
        }
        Ok(())
    })
}

fn write_page(route: &RenderedRoute, config: &SiteConfig) -> Result<()> {
    let path = route_output_path(&route.url_path, &config.build.output);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let html = minify_page(route.html.as_bytes(), config);
    fs::write(&path, &*html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// ============================================================================
// Asset Copying
// ============================================================================

/// Collect all asset files recursively.
fn collect_asset_files(assets_dir: &Path) -> Vec<PathBuf> {
    if !assets_dir.exists() {
        return Vec::new();
    }

    WalkDir::new(assets_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn copy_assets(
    asset_files: &[PathBuf],
    config: &SiteConfig,
    has_error: &AtomicBool,
) -> Result<()> {
    asset_files.par_iter().try_for_each(|path| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = copy_asset(path, config) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", path.display(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        Ok(())
    })
}

fn copy_asset(path: &Path, config: &SiteConfig) -> Result<()> {
    let relative = path
        .strip_prefix(&config.build.assets)
        .map_err(|_| anyhow!("File is not in assets directory: {}", path.display()))?;
    let dest = config.build.output.join(relative);

    if !config.build.clean && is_up_to_date(path, &dest) {
        return Ok(());
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(path, &dest)?;
    Ok(())
}

/// Check if destination is up-to-date compared to source.
fn is_up_to_date(src: &Path, dst: &Path) -> bool {
    let Ok(src_time) = src.metadata().and_then(|m| m.modified()) else {
        return false;
    };
    let Ok(dst_time) = dst.metadata().and_then(|m| m.modified()) else {
        return false;
    };

    src_time <= dst_time
}

/// Log build result based on output directory contents
fn log_build_result(output: &Path) -> Result<()> {
    let file_count = fs::read_dir(output)?
        .filter_map(Result::ok)
        .filter(|e| e.file_name() != OsStr::new(".git"))
        .count();

    if file_count == 0 {
        log!("warn"; "output is empty, check the content directory");
    } else {
        log!("build"; "done");
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
