//! Site initialization module.
//!
//! Creates new site structure with default configuration.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default config filename
const CONFIG_FILE: &str = "veranda.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content", "assets/images", "assets/styles"];

/// Starter post written into the content directory.
const SAMPLE_POST: &str = "---\n\
title: Hello World\n\
date: 2023-04-05\n\
description: The first post on this site.\n\
---\n\
\n\
Write posts as markdown files in the content directory. Each one needs\n\
a frontmatter block with at least a `title` and a `date`.\n";

/// Starter stylesheet so the shell's stylesheet link resolves.
const SAMPLE_STYLESHEET: &str = "body {\n  max-width: 42rem;\n  margin: 0 auto;\n  padding: 0 1rem;\n}\n\n.nav-link.active {\n  color: black;\n}\n";

/// Create a new site with default structure
pub fn new_site(config: &'static SiteConfig) -> Result<()> {
    let root = config.get_root();
    let has_name = matches!(
        config.get_cli().command,
        crate::cli::Commands::Init { name: Some(_) }
    );

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `veranda init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    init_sample_content(root)?;
    init_ignored_files(root, &["public"])?;

    crate::log!("init"; "site created at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `veranda init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write a starter post and stylesheet
fn init_sample_content(root: &Path) -> Result<()> {
    fs::write(root.join("content/hello-world.md"), SAMPLE_POST)?;
    fs::write(root.join("assets/styles/main.css"), SAMPLE_STYLESHEET)?;
    Ok(())
}

/// Initialize .gitignore and .ignore files with specified patterns
fn init_ignored_files(root: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
