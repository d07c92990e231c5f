//! # API Facade
//!
//! A thin facade over the command layer. It owns the blog root and the loaded
//! [`BlogConfig`], turns configured relative directories into real paths and
//! dispatches to `commands/*.rs`.
//!
//! Like the commands beneath it, the facade never prints and never exits; it
//! returns `Result<CmdResult>` and leaves presentation to the caller.

use crate::commands;
use crate::config::BlogConfig;
use crate::error::Result;
use crate::model::{HostTarget, PostMigration};
use std::path::{Path, PathBuf};

pub struct BlogApi {
    root: PathBuf,
    config: BlogConfig,
}

impl BlogApi {
    pub fn new(root: PathBuf, config: BlogConfig) -> Self {
        Self { root, config }
    }

    /// Rewrites image URLs in `input` for the host picked by `selector`.
    pub fn complete_image_urls(
        &self,
        input: &Path,
        selector: Option<&str>,
        output: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let base_url = self.base_url(HostTarget::from_selector(selector));
        commands::image_url::run(input, base_url, output)
    }

    /// Migrates posts, handing each one to `on_migrate` before it is touched.
    pub fn migrate_posts<F>(&self, dry_run: bool, on_migrate: F) -> Result<commands::CmdResult>
    where
        F: FnMut(&PostMigration),
    {
        commands::migrate::run(
            &self.posts_path(),
            &self.assets_path(),
            dry_run,
            on_migrate,
        )
    }

    pub fn detab(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::detab::run(path, self.config.tab_width)
    }

    pub fn base_url(&self, target: HostTarget) -> &str {
        self.config.hosts.base_url(target)
    }

    pub fn posts_path(&self) -> PathBuf {
        self.config.posts_path(&self.root)
    }

    pub fn assets_path(&self) -> PathBuf {
        self.config.assets_path(&self.root)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
