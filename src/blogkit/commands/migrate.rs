//! Turns flat posts into post bundles.
//!
//! ```text
//! before                         after
//! content/post/hello.md          content/post/hello/index.md
//! assets/feature.png             content/post/hello/feature-feature.png
//!                                assets/feature.png   (left in place)
//! ```
//!
//! Only posts whose front matter declares a `cover` are touched; hidden files
//! are never picked up. Each post is migrated in three steps (create folder,
//! move post, copy cover) with no rollback: the first failure aborts the whole
//! batch and may leave that post half-migrated. `on_migrate` sees every post
//! before its first step runs, so callers can report progress that survives an
//! abort.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::{FrontMatter, PostMigration};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.md";
const FEATURE_PREFIX: &str = "feature-";

pub fn run<F>(
    posts_dir: &Path,
    assets_dir: &Path,
    dry_run: bool,
    mut on_migrate: F,
) -> Result<CmdResult>
where
    F: FnMut(&PostMigration),
{
    let mut result = CmdResult::default();
    let mut migrations = Vec::new();

    for source in list_posts(posts_dir)? {
        let content = fs::read_to_string(&source).map_err(|e| BlogError::Read {
            path: source.clone(),
            source: e,
        })?;

        let Some(migration) = plan_post(&source, &content, posts_dir, assets_dir) else {
            result.add_message(CmdMessage::info(format!(
                "Skipped {}: no cover",
                source.display()
            )));
            continue;
        };

        on_migrate(&migration);
        if !dry_run {
            apply(&migration)?;
        }
        migrations.push(migration);
    }

    if dry_run {
        result.add_message(CmdMessage::warning("Dry run: no files were changed"));
    }
    result.add_message(CmdMessage::success(format!(
        "Migrated {} post(s)",
        migrations.len()
    )));
    Ok(result.with_migrations(migrations))
}

/// Visible Markdown files directly inside `posts_dir`, sorted by name.
fn list_posts(posts_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(posts_dir).map_err(|source| BlogError::Read {
        path: posts_dir.to_path_buf(),
        source,
    })?;

    let mut posts = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            posts.push(path);
        }
    }
    posts.sort();
    Ok(posts)
}

/// Works out where a post and its cover should go, or `None` if the post has
/// no usable cover.
pub fn plan_post(
    source: &Path,
    content: &str,
    posts_dir: &Path,
    assets_dir: &Path,
) -> Option<PostMigration> {
    let front_matter = FrontMatter::parse(content)?;
    let cover = front_matter.cover()?;

    let relative_cover = Path::new(cover.trim_start_matches('/'));
    let cover_name = relative_cover.file_name()?.to_string_lossy();
    let slug = source.file_stem()?;

    let dest_dir = posts_dir.join(slug);
    Some(PostMigration {
        source: source.to_path_buf(),
        cover: cover.to_string(),
        dest_index: dest_dir.join(INDEX_FILE),
        cover_source: assets_dir.join(relative_cover),
        cover_dest: dest_dir.join(format!("{}{}", FEATURE_PREFIX, cover_name)),
        dest_dir,
    })
}

/// Performs one migration: create folder, move post, copy cover.
pub fn apply(migration: &PostMigration) -> Result<()> {
    fs::create_dir(&migration.dest_dir).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => BlogError::DestinationExists(migration.dest_dir.clone()),
        _ => BlogError::Write {
            path: migration.dest_dir.clone(),
            source: e,
        },
    })?;

    fs::rename(&migration.source, &migration.dest_index).map_err(|source| BlogError::Write {
        path: migration.dest_index.clone(),
        source,
    })?;

    fs::copy(&migration.cover_source, &migration.cover_dest).map_err(|e| match e.kind() {
        ErrorKind::NotFound if !migration.cover_source.exists() => BlogError::CoverNotFound {
            post: migration.source.clone(),
            cover: migration.cover_source.clone(),
        },
        _ => BlogError::Write {
            path: migration.cover_dest.clone(),
            source: e,
        },
    })?;

    Ok(())
}
