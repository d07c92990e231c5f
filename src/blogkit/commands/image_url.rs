//! Rewrites Markdown image references to absolute URLs.
//!
//! Matching is a plain pattern over the text, not a Markdown parse: any
//! `![alt](path)` on a single line is rewritten, wherever it appears (code
//! blocks and front matter included). Nested brackets and escaped parentheses
//! are not understood. Running the rewrite twice prefixes the path twice.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};

static IMAGE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!\[[^\]]*?\])\((.*?)\)").expect("image reference pattern"));

/// Prefixes the path of every image reference in `content` with `base_url`.
pub fn rewrite_image_urls(content: &str, base_url: &str) -> String {
    IMAGE_REF
        .replace_all(content, |caps: &Captures| {
            format!("{}({}{})", &caps[1], base_url, &caps[2])
        })
        .into_owned()
}

/// Number of image references the rewrite would touch.
pub fn count_image_refs(content: &str) -> usize {
    IMAGE_REF.find_iter(content).count()
}

/// Rewrites `input`. With an `output` basename the result goes to
/// `<output>.md`; otherwise it is returned for printing and nothing is written.
pub fn run(input: &Path, base_url: &str, output: Option<&str>) -> Result<CmdResult> {
    let content = fs::read_to_string(input).map_err(|source| BlogError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let rewritten = rewrite_image_urls(&content, base_url);
    let count = count_image_refs(&content);

    match output {
        Some(basename) => {
            let target = PathBuf::from(format!("{}.md", basename));
            fs::write(&target, &rewritten).map_err(|source| BlogError::Write {
                path: target.clone(),
                source,
            })?;
            let mut result = CmdResult::default().with_written_files(vec![target.clone()]);
            result.add_message(CmdMessage::success(format!(
                "Rewrote {} image reference(s) into {}",
                count,
                target.display()
            )));
            Ok(result)
        }
        None => {
            let mut result = CmdResult::default().with_output(rewritten);
            result.add_message(CmdMessage::info(format!(
                "Rewrote {} image reference(s) from {} using {}",
                count,
                input.display(),
                base_url
            )));
            Ok(result)
        }
    }
}
