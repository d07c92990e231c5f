use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use std::fs;
use std::path::Path;

/// Replaces every tab with `width` spaces. No column alignment is attempted.
pub fn expand_tabs(content: &str, width: usize) -> String {
    content.replace('\t', &" ".repeat(width))
}

/// Expands tabs in `path` in place and returns the new text.
pub fn run(path: &Path, width: usize) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(|source| BlogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let tabs = content.matches('\t').count();
    let expanded = expand_tabs(&content, width);

    fs::write(path, &expanded).map_err(|source| BlogError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let mut result = CmdResult::default()
        .with_output(expanded)
        .with_written_files(vec![path.to_path_buf()]);
    result.add_message(CmdMessage::success(format!(
        "Replaced {} tab(s) in {}",
        tabs,
        path.display()
    )));
    Ok(result)
}
