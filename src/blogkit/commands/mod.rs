use crate::model::PostMigration;
use std::path::PathBuf;

pub mod detab;
pub mod image_url;
pub mod migrate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Document text meant for stdout (rewritten or detabbed content)
    pub output: Option<String>,
    pub written_files: Vec<PathBuf>,
    pub migrations: Vec<PostMigration>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_written_files(mut self, files: Vec<PathBuf>) -> Self {
        self.written_files = files;
        self
    }

    pub fn with_migrations(mut self, migrations: Vec<PostMigration>) -> Self {
        self.migrations = migrations;
        self
    }
}
