use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Crate version, with `@<hash> <commit date>` appended on untagged or dirty builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

pub const HOST_HELP: &str = "type: 1 gitee, 2 github, default blog";

#[derive(Parser, Debug)]
#[command(name = "blogkit", bin_name = "blogkit", version = get_version())]
#[command(about = "Maintenance tools for the blog's content tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Blog root that posts and assets directories are relative to
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Config file (defaults to blogkit.json in the blog root)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite image paths in a post to absolute URLs
    #[command(name = "image-url", alias = "complete-image-url", after_help = HOST_HELP)]
    ImageUrl {
        /// Markdown file to process
        post: Option<PathBuf>,

        /// Host selector (1 gitee, 2 github, anything else the blog)
        #[arg(value_name = "TYPE")]
        selector: Option<String>,

        /// Write the result to <OUTPUT>.md instead of printing it
        output: Option<String>,
    },

    /// Move posts with a cover into per-post folders
    Migrate {
        /// Show what would be migrated without touching any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace tabs with spaces in a file, in place
    Detab {
        /// File to rewrite
        file: Option<PathBuf>,
    },
}
